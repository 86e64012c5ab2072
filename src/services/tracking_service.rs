// ============================================================================
// TRACKING SERVICE - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio: pide el historial y traduce errores HTTP
// ============================================================================

use gloo_net::http::Request;

use super::error::TrackingError;
use crate::config::CONFIG;
use crate::models::TrackingResult;

/// Ruta del endpoint de estado
pub const TRACKING_PATH: &str = "/api/seguimiento/estado/";

#[derive(Clone)]
pub struct TrackingService {
    base_url: String,
}

impl TrackingService {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, TRACKING_PATH)
    }

    /// Obtener el historial de un código de seguimiento
    pub async fn fetch_tracking(&self, code: &str) -> Result<TrackingResult, TrackingError> {
        let url = self.endpoint();
        log::info!("🔍 Consultando seguimiento: {}", code);

        let response = Request::get(&url)
            .query([("codigo", code)])
            .send()
            .await
            .map_err(|e| TrackingError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let err = TrackingError::from_error_body(status, &body);
            log::warn!("⚠️ Seguimiento {} falló: {}", code, err);
            return Err(err);
        }

        let result = response
            .json::<TrackingResult>()
            .await
            .map_err(|e| TrackingError::Parse(e.to_string()))?;

        log::info!("✅ Seguimiento {}: {} eventos", result.code, result.history.len());
        Ok(result)
    }
}

impl Default for TrackingService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_url_without_double_slash() {
        let service = TrackingService::with_base_url("https://backend.example.com/");
        assert_eq!(
            service.endpoint(),
            "https://backend.example.com/api/seguimiento/estado/"
        );

        let service = TrackingService::with_base_url("http://localhost:8000");
        assert_eq!(service.endpoint(), "http://localhost:8000/api/seguimiento/estado/");
    }
}
