// ============================================================================
// ERRORES DE SEGUIMIENTO
// ============================================================================

use crate::models::ApiErrorBody;

/// Mensaje genérico cuando el backend no explica el fallo
pub const GENERIC_ERROR_MESSAGE: &str = "Ocurrió un error en la solicitud.";

/// Mensaje cuando se envía el formulario sin código
pub const EMPTY_CODE_MESSAGE: &str = "Introduce tu código de seguimiento.";

#[derive(Debug, Clone, PartialEq)]
pub enum TrackingError {
    /// El usuario envió un código vacío
    EmptyCode,
    /// Fallo de red antes de recibir respuesta
    Network(String),
    /// Respuesta no 2xx con `{error: ...}`
    Api { status: u16, message: String },
    /// Respuesta no 2xx sin mensaje utilizable
    Http { status: u16 },
    /// Respuesta 2xx que no se pudo decodificar
    Parse(String),
}

impl TrackingError {
    /// Construye el error a partir de una respuesta no 2xx
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.error)
            .map(|message| message.trim().to_string())
            .filter(|message| !message.is_empty());

        match message {
            Some(message) => TrackingError::Api { status, message },
            None => TrackingError::Http { status },
        }
    }

    /// Texto plano que se muestra al usuario
    pub fn user_message(&self) -> String {
        match self {
            TrackingError::EmptyCode => EMPTY_CODE_MESSAGE.to_string(),
            TrackingError::Api { message, .. } => message.clone(),
            TrackingError::Network(_) | TrackingError::Http { .. } | TrackingError::Parse(_) => {
                GENERIC_ERROR_MESSAGE.to_string()
            }
        }
    }
}

impl std::fmt::Display for TrackingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackingError::EmptyCode => write!(f, "Empty tracking code"),
            TrackingError::Network(msg) => write!(f, "Network error: {}", msg),
            TrackingError::Api { status, message } => write!(f, "HTTP {}: {}", status, message),
            TrackingError::Http { status } => write!(f, "HTTP {}", status),
            TrackingError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for TrackingError {}
