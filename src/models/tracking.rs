// ============================================================================
// TRACKING - Modelos compartidos con el backend de seguimiento
// ============================================================================

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::status::RawStatus;

/// Texto mostrado cuando un evento no trae descripción
pub const DEFAULT_DESCRIPTION: &str = "Sin descripción adicional.";

/// Un evento del historial. El backend lo envía del más reciente al más antiguo.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct HistoryEntry {
    #[serde(rename = "raw_estado", default)]
    pub raw_status: RawStatus,
    /// ISO 8601 tal como llega del backend
    #[serde(rename = "fecha", default, deserialize_with = "null_as_default")]
    pub timestamp: String,
    #[serde(rename = "ubicacion", default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(rename = "descripcion", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl HistoryEntry {
    /// Interpreta `fecha`. Fecha y hora sin zona se asumen en `local_offset`;
    /// una fecha sola es medianoche UTC.
    pub fn parsed_timestamp(&self, local_offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.timestamp, local_offset)
    }

    pub fn description_or_default(&self) -> &str {
        match self.description.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => text,
            _ => DEFAULT_DESCRIPTION,
        }
    }
}

/// Respuesta de `GET /api/seguimiento/estado/`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TrackingResult {
    #[serde(rename = "codigo", default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(rename = "historial", default, deserialize_with = "null_as_default")]
    pub history: Vec<HistoryEntry>,
}

impl TrackingResult {
    /// Evento más reciente (índice 0)
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.history.first()
    }

    pub fn last_update(&self, local_offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
        self.latest()
            .and_then(|entry| entry.parsed_timestamp(local_offset))
    }
}

/// Cuerpo de error del backend (respuestas no 2xx)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// `null` cuenta como ausente
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn parse_timestamp(raw: &str, local_offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed);
    }

    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    {
        return local_offset.from_local_datetime(&naive).single();
    }

    // Igual que `new Date("2024-05-01")` en el navegador: medianoche UTC
    let midnight = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()?
        .and_hms_opt(0, 0, 0)?;
    Utc.fix().from_local_datetime(&midnight).single()
}
