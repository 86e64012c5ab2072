// ============================================================================
// STATUS - Estados del envío (pipeline ordinal + incidencia)
// ============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// Número de pasos del pipeline ordinal
pub const STEP_COUNT: usize = 4;

/// Valor en el wire del estado de incidencia (fuera del pipeline)
pub const INCIDENT_WIRE: &str = "INCIDENCIA";

/// Estados ordinales por los que avanza un envío
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatusCode {
    Creado,
    EnTransito,
    EnEntrega,
    Entregado,
}

/// Orden fijo del pipeline. No se reordena nunca.
pub const STATUS_ORDER: [StatusCode; STEP_COUNT] = [
    StatusCode::Creado,
    StatusCode::EnTransito,
    StatusCode::EnEntrega,
    StatusCode::Entregado,
];

impl StatusCode {
    /// Posición en `STATUS_ORDER`
    pub fn position(self) -> usize {
        match self {
            StatusCode::Creado => 0,
            StatusCode::EnTransito => 1,
            StatusCode::EnEntrega => 2,
            StatusCode::Entregado => 3,
        }
    }

    pub fn at(index: usize) -> Option<StatusCode> {
        STATUS_ORDER.get(index).copied()
    }

    pub fn from_wire(raw: &str) -> Option<StatusCode> {
        match raw {
            "CREADO" => Some(StatusCode::Creado),
            "EN_TRANSITO" => Some(StatusCode::EnTransito),
            "EN_ENTREGA" => Some(StatusCode::EnEntrega),
            "ENTREGADO" => Some(StatusCode::Entregado),
            _ => None,
        }
    }

    pub fn as_wire(self) -> &'static str {
        match self {
            StatusCode::Creado => "CREADO",
            StatusCode::EnTransito => "EN_TRANSITO",
            StatusCode::EnEntrega => "EN_ENTREGA",
            StatusCode::Entregado => "ENTREGADO",
        }
    }

    /// Clave i18n de la etiqueta visible del paso
    pub fn label_key(self) -> &'static str {
        match self {
            StatusCode::Creado => "paso_procesado",
            StatusCode::EnTransito => "paso_enviado",
            StatusCode::EnEntrega => "paso_en_reparto",
            StatusCode::Entregado => "paso_entregado",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            StatusCode::Creado => "📦",
            StatusCode::EnTransito => "🚚",
            StatusCode::EnEntrega => "🛵",
            StatusCode::Entregado => "🏠",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// Estado tal como llega en `raw_estado`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireStatus", into = "String")]
pub enum RawStatus {
    Step(StatusCode),
    Incident,
    /// Código que no pertenece al pipeline; se conserva tal cual
    Unknown(String),
}

impl RawStatus {
    pub fn parse(raw: &str) -> RawStatus {
        if raw == INCIDENT_WIRE {
            return RawStatus::Incident;
        }
        match StatusCode::from_wire(raw) {
            Some(code) => RawStatus::Step(code),
            None => RawStatus::Unknown(raw.to_string()),
        }
    }

    pub fn step(&self) -> Option<StatusCode> {
        match self {
            RawStatus::Step(code) => Some(*code),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &str {
        match self {
            RawStatus::Step(code) => code.as_wire(),
            RawStatus::Incident => INCIDENT_WIRE,
            RawStatus::Unknown(raw) => raw,
        }
    }
}

impl Default for RawStatus {
    fn default() -> Self {
        RawStatus::Unknown(String::new())
    }
}

/// `raw_estado` en el wire: texto, o cualquier otra cosa (null, número...)
#[derive(Deserialize)]
#[serde(untagged)]
enum WireStatus {
    Text(String),
    Other(serde::de::IgnoredAny),
}

impl From<WireStatus> for RawStatus {
    fn from(wire: WireStatus) -> Self {
        match wire {
            WireStatus::Text(raw) => RawStatus::parse(&raw),
            WireStatus::Other(_) => RawStatus::default(),
        }
    }
}

impl From<RawStatus> for String {
    fn from(status: RawStatus) -> Self {
        status.as_wire().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_order_matches_positions() {
        for (index, code) in STATUS_ORDER.iter().enumerate() {
            assert_eq!(code.position(), index);
            assert_eq!(StatusCode::at(index), Some(*code));
            assert_eq!(StatusCode::from_wire(code.as_wire()), Some(*code));
        }
        assert_eq!(StatusCode::at(STEP_COUNT), None);
    }

    #[test]
    fn raw_status_parses_sentinel_and_unknown_codes() {
        assert_eq!(RawStatus::parse("INCIDENCIA"), RawStatus::Incident);
        assert_eq!(RawStatus::parse("EN_ENTREGA"), RawStatus::Step(StatusCode::EnEntrega));
        assert_eq!(
            RawStatus::parse("DEVUELTO"),
            RawStatus::Unknown("DEVUELTO".to_string())
        );
        // Sensible a mayúsculas, igual que el backend
        assert_eq!(
            RawStatus::parse("creado"),
            RawStatus::Unknown("creado".to_string())
        );
    }

    #[test]
    fn raw_status_serde_uses_wire_string() {
        let status: RawStatus = serde_json::from_str("\"ENTREGADO\"").unwrap();
        assert_eq!(status, RawStatus::Step(StatusCode::Entregado));

        let unknown: RawStatus = serde_json::from_str("\"PERDIDO\"").unwrap();
        assert_eq!(serde_json::to_string(&unknown).unwrap(), "\"PERDIDO\"");
        assert_eq!(serde_json::to_string(&RawStatus::Incident).unwrap(), "\"INCIDENCIA\"");
    }

    #[test]
    fn raw_status_tolerates_null_and_non_string_values() {
        for json in ["null", "3", "true", "{\"codigo\": 1}", "[]"] {
            let status: RawStatus = serde_json::from_str(json).unwrap();
            assert_eq!(status, RawStatus::Unknown(String::new()), "json: {json}");
            assert_eq!(status.step(), None);
        }
    }
}
