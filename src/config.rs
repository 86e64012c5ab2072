// ============================================================================
// CONFIGURACIÓN - Leída en tiempo de compilación (option_env! + build.rs)
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub default_language: String,
    pub timeline: TimelineConfig,
    /// Desfase horario usado para mostrar fechas (Bogotá por defecto, sin horario de verano)
    pub display_utc_offset_minutes: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:8000".to_string(),
            backend_url_production: "https://gestion-backend-code4bi.onrender.com".to_string(),
            environment: "production".to_string(),
            enable_logging: true,
            default_language: "es".to_string(),
            timeline: TimelineConfig::default(),
            display_utc_offset_minutes: -300,
        }
    }
}

/// Tiempos de la secuencia de revelado de la línea de tiempo
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineConfig {
    /// Duración total del llenado de la barra (y de la cascada de nodos)
    pub fill_duration_ms: u32,
    /// Espera antes de fijar el objetivo de llenado, para que el reset se pinte primero
    pub commit_delay_ms: u32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            fill_duration_ms: 1200,
            commit_delay_ms: 50,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_production),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: parse_or(option_env!("ENABLE_LOGGING"), defaults.enable_logging),
            default_language: option_env!("DEFAULT_LANGUAGE")
                .map(str::to_string)
                .unwrap_or(defaults.default_language),
            timeline: TimelineConfig {
                fill_duration_ms: parse_or(
                    option_env!("FILL_DURATION_MS"),
                    defaults.timeline.fill_duration_ms,
                ),
                commit_delay_ms: parse_or(
                    option_env!("COMMIT_DELAY_MS"),
                    defaults.timeline.commit_delay_ms,
                ),
            },
            display_utc_offset_minutes: parse_or(
                option_env!("DISPLAY_UTC_OFFSET_MINUTES"),
                defaults.display_utc_offset_minutes,
            ),
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "development" => &self.backend_url_development,
            _ => &self.backend_url_production,
        }
    }

    /// Nivel de log para wasm-logger
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(default)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_follows_environment() {
        let mut config = AppConfig::default();
        assert_eq!(config.backend_url(), "https://gestion-backend-code4bi.onrender.com");

        config.environment = "development".to_string();
        assert_eq!(config.backend_url(), "http://localhost:8000");

        // Cualquier otro valor cae en producción
        config.environment = "staging".to_string();
        assert_eq!(config.backend_url(), config.backend_url_production);
    }

    #[test]
    fn parse_or_falls_back_on_missing_or_garbage() {
        assert_eq!(parse_or::<u32>(None, 7), 7);
        assert_eq!(parse_or::<u32>(Some("abc"), 7), 7);
        assert_eq!(parse_or::<u32>(Some(" 900 "), 7), 900);
        assert_eq!(parse_or::<i32>(Some("-300"), 0), -300);
        assert!(!parse_or(Some("false"), true));
    }

    #[test]
    fn log_level_depends_on_logging_flag() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.enable_logging = false;
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
