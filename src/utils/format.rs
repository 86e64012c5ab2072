// ============================================================================
// FORMATO DE FECHAS (es-CO)
// ============================================================================

use chrono::{DateTime, FixedOffset, Offset, Timelike, Utc};

/// Zona horaria de visualización a partir de minutos respecto a UTC
pub fn display_offset(offset_minutes: i32) -> FixedOffset {
    FixedOffset::east_opt(offset_minutes.saturating_mul(60)).unwrap_or_else(|| Utc.fix())
}

/// `16/10/2026`
pub fn format_date(timestamp: &DateTime<FixedOffset>, offset: FixedOffset) -> String {
    timestamp.with_timezone(&offset).format("%d/%m/%Y").to_string()
}

/// `16/10/2026, 3:05:09 p. m.`
pub fn format_date_time(timestamp: &DateTime<FixedOffset>, offset: FixedOffset) -> String {
    let local = timestamp.with_timezone(&offset);
    let (is_pm, hour) = local.hour12();
    format!(
        "{}, {}:{:02}:{:02} {}",
        local.format("%d/%m/%Y"),
        hour,
        local.minute(),
        local.second(),
        if is_pm { "p. m." } else { "a. m." }
    )
}
