// ============================================================================
// FORMAT - Helpers de presentación
// ============================================================================

use chrono::{DateTime, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formatea un timestamp del backend como `YYYY-MM-DD HH:MM:SS`. Acepta RFC 3339
/// e ISO sin zona; cualquier otra cosa se devuelve sin cambios.
pub fn format_start_time(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.naive_utc().format(DISPLAY_FORMAT).to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format(DISPLAY_FORMAT).to_string();
        }
    }
    raw.to_string()
}

/// Duración en segundos, sin `.0` final en valores enteros.
pub fn format_duration(seconds: f64) -> String {
    if seconds.fract() == 0.0 {
        format!("{}", seconds as i64)
    } else {
        format!("{:.1}", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_naive_and_rfc3339() {
        assert_eq!(format_start_time("2024-05-01T10:00:00"), "2024-05-01 10:00:00");
        assert_eq!(format_start_time("2024-05-01T10:00:00.250"), "2024-05-01 10:00:00");
        assert_eq!(format_start_time("2024-05-01T13:00:00+03:00"), "2024-05-01 10:00:00");
    }

    #[test]
    fn unknown_format_is_left_alone() {
        assert_eq!(format_start_time("yesterday"), "yesterday");
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(1260.0), "1260");
        assert_eq!(format_duration(12.5), "12.5");
    }
}
