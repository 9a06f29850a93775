use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::utils::MISSING_VALUE;

/// Renders a server timestamp as a plain date (dd/mm/yyyy).
///
/// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM:SS` and bare `YYYY-MM-DD`;
/// anything else is shown as received.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return MISSING_VALUE.to_string();
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d/%m/%Y").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%d/%m/%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }

    raw.to_string()
}

/// Optional display value with the "N/A" fallback used on car cards
pub fn or_missing(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => MISSING_VALUE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_mongo_style_timestamps() {
        assert_eq!(format_date("2024-03-09T10:15:00.000Z"), "09/03/2024");
        assert_eq!(format_date("2024-03-09T10:15:00"), "09/03/2024");
        assert_eq!(format_date("2024-03-09"), "09/03/2024");
    }

    #[test]
    fn unknown_formats_pass_through() {
        assert_eq!(format_date("next tuesday"), "next tuesday");
        assert_eq!(format_date("  "), "N/A");
    }

    #[test]
    fn blank_values_fall_back() {
        assert_eq!(or_missing(Some("Diesel")), "Diesel");
        assert_eq!(or_missing(Some("")), "N/A");
        assert_eq!(or_missing(None), "N/A");
    }
}
