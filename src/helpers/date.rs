//! Date helper functions
//!
//! Frontmatter dates arrive as strings in a handful of common formats.
//! They are interpreted as UTC and pinned to 12:00 noon, so a date-only
//! string renders as the same calendar day in every timezone.

use chrono::{DateTime, Locale, NaiveDateTime, TimeZone, Timelike, Utc};

/// Parse a date string in various formats
pub fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];

    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
        // Try parsing date only
        if let Ok(d) = chrono::NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // Try RFC 3339 / ISO 8601 with an offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    None
}

/// Pin a parsed date to 12:00 UTC noon.
///
/// Date-only strings would otherwise land at midnight UTC, which displays
/// as the previous day in negative-offset timezones. Minutes and seconds
/// are kept when the source carried a time component.
pub fn noon_utc(dt: NaiveDateTime) -> DateTime<Utc> {
    let pinned = dt.with_hour(12).unwrap_or(dt);
    Utc.from_utc_datetime(&pinned)
}

/// Format a date in long form (like "January 5, 2024") in a fixed locale
pub fn long_date<Tz: TimeZone>(date: &DateTime<Tz>, locale: Locale) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format_localized("%B %-d, %Y", locale).to_string()
}

/// Resolve a BCP 47-style tag (like "en-US") to a formatting locale
pub fn resolve_locale(tag: &str) -> Option<Locale> {
    Locale::try_from(tag.replace('-', "_").as_str()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only() {
        let dt = parse_date_string("2024-01-05").unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-01-05 00:00:00");

        let dt = parse_date_string("2024/01/05").unwrap();
        assert_eq!(dt.format("%Y-%m-%d").to_string(), "2024-01-05");
    }

    #[test]
    fn test_parse_date_time() {
        let dt = parse_date_string("2024-01-15 10:30:00").unwrap();
        assert_eq!(dt.format("%H:%M").to_string(), "10:30");

        let dt = parse_date_string("2024-01-15T10:30:00").unwrap();
        assert_eq!(dt.format("%H:%M").to_string(), "10:30");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_date_string("not-a-date").is_none());
        assert!(parse_date_string("").is_none());
        assert!(parse_date_string("2024-13-41").is_none());
    }

    #[test]
    fn test_noon_utc_pins_hour() {
        let dt = noon_utc(parse_date_string("2024-01-05").unwrap());
        assert_eq!(dt.hour(), 12);
        assert_eq!(dt.timestamp_millis(), 1_704_456_000_000);
    }

    #[test]
    fn test_noon_utc_keeps_minutes() {
        let dt = noon_utc(parse_date_string("2024-01-15 10:30:00").unwrap());
        assert_eq!(dt.hour(), 12);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_long_date() {
        let locale = resolve_locale("en-US").unwrap();
        let dt = noon_utc(parse_date_string("2024-01-05").unwrap());
        assert_eq!(long_date(&dt, locale), "January 5, 2024");

        let dt = noon_utc(parse_date_string("2024-03-01").unwrap());
        assert_eq!(long_date(&dt, locale), "March 1, 2024");
    }

    #[test]
    fn test_resolve_locale() {
        assert!(resolve_locale("en-US").is_some());
        assert!(resolve_locale("klingon").is_none());
    }
}
