//! Best-effort timestamp parsing of text cells.
//!
//! Formats are tried from most to least specific. Ambiguous slash dates are
//! read month-first (`03/04/2024` is March 4th) unless the year comes first.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date-time layouts, tried in order after RFC 3339.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
];

/// Date-only layouts; the time is midnight.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%B %d %Y",
];

/// Parse a string value as a timestamp.
///
/// Offsets in RFC 3339 input are normalized to UTC. Returns `None` for empty
/// or unrecognized input.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt);
        }
    }

    parse_date(trimmed).and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Parse a string value as a calendar date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(date);
        }
    }
    parse_compact_date(trimmed)
}

/// `YYYYMMDD` with no separators.
fn parse_compact_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = value[0..4].parse().ok()?;
    let month = value[4..6].parse().ok()?;
    let day = value[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Timestamp for a number of seconds since the Unix epoch.
pub fn from_epoch_seconds(seconds: f64) -> Option<NaiveDateTime> {
    if !seconds.is_finite() {
        return None;
    }
    let whole = seconds.floor();
    let nanos = ((seconds - whole) * 1e9).round() as u32;
    if whole < i64::MIN as f64 || whole > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp(whole as i64, nanos.min(999_999_999)).map(|dt| dt.naive_utc())
}

/// Seconds since the Unix epoch of a timestamp.
pub fn to_epoch_seconds(value: &NaiveDateTime) -> i64 {
    value.and_utc().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd_hms(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_iso_variants() {
        let expected = ymd_hms(2024, 1, 15, 10, 30, 0);
        assert_eq!(parse_datetime("2024-01-15T10:30:00"), Some(expected));
        assert_eq!(parse_datetime("2024-01-15 10:30:00"), Some(expected));
        assert_eq!(parse_datetime("2024-01-15 10:30"), Some(expected));
        assert_eq!(parse_datetime("2024-01-15T12:30:00+02:00"), Some(expected));
    }

    #[test]
    fn test_fractional_seconds() {
        let parsed = parse_datetime("2024-01-15T10:30:00.250").unwrap();
        assert_eq!(parsed.and_utc().timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_date_only() {
        let midnight = ymd_hms(2024, 3, 4, 0, 0, 0);
        assert_eq!(parse_datetime("2024-03-04"), Some(midnight));
        assert_eq!(parse_datetime("2024/03/04"), Some(midnight));
        assert_eq!(parse_datetime("03/04/2024"), Some(midnight));
        assert_eq!(parse_datetime("04.03.2024"), Some(midnight));
        assert_eq!(parse_datetime("4 Mar 2024"), Some(midnight));
        assert_eq!(parse_datetime("March 4, 2024"), Some(midnight));
        assert_eq!(parse_datetime("20240304"), Some(midnight));
    }

    #[test]
    fn test_invalid() {
        assert_eq!(parse_datetime(""), None);
        assert_eq!(parse_datetime("not a date"), None);
        assert_eq!(parse_datetime("2024-13-01"), None);
        assert_eq!(parse_datetime("20241301"), None);
    }

    #[test]
    fn test_epoch_seconds() {
        let ts = from_epoch_seconds(86_400.5).unwrap();
        assert_eq!(to_epoch_seconds(&ts), 86_400);
        assert_eq!(ts.and_utc().timestamp_subsec_millis(), 500);
        assert_eq!(from_epoch_seconds(f64::NAN), None);
    }
}
