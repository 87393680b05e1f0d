//! ISO-8601 timestamp formatting and lenient parsing for the note store.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format used when writing dates to the store.
///
/// `%.f` emits no fraction for whole seconds and 3, 6 or 9 digits otherwise,
/// so every value parses back to exactly the same instant.
pub const STORE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

const NAIVE_FORMATS: &[&str] = &[
    STORE_FORMAT,
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Formats a timestamp the way the store writes it.
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(STORE_FORMAT).to_string()
}

/// Parses a stored timestamp.
///
/// Accepts:
/// - `2024-01-05T10:00:00` with optional fractional seconds
/// - `2024-01-05 10:00:00` (space separator)
/// - `2024-01-05T10:00` (no seconds)
/// - `2024-01-05T10:00:00+02:00` (RFC 3339; the wall-clock value is kept)
/// - `2024-01-05` (midnight)
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(s, format) {
            return Some(parsed);
        }
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(s) {
        return Some(parsed.naive_local());
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
