//! Handler helper functions
//!
//! Shared time utilities used by multiple handlers.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a timestamp as ISO-8601 UTC with millisecond precision
///
/// All timestamps leave the API in this one shape, e.g.
/// `2026-08-22T09:30:00.000Z`.
pub fn to_iso(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Current time in the API's ISO format
pub fn now_iso() -> String {
    to_iso(Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_iso_epoch() {
        let t = DateTime::from_timestamp_millis(0).unwrap();
        assert_eq!(to_iso(t), "1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_to_iso_keeps_millis() {
        let t = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
        assert_eq!(to_iso(t), "2023-11-14T22:13:20.123Z");
    }

    #[test]
    fn test_now_iso_shape() {
        let iso = now_iso();
        assert_eq!(iso.len(), 24, "unexpected length: {}", iso);
        assert!(iso.ends_with('Z'));
        assert_eq!(&iso[4..5], "-");
        assert_eq!(&iso[10..11], "T");
        assert_eq!(&iso[19..20], ".");
    }
}
