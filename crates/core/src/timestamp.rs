//! Fixed-format timestamp codec.
//!
//! Every textual timestamp in the serialized form uses the same fixed layout,
//! microsecond precision, no timezone designator:
//! `YYYY-MM-DDTHH:MM:SS.ffffff` (ex: `2017-06-14T22:31:03.285259`).

use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;

/// strftime layout for the fixed textual format.
pub const TEXT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Text does not match the fixed format.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("timestamp does not match `YYYY-MM-DDTHH:MM:SS.ffffff`")]
pub struct FormatMismatch;

/// Render a timestamp in the fixed textual format.
///
/// Timestamps are wall-clock UTC; the offset is implied, not written.
pub fn format(ts: DateTime<Utc>) -> String {
    ts.naive_utc().format(TEXT_FORMAT).to_string()
}

/// Parse a timestamp from the fixed textual format.
///
/// The six-digit fraction is mandatory. chrono's `%.6f` treats the fraction
/// as optional during parsing, so the tail is checked up front; callers
/// attach the field name to the error.
pub fn parse(text: &str) -> Result<DateTime<Utc>, FormatMismatch> {
    if !has_six_digit_fraction(text) {
        return Err(FormatMismatch);
    }
    NaiveDateTime::parse_from_str(text, TEXT_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| FormatMismatch)
}

fn has_six_digit_fraction(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 26 && bytes[19] == b'.' && bytes[20..].iter().all(u8::is_ascii_digit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn formats_with_microsecond_precision() {
        let ts = Utc
            .from_utc_datetime(
                &NaiveDate::from_ymd_opt(2017, 6, 14)
                    .unwrap()
                    .and_hms_micro_opt(22, 31, 3, 285_259)
                    .unwrap(),
            );
        assert_eq!(format(ts), "2017-06-14T22:31:03.285259");
    }

    #[test]
    fn pads_fraction_to_six_digits() {
        let ts = Utc
            .from_utc_datetime(
                &NaiveDate::from_ymd_opt(2024, 1, 2)
                    .unwrap()
                    .and_hms_micro_opt(3, 4, 5, 0)
                    .unwrap(),
            );
        assert_eq!(format(ts), "2024-01-02T03:04:05.000000");
    }

    #[test]
    fn parses_canonical_text() {
        let ts = parse("2017-06-14T22:31:03.285259").unwrap();
        assert_eq!(format(ts), "2017-06-14T22:31:03.285259");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse("not-a-date").is_err());
        assert!(parse("2017-06-14").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn rejects_missing_or_wrong_width_fraction() {
        // The six-digit fraction is part of the format, not optional.
        assert!(parse("2017-06-14T22:31:03").is_err());
        assert!(parse("2017-06-14T22:31:03.28").is_err());
        assert!(parse("2017-06-14T22:31:03.285259123").is_err());
        assert!(parse("2017-06-14T22:31:03.285259Z").is_err());
    }
}
