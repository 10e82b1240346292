//! Errors surfaced to callers of the core.
//!
//! Noisy log data never produces an error; only caller-supplied dates and
//! trip ranges do.

use chrono::NaiveDate;
use thiserror::Error;

/// Format of every calendar date accepted by the core.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Usage errors for presence calculations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StayError {
    /// A reference or trip date could not be parsed.
    #[error("invalid date {input:?}, expected YYYY-MM-DD")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A trip does not end strictly after it starts.
    #[error("trip start {start} must be before trip end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

/// Parses a caller-supplied `YYYY-MM-DD` date.
///
/// Surrounding whitespace is ignored. Unlike log rows, a bad date here is
/// reported rather than skipped.
pub fn parse_date(input: &str) -> Result<NaiveDate, StayError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|source| StayError::InvalidDate {
        input: trimmed.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_date() {
        let date = parse_date(" 2024-05-01 ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }

    #[test]
    fn rejects_malformed_date() {
        let err = parse_date("05/01/2024").unwrap_err();
        assert!(matches!(err, StayError::InvalidDate { ref input, .. } if input == "05/01/2024"));
        assert_eq!(
            err.to_string(),
            "invalid date \"05/01/2024\", expected YYYY-MM-DD"
        );
    }

    #[test]
    fn rejects_impossible_calendar_day() {
        assert!(parse_date("2023-02-29").is_err());
    }

    #[test]
    fn invalid_range_message() {
        let err = StayError::InvalidRange {
            start: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "trip start 2024-06-01 must be before trip end 2024-05-01"
        );
    }
}
