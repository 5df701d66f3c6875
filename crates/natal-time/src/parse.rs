//! Civil date and time text parsing.
//!
//! Shape is checked first (`YYYY-MM-DD`, `HH:MM`), then real calendar
//! validity: month 13 or April 31 are malformed dates even though they
//! match the pattern.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use natal_core::errors::TemporalError;

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));
static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}$").expect("valid regex"));

/// Parse `YYYY-MM-DD` into a calendar date.
///
/// Rejects text that does not match the shape and values that are not a
/// real date for the given month and year.
pub fn parse_date(text: &str) -> Result<NaiveDate, TemporalError> {
    if !DATE_RE.is_match(text) {
        return Err(TemporalError::MalformedDate);
    }

    let mut fields = text.split('-');
    let year: i32 = fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or(TemporalError::MalformedDate)?;
    let month: u32 = fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or(TemporalError::MalformedDate)?;
    let day: u32 = fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or(TemporalError::MalformedDate)?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(TemporalError::InvalidDate)
}

/// Parse `HH:MM` (24-hour) into a time of day.
pub fn parse_time(text: &str) -> Result<NaiveTime, TemporalError> {
    if !TIME_RE.is_match(text) {
        return Err(TemporalError::MalformedTime);
    }

    let mut fields = text.split(':');
    let hour: u32 = fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or(TemporalError::MalformedTime)?;
    let minute: u32 = fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or(TemporalError::MalformedTime)?;

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or(TemporalError::InvalidTime)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::Datelike;

    use super::*;

    // ── parse_date ───────────────────────────────────────────────────────

    #[test]
    fn valid_date() {
        let d = parse_date("1994-12-21").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (1994, 12, 21));
    }

    #[test]
    fn malformed_date_shapes() {
        for text in ["1994/12/21", "94-12-21", "1994-1-2", "", "tomorrow", "1994-12-21 "] {
            assert_matches!(parse_date(text), Err(TemporalError::MalformedDate), "{text}");
        }
    }

    #[test]
    fn month_thirteen_rejected() {
        assert_matches!(parse_date("1994-13-01"), Err(TemporalError::InvalidDate));
    }

    #[test]
    fn april_31_rejected() {
        assert_matches!(parse_date("2020-04-31"), Err(TemporalError::InvalidDate));
    }

    #[test]
    fn leap_day_validity() {
        assert!(parse_date("2020-02-29").is_ok());
        assert_matches!(parse_date("2021-02-29"), Err(TemporalError::InvalidDate));
    }

    #[test]
    fn day_zero_rejected() {
        assert_matches!(parse_date("2020-01-00"), Err(TemporalError::InvalidDate));
    }

    // ── parse_time ───────────────────────────────────────────────────────

    #[test]
    fn valid_time() {
        use chrono::Timelike;
        let t = parse_time("09:57").unwrap();
        assert_eq!((t.hour(), t.minute()), (9, 57));
    }

    #[test]
    fn malformed_time_shapes() {
        for text in ["9:57", "09:57:00", "0957", "", "noon"] {
            assert_matches!(parse_time(text), Err(TemporalError::MalformedTime), "{text}");
        }
    }

    #[test]
    fn out_of_range_time() {
        assert_matches!(parse_time("24:00"), Err(TemporalError::InvalidTime));
        assert_matches!(parse_time("12:60"), Err(TemporalError::InvalidTime));
    }

    #[test]
    fn midnight_and_last_minute_accepted() {
        assert!(parse_time("00:00").is_ok());
        assert!(parse_time("23:59").is_ok());
    }
}
