//! Wall-clock time → UTC instant resolution.

use chrono::offset::LocalResult;
use chrono::{TimeZone, Utc};
use chrono_tz::Tz;
use tracing::debug;

use natal_core::chart::ResolvedInstant;
use natal_core::errors::TemporalError;

use crate::parse::{parse_date, parse_time};

/// Disclosure attached to the result when a fall-back overlap was resolved
/// to the earlier instant. Wording is user-facing; keep it stable.
const AMBIGUOUS_NOTE: &str =
    "DST note: this local time is ambiguous; I used the earlier occurrence.";

/// Resolve a civil date and time against a timezone.
///
/// - A time inside a spring-forward gap never occurs in the zone and fails
///   with [`TemporalError::NonexistentLocalTime`].
/// - An unambiguous time maps to its single instant, no note.
/// - A time inside a fall-back overlap maps to two instants; the earlier is
///   chosen by policy and the result carries [`ResolvedInstant::ambiguity_note`].
pub fn resolve_instant(
    date_text: &str,
    time_text: &str,
    zone: Tz,
) -> Result<ResolvedInstant, TemporalError> {
    let date = parse_date(date_text)?;
    let time = parse_time(time_text)?;
    let civil = date.and_time(time);

    match zone.from_local_datetime(&civil) {
        LocalResult::None => Err(TemporalError::NonexistentLocalTime),
        LocalResult::Single(local) => Ok(ResolvedInstant {
            utc: local.with_timezone(&Utc),
            ambiguity_note: None,
        }),
        LocalResult::Ambiguous(earlier, later) => {
            debug!(
                zone = %zone,
                earlier = %earlier,
                later = %later,
                "Ambiguous local time, using earlier occurrence"
            );
            Ok(ResolvedInstant {
                utc: earlier.with_timezone(&Utc),
                ambiguity_note: Some(AMBIGUOUS_NOTE.to_string()),
            })
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn unambiguous_time_has_no_note() {
        let r = resolve_instant("1994-12-21", "09:57", chrono_tz::America::New_York).unwrap();
        // EST is UTC-5
        assert_eq!(r.utc, Utc.with_ymd_and_hms(1994, 12, 21, 14, 57, 0).unwrap());
        assert!(r.ambiguity_note.is_none());
    }

    #[test]
    fn fall_back_overlap_picks_earlier_and_notes() {
        // Berlin falls back 03:00 → 02:00 on 2021-10-31; 02:30 occurs twice.
        let r = resolve_instant("2021-10-31", "02:30", chrono_tz::Europe::Berlin).unwrap();
        // Earlier occurrence is still CEST (UTC+2).
        assert_eq!(r.utc, Utc.with_ymd_and_hms(2021, 10, 31, 0, 30, 0).unwrap());
        assert!(r.ambiguity_note.as_deref().unwrap().contains("earlier occurrence"));
    }

    #[test]
    fn fall_back_overlap_us_zone() {
        // New York falls back 02:00 → 01:00 on 2021-11-07; 01:30 occurs twice.
        let r = resolve_instant("2021-11-07", "01:30", chrono_tz::America::New_York).unwrap();
        // Earlier occurrence is still EDT (UTC-4).
        assert_eq!(r.utc, Utc.with_ymd_and_hms(2021, 11, 7, 5, 30, 0).unwrap());
        assert!(r.ambiguity_note.is_some());
    }

    #[test]
    fn spring_forward_gap_is_an_error() {
        // Berlin springs forward 02:00 → 03:00 on 2021-03-28; 02:30 never occurs.
        assert_matches!(
            resolve_instant("2021-03-28", "02:30", chrono_tz::Europe::Berlin),
            Err(TemporalError::NonexistentLocalTime)
        );
    }

    #[test]
    fn spring_forward_gap_us_zone() {
        // New York springs forward 02:00 → 03:00 on 2021-03-14.
        assert_matches!(
            resolve_instant("2021-03-14", "02:30", chrono_tz::America::New_York),
            Err(TemporalError::NonexistentLocalTime)
        );
    }

    #[test]
    fn parse_errors_propagate() {
        assert_matches!(
            resolve_instant("2021-13-01", "09:00", chrono_tz::UTC),
            Err(TemporalError::InvalidDate)
        );
        assert_matches!(
            resolve_instant("2021-01-01", "25:00", chrono_tz::UTC),
            Err(TemporalError::InvalidTime)
        );
    }

    #[test]
    fn utc_zone_is_always_unambiguous() {
        let r = resolve_instant("2021-10-31", "02:30", chrono_tz::UTC).unwrap();
        assert!(r.ambiguity_note.is_none());
        assert_eq!(r.utc, Utc.with_ymd_and_hms(2021, 10, 31, 2, 30, 0).unwrap());
    }
}
