//! Error hierarchy for chart computation.
//!
//! Structured error types built on [`thiserror`]:
//!
//! - [`ChartError`]: top-level enum covering all error domains
//! - [`LocationError`]: unresolvable place input
//! - [`TemporalError`]: malformed or unresolvable local time
//! - [`HouseCalculationError`]: malformed or incomplete cusp data
//! - [`EphemerisError`]: body or angle computation failure
//!
//! Every error is terminal for the current chart request; none is retried
//! internally and the message is surfaced to the end user verbatim.
//! Intermediate geocoder-provider failures are *not* errors — they are
//! swallowed by the fallback chain and only total exhaustion surfaces as
//! [`LocationError::Exhausted`]. An ambiguous DST local time is likewise
//! never an error: it resolves to the earlier instant with a note attached
//! to the result.

use thiserror::Error;

use crate::zodiac::Body;

// ─────────────────────────────────────────────────────────────────────────────
// ChartError — top-level error enum
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level error type for a chart computation request.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The birth place could not be resolved.
    #[error("{0}")]
    Location(#[from] LocationError),

    /// The birth date/time could not be resolved to an instant.
    #[error("{0}")]
    Temporal(#[from] TemporalError),

    /// House cusp data from the ephemeris adapter was unusable.
    #[error("{0}")]
    House(#[from] HouseCalculationError),

    /// The ephemeris adapter failed to compute a body or the angles.
    #[error("{0}")]
    Ephemeris(#[from] EphemerisError),
}

/// Result type for chart computation.
pub type ChartResult<T> = Result<T, ChartError>;

// ─────────────────────────────────────────────────────────────────────────────
// LocationError
// ─────────────────────────────────────────────────────────────────────────────

/// Failure to resolve a location input.
#[derive(Debug, Error)]
pub enum LocationError {
    /// The location input was empty.
    #[error("`location` is required. Use city/state or lat,long.")]
    EmptyInput,

    /// A parsed latitude was outside [-90, 90].
    #[error("Latitude must be between -90 and 90.")]
    LatitudeOutOfRange(f64),

    /// A parsed longitude was outside [-180, 180].
    #[error("Longitude must be between -180 and 180.")]
    LongitudeOutOfRange(f64),

    /// Every geocoding provider failed or returned no candidates.
    #[error(
        "Unknown location or lookup service unavailable. Try a more specific \
         city/state or use lat,long (example: 27.4467,-80.3256)."
    )]
    Exhausted,
}

// ─────────────────────────────────────────────────────────────────────────────
// TemporalError
// ─────────────────────────────────────────────────────────────────────────────

/// Failure to resolve a civil date/time to a UTC instant.
#[derive(Debug, Error)]
pub enum TemporalError {
    /// The date text did not match `YYYY-MM-DD`.
    #[error("`date` must use YYYY-MM-DD format.")]
    MalformedDate,

    /// The date fields were not a real calendar date (month 13, April 31).
    #[error("`date` is invalid for the selected month/year.")]
    InvalidDate,

    /// The time text did not match `HH:MM`.
    #[error("`time` must use HH:MM in 24-hour format.")]
    MalformedTime,

    /// The time fields were out of range.
    #[error("`time` is out of range. Use 00:00 to 23:59.")]
    InvalidTime,

    /// The wall-clock time falls in a spring-forward DST gap.
    #[error("That local time does not exist due to DST. Choose a nearby valid time.")]
    NonexistentLocalTime,

    /// No IANA zone could be determined for the coordinates.
    #[error("Could not determine timezone for that location. Try a nearby city or lat,long.")]
    ZoneLookupFailed,
}

// ─────────────────────────────────────────────────────────────────────────────
// HouseCalculationError
// ─────────────────────────────────────────────────────────────────────────────

/// Unusable house data from the ephemeris adapter.
#[derive(Debug, Error)]
pub enum HouseCalculationError {
    /// The adapter reported a failure computing houses.
    #[error("House calculation failed: {0}")]
    Failed(String),

    /// The adapter returned the wrong number of cusps.
    #[error("House calculation returned incomplete cusp data.")]
    IncompleteCusps(usize),
}

// ─────────────────────────────────────────────────────────────────────────────
// EphemerisError
// ─────────────────────────────────────────────────────────────────────────────

/// Failure inside the external ephemeris capability.
#[derive(Debug, Error)]
pub enum EphemerisError {
    /// Longitude computation failed for one body.
    #[error("Planet calculation failed for {body}: {message}")]
    Body {
        /// The body whose computation failed.
        body: Body,
        /// Adapter-reported failure detail.
        message: String,
    },

    /// Houses/angles computation failed.
    #[error("House calculation failed: {message}")]
    Houses {
        /// Adapter-reported failure detail.
        message: String,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
