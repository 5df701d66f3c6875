//! Direct `"lat,lon"` coordinate parsing.

use std::sync::LazyLock;

use regex::Regex;

use natal_core::chart::Location;
use natal_core::errors::LocationError;

static LAT_LON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(-?\d+(?:\.\d+)?)\s*,\s*(-?\d+(?:\.\d+)?)\s*$").expect("valid regex")
});

/// Try to read the input as a numeric `"lat,lon"` pair.
///
/// Returns `Ok(None)` when the input is not shaped like a coordinate pair
/// (it should go to the geocoders instead). A pair that parses but is out
/// of range is an error, not a fallthrough.
pub fn parse_coordinates(input: &str) -> Result<Option<Location>, LocationError> {
    let Some(captures) = LAT_LON_RE.captures(input) else {
        return Ok(None);
    };

    // Captures are digit runs by construction; parse cannot fail.
    let latitude: f64 = captures[1].parse().map_err(|_| LocationError::EmptyInput)?;
    let longitude: f64 = captures[2].parse().map_err(|_| LocationError::EmptyInput)?;

    if !(-90.0..=90.0).contains(&latitude) {
        return Err(LocationError::LatitudeOutOfRange(latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(LocationError::LongitudeOutOfRange(longitude));
    }

    Ok(Some(Location {
        display_name: format!("{latitude:.4}, {longitude:.4}"),
        latitude,
        longitude,
    }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
