//! The ephemeris seam.
//!
//! Raw astronomy is an external capability: given an instant, the adapter
//! answers body longitudes and, given a location too, house cusps and the
//! Ascendant/Midheaven. The engine defines no orbital mechanics of its own
//! and inherits the precision of whatever implementation is plugged in.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use natal_core::errors::EphemerisError;
use natal_core::zodiac::{Body, ZodiacSystem};

/// Raw house output from the astronomical library.
///
/// `cusps` is passed through unvalidated — some libraries hand back a
/// 13-element 1-indexed array; [`crate::houses::extract_cusps`] normalizes
/// the shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawHouses {
    /// Placidus cusp longitudes as reported by the library.
    pub cusps: Vec<f64>,
    /// Ascendant longitude.
    pub ascendant: f64,
    /// Midheaven longitude.
    pub midheaven: f64,
}

/// External astronomical capability.
pub trait Ephemeris: Send + Sync {
    /// Ecliptic longitude of a body at an instant, in the given zodiac
    /// reference frame.
    fn longitude_of(
        &self,
        instant: DateTime<Utc>,
        body: Body,
        system: ZodiacSystem,
    ) -> Result<f64, EphemerisError>;

    /// House cusps and angles at an instant for a location.
    fn houses_at(
        &self,
        instant: DateTime<Utc>,
        latitude: f64,
        longitude: f64,
        system: ZodiacSystem,
    ) -> Result<RawHouses, EphemerisError>;
}

/// A fixed ephemeris snapshot for one instant, loaded from JSON.
///
/// Stands in for the astronomical library in tests and offline runs: the
/// snapshot is the pre-computed output for the chart moment, so the
/// instant, location, and system arguments are accepted and ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEphemeris {
    /// Ecliptic longitude per body.
    pub bodies: BTreeMap<Body, f64>,
    /// Raw house cusps (12 or 13 elements, library convention).
    pub cusps: Vec<f64>,
    /// Ascendant longitude.
    pub ascendant: f64,
    /// Midheaven longitude.
    pub midheaven: f64,
}

impl SnapshotEphemeris {
    /// Load a snapshot from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, EphemerisError> {
        let file = File::open(path).map_err(|e| EphemerisError::Houses {
            message: format!("cannot open ephemeris snapshot: {e}"),
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| EphemerisError::Houses {
            message: format!("cannot parse ephemeris snapshot: {e}"),
        })
    }
}

impl Ephemeris for SnapshotEphemeris {
    fn longitude_of(
        &self,
        _instant: DateTime<Utc>,
        body: Body,
        _system: ZodiacSystem,
    ) -> Result<f64, EphemerisError> {
        self.bodies
            .get(&body)
            .copied()
            .ok_or_else(|| EphemerisError::Body {
                body,
                message: "body missing from snapshot".into(),
            })
    }

    fn houses_at(
        &self,
        _instant: DateTime<Utc>,
        _latitude: f64,
        _longitude: f64,
        _system: ZodiacSystem,
    ) -> Result<RawHouses, EphemerisError> {
        Ok(RawHouses {
            cusps: self.cusps.clone(),
            ascendant: self.ascendant,
            midheaven: self.midheaven,
        })
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

    fn snapshot() -> SnapshotEphemeris {
        serde_json::from_value(serde_json::json!({
            "bodies": { "Sun": 269.5, "Moon": 14.0 },
            "cusps": [200.5, 230.0, 260.0, 290.0, 320.0, 350.0,
                      20.5, 50.0, 80.0, 110.0, 140.0, 170.0],
            "ascendant": 200.5,
            "midheaven": 110.0
        }))
        .unwrap()
    }

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(1994, 12, 21, 14, 57, 0).unwrap()
    }

    #[test]
    fn known_body_resolves() {
        let lon = snapshot()
            .longitude_of(instant(), Body::Sun, ZodiacSystem::Tropical)
            .unwrap();
        assert_eq!(lon, 269.5);
    }

    #[test]
    fn missing_body_is_an_ephemeris_error() {
        let err = snapshot()
            .longitude_of(instant(), Body::Saturn, ZodiacSystem::Tropical)
            .unwrap_err();
        assert_matches!(err, EphemerisError::Body { body: Body::Saturn, .. });
    }

    #[test]
    fn houses_pass_through() {
        let houses = snapshot()
            .houses_at(instant(), 27.4467, -80.3256, ZodiacSystem::Tropical)
            .unwrap();
        assert_eq!(houses.cusps.len(), 12);
        assert_eq!(houses.ascendant, 200.5);
        assert_eq!(houses.midheaven, 110.0);
    }
}
