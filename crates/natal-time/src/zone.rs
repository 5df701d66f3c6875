//! Latitude/longitude → IANA timezone lookup seam.
//!
//! The lookup itself is an external capability; the engine only depends on
//! the [`ZoneLookup`] trait. [`TzfZoneLookup`] is the default offline
//! implementation, backed by embedded timezone boundary data.

use std::str::FromStr;

use chrono_tz::Tz;
use tzf_rs::DefaultFinder;

use natal_core::errors::TemporalError;

/// Resolves coordinates to an IANA timezone.
pub trait ZoneLookup: Send + Sync {
    /// Timezone containing the given point.
    ///
    /// Failure here is a [`TemporalError::ZoneLookupFailed`], distinct from
    /// wall-clock resolution failures.
    fn zone_for(&self, latitude: f64, longitude: f64) -> Result<Tz, TemporalError>;
}

/// Offline point-in-polygon zone lookup.
pub struct TzfZoneLookup {
    finder: DefaultFinder,
}

impl TzfZoneLookup {
    /// Create a lookup. Loads the embedded boundary data; construct once
    /// and share.
    #[must_use]
    pub fn new() -> Self {
        Self {
            finder: DefaultFinder::new(),
        }
    }
}

impl Default for TzfZoneLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoneLookup for TzfZoneLookup {
    fn zone_for(&self, latitude: f64, longitude: f64) -> Result<Tz, TemporalError> {
        // tzf takes (lng, lat) order.
        let name = self.finder.get_tz_name(longitude, latitude);
        if name.is_empty() {
            return Err(TemporalError::ZoneLookupFailed);
        }
        Tz::from_str(name).map_err(|_| TemporalError::ZoneLookupFailed)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fort_pierce_is_eastern() {
        let lookup = TzfZoneLookup::new();
        let tz = lookup.zone_for(27.4467, -80.3256).unwrap();
        assert_eq!(tz, chrono_tz::America::New_York);
    }

    #[test]
    fn berlin_is_central_european() {
        let lookup = TzfZoneLookup::new();
        let tz = lookup.zone_for(52.52, 13.405).unwrap();
        assert_eq!(tz, chrono_tz::Europe::Berlin);
    }

    #[test]
    fn a_fixed_zone_can_stand_in_for_the_trait() {
        struct Fixed(Tz);
        impl ZoneLookup for Fixed {
            fn zone_for(&self, _: f64, _: f64) -> Result<Tz, TemporalError> {
                Ok(self.0)
            }
        }
        let lookup = Fixed(chrono_tz::UTC);
        assert_eq!(lookup.zone_for(0.0, 0.0).unwrap(), chrono_tz::UTC);
    }
}
