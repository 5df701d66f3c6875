//! Chart assembly: the request → [`Chart`] composition root.
//!
//! Pure composition over the location resolver, the temporal resolver, and
//! the classifier; no geometry of its own. Each request is independent —
//! there is no cache and no shared state between concurrent computations.

use chrono::SecondsFormat;
use chrono_tz::Tz;
use tracing::debug;

use natal_core::chart::{Chart, ChartInput};
use natal_core::errors::ChartResult;
use natal_core::zodiac::{HouseSystem, ZodiacSystem};
use natal_geo::LocationResolver;
use natal_time::{ZoneLookup, resolve_instant};

use crate::classify::classify;
use crate::ephemeris::Ephemeris;

/// A single chart computation request.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartRequest {
    /// Birth date, `YYYY-MM-DD`.
    pub date: String,
    /// Birth time, `HH:MM` 24-hour local.
    pub time: String,
    /// Birth place: free text or `"lat,lon"`.
    pub location: String,
    /// Zodiac system.
    pub system: ZodiacSystem,
    /// House system.
    pub house_system: HouseSystem,
}

/// Compute a full natal chart.
///
/// Resolves the place, derives its timezone, resolves the wall-clock birth
/// time to a UTC instant (disclosing DST ambiguity via the chart's
/// `timezone_note`), classifies every placement, and assembles the
/// immutable [`Chart`]. The raw inputs are echoed back for traceability.
pub async fn compute_chart(
    request: &ChartRequest,
    locations: &LocationResolver,
    zones: &dyn ZoneLookup,
    ephemeris: &dyn Ephemeris,
) -> ChartResult<Chart> {
    let location = locations.resolve(&request.location).await?;
    let zone: Tz = zones.zone_for(location.latitude, location.longitude)?;
    let instant = resolve_instant(&request.date, &request.time, zone)?;

    debug!(
        display_name = %location.display_name,
        zone = %zone,
        utc = %instant.utc,
        "Resolved chart inputs"
    );

    let classification = classify(
        ephemeris,
        instant.utc,
        &location,
        request.system,
        request.house_system,
    )?;

    let house_cusp_signs = classification
        .house_cusps
        .map(natal_core::zodiac::Sign::from_longitude);

    Ok(Chart {
        system: request.system,
        house_system: request.house_system,
        input: ChartInput {
            date: request.date.clone(),
            time: request.time.clone(),
            location: request.location.clone(),
        },
        location,
        timezone: zone.name().to_string(),
        timezone_note: instant.ambiguity_note,
        utc: instant.utc.to_rfc3339_opts(SecondsFormat::Millis, true),
        ascendant: classification.ascendant,
        midheaven: classification.midheaven,
        house_cusps: classification.house_cusps,
        house_cusp_signs,
        placements: classification.placements,
        planets_by_house: classification.planets_by_house,
        chart_ruler: classification.chart_ruler,
        dominant_houses: classification.dominant_houses,
        superpower: classification.superpower,
        main_lesson: classification.main_lesson,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono_tz::Tz;

    use natal_core::errors::{ChartError, TemporalError};
    use natal_core::zodiac::{Body, Sign};
    use natal_time::zone::ZoneLookup;

    use crate::ephemeris::SnapshotEphemeris;

    use super::*;

    struct FixedZone(Tz);

    impl ZoneLookup for FixedZone {
        fn zone_for(&self, _lat: f64, _lon: f64) -> Result<Tz, TemporalError> {
            Ok(self.0)
        }
    }

    struct NoZone;

    impl ZoneLookup for NoZone {
        fn zone_for(&self, _lat: f64, _lon: f64) -> Result<Tz, TemporalError> {
            Err(TemporalError::ZoneLookupFailed)
        }
    }

    /// Fixed ephemeris output for the 1994-12-21 09:57 Fort Pierce chart.
    fn snapshot() -> SnapshotEphemeris {
        serde_json::from_value(serde_json::json!({
            "bodies": {
                "Sun": 269.5,
                "Moon": 14.0,
                "Mercury": 262.0,
                "Venus": 215.0,
                "Mars": 135.0,
                "Jupiter": 245.0,
                "Saturn": 339.0
            },
            "cusps": [200.5, 228.0, 258.5, 291.0, 324.0, 355.0,
                      20.5, 48.0, 78.5, 111.0, 144.0, 175.0],
            "ascendant": 200.5,
            "midheaven": 110.0
        }))
        .unwrap()
    }

    fn request() -> ChartRequest {
        ChartRequest {
            date: "1994-12-21".into(),
            time: "09:57".into(),
            location: "27.4467,-80.3256".into(),
            system: ZodiacSystem::Tropical,
            house_system: HouseSystem::WholeSign,
        }
    }

    fn resolver() -> LocationResolver {
        // Coordinate input short-circuits before any provider is consulted.
        LocationResolver::with_providers(vec![])
    }

    #[tokio::test]
    async fn end_to_end_whole_sign_chart() {
        let chart = compute_chart(
            &request(),
            &resolver(),
            &FixedZone(chrono_tz::America::New_York),
            &snapshot(),
        )
        .await
        .unwrap();

        // Instant: 09:57 EST → 14:57 UTC, canonical text
        assert_eq!(chart.utc, "1994-12-21T14:57:00.000Z");
        assert_eq!(chart.timezone, "America/New_York");
        assert!(chart.timezone_note.is_none());

        // Angles
        assert_eq!(chart.ascendant.sign, Sign::Libra);
        assert_eq!(chart.ascendant.degree, "20°30");
        assert_eq!(chart.midheaven.sign, Sign::Cancer);

        // Big three
        let sun = &chart.placements[&Body::Sun];
        assert_eq!((sun.sign, sun.house), (Sign::Sagittarius, 3));
        let moon = &chart.placements[&Body::Moon];
        assert_eq!((moon.sign, moon.house), (Sign::Aries, 7));

        // Libra rising → Venus rules the chart
        assert_eq!(chart.chart_ruler.body, Body::Venus);
        assert_eq!(chart.chart_ruler.sign, Sign::Scorpio);

        // Whole-sign cusps start at Libra 0°
        assert_eq!(chart.house_cusps[0], 180.0);
        assert_eq!(chart.house_cusp_signs[0], Sign::Libra);
        assert_eq!(chart.house_cusp_signs[11], Sign::Virgo);

        // Sun + Mercury (+ Jupiter) stack house 3
        assert_eq!(chart.dominant_houses, vec![3, 2]);
        assert_eq!(
            chart.planets_by_house[2],
            vec![Body::Jupiter, Body::Mercury, Body::Sun]
        );

        // Mercury 61.5° from the Ascendant → sextile, orb 1.5
        assert_eq!(chart.superpower.placement.body, Body::Mercury);
        assert_eq!(chart.superpower.reason, "tight 60° aspect to Asc (orb 1.5°)");

        // No personal body within challenge orb of Saturn
        assert_eq!(chart.main_lesson.placement.body, Body::Saturn);
        assert_eq!(
            chart.main_lesson.reason,
            "Saturn placement shows core growth lessons"
        );

        // Raw inputs echoed
        assert_eq!(chart.input.date, "1994-12-21");
        assert_eq!(chart.input.location, "27.4467,-80.3256");
    }

    #[tokio::test]
    async fn identical_inputs_reproduce_the_same_chart() {
        let zones = FixedZone(chrono_tz::America::New_York);
        let eph = snapshot();
        let first = compute_chart(&request(), &resolver(), &zones, &eph)
            .await
            .unwrap();
        let second = compute_chart(&request(), &resolver(), &zones, &eph)
            .await
            .unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn placidus_uses_adapter_cusps() {
        let mut req = request();
        req.house_system = HouseSystem::Placidus;
        let chart = compute_chart(
            &req,
            &resolver(),
            &FixedZone(chrono_tz::America::New_York),
            &snapshot(),
        )
        .await
        .unwrap();

        // Uneven adapter cusps pass straight through
        assert_eq!(chart.house_cusps[1], 228.0);
        // Venus 215° sits between cusp 1 (200.5) and cusp 2 (228) → house 1
        assert_eq!(chart.placements[&Body::Venus].house, 1);
        // Moon 14° falls in the house spanning 355° → 20.5° through 0°
        assert_eq!(chart.placements[&Body::Moon].house, 6);
    }

    #[tokio::test]
    async fn incomplete_cusps_fail_in_placidus_mode_only() {
        let mut eph = snapshot();
        eph.cusps.truncate(7);

        let chart = compute_chart(
            &request(),
            &resolver(),
            &FixedZone(chrono_tz::America::New_York),
            &eph,
        )
        .await;
        assert!(chart.is_ok(), "whole-sign never reads adapter cusps");

        let mut req = request();
        req.house_system = HouseSystem::Placidus;
        let err = compute_chart(
            &req,
            &resolver(),
            &FixedZone(chrono_tz::America::New_York),
            &eph,
        )
        .await
        .unwrap_err();
        assert_matches!(err, ChartError::House(_));
    }

    #[tokio::test]
    async fn ambiguous_local_time_is_noted_on_the_chart() {
        let mut req = request();
        req.date = "2021-11-07".into();
        req.time = "01:30".into();
        let chart = compute_chart(
            &req,
            &resolver(),
            &FixedZone(chrono_tz::America::New_York),
            &snapshot(),
        )
        .await
        .unwrap();
        // Earlier occurrence (EDT, UTC-4) chosen by policy.
        assert_eq!(chart.utc, "2021-11-07T05:30:00.000Z");
        assert!(
            chart
                .timezone_note
                .as_deref()
                .unwrap()
                .contains("earlier occurrence")
        );
    }

    #[tokio::test]
    async fn zone_lookup_failure_is_a_temporal_error() {
        let err = compute_chart(&request(), &resolver(), &NoZone, &snapshot())
            .await
            .unwrap_err();
        assert_matches!(err, ChartError::Temporal(TemporalError::ZoneLookupFailed));
    }

    #[tokio::test]
    async fn missing_body_is_an_ephemeris_error() {
        let mut eph = snapshot();
        let _ = eph.bodies.remove(&Body::Mars);
        let err = compute_chart(
            &request(),
            &resolver(),
            &FixedZone(chrono_tz::America::New_York),
            &eph,
        )
        .await
        .unwrap_err();
        assert_matches!(err, ChartError::Ephemeris(_));
    }
}
