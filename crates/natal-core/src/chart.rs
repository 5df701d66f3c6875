//! The chart data model.
//!
//! Every type here is built once per request and never mutated after
//! assembly. Nothing is persisted; a [`Chart`] is the complete answer to a
//! single computation request and carries every field a report renderer
//! needs, so callers never re-derive geometry.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::zodiac::{Body, HouseSystem, Sign, ZodiacSystem, degree_minute};

/// A resolved geographic birth place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Human-readable place name, composed from the resolving provider's
    /// name fields (or formatted coordinates for direct input).
    pub display_name: String,
    /// Latitude in degrees, in [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, in [-180, 180].
    pub longitude: f64,
}

/// A civil birth time resolved to a UTC instant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolvedInstant {
    /// The chosen UTC instant.
    pub utc: DateTime<Utc>,
    /// Set when the wall-clock time fell in a DST fall-back overlap and the
    /// earlier of the two valid instants was chosen by policy.
    pub ambiguity_note: Option<String>,
}

/// A body's position classified into sign and house.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// The placed body.
    pub body: Body,
    /// Normalized ecliptic longitude in [0, 360).
    pub longitude: f64,
    /// Zodiac sign containing the longitude.
    pub sign: Sign,
    /// House number, 1–12.
    pub house: u8,
    /// Position within the sign, rendered `DD°MM`.
    pub degree: String,
}

impl Placement {
    /// Classify a body at a longitude into the given house.
    #[must_use]
    pub fn new(body: Body, longitude: f64, house: u8) -> Self {
        let longitude = crate::arc::normalize(longitude);
        Self {
            body,
            longitude,
            sign: Sign::from_longitude(longitude),
            house,
            degree: degree_minute(longitude),
        }
    }
}

/// An angle point (Ascendant or Midheaven) — a placement with no house.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Angle {
    /// Normalized ecliptic longitude in [0, 360).
    pub longitude: f64,
    /// Zodiac sign containing the longitude.
    pub sign: Sign,
    /// Position within the sign, rendered `DD°MM`.
    pub degree: String,
}

impl Angle {
    /// Classify an angle longitude.
    #[must_use]
    pub fn new(longitude: f64) -> Self {
        let longitude = crate::arc::normalize(longitude);
        Self {
            longitude,
            sign: Sign::from_longitude(longitude),
            degree: degree_minute(longitude),
        }
    }
}

/// A placement singled out by the classifier, with the reason it was chosen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeaturedPlacement {
    /// The featured placement.
    #[serde(flatten)]
    pub placement: Placement,
    /// Why this placement was selected (aspect, target, and orb, or the
    /// fallback rationale).
    pub reason: String,
}

/// The caller's raw inputs, echoed for traceability.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartInput {
    /// Raw date text.
    pub date: String,
    /// Raw time text.
    pub time: String,
    /// Raw location text.
    pub location: String,
}

/// Ordered house cusp longitudes; `cusps[i]` starts house `i + 1`.
pub type HouseCusps = [f64; 12];

/// A fully computed natal chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// Zodiac system the chart was computed in.
    pub system: ZodiacSystem,
    /// House system the chart was computed in.
    pub house_system: HouseSystem,
    /// The caller's raw inputs.
    pub input: ChartInput,
    /// The resolved birth place.
    pub location: Location,
    /// IANA timezone the birth place resolved to.
    pub timezone: String,
    /// DST disclosure when the local time was ambiguous.
    pub timezone_note: Option<String>,
    /// Birth instant in canonical UTC text (RFC 3339).
    pub utc: String,
    /// The Ascendant.
    pub ascendant: Angle,
    /// The Midheaven.
    pub midheaven: Angle,
    /// House cusp longitudes.
    pub house_cusps: HouseCusps,
    /// Sign on each house cusp.
    pub house_cusp_signs: [Sign; 12],
    /// Placement of every charted body.
    pub placements: BTreeMap<Body, Placement>,
    /// Bodies occupying each house; index 0 is house 1. Names sorted.
    pub planets_by_house: Vec<Vec<Body>>,
    /// Placement of the body ruling the Ascendant's sign.
    pub chart_ruler: Placement,
    /// Most activated houses, best first; at most 2.
    pub dominant_houses: Vec<u8>,
    /// Best supportive-aspect placement.
    pub superpower: FeaturedPlacement,
    /// Best challenging-aspect placement, anchored on Saturn.
    pub main_lesson: FeaturedPlacement,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
