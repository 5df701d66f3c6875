//! Placement classification.
//!
//! Assigns sign and house to every body, then derives the narrative facts:
//! chart ruler, dominant houses, the best supportive aspect ("superpower"),
//! and the best challenging aspect to Saturn ("main lesson"). All tie-breaks
//! are deterministic so identical inputs always reproduce the same chart.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use natal_core::arc::{normalize, short_arc};
use natal_core::chart::{Angle, FeaturedPlacement, HouseCusps, Location, Placement};
use natal_core::errors::ChartError;
use natal_core::zodiac::{ALL_BODIES, Body, HouseSystem, PERSONAL_BODIES, Sign, ZodiacSystem};

use crate::ephemeris::Ephemeris;
use crate::houses;

/// Canonical aspect angles considered for the superpower search.
const ASPECT_ANGLES: [f64; 5] = [0.0, 60.0, 90.0, 120.0, 180.0];
/// Orb tolerance for superpower aspects.
const SUPERPOWER_ORB: f64 = 3.0;
/// Challenging aspect angles considered for the main-lesson search.
const CHALLENGE_ANGLES: [f64; 2] = [90.0, 180.0];
/// Orb tolerance for main-lesson aspects.
const LESSON_ORB: f64 = 4.0;
/// The angular houses, used by the superpower fallback.
const ANGULAR_HOUSES: [u8; 4] = [1, 4, 7, 10];

/// Life-domain themes per house, for report renderers.
const HOUSE_TOPICS: [&str; 12] = [
    "identity, body, and first impressions",
    "money, values, and self-worth",
    "communication, learning, and daily thinking",
    "home, roots, and emotional foundation",
    "creativity, joy, romance, and play",
    "work routines, health habits, and service",
    "partnerships, mirrors, and agreements",
    "shared resources, intimacy, and transformation",
    "beliefs, higher learning, and long-distance vision",
    "career, reputation, and visible purpose",
    "friends, networks, and future goals",
    "rest, healing, and spiritual integration",
];

/// Theme of a house (1–12), for report renderers.
#[must_use]
pub fn house_topic(house: u8) -> Option<&'static str> {
    if (1..=12).contains(&house) {
        Some(HOUSE_TOPICS[usize::from(house) - 1])
    } else {
        None
    }
}

/// Tone of a sign, for report renderers.
#[must_use]
pub fn sign_tone(sign: Sign) -> &'static str {
    match sign {
        Sign::Aries => "direct and action-first",
        Sign::Taurus => "grounded and steady",
        Sign::Gemini => "curious and mentally agile",
        Sign::Cancer => "protective and emotionally tuned",
        Sign::Leo => "expressive and heart-led",
        Sign::Virgo => "precise and service-oriented",
        Sign::Libra => "balanced and relational",
        Sign::Scorpio => "intense and transformational",
        Sign::Sagittarius => "expansive and truth-seeking",
        Sign::Capricorn => "disciplined and strategic",
        Sign::Aquarius => "innovative and community-minded",
        Sign::Pisces => "intuitive and compassionate",
    }
}

/// Output of [`classify`]: everything derived from the ephemeris for one
/// instant and location.
#[derive(Clone, Debug, PartialEq)]
pub struct Classification {
    /// Placement per charted body.
    pub placements: BTreeMap<Body, Placement>,
    /// The Ascendant.
    pub ascendant: Angle,
    /// The Midheaven.
    pub midheaven: Angle,
    /// House cusps in the requested house system.
    pub house_cusps: HouseCusps,
    /// Bodies per house (index 0 = house 1), names sorted.
    pub planets_by_house: Vec<Vec<Body>>,
    /// Placement of the Ascendant sign's ruling body.
    pub chart_ruler: Placement,
    /// Most activated houses, best first; at most 2.
    pub dominant_houses: Vec<u8>,
    /// Best supportive-aspect placement.
    pub superpower: FeaturedPlacement,
    /// Best challenging-aspect placement, anchored on Saturn.
    pub main_lesson: FeaturedPlacement,
}

/// Classify every body at the instant and location.
///
/// Fails with an ephemeris error if the adapter reports failure for any
/// body or for the houses/angles, and with a house-calculation error if the
/// adapter's cusp data is unusable in Placidus mode.
pub fn classify(
    ephemeris: &dyn Ephemeris,
    instant: DateTime<Utc>,
    location: &Location,
    system: ZodiacSystem,
    house_mode: HouseSystem,
) -> Result<Classification, ChartError> {
    let raw = ephemeris.houses_at(instant, location.latitude, location.longitude, system)?;
    let ascendant = Angle::new(raw.ascendant);
    let midheaven = Angle::new(raw.midheaven);
    let house_cusps = houses::cusps_for(ascendant.longitude, Some(&raw.cusps), house_mode)?;

    let mut placements = BTreeMap::new();
    for body in ALL_BODIES {
        let longitude = normalize(ephemeris.longitude_of(instant, body, system)?);
        let house = houses::house_of(longitude, &house_cusps, house_mode, ascendant.longitude);
        let _ = placements.insert(body, Placement::new(body, longitude, house));
    }

    let mut planets_by_house: Vec<Vec<Body>> = vec![Vec::new(); 12];
    for placement in placements.values() {
        planets_by_house[usize::from(placement.house) - 1].push(placement.body);
    }
    for bodies in &mut planets_by_house {
        bodies.sort_by_key(|b| b.name());
    }

    let chart_ruler = placements[&ascendant.sign.ruler()].clone();
    let dominant_houses = dominant_houses(&placements);
    let superpower = superpower(&placements, ascendant.longitude, midheaven.longitude);
    let main_lesson = main_lesson(&placements);

    debug!(
        ascendant = %ascendant.sign,
        chart_ruler = %chart_ruler.body,
        dominant_houses = ?dominant_houses,
        "Classified chart"
    );

    Ok(Classification {
        placements,
        ascendant,
        midheaven,
        house_cusps,
        planets_by_house,
        chart_ruler,
        dominant_houses,
        superpower,
        main_lesson,
    })
}

/// Rank houses by personal-body count, then weight, then house number.
///
/// `count` tallies the five personal bodies; `weight` adds 2 per personal
/// body and 1 per social body (Jupiter, Saturn). Lower house number wins
/// ties — a deliberate, reproducible rule.
fn dominant_houses(placements: &BTreeMap<Body, Placement>) -> Vec<u8> {
    let mut count = [0u8; 12];
    let mut weight = [0u8; 12];
    for placement in placements.values() {
        let slot = usize::from(placement.house) - 1;
        if placement.body.is_personal() {
            count[slot] += 1;
            weight[slot] += 2;
        } else {
            weight[slot] += 1;
        }
    }

    let mut ranked: Vec<u8> = (1..=12u8)
        .filter(|&h| weight[usize::from(h) - 1] > 0)
        .collect();
    ranked.sort_by(|&a, &b| {
        let (ia, ib) = (usize::from(a) - 1, usize::from(b) - 1);
        count[ib]
            .cmp(&count[ia])
            .then(weight[ib].cmp(&weight[ia]))
            .then(a.cmp(&b))
    });
    ranked.truncate(2);
    ranked
}

/// Best supportive aspect from a personal body to the Ascendant or
/// Midheaven, tightest orb first.
fn superpower(
    placements: &BTreeMap<Body, Placement>,
    ascendant: f64,
    midheaven: f64,
) -> FeaturedPlacement {
    struct Candidate {
        body: Body,
        target: &'static str,
        aspect: f64,
        orb: f64,
    }

    let mut candidates = Vec::new();
    for body in PERSONAL_BODIES {
        let longitude = placements[&body].longitude;
        for (target, target_longitude) in [("Asc", ascendant), ("MC", midheaven)] {
            let distance = short_arc(longitude, target_longitude);
            for aspect in ASPECT_ANGLES {
                let orb = (distance - aspect).abs();
                if orb <= SUPERPOWER_ORB {
                    candidates.push(Candidate {
                        body,
                        target,
                        aspect,
                        orb,
                    });
                }
            }
        }
    }

    // Stable sort keeps the Sun→Mars / Asc-before-MC insertion order on
    // equal orbs.
    candidates.sort_by(|a, b| a.orb.total_cmp(&b.orb));

    if let Some(best) = candidates.first() {
        return FeaturedPlacement {
            placement: placements[&best.body].clone(),
            reason: format!(
                "tight {:.0}\u{b0} aspect to {} (orb {:.1}\u{b0})",
                best.aspect, best.target, best.orb
            ),
        };
    }

    let fallback = PERSONAL_BODIES
        .into_iter()
        .find(|body| ANGULAR_HOUSES.contains(&placements[body].house))
        .unwrap_or(Body::Sun);
    FeaturedPlacement {
        placement: placements[&fallback].clone(),
        reason: "strongest angular personal placement".to_string(),
    }
}

/// Best challenging aspect from a personal body to Saturn.
///
/// Always anchored on Saturn's own placement; the tightest-orb personal
/// body only supplies the reason text.
fn main_lesson(placements: &BTreeMap<Body, Placement>) -> FeaturedPlacement {
    let saturn = &placements[&Body::Saturn];

    let mut candidates: Vec<(Body, f64, f64)> = Vec::new();
    for body in PERSONAL_BODIES {
        let distance = short_arc(placements[&body].longitude, saturn.longitude);
        for aspect in CHALLENGE_ANGLES {
            let orb = (distance - aspect).abs();
            if orb <= LESSON_ORB {
                candidates.push((body, aspect, orb));
            }
        }
    }
    candidates.sort_by(|a, b| a.2.total_cmp(&b.2));

    let reason = candidates.first().map_or_else(
        || "Saturn placement shows core growth lessons".to_string(),
        |&(body, aspect, orb)| {
            format!("{body}-Saturn {aspect:.0}\u{b0} challenge (orb {orb:.1}\u{b0})")
        },
    );

    FeaturedPlacement {
        placement: saturn.clone(),
        reason,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
