//! House geometry: cusp construction and house containment.
//!
//! All containment is circular-arc arithmetic through
//! [`natal_core::arc`]; houses routinely wrap through 0°/360° and linear
//! comparison is wrong there.

use natal_core::arc::{forward_arc, normalize};
use natal_core::chart::HouseCusps;
use natal_core::errors::HouseCalculationError;
use natal_core::zodiac::HouseSystem;

/// Tolerance for placing an exact cusp-boundary longitude in the lower
/// house. Tunable; not derived from anything.
const CUSP_EPSILON: f64 = 1e-9;

/// Normalize a raw cusp array from the astronomical library.
///
/// Accepts either exactly 12 cusps or the 13-element 1-indexed convention
/// (index 0 unused); anything else is incomplete data.
pub fn extract_cusps(raw: &[f64]) -> Result<HouseCusps, HouseCalculationError> {
    let slice = if raw.len() >= 13 {
        &raw[1..13]
    } else if raw.len() == 12 {
        raw
    } else {
        return Err(HouseCalculationError::IncompleteCusps(raw.len()));
    };

    let mut cusps = [0.0; 12];
    for (out, &value) in cusps.iter_mut().zip(slice) {
        *out = normalize(value);
    }
    Ok(cusps)
}

/// Whole-sign cusps: the 12 sign boundaries starting at the Ascendant's sign.
#[must_use]
pub fn whole_sign_cusps(ascendant: f64) -> HouseCusps {
    let first = (normalize(ascendant) / 30.0).floor() * 30.0;
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize(first + 30.0 * i as f64);
    }
    cusps
}

/// House cusps for the given mode.
///
/// Whole-sign derives everything from the Ascendant; Placidus requires the
/// raw cusp data from the ephemeris adapter.
pub fn cusps_for(
    ascendant: f64,
    raw: Option<&[f64]>,
    mode: HouseSystem,
) -> Result<HouseCusps, HouseCalculationError> {
    match mode {
        HouseSystem::WholeSign => Ok(whole_sign_cusps(ascendant)),
        HouseSystem::Placidus => {
            let raw = raw.ok_or_else(|| {
                HouseCalculationError::Failed("no cusp data from ephemeris".into())
            })?;
            extract_cusps(raw)
        }
    }
}

/// House (1–12) containing a longitude.
pub fn house_of(longitude: f64, cusps: &HouseCusps, mode: HouseSystem, ascendant: f64) -> u8 {
    match mode {
        HouseSystem::WholeSign => whole_sign_house(longitude, ascendant),
        HouseSystem::Placidus => placidus_house(longitude, cusps),
    }
}

/// Whole-sign house: 1-based circular sign offset from the Ascendant's sign.
fn whole_sign_house(longitude: f64, ascendant: f64) -> u8 {
    let body_sign = (normalize(longitude) / 30.0).floor() as i32;
    let asc_sign = (normalize(ascendant) / 30.0).floor() as i32;
    ((body_sign - asc_sign).rem_euclid(12) + 1) as u8
}

/// Placidus house by forward-arc containment.
///
/// A longitude is in house `i` when the forward arc from `cusp[i]` to it is
/// strictly less than the house's full arc, with `CUSP_EPSILON` keeping the
/// exact upper boundary in the lower house. House 12 absorbs anything that
/// fails every earlier test, guarding against accumulated floating-point
/// error at the wraparound.
fn placidus_house(longitude: f64, cusps: &HouseCusps) -> u8 {
    let lon = normalize(longitude);
    for i in 0..12 {
        let start = cusps[i];
        let end = cusps[(i + 1) % 12];

        let arc_total = forward_arc(start, end);
        let arc_to_point = forward_arc(start, lon);

        if arc_to_point < arc_total || (arc_to_point - arc_total).abs() < CUSP_EPSILON {
            return (i + 1) as u8;
        }
    }
    12
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
