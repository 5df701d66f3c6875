//! Zodiac vocabulary: bodies, signs, and system selectors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::arc::normalize;

// ─────────────────────────────────────────────────────────────────────────────
// Body
// ─────────────────────────────────────────────────────────────────────────────

/// A charted celestial body.
///
/// The set is fixed: the five personal bodies plus the two social bodies.
/// Ordering is the traditional Sun→Saturn sequence and doubles as the
/// fallback priority order used by the classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Body {
    /// The Sun.
    Sun,
    /// The Moon.
    Moon,
    /// Mercury.
    Mercury,
    /// Venus.
    Venus,
    /// Mars.
    Mars,
    /// Jupiter.
    Jupiter,
    /// Saturn.
    Saturn,
}

/// All charted bodies, in traditional order.
pub const ALL_BODIES: [Body; 7] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
];

/// The five personal bodies, in fallback priority order.
pub const PERSONAL_BODIES: [Body; 5] =
    [Body::Sun, Body::Moon, Body::Mercury, Body::Venus, Body::Mars];

impl Body {
    /// Canonical display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
        }
    }

    /// Whether this is one of the five personal bodies.
    #[must_use]
    pub fn is_personal(self) -> bool {
        matches!(
            self,
            Self::Sun | Self::Moon | Self::Mercury | Self::Venus | Self::Mars
        )
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sign
// ─────────────────────────────────────────────────────────────────────────────

/// One of the 12 zodiac signs, each spanning a 30° segment of the ecliptic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sign {
    /// 0°–30°.
    Aries,
    /// 30°–60°.
    Taurus,
    /// 60°–90°.
    Gemini,
    /// 90°–120°.
    Cancer,
    /// 120°–150°.
    Leo,
    /// 150°–180°.
    Virgo,
    /// 180°–210°.
    Libra,
    /// 210°–240°.
    Scorpio,
    /// 240°–270°.
    Sagittarius,
    /// 270°–300°.
    Capricorn,
    /// 300°–330°.
    Aquarius,
    /// 330°–360°.
    Pisces,
}

/// All signs in ecliptic order.
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    /// Sign containing the given ecliptic longitude.
    #[must_use]
    pub fn from_longitude(longitude: f64) -> Self {
        let index = (normalize(longitude) / 30.0).floor() as usize;
        // normalize() < 360 guarantees index <= 11
        ALL_SIGNS[index.min(11)]
    }

    /// Zero-based position in ecliptic order (Aries = 0).
    #[must_use]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Canonical display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Traditional ruling body of this sign.
    ///
    /// Used to derive the chart ruler from the Ascendant's sign.
    #[must_use]
    pub fn ruler(self) -> Body {
        match self {
            Self::Aries | Self::Scorpio => Body::Mars,
            Self::Taurus | Self::Libra => Body::Venus,
            Self::Gemini | Self::Virgo => Body::Mercury,
            Self::Cancer => Body::Moon,
            Self::Leo => Body::Sun,
            Self::Sagittarius | Self::Pisces => Body::Jupiter,
            Self::Capricorn | Self::Aquarius => Body::Saturn,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Format the within-sign position of a longitude as `DD°MM`.
///
/// Minutes are rounded; a rounded minute of 60 carries into the degree,
/// matching the rendering the rest of the chart output expects (29°59.6′
/// renders as `30°00`, never `29°60`).
#[must_use]
pub fn degree_minute(longitude: f64) -> String {
    let in_sign = normalize(longitude) % 30.0;
    let degree = in_sign.floor();
    let minute = ((in_sign - degree) * 60.0).round();
    let (degree, minute) = if minute >= 60.0 {
        (degree + 1.0, 0.0)
    } else {
        (degree, minute)
    };
    format!("{degree:02.0}\u{b0}{minute:02.0}")
}

// ─────────────────────────────────────────────────────────────────────────────
// Selectors
// ─────────────────────────────────────────────────────────────────────────────

/// Zodiac reference frame for body longitudes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZodiacSystem {
    /// Tropical zodiac (default).
    #[default]
    Tropical,
    /// Sidereal zodiac (Lahiri ayanamsa, applied by the ephemeris adapter).
    Sidereal,
}

/// Unknown zodiac system token.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("`system` must be `tropical` or `sidereal`")]
pub struct ParseZodiacSystemError;

impl FromStr for ZodiacSystem {
    type Err = ParseZodiacSystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tropical" => Ok(Self::Tropical),
            "sidereal" => Ok(Self::Sidereal),
            _ => Err(ParseZodiacSystemError),
        }
    }
}

impl fmt::Display for ZodiacSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tropical => f.write_str("tropical"),
            Self::Sidereal => f.write_str("sidereal"),
        }
    }
}

/// House-division convention.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    /// Houses are the 12 sign segments starting at the Ascendant's sign.
    #[default]
    WholeSign,
    /// Time-based division; cusps supplied by the ephemeris adapter.
    Placidus,
}

/// Unknown house system token.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("`house_system` must be `whole_sign` or `placidus`")]
pub struct ParseHouseSystemError;

impl FromStr for HouseSystem {
    type Err = ParseHouseSystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "whole_sign" => Ok(Self::WholeSign),
            "placidus" => Ok(Self::Placidus),
            _ => Err(ParseHouseSystemError),
        }
    }
}

impl fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WholeSign => f.write_str("whole_sign"),
            Self::Placidus => f.write_str("placidus"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
