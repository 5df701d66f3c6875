//! Circular-arc arithmetic on ecliptic longitudes.
//!
//! Houses may wrap through 0°/360°, so containment and aspect tests must
//! never use linear comparison. Every consumer (house geometry, aspect
//! orbs) routes through these three primitives so rounding behavior cannot
//! diverge across components.

/// Normalize a longitude into `[0, 360)`.
///
/// Idempotent: `normalize(normalize(l)) == normalize(l)`.
///
/// # Examples
///
/// ```
/// use natal_core::arc::normalize;
///
/// assert_eq!(normalize(370.0), 10.0);
/// assert_eq!(normalize(-10.0), 350.0);
/// assert_eq!(normalize(360.0), 0.0);
/// ```
#[inline]
#[must_use]
pub fn normalize(longitude: f64) -> f64 {
    let wrapped = longitude % 360.0;
    if wrapped < 0.0 { wrapped + 360.0 } else { wrapped }
}

/// Forward (counterclockwise) arc from `start` to `end`, in `[0, 360)`.
///
/// This is the directed distance walked along the ecliptic from `start`
/// until `end` is reached, wrapping through 0° if necessary.
#[inline]
#[must_use]
pub fn forward_arc(start: f64, end: f64) -> f64 {
    (normalize(end) - normalize(start) + 360.0) % 360.0
}

/// Shorter angular separation between two longitudes, in `[0, 180]`.
///
/// Used for aspect orbs, where direction does not matter.
#[inline]
#[must_use]
pub fn short_arc(a: f64, b: f64) -> f64 {
    let raw = (normalize(a) - normalize(b)).abs();
    if raw > 180.0 { 360.0 - raw } else { raw }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── normalize ────────────────────────────────────────────────────────

    #[test]
    fn normalize_in_range_is_identity() {
        assert_eq!(normalize(0.0), 0.0);
        assert_eq!(normalize(179.25), 179.25);
        assert_eq!(normalize(359.999), 359.999);
    }

    #[test]
    fn normalize_wraps_positive() {
        assert_eq!(normalize(360.0), 0.0);
        assert_eq!(normalize(370.0), 10.0);
        assert_eq!(normalize(720.0), 0.0);
        assert_eq!(normalize(725.5), 5.5);
    }

    #[test]
    fn normalize_wraps_negative() {
        assert_eq!(normalize(-10.0), 350.0);
        assert_eq!(normalize(-360.0), 0.0);
        assert_eq!(normalize(-725.5), 354.5);
    }

    #[test]
    fn normalize_is_idempotent() {
        for l in [-1000.0, -360.0, -0.5, 0.0, 14.0, 200.5, 359.9, 361.0, 9999.0] {
            let once = normalize(l);
            assert!((0.0..360.0).contains(&once), "out of range for {l}");
            assert_eq!(normalize(once), once, "not idempotent for {l}");
        }
    }

    // ── forward_arc ──────────────────────────────────────────────────────

    #[test]
    fn forward_arc_simple() {
        assert_eq!(forward_arc(10.0, 40.0), 30.0);
    }

    #[test]
    fn forward_arc_wraps_through_zero() {
        assert_eq!(forward_arc(350.0, 10.0), 20.0);
    }

    #[test]
    fn forward_arc_same_point_is_zero() {
        assert_eq!(forward_arc(123.4, 123.4), 0.0);
    }

    #[test]
    fn forward_arc_is_directed() {
        assert_eq!(forward_arc(40.0, 10.0), 330.0);
    }

    #[test]
    fn forward_arc_normalizes_inputs() {
        assert_eq!(forward_arc(-10.0, 370.0), 20.0);
    }

    // ── short_arc ────────────────────────────────────────────────────────

    #[test]
    fn short_arc_simple() {
        assert_eq!(short_arc(10.0, 40.0), 30.0);
        assert_eq!(short_arc(40.0, 10.0), 30.0);
    }

    #[test]
    fn short_arc_wraps() {
        assert_eq!(short_arc(350.0, 10.0), 20.0);
        assert_eq!(short_arc(10.0, 350.0), 20.0);
    }

    #[test]
    fn short_arc_opposition_is_180() {
        assert_eq!(short_arc(0.0, 180.0), 180.0);
        assert_eq!(short_arc(90.0, 270.0), 180.0);
    }

    #[test]
    fn short_arc_never_exceeds_180() {
        for a in [0.0, 45.0, 200.0, 359.0] {
            for b in [0.0, 100.0, 181.0, 355.0] {
                assert!(short_arc(a, b) <= 180.0);
            }
        }
    }
}
