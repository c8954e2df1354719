// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rubber-band damping for drags that move a surface where it cannot go.

use kurbo::Vec2;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `abs`, `copysign`

/// Default saturation distance of the friction curve, in points.
pub const DEFAULT_FRICTION_DISTANCE: f64 = 200.0;

/// Default slope of the friction curve at rest.
pub const DEFAULT_FRICTION_COEFFICIENT: f64 = 0.3;

/// Maps a raw drag distance to a damped, bounded offset.
///
/// The curve is odd (`f(-x) == -f(x)`), starts with slope `coefficient`, and
/// approaches `distance` asymptotically:
///
/// `f(x) = distance * (1 - 1 / (|x| * coefficient / distance + 1))`
///
/// A non-positive `distance` disables movement entirely and returns `0.0`.
#[must_use]
pub fn friction_curve(value: f64, distance: f64, coefficient: f64) -> f64 {
    if distance <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    let magnitude = value.abs();
    let damped = distance * (1.0 - 1.0 / (magnitude * coefficient / distance + 1.0));
    damped.copysign(value)
}

/// Configured friction curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrictionCurve {
    /// Offset the curve saturates at.
    pub distance: f64,
    /// Slope of the curve at zero.
    pub coefficient: f64,
}

impl Default for FrictionCurve {
    fn default() -> Self {
        Self {
            distance: DEFAULT_FRICTION_DISTANCE,
            coefficient: DEFAULT_FRICTION_COEFFICIENT,
        }
    }
}

impl FrictionCurve {
    /// Creates a curve saturating at `distance` with initial slope `coefficient`.
    #[must_use]
    pub const fn new(distance: f64, coefficient: f64) -> Self {
        Self {
            distance,
            coefficient,
        }
    }

    /// Damps a scalar drag distance.
    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        friction_curve(value, self.distance, self.coefficient)
    }

    /// Damps each component of a drag vector independently.
    #[must_use]
    pub fn apply_vec(&self, value: Vec2) -> Vec2 {
        Vec2::new(self.apply(value.x), self.apply(value.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_maps_to_zero() {
        assert_eq!(friction_curve(0.0, 200.0, 0.3), 0.0);
    }

    #[test]
    fn small_drags_follow_the_coefficient() {
        let f = friction_curve(1.0, 200.0, 0.3);
        assert!((f - 0.3).abs() < 1e-3, "slope near zero was {f}");
    }

    #[test]
    fn curve_is_monotonic_and_bounded() {
        let curve = FrictionCurve::default();
        let mut last = 0.0;
        for i in 1..200 {
            let v = curve.apply(f64::from(i) * 25.0);
            assert!(v > last, "curve must increase");
            assert!(v < curve.distance, "curve must stay below its distance");
            last = v;
        }
    }

    #[test]
    fn curve_is_odd() {
        let curve = FrictionCurve::new(120.0, 0.5);
        for x in [0.5, 3.0, 40.0, 900.0] {
            assert_eq!(curve.apply(-x), -curve.apply(x));
        }
    }

    #[test]
    fn degenerate_inputs_do_not_move() {
        assert_eq!(friction_curve(50.0, 0.0, 0.3), 0.0);
        assert_eq!(friction_curve(50.0, -10.0, 0.3), 0.0);
        assert_eq!(friction_curve(f64::NAN, 200.0, 0.3), 0.0);
    }

    #[test]
    fn vector_components_are_independent() {
        let curve = FrictionCurve::default();
        let v = curve.apply_vec(Vec2::new(-30.0, 60.0));
        assert_eq!(v.x, curve.apply(-30.0));
        assert_eq!(v.y, curve.apply(60.0));
    }
}
