// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timing curves mapping elapsed time to animation progress.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `abs`, `exp`, `sin`, `cos`, `sqrt`

use core::f64::consts::TAU;

/// Shape of an automatic animation.
///
/// Every curve maps the elapsed fraction of a duration, `0.0..=1.0`, to a
/// progress fraction that starts at `0.0` and ends exactly at `1.0`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum TimingCurve {
    /// Constant speed.
    Linear,
    /// Starts slow, `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,
    /// Ends slow, `cubic-bezier(0, 0, 0.58, 1)`.
    EaseOut,
    /// Starts and ends slow, `cubic-bezier(0.42, 0, 0.58, 1)`.
    #[default]
    EaseInOut,
    /// A CSS-style cubic Bézier with control points `(x1, y1)` and `(x2, y2)`.
    ///
    /// `x1` and `x2` are clamped to `[0, 1]` so the curve stays a function of time.
    CubicBezier {
        /// First control point, x.
        x1: f64,
        /// First control point, y.
        y1: f64,
        /// Second control point, x.
        x2: f64,
        /// Second control point, y.
        y2: f64,
    },
    /// A damped spring that settles within the animation's duration.
    Spring {
        /// `1.0` is critically damped; lower values overshoot.
        damping_ratio: f64,
        /// Initial speed, as a multiple of the animated distance per second.
        ///
        /// A value of `2.0` means the animation starts out moving twice the
        /// remaining distance per second.
        initial_velocity: f64,
    },
}

impl TimingCurve {
    /// A critically damped spring without initial momentum.
    pub const CRITICALLY_DAMPED: Self = Self::Spring {
        damping_ratio: 1.0,
        initial_velocity: 0.0,
    };

    /// Creates a spring curve.
    #[must_use]
    pub fn spring(damping_ratio: f64, initial_velocity: f64) -> Self {
        Self::Spring {
            damping_ratio,
            initial_velocity,
        }
    }

    /// Returns the progress after `fraction` of an animation lasting
    /// `duration` seconds.
    ///
    /// `fraction` is clamped to `[0, 1]`. Springs use `duration` to convert
    /// their initial velocity; other curves ignore it. Under-damped springs
    /// may return values above `1.0` before they settle.
    #[must_use]
    pub fn progress(&self, fraction: f64, duration: f64) -> f64 {
        if fraction.is_nan() || fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }
        match *self {
            Self::Linear => fraction,
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Self::CubicBezier { x1, y1, x2, y2 } => {
                cubic_bezier(x1.clamp(0.0, 1.0), y1, x2.clamp(0.0, 1.0), y2, fraction)
            }
            Self::Spring {
                damping_ratio,
                initial_velocity,
            } => {
                let v = if initial_velocity.is_finite() && duration.is_finite() {
                    initial_velocity * duration.max(0.0)
                } else {
                    0.0
                };
                1.0 - spring_displacement(damping_ratio.max(0.0), v, fraction)
            }
        }
    }
}

/// Remaining displacement of a unit spring at normalized time `t`.
///
/// The spring starts displaced by `1.0` and moves toward `0.0` with initial
/// speed `velocity` (distance per unit of normalized time). The natural
/// frequency is one full period per duration.
fn spring_displacement(damping_ratio: f64, velocity: f64, t: f64) -> f64 {
    let omega = TAU;
    let zeta = damping_ratio;
    if (zeta - 1.0).abs() < 1e-6 {
        (1.0 + (omega - velocity) * t) * (-omega * t).exp()
    } else if zeta < 1.0 {
        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        let b = (zeta * omega - velocity) / omega_d;
        (-zeta * omega * t).exp() * ((omega_d * t).cos() + b * (omega_d * t).sin())
    } else {
        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -omega * (zeta - root);
        let r2 = -omega * (zeta + root);
        let c2 = (-velocity - r1) / (r2 - r1);
        let c1 = 1.0 - c2;
        c1 * (r1 * t).exp() + c2 * (r2 * t).exp()
    }
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, fraction: f64) -> f64 {
    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f64, b: f64, c: f64, t: f64) -> f64 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f64, b: f64, c: f64, t: f64) -> f64 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson for the parameter whose x is `fraction`.
    let mut t = fraction;
    let mut converged = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-7 {
            converged = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-7 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !converged {
        let mut lo = 0.0;
        let mut hi = 1.0;
        t = fraction;
        for _ in 0..32 {
            let delta = sample_curve(ax, bx, cx, t) - fraction;
            if delta.abs() < 1e-7 {
                break;
            }
            if delta > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
    }

    sample_curve(ay, by, cy, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [TimingCurve; 7] = [
        TimingCurve::Linear,
        TimingCurve::EaseIn,
        TimingCurve::EaseOut,
        TimingCurve::EaseInOut,
        TimingCurve::CubicBezier {
            x1: 0.4,
            y1: 0.0,
            x2: 0.2,
            y2: 1.0,
        },
        TimingCurve::CRITICALLY_DAMPED,
        TimingCurve::Spring {
            damping_ratio: 1.4,
            initial_velocity: 3.0,
        },
    ];

    #[test]
    fn every_curve_hits_its_endpoints() {
        for curve in CURVES {
            assert_eq!(curve.progress(0.0, 0.35), 0.0, "{curve:?}");
            assert_eq!(curve.progress(1.0, 0.35), 1.0, "{curve:?}");
            assert_eq!(curve.progress(-2.0, 0.35), 0.0, "{curve:?}");
            assert_eq!(curve.progress(3.0, 0.35), 1.0, "{curve:?}");
        }
    }

    #[test]
    fn eased_curves_are_monotonic() {
        for curve in CURVES {
            let mut last = 0.0;
            for i in 1..=100 {
                let p = curve.progress(f64::from(i) / 100.0, 0.35);
                assert!(p + 1e-9 >= last, "{curve:?} decreased at step {i}");
                last = p;
            }
        }
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let curve = TimingCurve::EaseInOut;
        let mid = curve.progress(0.5, 1.0);
        assert!((mid - 0.5).abs() < 1e-4, "midpoint was {mid}");
        let a = curve.progress(0.2, 1.0);
        let b = curve.progress(0.8, 1.0);
        assert!((a + b - 1.0).abs() < 1e-4);
    }

    #[test]
    fn ease_in_lags_and_ease_out_leads() {
        assert!(TimingCurve::EaseIn.progress(0.3, 1.0) < 0.3);
        assert!(TimingCurve::EaseOut.progress(0.3, 1.0) > 0.3);
    }

    #[test]
    fn spring_initial_velocity_adds_momentum() {
        let still = TimingCurve::spring(1.0, 0.0).progress(0.1, 0.35);
        let pushed = TimingCurve::spring(1.0, 6.0).progress(0.1, 0.35);
        assert!(pushed > still, "{pushed} <= {still}");
    }

    #[test]
    fn critically_damped_spring_nearly_settles_before_the_end() {
        let p = TimingCurve::CRITICALLY_DAMPED.progress(0.99, 0.35);
        assert!(p > 0.98, "progress was {p}");
        assert!(p <= 1.0);
    }

    #[test]
    fn under_damped_spring_overshoots() {
        let curve = TimingCurve::spring(0.3, 0.0);
        let peak = (1..100)
            .map(|i| curve.progress(f64::from(i) / 100.0, 1.0))
            .fold(0.0, f64::max);
        assert!(peak > 1.0, "peak was {peak}");
    }

    #[test]
    fn non_finite_velocity_is_ignored() {
        let a = TimingCurve::spring(1.0, f64::NAN).progress(0.5, 0.35);
        let b = TimingCurve::spring(1.0, 0.0).progress(0.5, 0.35);
        assert_eq!(a, b);
    }
}
