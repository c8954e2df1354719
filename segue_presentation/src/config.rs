// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tuned constants that decide when a drag dismisses a surface.

use crate::descriptor::DescriptorError;

/// Fraction of the surface's extent past which a released drag dismisses.
pub const DEFAULT_ACTIVATION_FRACTION: f64 = 0.5;

/// Release speed (points per second) that dismisses regardless of distance.
pub const DEFAULT_VELOCITY_THRESHOLD: f64 = 800.0;

/// Release speed (points per second) that decides a matched-geometry zoom
/// regardless of distance, in either direction.
pub const DEFAULT_ZOOM_VELOCITY_THRESHOLD: f64 = 1000.0;

/// How far outside a still-presenting surface (in points) a touch may land
/// and still grab it.
pub const DEFAULT_PRESENTING_TOUCH_SLOP: f64 = 8.0;

/// Duration of a full-distance settle animation, in seconds.
pub const DEFAULT_SETTLE_DURATION: f64 = segue_transition::DEFAULT_DURATION;

/// Thresholds for resolving an interactive dismissal.
///
/// The defaults are empirically tuned values; they are kept configurable
/// rather than derived.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DismissThresholds {
    /// Progress at or beyond which a release finishes the transition.
    pub activation_fraction: f64,
    /// Velocity toward completion at or beyond which any progress finishes.
    pub velocity_threshold: f64,
    /// Velocity override for matched-geometry zooms.
    pub zoom_velocity_threshold: f64,
    /// Outset of the presentation-layer frame accepted while presenting.
    pub presenting_touch_slop: f64,
    /// Length of a full-distance settle, in seconds.
    pub settle_duration: f64,
}

impl Default for DismissThresholds {
    fn default() -> Self {
        Self {
            activation_fraction: DEFAULT_ACTIVATION_FRACTION,
            velocity_threshold: DEFAULT_VELOCITY_THRESHOLD,
            zoom_velocity_threshold: DEFAULT_ZOOM_VELOCITY_THRESHOLD,
            presenting_touch_slop: DEFAULT_PRESENTING_TOUCH_SLOP,
            settle_duration: DEFAULT_SETTLE_DURATION,
        }
    }
}

impl DismissThresholds {
    /// Checks that every value is finite and in range.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        let fraction_ok =
            self.activation_fraction > 0.0 && self.activation_fraction <= 1.0;
        let positive = |v: f64| v.is_finite() && v > 0.0;
        let slop_ok = self.presenting_touch_slop.is_finite() && self.presenting_touch_slop >= 0.0;
        if fraction_ok
            && positive(self.velocity_threshold)
            && positive(self.zoom_velocity_threshold)
            && positive(self.settle_duration)
            && slop_ok
        {
            Ok(())
        } else {
            Err(DescriptorError::InvalidThreshold)
        }
    }
}
