// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Impulse-based velocity estimation for pointer drags.
//!
//! The estimator treats each pair of consecutive samples as a small push on a
//! unit mass and accumulates the kinetic energy those pushes impart. The
//! release velocity is the velocity that energy corresponds to. Compared to a
//! plain finite difference of the last two samples this is robust to jittery
//! event timing while still reacting to a late flick.

use kurbo::{Point, Vec2};
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `abs`, `sqrt`, `signum`

/// Number of samples kept in the ring buffer.
const HISTORY_SIZE: usize = 20;

/// Only samples this recent (in seconds) contribute to the estimate.
pub const HORIZON: f64 = 0.100;

/// A gap between consecutive samples longer than this (in seconds) means the
/// pointer stopped; older samples are ignored.
pub const ASSUME_STOPPED: f64 = 0.040;

#[derive(Clone, Copy, Debug)]
struct Sample {
    time: f64,
    position: Point,
}

/// Tracks recent pointer positions and estimates their velocity.
///
/// Timestamps are in seconds and must not decrease; velocities are in points
/// per second.
///
/// ```
/// use kurbo::Point;
/// use segue_gesture::VelocityTracker;
///
/// let mut tracker = VelocityTracker::new();
/// for i in 0..4 {
///     let t = f64::from(i) * 0.010;
///     tracker.add_position(t, Point::new(0.0, f64::from(i) * 10.0));
/// }
/// // 10pt every 10ms is 1000pt/s downward.
/// let v = tracker.velocity();
/// assert!((v.y - 1000.0).abs() < 100.0);
/// assert_eq!(v.x, 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct VelocityTracker {
    samples: [Option<Sample>; HISTORY_SIZE],
    index: usize,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
        }
    }

    /// Records the pointer at `position` at time `time` (seconds).
    pub fn add_position(&mut self, time: f64, position: Point) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(Sample { time, position });
    }

    /// Estimates the current velocity in points per second.
    ///
    /// Returns [`Vec2::ZERO`] with fewer than two usable samples.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        let Some(newest) = self.samples[self.index] else {
            return Vec2::ZERO;
        };

        let mut xs = [0.0; HISTORY_SIZE];
        let mut ys = [0.0; HISTORY_SIZE];
        let mut times = [0.0; HISTORY_SIZE];
        let mut count = 0;

        let mut current = self.index;
        let mut previous = newest;
        while let Some(sample) = self.samples[current] {
            let age = newest.time - sample.time;
            let gap = (previous.time - sample.time).abs();
            previous = sample;
            if age > HORIZON || gap > ASSUME_STOPPED {
                break;
            }

            xs[count] = sample.position.x;
            ys[count] = sample.position.y;
            times[count] = -age;
            count += 1;
            if count >= HISTORY_SIZE {
                break;
            }
            current = if current == 0 { HISTORY_SIZE - 1 } else { current - 1 };
        }

        if count < 2 {
            return Vec2::ZERO;
        }
        Vec2::new(
            impulse_velocity(&xs[..count], &times[..count]),
            impulse_velocity(&ys[..count], &times[..count]),
        )
    }

    /// Like [`velocity`](Self::velocity), with each component clamped to
    /// `±max`.
    ///
    /// A non-positive or non-finite `max` yields [`Vec2::ZERO`].
    #[must_use]
    pub fn velocity_with_max(&self, max: f64) -> Vec2 {
        if !max.is_finite() || max <= 0.0 {
            return Vec2::ZERO;
        }
        let v = self.velocity();
        let clamp = |c: f64| if c.is_nan() { 0.0 } else { c.clamp(-max, max) };
        Vec2::new(clamp(v.x), clamp(v.y))
    }

    /// Forgets every sample.
    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }
}

/// Positions and times are ordered newest first; times are non-positive ages.
fn impulse_velocity(positions: &[f64], times: &[f64]) -> f64 {
    let start = positions.len() - 1;
    let mut work = 0.0;
    let mut next_time = times[start];
    for i in (1..=start).rev() {
        let current_time = next_time;
        next_time = times[i - 1];
        if current_time == next_time {
            continue;
        }
        let v_curr = (positions[i - 1] - positions[i]) / (next_time - current_time);
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == start {
            work *= 0.5;
        }
    }
    kinetic_energy_to_velocity(work)
}

/// `E = ½·m·v²` with unit mass.
fn kinetic_energy_to_velocity(energy: f64) -> f64 {
    energy.signum() * (2.0 * energy.abs()).sqrt()
}
