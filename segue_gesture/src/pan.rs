// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan recognition: turn raw pointer positions into a stream of gesture samples.
//!
//! ## Usage
//!
//! 1) Call [`PanState::press`] on pointer down.
//! 2) On each move, call [`PanState::update`]. Nothing is reported until the
//!    pointer travels further than the slop; the first report has phase
//!    [`GesturePhase::Began`], later ones [`GesturePhase::Changed`].
//! 3) Call [`PanState::release`] on pointer up (reports [`GesturePhase::Ended`])
//!    or [`PanState::cancel`] when the platform steals the pointer
//!    (reports [`GesturePhase::Cancelled`]).
//!
//! Translation is measured from the press point and can be rebased mid-gesture
//! with [`PanState::set_translation`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use segue_gesture::{GesturePhase, PanState};
//!
//! let mut pan = PanState::new(8.0);
//! pan.press(Point::new(100.0, 100.0), 0.0);
//!
//! // Inside the slop: not a pan yet.
//! assert!(pan.update(Point::new(100.0, 104.0), 0.008).is_none());
//!
//! let began = pan.update(Point::new(100.0, 112.0), 0.016).unwrap();
//! assert_eq!(began.phase, GesturePhase::Began);
//! assert_eq!(began.sample.translation, Vec2::new(0.0, 12.0));
//!
//! let changed = pan.update(Point::new(100.0, 130.0), 0.024).unwrap();
//! assert_eq!(changed.phase, GesturePhase::Changed);
//! assert_eq!(changed.sample.delta, Vec2::new(0.0, 18.0));
//!
//! let ended = pan.release(Point::new(100.0, 140.0), 0.032).unwrap();
//! assert_eq!(ended.phase, GesturePhase::Ended);
//! assert!(ended.sample.velocity.y > 0.0);
//! assert!(!pan.is_pressed());
//! ```

use kurbo::{Point, Vec2};

use crate::velocity::VelocityTracker;

/// Movement (in points) a pointer must exceed before a press becomes a pan.
pub const TOUCH_SLOP: f64 = 8.0;

/// Lifecycle phase of a continuous gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// The gesture was recognized.
    Began,
    /// The pointer moved while the gesture is recognized.
    Changed,
    /// The pointer lifted normally.
    Ended,
    /// The platform interrupted the gesture.
    Cancelled,
    /// The gesture could not be recognized.
    Failed,
}

impl GesturePhase {
    /// Returns `true` for the phases after which no more samples arrive.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled | Self::Failed)
    }
}

/// One reading of a pan gesture.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GestureSample {
    /// Offset of the pointer from where the gesture is measured from.
    pub translation: Vec2,
    /// Movement since the previous sample.
    pub delta: Vec2,
    /// Estimated velocity in points per second.
    pub velocity: Vec2,
    /// Time of the reading in seconds.
    pub timestamp: f64,
}

impl GestureSample {
    /// Creates a sample at rest at `timestamp`.
    #[must_use]
    pub fn at(timestamp: f64) -> Self {
        Self {
            timestamp,
            ..Self::default()
        }
    }
}

/// A gesture sample together with its phase and pointer location.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanEvent {
    /// Phase of the gesture.
    pub phase: GesturePhase,
    /// Pointer location in container coordinates.
    pub location: Point,
    /// The reading.
    pub sample: GestureSample,
}

impl PanEvent {
    /// Creates an event.
    #[must_use]
    pub fn new(phase: GesturePhase, location: Point, sample: GestureSample) -> Self {
        Self {
            phase,
            location,
            sample,
        }
    }
}

/// Tracks one pointer from press to release and reports pan events.
#[derive(Clone, Debug, Default)]
pub struct PanState {
    slop: f64,
    press_pos: Option<Point>,
    origin: Option<Point>,
    last_pos: Option<Point>,
    recognized: bool,
    tracker: VelocityTracker,
}

impl PanState {
    /// Creates a recognizer that waits for `slop` points of travel.
    #[must_use]
    pub fn new(slop: f64) -> Self {
        Self {
            slop: slop.max(0.0),
            ..Self::default()
        }
    }

    /// Begins tracking a pointer pressed at `pos`.
    ///
    /// A press while another is tracked restarts tracking.
    pub fn press(&mut self, pos: Point, time: f64) {
        self.press_pos = Some(pos);
        self.origin = Some(pos);
        self.last_pos = Some(pos);
        self.recognized = false;
        self.tracker.reset();
        self.tracker.add_position(time, pos);
    }

    /// Feeds a pointer move.
    ///
    /// Returns `None` when no pointer is pressed or the pointer is still
    /// within the slop.
    pub fn update(&mut self, pos: Point, time: f64) -> Option<PanEvent> {
        let press = self.press_pos?;
        self.tracker.add_position(time, pos);
        if !self.recognized {
            if (pos - press).hypot() <= self.slop {
                return None;
            }
            self.recognized = true;
            let sample = self.sample(pos, time);
            return Some(PanEvent::new(GesturePhase::Began, pos, sample));
        }
        let sample = self.sample(pos, time);
        Some(PanEvent::new(GesturePhase::Changed, pos, sample))
    }

    /// Feeds a pointer release and stops tracking.
    ///
    /// Returns `None` if the press never became a pan.
    pub fn release(&mut self, pos: Point, time: f64) -> Option<PanEvent> {
        self.press_pos?;
        self.tracker.add_position(time, pos);
        let event = if self.recognized {
            Some(PanEvent::new(GesturePhase::Ended, pos, self.sample(pos, time)))
        } else {
            None
        };
        self.end();
        event
    }

    /// Interrupts the gesture and stops tracking.
    ///
    /// Returns `None` if the press never became a pan.
    pub fn cancel(&mut self, time: f64) -> Option<PanEvent> {
        let pos = self.last_pos?;
        let event = if self.recognized {
            let mut sample = self.sample(pos, time);
            sample.velocity = Vec2::ZERO;
            Some(PanEvent::new(GesturePhase::Cancelled, pos, sample))
        } else {
            None
        };
        self.end();
        event
    }

    /// Rebases the gesture so the current translation reads as `translation`.
    ///
    /// Has no effect when no pointer is pressed.
    pub fn set_translation(&mut self, translation: Vec2) {
        if let Some(last) = self.last_pos {
            self.origin = Some(last - translation);
        }
    }

    /// Current translation, if a pointer is pressed.
    #[must_use]
    pub fn translation(&self) -> Option<Vec2> {
        Some(self.last_pos? - self.origin?)
    }

    /// Where the pointer went down, if pressed.
    #[must_use]
    pub fn press_location(&self) -> Option<Point> {
        self.press_pos
    }

    /// Returns `true` while a pointer is pressed.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.press_pos.is_some()
    }

    /// Returns `true` once the press has travelled past the slop.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.recognized
    }

    fn sample(&mut self, pos: Point, time: f64) -> GestureSample {
        let origin = self.origin.unwrap_or(pos);
        let delta = self.last_pos.map_or(Vec2::ZERO, |last| pos - last);
        self.last_pos = Some(pos);
        GestureSample {
            translation: pos - origin,
            delta,
            velocity: self.tracker.velocity(),
            timestamp: time,
        }
    }

    fn end(&mut self) {
        self.press_pos = None;
        self.origin = None;
        self.last_pos = None;
        self.recognized = false;
        self.tracker.reset();
    }
}
