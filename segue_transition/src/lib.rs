// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segue Transition: percent-driven transitions.
//!
//! A [`PercentDrivenTransition`] represents one presentation or dismissal in
//! flight. While a gesture is down the transition is paused and scrubbed with
//! [`update`](PercentDrivenTransition::update). When the gesture ends it is
//! resolved exactly once, with [`finish`](PercentDrivenTransition::finish) or
//! [`cancel`](PercentDrivenTransition::cancel), and then settles on its own
//! using a [`TimingCurve`] as the host clock advances.
//!
//! The crate holds no clock and schedules nothing. Hosts call
//! [`advance`](PercentDrivenTransition::advance) from their frame callback and
//! react to the [`TransitionOutcome`] it returns once.
//!
//! ## Example
//!
//! ```rust
//! use segue_transition::{PercentDrivenTransition, TimingCurve, TransitionKind};
//!
//! let mut dismissal = PercentDrivenTransition::interactive(TransitionKind::Dismissal);
//!
//! // The gesture scrubs the transition.
//! for p in [0.1, 0.25, 0.4] {
//!     dismissal.update(p).unwrap();
//! }
//!
//! // Released short of the threshold: spring back, keeping the finger's momentum.
//! dismissal.set_timing_curve(TimingCurve::spring(1.0, 2.0));
//! dismissal.set_completion_speed(dismissal.percent_complete());
//! dismissal.cancel().unwrap();
//!
//! let mut now = 0.0;
//! let outcome = loop {
//!     if let Some(outcome) = dismissal.advance(now) {
//!         break outcome;
//!     }
//!     now += 1.0 / 60.0;
//! };
//! assert!(!outcome.completed);
//! assert_eq!(dismissal.percent_complete(), 0.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod percent_driven;
mod timing;

pub use percent_driven::{
    DEFAULT_DURATION, MIN_ANIMATION_DURATION, PercentDrivenTransition, TransitionError,
    TransitionKind, TransitionOutcome, TransitionState,
};
pub use timing::TimingCurve;
