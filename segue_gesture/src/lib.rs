// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segue Gesture: pan-gesture state for interactive transitions.
//!
//! This crate turns raw pointer positions into the sample stream an
//! interactive transition consumes:
//!
//! - [`pan`]: press/move/release tracking with a touch slop, producing
//!   [`PanEvent`]s carrying translation, per-event delta and velocity.
//! - [`velocity`]: an impulse-based velocity estimator over a short history.
//!
//! Hosts whose platform already runs a pan recognizer can skip [`PanState`]
//! and build [`GestureSample`]s directly; the presentation engine only reads
//! samples and never owns the recognizer.
//!
//! ## Design Philosophy
//!
//! - **Headless**: no event loop, no clock. Callers pass positions and
//!   timestamps (seconds) and receive plain values.
//! - **Small**: just enough state to compute deltas, translation, and velocity.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use segue_gesture::{GesturePhase, PanState};
//!
//! let mut pan = PanState::new(0.0);
//! pan.press(Point::new(0.0, 0.0), 0.000);
//! let mut last = None;
//! for i in 1..=5 {
//!     let t = f64::from(i) * 0.010;
//!     last = pan.update(Point::new(0.0, f64::from(i) * 15.0), t);
//! }
//! let event = last.unwrap();
//! assert_eq!(event.phase, GesturePhase::Changed);
//! assert_eq!(event.sample.translation.y, 75.0);
//! // 15pt every 10ms.
//! assert!((event.sample.velocity.y - 1500.0).abs() < 1.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod pan;
pub mod velocity;

pub use pan::{GesturePhase, GestureSample, PanEvent, PanState, TOUCH_SLOP};
pub use velocity::VelocityTracker;
