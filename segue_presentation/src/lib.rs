// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segue Presentation: headless interactive presentation controllers.
//!
//! An application presents a secondary surface (a sheet, a card, a toast, a
//! slide-over, or a zoom out of a source view) and lets the user drag it
//! away. This crate owns the lifecycle and the gesture state machine. It
//! never touches real views: it computes transforms, corner radii, opacity,
//! and backdrop values, and hands them to a [`PresentationHost`] that the
//! toolkit implements.
//!
//! - [`InteractivePresentationController`] is the engine. It turns
//!   [`PanEvent`](segue_gesture::PanEvent)s into a percent-driven transition
//!   that can be scrubbed, cancelled, and resumed. It coordinates with nested
//!   scroll views, the keyboard, haptics, and host vetoes.
//! - A [`PresentationPolicy`] supplies the per-style geometry:
//!   [`SlidePolicy`], [`CardPolicy`], [`ToastPolicy`],
//!   [`MatchedGeometryPolicy`], and [`SheetPolicy`].
//! - A [`TransitionDescriptor`] configures edges, corner radius, shadow,
//!   backdrop, haptics, animation, and [`DismissThresholds`].
//! - [`PresentationStack`] nests presentations; only the topmost one
//!   receives gestures.
//! - [`DismissObservers`] and [`PresentationBinding`] report the lifecycle
//!   back to the front end.
//!
//! The engine holds no clock. Hosts call
//! [`advance`](InteractivePresentationController::advance) from their frame
//! callback while anything animates.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use segue_gesture::{GesturePhase, GestureSample, PanEvent};
//! use segue_presentation::{
//!     CardPolicy, ContainerMetrics, InteractivePresentationController, PresentationHost,
//!     PresentationId, PresentationPhase, SurfaceFrame, Transaction, TransitionDescriptor,
//! };
//!
//! #[derive(Default)]
//! struct Host {
//!     surface: Option<SurfaceFrame>,
//! }
//!
//! impl PresentationHost for Host {
//!     fn apply_surface(&mut self, _: PresentationId, surface: &SurfaceFrame) {
//!         self.surface = Some(*surface);
//!     }
//! }
//!
//! let metrics = ContainerMetrics::new(Rect::new(0.0, 0.0, 390.0, 844.0));
//! let mut card = InteractivePresentationController::new(
//!     PresentationId(1),
//!     TransitionDescriptor::default(),
//!     CardPolicy::default(),
//!     metrics,
//! )
//! .unwrap();
//! let mut host = Host::default();
//!
//! card.present(&mut host, Transaction::immediate());
//! assert_eq!(card.phase(), PresentationPhase::Presented);
//!
//! // Drag the card most of the way down and let go.
//! let pan = |phase, y: f64, vy: f64| {
//!     let sample = GestureSample {
//!         translation: Vec2::new(0.0, y),
//!         delta: Vec2::new(0.0, 10.0),
//!         velocity: Vec2::new(0.0, vy),
//!         timestamp: 0.0,
//!     };
//!     PanEvent::new(phase, Point::new(200.0, 400.0 + y), sample)
//! };
//! card.handle_pan(&mut host, &pan(GesturePhase::Began, 10.0, 0.0));
//! card.handle_pan(&mut host, &pan(GesturePhase::Changed, 600.0, 0.0));
//! card.handle_pan(&mut host, &pan(GesturePhase::Ended, 600.0, 300.0));
//!
//! let mut now = 0.0;
//! while card.is_settling() {
//!     card.advance(&mut host, now);
//!     now += 1.0 / 60.0;
//! }
//! assert_eq!(card.phase(), PresentationPhase::Dismissed);
//! assert_eq!(host.surface.unwrap().opacity, 1.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod animator;
mod backdrop;
mod config;
mod controller;
mod descriptor;
mod haptics;
mod host;
mod interactive;
mod keyboard;
mod observer;
mod policy;
mod scroll;
mod stack;

pub use animator::{ChromeFrame, SurfaceFrame, TransitionAnimator, lerp_affine, visibility};
pub use backdrop::{
    BackdropCapabilities, BackdropStyle, DEFAULT_DIMMING_COLOR, ResolvedBackdrop, ShadowOptions,
};
pub use config::{
    DEFAULT_ACTIVATION_FRACTION, DEFAULT_PRESENTING_TOUCH_SLOP, DEFAULT_SETTLE_DURATION,
    DEFAULT_VELOCITY_THRESHOLD, DEFAULT_ZOOM_VELOCITY_THRESHOLD, DismissThresholds,
};
pub use controller::{ContainerMetrics, PresentationController};
pub use descriptor::{DescriptorError, TransitionDescriptor, TransitionDescriptorBuilder};
pub use haptics::HapticStyle;
pub use host::{PresentationHost, PresentationId, ViewId};
pub use interactive::{GestureState, InteractivePresentationController, PresentationPhase};
pub use keyboard::{Resignation, find_first_responder, keyboard_offset, resign_first_responder};
pub use observer::{
    DismissObservers, ObserverToken, PresentationBinding, PresentationEvent, Transaction,
};
pub use policy::{
    CardPolicy, DEFAULT_CARD_MARGIN, DEFAULT_MINIMUM_SCALE_FACTOR,
    DEFAULT_ZOOM_ACTIVATION_DISTANCE, DETENT_PROJECTION_TIME, DragGeometry, LARGE_DETENT_TOP_GAP,
    LayoutContext, MatchedGeometryPolicy, PresentationPolicy, Release, SheetDetent, SheetPolicy,
    SlidePolicy, ToastPolicy, default_drag_transform, default_should_finish, offscreen_transform,
};
pub use scroll::ScrollViewState;
pub use stack::{DynPresentation, PresentationStack, StackError};
