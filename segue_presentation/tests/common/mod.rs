// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the engine's integration tests.

#![allow(
    missing_docs,
    reason = "Integration-test helper module; not part of the public API."
)]
#![allow(
    dead_code,
    reason = "Each test binary uses a different subset of the helpers."
)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use kurbo::{Affine, Point, Rect, Vec2};
use segue_gesture::{GesturePhase, GestureSample, PanEvent};
use segue_presentation::{
    ChromeFrame, ContainerMetrics, HapticStyle, InteractivePresentationController,
    PresentationEvent, PresentationHost, PresentationId, PresentationPolicy, ScrollViewState,
    SurfaceFrame, Transaction, TransitionDescriptor, ViewId,
};

/// A 300×400 container: 120pt down is 30% of the way out.
pub(crate) const CONTAINER: Rect = Rect::new(0.0, 0.0, 300.0, 400.0);

pub(crate) fn metrics() -> ContainerMetrics {
    ContainerMetrics::new(CONTAINER)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Haptic {
    Prepare(HapticStyle),
    Impact(HapticStyle),
    Release,
}

/// A host that records everything the engine asks of it.
#[derive(Debug, Default)]
pub(crate) struct RecordingHost {
    pub(crate) surfaces: Vec<(PresentationId, SurfaceFrame)>,
    pub(crate) chrome: Vec<(PresentationId, ChromeFrame)>,
    pub(crate) veto: bool,
    pub(crate) dismiss_queries: usize,
    pub(crate) haptics: Vec<Haptic>,
    pub(crate) root: Option<ViewId>,
    pub(crate) children: HashMap<ViewId, Vec<ViewId>>,
    pub(crate) first_responder: Option<ViewId>,
    pub(crate) refuse_resign: bool,
    pub(crate) scroll_views: HashMap<ViewId, ScrollViewState>,
    pub(crate) pinned_offsets: Vec<(ViewId, Vec2)>,
}

impl RecordingHost {
    pub(crate) fn last_surface(&self) -> SurfaceFrame {
        self.surfaces.last().expect("no surface was applied").1
    }

    pub(crate) fn last_surface_of(&self, id: PresentationId) -> Option<SurfaceFrame> {
        self.surfaces
            .iter()
            .rev()
            .find(|(p, _)| *p == id)
            .map(|(_, s)| *s)
    }

    pub(crate) fn last_transform(&self) -> Affine {
        self.last_surface().transform
    }
}

impl PresentationHost for RecordingHost {
    fn apply_surface(&mut self, presentation: PresentationId, surface: &SurfaceFrame) {
        self.surfaces.push((presentation, *surface));
    }

    fn apply_chrome(&mut self, presentation: PresentationId, chrome: &ChromeFrame) {
        self.chrome.push((presentation, *chrome));
    }

    fn presentation_controller_should_dismiss(&mut self, _: PresentationId) -> bool {
        self.dismiss_queries += 1;
        !self.veto
    }

    fn presented_root(&self, _: PresentationId) -> Option<ViewId> {
        self.root
    }

    fn children(&self, view: ViewId, out: &mut Vec<ViewId>) {
        if let Some(children) = self.children.get(&view) {
            out.extend(children.iter().copied());
        }
    }

    fn is_first_responder(&self, view: ViewId) -> bool {
        self.first_responder == Some(view)
    }

    fn resign_first_responder(&mut self, view: ViewId) -> bool {
        if self.refuse_resign {
            return false;
        }
        if self.first_responder == Some(view) {
            self.first_responder = None;
        }
        true
    }

    fn scroll_view(&self, view: ViewId) -> Option<ScrollViewState> {
        self.scroll_views.get(&view).copied()
    }

    fn set_content_offset(&mut self, view: ViewId, offset: Vec2) {
        if let Some(scroll) = self.scroll_views.get_mut(&view) {
            scroll.content_offset = offset;
        }
        self.pinned_offsets.push((view, offset));
    }

    fn prepare_haptics(&mut self, style: HapticStyle) {
        self.haptics.push(Haptic::Prepare(style));
    }

    fn impact_occurred(&mut self, style: HapticStyle) {
        self.haptics.push(Haptic::Impact(style));
    }

    fn release_haptics(&mut self) {
        self.haptics.push(Haptic::Release);
    }
}

/// A pan event whose pointer started at the middle of the container.
pub(crate) fn pan(phase: GesturePhase, translation: Vec2, delta: Vec2, velocity: Vec2) -> PanEvent {
    let sample = GestureSample {
        translation,
        delta,
        velocity,
        timestamp: 0.0,
    };
    PanEvent::new(phase, Point::new(150.0, 200.0) + translation, sample)
}

/// Drives a vertical drag through `ys`, without releasing it.
///
/// The first value begins the gesture; each delta is the step from the
/// previous value.
pub(crate) fn drag_y<P: PresentationPolicy>(
    engine: &mut InteractivePresentationController<P>,
    host: &mut RecordingHost,
    ys: &[f64],
) {
    let mut last = 0.0;
    for (i, y) in ys.iter().copied().enumerate() {
        let phase = if i == 0 {
            GesturePhase::Began
        } else {
            GesturePhase::Changed
        };
        let event = pan(phase, Vec2::new(0.0, y), Vec2::new(0.0, y - last), Vec2::ZERO);
        engine.handle_pan(host, &event);
        last = y;
    }
}

/// Ends a vertical drag at `y` moving at `vy` points per second.
pub(crate) fn release_y<P: PresentationPolicy>(
    engine: &mut InteractivePresentationController<P>,
    host: &mut RecordingHost,
    y: f64,
    vy: f64,
) {
    let event = pan(
        GesturePhase::Ended,
        Vec2::new(0.0, y),
        Vec2::ZERO,
        Vec2::new(0.0, vy),
    );
    engine.handle_pan(host, &event);
}

/// Ticks the engine at 60Hz, from `start`, until nothing animates.
///
/// Returns the time of the last tick.
pub(crate) fn run_until_idle<P: PresentationPolicy>(
    engine: &mut InteractivePresentationController<P>,
    host: &mut RecordingHost,
    start: f64,
) -> f64 {
    let mut now = start;
    for _ in 0..600 {
        engine.advance(host, now);
        if engine.transition_state().is_none() {
            return now;
        }
        now += 1.0 / 60.0;
    }
    panic!("engine never settled");
}

/// Records every lifecycle event of `engine`.
pub(crate) fn record_events<P: PresentationPolicy>(
    engine: &mut InteractivePresentationController<P>,
) -> Rc<RefCell<Vec<PresentationEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    engine
        .observers_mut()
        .push(move |_, event| sink.borrow_mut().push(event));
    events
}

/// A presented engine for `policy`.
pub(crate) fn presented<P: PresentationPolicy>(
    descriptor: TransitionDescriptor,
    policy: P,
    host: &mut RecordingHost,
) -> InteractivePresentationController<P> {
    let mut engine =
        InteractivePresentationController::new(PresentationId(1), descriptor, policy, metrics())
            .expect("valid configuration");
    assert!(engine.present(host, Transaction::immediate()));
    engine
}
