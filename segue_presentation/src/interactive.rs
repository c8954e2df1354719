// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interactive engine: pan gestures in, percent-driven transitions out.
//!
//! A gesture moves through [`GestureState`]:
//!
//! - `Idle`: nothing is tracked.
//! - `Probing`: a pan is live but drives no transition. Drags away from every
//!   dismissal edge rubber-band the surface; drags a nested scroll view can
//!   still consume are absorbed into the translation offset.
//! - `Driving`: a [`PercentDrivenTransition`] follows the drag.
//! - `Resolving`: the pan ended and its transition is terminated exactly once.
//!
//! Terminated transitions move to a separate settle slot and are animated by
//! [`InteractivePresentationController::advance`] until their outcome is
//! delivered. While a transition settles, new pans are ignored and
//! programmatic dismissals are dropped, so the first resolution wins.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `abs`

use kurbo::{Affine, Rect, Vec2};

use segue_geometry::{Edge, FrictionCurve, LayoutDirection};
use segue_gesture::{GesturePhase, GestureSample, PanEvent};
use segue_transition::{
    PercentDrivenTransition, TimingCurve, TransitionKind, TransitionOutcome, TransitionState,
};

use crate::animator::{ChromeFrame, SurfaceFrame, TransitionAnimator, visibility};
use crate::backdrop::BackdropCapabilities;
use crate::controller::{ContainerMetrics, PresentationController};
use crate::descriptor::{DescriptorError, TransitionDescriptor};
use crate::haptics::HapticsState;
use crate::host::{PresentationHost, PresentationId, ViewId};
use crate::keyboard::resign_first_responder;
use crate::observer::{DismissObservers, PresentationBinding, PresentationEvent, Transaction};
use crate::policy::{DragGeometry, PresentationPolicy, Release};

/// Where a pan gesture is in its handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum GestureState {
    /// No gesture is tracked.
    #[default]
    Idle,
    /// A gesture is live but drives no transition.
    Probing,
    /// A gesture drives a transition.
    Driving,
    /// The gesture ended and its transition is being terminated.
    Resolving,
}

/// Where a presentation is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PresentationPhase {
    /// Not presented yet.
    #[default]
    Idle,
    /// Animating in, or being dragged while animating in.
    Presenting,
    /// At rest on screen.
    Presented,
    /// Animating out, or being dragged toward dismissal.
    Dismissing,
    /// Gone. The presentation may be presented again.
    Dismissed,
}

#[derive(Clone, Debug)]
struct ActiveTransition {
    pdt: PercentDrivenTransition,
    animator: TransitionAnimator,
}

#[derive(Clone, Copy, Debug)]
struct SpringBack {
    from: Vec2,
    start: Option<f64>,
    duration: f64,
}

/// Offset of a surface dragged away from every dismissal edge.
#[derive(Clone, Copy, Debug, Default)]
struct RubberBand {
    base: Vec2,
    offset: Vec2,
    spring_back: Option<SpringBack>,
}

impl RubberBand {
    /// Freezes a running spring-back so a new drag continues from it.
    fn hold(&mut self) {
        self.spring_back = None;
        self.base = self.offset;
    }

    fn release(&mut self, duration: f64) {
        self.base = Vec2::ZERO;
        if self.offset != Vec2::ZERO {
            self.spring_back = Some(SpringBack {
                from: self.offset,
                start: None,
                duration,
            });
        }
    }

    /// Steps the spring-back. Returns `true` if the offset moved.
    fn advance(&mut self, now: f64) -> bool {
        let Some(spring) = self.spring_back.as_mut() else {
            return false;
        };
        let start = *spring.start.get_or_insert(now);
        let fraction = if spring.duration > 0.0 {
            (now - start) / spring.duration
        } else {
            1.0
        };
        if fraction >= 1.0 {
            *self = Self::default();
        } else {
            let p = TimingCurve::CRITICALLY_DAMPED.progress(fraction, spring.duration);
            self.offset = spring.from * (1.0 - p);
        }
        true
    }
}

/// A presentation whose surface can be dragged away.
///
/// The engine is generic over a [`PresentationPolicy`] that supplies the
/// style-specific geometry. It owns at most one percent-driven transition at
/// a time and talks to the toolkit only through a [`PresentationHost`]
/// passed into each call.
///
/// Hosts feed it [`PanEvent`]s from the pan recognizer on the presented
/// surface, tick it with [`advance`](Self::advance), and forward keyboard and
/// container-size changes.
#[derive(Debug)]
pub struct InteractivePresentationController<P> {
    controller: PresentationController,
    policy: P,
    phase: PresentationPhase,
    gesture: GestureState,
    transition: Option<ActiveTransition>,
    settling: Option<ActiveTransition>,
    active_edge: Option<Edge>,
    tracking_scroll_view: Option<ViewId>,
    translation_offset: Vec2,
    last_translation: Vec2,
    ignoring_gesture: bool,
    dismissal_blocked: bool,
    haptics: HapticsState,
    rubber_band: RubberBand,
    policy_transform: Affine,
    visibility: f64,
    observers: DismissObservers,
    binding: Option<PresentationBinding>,
}

impl<P: PresentationPolicy> InteractivePresentationController<P> {
    /// Creates an engine for presentation `id`, not yet presented.
    ///
    /// Fails if the descriptor or the policy is misconfigured.
    pub fn new(
        id: PresentationId,
        descriptor: TransitionDescriptor,
        policy: P,
        metrics: ContainerMetrics,
    ) -> Result<Self, DescriptorError> {
        descriptor.validate()?;
        policy.validate()?;
        Ok(Self {
            controller: PresentationController::new(id, descriptor, metrics),
            policy,
            phase: PresentationPhase::Idle,
            gesture: GestureState::Idle,
            transition: None,
            settling: None,
            active_edge: None,
            tracking_scroll_view: None,
            translation_offset: Vec2::ZERO,
            last_translation: Vec2::ZERO,
            ignoring_gesture: false,
            dismissal_blocked: false,
            haptics: HapticsState::default(),
            rubber_band: RubberBand::default(),
            policy_transform: Affine::IDENTITY,
            visibility: 0.0,
            observers: DismissObservers::default(),
            binding: None,
        })
    }

    /// The presentation this engine drives.
    #[must_use]
    pub fn id(&self) -> PresentationId {
        self.controller.id()
    }

    /// Lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> PresentationPhase {
        self.phase
    }

    /// Gesture handling state.
    #[must_use]
    pub fn gesture_state(&self) -> GestureState {
        self.gesture
    }

    /// The style policy.
    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// The style policy, for changing its configuration.
    ///
    /// Call [`relayout`](Self::relayout) afterwards to push the new geometry.
    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }

    /// The non-interactive half: descriptor, metrics, keyboard state.
    #[must_use]
    pub fn controller(&self) -> &PresentationController {
        &self.controller
    }

    /// The descriptor in effect.
    #[must_use]
    pub fn descriptor(&self) -> &TransitionDescriptor {
        self.controller.descriptor()
    }

    /// Replaces the descriptor.
    ///
    /// A drag in progress keeps the edge it started with.
    pub fn update_descriptor(&mut self, descriptor: TransitionDescriptor) -> Result<(), DescriptorError> {
        descriptor.validate()?;
        self.controller.set_descriptor(descriptor);
        Ok(())
    }

    /// Declares the backdrop effects the host can draw.
    pub fn set_backdrop_capabilities(&mut self, capabilities: BackdropCapabilities) {
        self.controller.set_capabilities(capabilities);
    }

    /// Lifecycle observers.
    pub fn observers_mut(&mut self) -> &mut DismissObservers {
        &mut self.observers
    }

    /// Attaches the `is_presented` binding of a front end.
    pub fn bind(&mut self, binding: PresentationBinding) {
        self.binding = Some(binding);
    }

    /// The attached binding, if any.
    #[must_use]
    pub fn binding(&self) -> Option<&PresentationBinding> {
        self.binding.as_ref()
    }

    /// State of the transition in flight, driven or settling.
    #[must_use]
    pub fn transition_state(&self) -> Option<TransitionState> {
        self.current().map(|active| active.pdt.state())
    }

    /// Kind of the transition in flight.
    #[must_use]
    pub fn transition_kind(&self) -> Option<TransitionKind> {
        self.current().map(|active| active.pdt.kind())
    }

    /// The transition in flight, driven or settling.
    ///
    /// Once a drag is released this carries the settle tuning: the spring
    /// curve and the completion speed scaling its duration.
    #[must_use]
    pub fn transition(&self) -> Option<&PercentDrivenTransition> {
        self.current().map(|active| &active.pdt)
    }

    /// Completion fraction of the transition in flight.
    #[must_use]
    pub fn percent_complete(&self) -> Option<f64> {
        self.current().map(|active| active.pdt.percent_complete())
    }

    /// Returns `true` while a terminated transition animates to its end.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.settling.is_some()
    }

    /// The edge the current drag dismisses toward.
    #[must_use]
    pub fn active_edge(&self) -> Option<Edge> {
        self.active_edge
    }

    /// The nested scroll view tracked by the current gesture.
    #[must_use]
    pub fn tracking_scroll_view(&self) -> Option<ViewId> {
        self.tracking_scroll_view
    }

    /// Translation consumed by a nested scroll view during this gesture.
    #[must_use]
    pub fn translation_offset(&self) -> Vec2 {
        self.translation_offset
    }

    /// Transform from the policy, before the keyboard lift.
    #[must_use]
    pub fn policy_transform(&self) -> Affine {
        self.policy_transform
    }

    /// The surface as it should currently appear.
    #[must_use]
    pub fn surface_frame(&self) -> SurfaceFrame {
        self.controller
            .surface_frame(&self.policy, self.frame(), self.policy_transform, self.visibility)
    }

    /// The backdrop and shadow as they should currently appear.
    #[must_use]
    pub fn chrome_frame(&self) -> ChromeFrame {
        self.controller.chrome_frame(&self.policy, self.visibility)
    }

    /// Presents the surface.
    ///
    /// Returns `false` if it is already on screen.
    pub fn present(&mut self, host: &mut dyn PresentationHost, transaction: Transaction) -> bool {
        if !matches!(
            self.phase,
            PresentationPhase::Idle | PresentationPhase::Dismissed
        ) {
            log::warn!("{:?}: present while {:?}", self.id(), self.phase);
            return false;
        }
        self.phase = PresentationPhase::Presenting;
        if let Some(binding) = &self.binding {
            binding.set(true);
        }
        self.notify(PresentationEvent::PresentationWillBegin);
        if !transaction.animated {
            self.deliver(host, TransitionOutcome {
                kind: TransitionKind::Presentation,
                completed: true,
            });
            return true;
        }
        let dismissed = self.dismissed_transform();
        let pdt = PercentDrivenTransition::animated(
            TransitionKind::Presentation,
            self.duration_for(&transaction),
            self.curve_for(&transaction),
        );
        self.transition = Some(ActiveTransition {
            pdt,
            animator: TransitionAnimator::presentation(dismissed),
        });
        self.policy_transform = dismissed;
        self.visibility = 0.0;
        self.apply(host);
        true
    }

    /// Dismisses the surface programmatically.
    ///
    /// A presentation still animating in is reversed. Returns `false` when
    /// there is nothing to dismiss, or when a drag or a settle is already
    /// resolving the presentation.
    pub fn dismiss(&mut self, host: &mut dyn PresentationHost, transaction: Transaction) -> bool {
        if self.gesture == GestureState::Driving || self.settling.is_some() {
            log::debug!("{:?}: already resolving, dismiss ignored", self.id());
            return false;
        }
        match self.phase {
            PresentationPhase::Presented => {
                if self.gesture != GestureState::Idle {
                    self.ignoring_gesture = true;
                }
                self.phase = PresentationPhase::Dismissing;
                self.notify(PresentationEvent::DismissalWillBegin);
                if !transaction.animated {
                    self.deliver(host, TransitionOutcome {
                        kind: TransitionKind::Dismissal,
                        completed: true,
                    });
                    return true;
                }
                let pdt = PercentDrivenTransition::animated(
                    TransitionKind::Dismissal,
                    self.duration_for(&transaction),
                    self.curve_for(&transaction),
                );
                let animator =
                    TransitionAnimator::settle(self.policy_transform, self.dismissed_transform(), 0.0, 1.0);
                self.rubber_band = RubberBand::default();
                self.transition = Some(ActiveTransition { pdt, animator });
                true
            }
            PresentationPhase::Presenting => {
                let Some(mut active) = self.transition.take() else {
                    return false;
                };
                if let Err(err) = active.pdt.pause() {
                    log::warn!("{:?}: pausing presentation: {err}", self.id());
                }
                let p = active.pdt.percent_complete();
                active.pdt.set_duration(self.duration_for(&transaction));
                active.pdt.set_timing_curve(self.curve_for(&transaction));
                active.pdt.set_completion_speed(p);
                if let Err(err) = active.pdt.cancel() {
                    log::warn!("{:?}: reversing presentation: {err}", self.id());
                }
                active.animator =
                    TransitionAnimator::settle(self.policy_transform, self.dismissed_transform(), p, 0.0);
                log::debug!("{:?}: presentation reversed at {p:.3}", self.id());
                if transaction.animated {
                    self.settling = Some(active);
                } else if let Some(outcome) = active.pdt.complete_now() {
                    self.deliver(host, outcome);
                }
                true
            }
            PresentationPhase::Idle | PresentationPhase::Dismissing | PresentationPhase::Dismissed => {
                false
            }
        }
    }

    /// Handles a tap on the backdrop.
    ///
    /// Dismisses when the descriptor allows it, nothing else is in flight, and
    /// the host does not veto. A veto notifies
    /// [`PresentationEvent::DidAttemptToDismiss`].
    pub fn handle_backdrop_tap(
        &mut self,
        host: &mut dyn PresentationHost,
        transaction: Transaction,
    ) -> bool {
        if !self.descriptor().dismiss_on_backdrop_tap
            || self.phase != PresentationPhase::Presented
            || self.gesture != GestureState::Idle
            || self.current().is_some()
        {
            return false;
        }
        if !host.presentation_controller_should_dismiss(self.id()) {
            log::debug!("{:?}: host vetoed backdrop tap", self.id());
            self.notify(PresentationEvent::DidAttemptToDismiss);
            return false;
        }
        self.dismiss(host, transaction)
    }

    /// Asks whether the surface's pan may run alongside the pan of `view`.
    ///
    /// Returns `true` and tracks `view` as the nested scroll view of the
    /// current gesture, until the gesture ends.
    pub fn gesture_should_recognize_simultaneously(&mut self, view: ViewId) -> bool {
        if !self.handles_gestures()
            || matches!(self.gesture, GestureState::Driving | GestureState::Resolving)
        {
            return false;
        }
        log::trace!("{:?}: tracking scroll view {view:?}", self.id());
        self.tracking_scroll_view = Some(view);
        true
    }

    /// Feeds one event of the surface's pan gesture.
    pub fn handle_pan(&mut self, host: &mut dyn PresentationHost, event: &PanEvent) {
        match event.phase {
            GesturePhase::Began => self.pan_began(host, event),
            GesturePhase::Changed => self.pan_changed(host, event),
            GesturePhase::Ended | GesturePhase::Cancelled | GesturePhase::Failed => {
                self.pan_ended(host, event);
            }
        }
    }

    /// Runs automatic animations to host time `now`, in seconds.
    pub fn advance(&mut self, host: &mut dyn PresentationHost, now: f64) {
        if self.rubber_band.advance(now)
            && self.transition.is_none()
            && self.phase == PresentationPhase::Presented
        {
            self.policy_transform = Affine::translate(self.rubber_band.offset);
            self.apply(host);
        }

        let running = self
            .transition
            .as_ref()
            .is_some_and(|active| active.pdt.state() == TransitionState::Running);
        let automatic = if running { self.transition.take() } else { None };
        if let Some(mut active) = automatic {
            match active.pdt.advance(now) {
                Some(outcome) => self.deliver(host, outcome),
                None => {
                    self.show(host, &active);
                    self.transition = Some(active);
                }
            }
        }

        if let Some(mut active) = self.settling.take() {
            match active.pdt.advance(now) {
                Some(outcome) => self.deliver(host, outcome),
                None => {
                    self.show(host, &active);
                    self.settling = Some(active);
                }
            }
        }
    }

    /// Records a new keyboard height and lifts the surface above it.
    pub fn keyboard_will_change_frame(&mut self, host: &mut dyn PresentationHost, height: f64) {
        self.controller.set_keyboard_height(height);
        log::debug!("{:?}: keyboard height {height}", self.id());
        self.relayout(host);
    }

    /// Starts a container size change.
    ///
    /// A drag in progress is resolved as cancelled, and gestures are ignored
    /// until [`size_transition_did_end`](Self::size_transition_did_end).
    pub fn view_will_transition_to_size(
        &mut self,
        host: &mut dyn PresentationHost,
        metrics: ContainerMetrics,
    ) {
        self.controller.set_transitioning_size(true);
        self.controller.set_metrics(metrics);
        self.interrupt_gesture(host);
        self.relayout(host);
    }

    /// Ends a container size change.
    pub fn size_transition_did_end(&mut self, host: &mut dyn PresentationHost) {
        self.controller.set_transitioning_size(false);
        self.relayout(host);
    }

    /// Pushes the current surface and chrome to the host.
    pub fn relayout(&self, host: &mut dyn PresentationHost) {
        if matches!(
            self.phase,
            PresentationPhase::Presenting | PresentationPhase::Presented | PresentationPhase::Dismissing
        ) {
            self.apply(host);
        }
    }

    /// Resolves a live gesture as cancelled and ignores the rest of it.
    pub(crate) fn interrupt_gesture(&mut self, host: &mut dyn PresentationHost) {
        match self.gesture {
            GestureState::Driving => {
                let sample = GestureSample {
                    translation: self.last_translation,
                    ..GestureSample::default()
                };
                self.resolve(host, GesturePhase::Cancelled, &sample);
            }
            GestureState::Probing => {
                let duration = self.descriptor().thresholds.settle_duration;
                self.rubber_band.release(duration);
            }
            GestureState::Idle | GestureState::Resolving => return,
        }
        log::debug!("{:?}: gesture interrupted", self.id());
        self.pan_gesture_did_end(host);
        self.ignoring_gesture = true;
    }

    /// Removes the surface at once, whatever is in flight.
    ///
    /// Used when a presentation underneath is dismissed.
    pub(crate) fn dismiss_immediately(&mut self, host: &mut dyn PresentationHost) {
        self.interrupt_gesture(host);
        let settled = self
            .settling
            .take()
            .and_then(|mut active| active.pdt.complete_now());
        if let Some(outcome) = settled {
            self.deliver(host, outcome);
        }
        if let Some(mut active) = self.transition.take() {
            if let Err(err) = active.pdt.pause() {
                log::warn!("{:?}: {err}", self.id());
            }
            let result = if active.pdt.is_presenting() {
                active.pdt.cancel()
            } else {
                active.pdt.finish()
            };
            if let Err(err) = result {
                log::warn!("{:?}: {err}", self.id());
            }
            if let Some(outcome) = active.pdt.complete_now() {
                self.deliver(host, outcome);
            }
        }
        if self.phase == PresentationPhase::Presented {
            self.dismiss(host, Transaction::immediate());
        }
    }

    fn pan_began(&mut self, host: &mut dyn PresentationHost, event: &PanEvent) {
        if self.gesture == GestureState::Driving {
            log::warn!("{:?}: pan began while driving; cancelling the old drag", self.id());
            self.resolve(host, GesturePhase::Cancelled, &event.sample);
        }
        self.reset_gesture(host);

        let reason = if !self.handles_gestures() {
            Some("not interactive")
        } else if self.controller.is_transitioning_size() {
            Some("container is resizing")
        } else if self.settling.is_some() {
            Some("a transition is settling")
        } else if !matches!(
            self.phase,
            PresentationPhase::Presenting | PresentationPhase::Presented
        ) {
            Some("not on screen")
        } else if self.phase == PresentationPhase::Presenting && !self.touches_surface(event) {
            Some("touch is outside the presenting surface")
        } else {
            None
        };
        if let Some(reason) = reason {
            log::debug!("{:?}: ignoring pan, {reason}", self.id());
            self.ignoring_gesture = true;
            return;
        }

        log::debug!("{:?}: pan began", self.id());
        self.rubber_band.hold();
        self.gesture = GestureState::Probing;
        self.pan_changed(host, event);
    }

    fn pan_changed(&mut self, host: &mut dyn PresentationHost, event: &PanEvent) {
        if self.ignoring_gesture {
            return;
        }
        let sample = event.sample;
        self.last_translation = sample.translation;
        match self.gesture {
            GestureState::Probing => self.probe(host, &sample),
            GestureState::Driving => self.drive(host, &sample),
            GestureState::Idle | GestureState::Resolving => {}
        }
    }

    fn pan_ended(&mut self, host: &mut dyn PresentationHost, event: &PanEvent) {
        if !self.ignoring_gesture {
            match self.gesture {
                GestureState::Driving => self.resolve(host, event.phase, &event.sample),
                GestureState::Probing => {
                    let duration = self.descriptor().thresholds.settle_duration;
                    self.rubber_band.release(duration);
                }
                GestureState::Idle | GestureState::Resolving => {}
            }
        }
        self.pan_gesture_did_end(host);
    }

    fn probe(&mut self, host: &mut dyn PresentationHost, sample: &GestureSample) {
        let layout = self.layout_direction();
        let t = sample.translation - self.translation_offset;
        let heading = self.descriptor().edges.heading_edge(t, sample.delta, layout);

        if let Some(view) = self.tracking_scroll_view {
            match host.scroll_view(view) {
                Some(scroll) => {
                    if !heading.is_some_and(|edge| scroll.is_at_edge(edge, layout)) {
                        // The scroll view consumes this movement.
                        self.translation_offset = sample.translation;
                        return;
                    }
                }
                None => {
                    log::warn!("{:?}: tracked scroll view {view:?} is gone", self.id());
                    self.tracking_scroll_view = None;
                }
            }
        }

        if let Some(edge) = heading {
            if !self.dismissal_blocked && self.begin_dismissal(host, edge, sample) {
                self.drive(host, sample);
            }
            return;
        }

        if self.phase == PresentationPhase::Presented && self.transition.is_none() {
            self.rubber_band.offset = self.rubber_band.base + FrictionCurve::default().apply_vec(t);
            self.policy_transform = Affine::translate(self.rubber_band.offset);
            self.apply(host);
        }
    }

    /// Creates or takes over the transition a drag toward `edge` drives.
    ///
    /// Returns `false` if the keyboard's first responder refuses to resign.
    fn begin_dismissal(
        &mut self,
        host: &mut dyn PresentationHost,
        edge: Edge,
        sample: &GestureSample,
    ) -> bool {
        let id = self.id();
        let root = if self.controller.keyboard_height() > 0.0 {
            host.presented_root(id)
        } else {
            None
        };
        if let Some(root) = root {
            let resignation = resign_first_responder(host, root);
            if !resignation.allows_dismissal() {
                log::debug!("{id:?}: {resignation:?}, dismissal blocked for this gesture");
                self.dismissal_blocked = true;
                return false;
            }
        }

        let layout = self.layout_direction();
        let extent = edge.axis().extent(self.frame().size());
        if let Some(active) = self.transition.as_mut() {
            if let Err(err) = active.pdt.pause() {
                log::warn!("{id:?}: taking over transition: {err}");
            }
            let p = active.pdt.percent_complete();
            let progress = if active.pdt.is_presenting() { 1.0 - p } else { p };
            // Continue from where the surface is instead of jumping to the finger.
            self.translation_offset =
                sample.translation - edge.direction(layout) * (progress * extent);
            log::debug!("{id:?}: drag took over {:?} at {p:.3}", active.pdt.kind());
        } else {
            if self.phase != PresentationPhase::Presented {
                return false;
            }
            let mut pdt = PercentDrivenTransition::interactive(TransitionKind::Dismissal);
            pdt.set_duration(self.descriptor().thresholds.settle_duration);
            let animator = TransitionAnimator::dismissal(self.dismissed_transform());
            self.transition = Some(ActiveTransition { pdt, animator });
            self.phase = PresentationPhase::Dismissing;
            self.notify(PresentationEvent::DismissalWillBegin);
        }
        self.rubber_band = RubberBand::default();
        self.active_edge = Some(edge);
        self.gesture = GestureState::Driving;
        true
    }

    fn drive(&mut self, host: &mut dyn PresentationHost, sample: &GestureSample) {
        let layout = self.layout_direction();
        let frame = self.frame();
        let t = sample.translation - self.translation_offset;
        let Some((max_edge, percentage)) =
            self.descriptor().edges.max_progress(t, frame.size(), layout)
        else {
            return;
        };
        if percentage > 0.0 {
            self.active_edge = Some(max_edge);
        }
        let edge = self.active_edge.unwrap_or(max_edge);
        let distance = edge.directional(t, layout);

        if distance <= 0.0 && edge.directional(sample.delta, layout) < 0.0 {
            self.abandon_transition(host);
            return;
        }

        if let Some(view) = self.tracking_scroll_view {
            match host.scroll_view(view) {
                Some(scroll) => host.set_content_offset(view, scroll.offset_at_edge(edge, layout)),
                None => {
                    log::warn!("{:?}: tracked scroll view {view:?} is gone", self.id());
                    self.tracking_scroll_view = None;
                }
            }
        }

        if let Some(active) = self.transition.as_mut() {
            let value = if active.pdt.is_presenting() {
                1.0 - percentage
            } else {
                percentage
            };
            if let Err(err) = active.pdt.update(value) {
                log::warn!("driving {:?}: {err}", active.pdt.kind());
            }
        }

        let descriptor = *self.descriptor();
        let activated = self.policy.should_finish(
            &Release {
                kind: TransitionKind::Dismissal,
                percent: percentage.clamp(0.0, 1.0),
                velocity: 0.0,
                distance: distance.max(0.0),
            },
            &descriptor.thresholds,
        );
        self.haptics.track(host, descriptor.haptics, activated);

        let ctx = self.controller.layout_context();
        self.policy_transform = self.policy.drag_transform(
            &ctx,
            &DragGeometry {
                translation: t,
                edge,
                progress: percentage,
                frame,
            },
        );
        self.visibility = (1.0 - percentage).clamp(0.0, 1.0);
        self.apply(host);
    }

    /// Returns a driven transition to rest at once, when the drag crosses
    /// back over its starting point.
    fn abandon_transition(&mut self, host: &mut dyn PresentationHost) {
        let Some(mut active) = self.transition.take() else {
            return;
        };
        let result = if active.pdt.is_presenting() {
            active.pdt.finish()
        } else {
            active.pdt.cancel()
        };
        if let Err(err) = result {
            log::warn!("{:?}: abandoning transition: {err}", self.id());
        }
        log::debug!("{:?}: drag crossed its start, back to probing", self.id());
        self.gesture = GestureState::Probing;
        self.active_edge = None;
        if let Some(outcome) = active.pdt.complete_now() {
            self.deliver(host, outcome);
        }
    }

    fn resolve(&mut self, host: &mut dyn PresentationHost, phase: GesturePhase, sample: &GestureSample) {
        self.gesture = GestureState::Resolving;
        let Some(mut active) = self.transition.take() else {
            return;
        };
        let id = self.id();
        let layout = self.layout_direction();
        let thresholds = self.descriptor().thresholds;
        let edge = self.active_edge.unwrap_or(Edge::Bottom);

        let kind = active.pdt.kind();
        let presenting = active.pdt.is_presenting();
        let p = active.pdt.percent_complete();
        let toward_dismissal = edge.directional(sample.velocity, layout);
        let velocity = if presenting {
            -toward_dismissal
        } else {
            toward_dismissal
        };
        let distance = edge
            .directional(sample.translation - self.translation_offset, layout)
            .max(0.0);

        let mut finish = if phase == GesturePhase::Ended {
            self.policy.should_finish(
                &Release {
                    kind,
                    percent: p,
                    velocity,
                    distance,
                },
                &thresholds,
            )
        } else {
            // Interrupted drags return to where the transition was headed at rest.
            presenting
        };
        if finish != presenting && !host.presentation_controller_should_dismiss(id) {
            log::debug!("{id:?}: host vetoed the dismissal");
            finish = presenting;
            self.notify(PresentationEvent::DidAttemptToDismiss);
        }
        let dismisses = finish != presenting;

        let progress = if presenting { 1.0 - p } else { p };
        let dragged = (progress * edge.axis().extent(self.frame().size())).abs();
        let toward_target = if dismisses {
            toward_dismissal
        } else {
            -toward_dismissal
        };
        let initial_velocity = if dragged > 1e-6 {
            toward_target / dragged
        } else {
            0.0
        };
        active.pdt.set_timing_curve(TimingCurve::spring(1.0, initial_velocity));
        active.pdt.set_duration(thresholds.settle_duration);
        let speed = if finish && presenting {
            1.0 - p
        } else if !finish && !presenting && velocity.abs() <= thresholds.velocity_threshold {
            p
        } else {
            1.0
        };
        active.pdt.set_completion_speed(speed);

        let result = if finish {
            active.pdt.finish()
        } else {
            active.pdt.cancel()
        };
        if let Err(err) = result {
            log::warn!("{id:?}: resolving drag: {err}");
        }

        let target = if dismisses {
            self.dismissed_transform()
        } else {
            Affine::IDENTITY
        };
        let to = if finish { 1.0 } else { 0.0 };
        active.animator = TransitionAnimator::settle(self.policy_transform, target, p, to);
        log::debug!(
            "{id:?}: {kind:?} released at {p:.3}, {velocity:.0}pt/s, {}",
            if finish { "finishing" } else { "cancelling" }
        );
        self.settling = Some(active);
    }

    /// Clears per-gesture state at the end of a pan.
    fn pan_gesture_did_end(&mut self, host: &mut dyn PresentationHost) {
        self.reset_gesture(host);
        self.tracking_scroll_view = None;
    }

    fn reset_gesture(&mut self, host: &mut dyn PresentationHost) {
        self.haptics.release(host);
        self.gesture = GestureState::Idle;
        self.active_edge = None;
        self.translation_offset = Vec2::ZERO;
        self.last_translation = Vec2::ZERO;
        self.ignoring_gesture = false;
        self.dismissal_blocked = false;
    }

    fn deliver(&mut self, host: &mut dyn PresentationHost, outcome: TransitionOutcome) {
        let completed = outcome.completed;
        let (on_screen, event) = match outcome.kind {
            TransitionKind::Presentation => {
                (completed, PresentationEvent::PresentationDidEnd { completed })
            }
            TransitionKind::Dismissal => (!completed, PresentationEvent::DismissalDidEnd { completed }),
        };
        self.rubber_band = RubberBand::default();
        if on_screen {
            self.phase = PresentationPhase::Presented;
            self.policy_transform = Affine::IDENTITY;
            self.visibility = 1.0;
        } else {
            self.phase = PresentationPhase::Dismissed;
            self.policy_transform = self.dismissed_transform();
            self.visibility = 0.0;
        }
        self.apply(host);
        if let (Some(binding), false) = (&self.binding, on_screen) {
            binding.set(false);
        }
        self.notify(event);
    }

    fn show(&mut self, host: &mut dyn PresentationHost, active: &ActiveTransition) {
        let percent = active.pdt.percent_complete();
        self.policy_transform = active.animator.transform_at(percent);
        self.visibility = visibility(active.pdt.kind(), percent);
        self.apply(host);
    }

    fn apply(&self, host: &mut dyn PresentationHost) {
        let id = self.id();
        host.apply_surface(id, &self.surface_frame());
        host.apply_chrome(id, &self.chrome_frame());
    }

    fn notify(&mut self, event: PresentationEvent) {
        self.observers.notify(self.controller.id(), event);
    }

    fn current(&self) -> Option<&ActiveTransition> {
        self.transition.as_ref().or(self.settling.as_ref())
    }

    fn handles_gestures(&self) -> bool {
        self.descriptor().is_interactive && self.policy.drives_interactive_dismissal()
    }

    fn touches_surface(&self, event: &PanEvent) -> bool {
        let slop = self.descriptor().thresholds.presenting_touch_slop;
        let touch_down = event.location - event.sample.translation;
        self.surface_frame()
            .presentation_frame()
            .inflate(slop, slop)
            .contains(touch_down)
    }

    fn frame(&self) -> Rect {
        self.controller.presented_frame(&self.policy)
    }

    fn dismissed_transform(&self) -> Affine {
        let ctx = self.controller.layout_context();
        let frame = self.policy.frame_of_presented_view(&ctx);
        self.policy.dismissed_transform(&ctx, frame)
    }

    fn layout_direction(&self) -> LayoutDirection {
        self.controller.metrics().layout_direction
    }

    fn duration_for(&self, transaction: &Transaction) -> f64 {
        transaction
            .duration
            .unwrap_or(self.descriptor().thresholds.settle_duration)
    }

    fn curve_for(&self, transaction: &Transaction) -> TimingCurve {
        transaction.curve.unwrap_or(self.descriptor().animation)
    }
}
