// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nested presentations.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

use segue_gesture::PanEvent;

use crate::controller::ContainerMetrics;
use crate::descriptor::{DescriptorError, TransitionDescriptor};
use crate::host::{PresentationHost, PresentationId, ViewId};
use crate::interactive::{InteractivePresentationController, PresentationPhase};
use crate::observer::Transaction;
use crate::policy::PresentationPolicy;

/// An engine whose policy is chosen at runtime.
pub type DynPresentation = InteractivePresentationController<Box<dyn PresentationPolicy>>;

/// Misuse of a [`PresentationStack`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackError {
    /// No presentation with that id is on the stack.
    UnknownPresentation,
    /// The presentation is already leaving.
    AlreadyDismissing,
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UnknownPresentation => "no such presentation on the stack",
            Self::AlreadyDismissing => "presentation is already being dismissed",
        })
    }
}

impl core::error::Error for StackError {}

/// Presentations stacked on top of each other, last in first out.
///
/// Only the topmost presentation receives gestures and backdrop taps.
/// Dismissing a presentation first removes every presentation above it.
/// Ids are handed out in increasing order and never reused.
#[derive(Debug, Default)]
pub struct PresentationStack {
    next_id: u64,
    /// Bottom to top.
    order: Vec<PresentationId>,
    entries: HashMap<PresentationId, DynPresentation>,
}

impl PresentationStack {
    /// An empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a presentation on top, without presenting it yet.
    ///
    /// A gesture tracked by the previous top is resolved as cancelled and
    /// the rest of it is ignored. Attach observers and a binding through
    /// [`get_mut`](Self::get_mut) before calling [`present`](Self::present).
    pub fn push(
        &mut self,
        host: &mut dyn PresentationHost,
        descriptor: TransitionDescriptor,
        policy: impl PresentationPolicy + 'static,
        metrics: ContainerMetrics,
    ) -> Result<PresentationId, DescriptorError> {
        let id = PresentationId(self.next_id);
        let policy: Box<dyn PresentationPolicy> = Box::new(policy);
        let engine = InteractivePresentationController::new(id, descriptor, policy, metrics)?;
        // The new top takes over pan routing; the old top never sees the end
        // of a gesture it is tracking.
        if let Some(previous) = self.top_mut() {
            previous.interrupt_gesture(host);
        }
        self.next_id += 1;
        self.order.push(id);
        self.entries.insert(id, engine);
        log::debug!("{id:?} pushed, depth {}", self.order.len());
        Ok(id)
    }

    /// Presents a pushed presentation.
    pub fn present(
        &mut self,
        host: &mut dyn PresentationHost,
        id: PresentationId,
        transaction: Transaction,
    ) -> Result<bool, StackError> {
        let engine = self
            .entries
            .get_mut(&id)
            .ok_or(StackError::UnknownPresentation)?;
        Ok(engine.present(host, transaction))
    }

    /// Dismisses `id`, after removing everything stacked above it at once.
    ///
    /// Returns `Ok(false)` when the presentation declines, for example
    /// because a drag is already resolving it.
    pub fn dismiss(
        &mut self,
        host: &mut dyn PresentationHost,
        id: PresentationId,
        transaction: Transaction,
    ) -> Result<bool, StackError> {
        let position = self
            .order
            .iter()
            .position(|p| *p == id)
            .ok_or(StackError::UnknownPresentation)?;
        let phase = self
            .entries
            .get(&id)
            .map(DynPresentation::phase)
            .ok_or(StackError::UnknownPresentation)?;
        if matches!(
            phase,
            PresentationPhase::Dismissing | PresentationPhase::Dismissed
        ) {
            return Err(StackError::AlreadyDismissing);
        }

        for above in self.order[position + 1..].iter().rev() {
            if let Some(engine) = self.entries.get_mut(above) {
                log::debug!("{above:?} dismissed with {id:?} underneath");
                engine.dismiss_immediately(host);
            }
        }
        self.prune();

        let engine = self
            .entries
            .get_mut(&id)
            .ok_or(StackError::UnknownPresentation)?;
        Ok(engine.dismiss(host, transaction))
    }

    /// The topmost presentation.
    #[must_use]
    pub fn top(&self) -> Option<PresentationId> {
        self.order.last().copied()
    }

    /// Ids from bottom to top.
    pub fn ids(&self) -> impl Iterator<Item = PresentationId> + '_ {
        self.order.iter().copied()
    }

    /// Number of presentations on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if nothing is stacked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The presentation with `id`.
    #[must_use]
    pub fn get(&self, id: PresentationId) -> Option<&DynPresentation> {
        self.entries.get(&id)
    }

    /// The presentation with `id`, mutably.
    pub fn get_mut(&mut self, id: PresentationId) -> Option<&mut DynPresentation> {
        self.entries.get_mut(&id)
    }

    /// Routes a pan to the topmost presentation.
    pub fn handle_pan(&mut self, host: &mut dyn PresentationHost, event: &PanEvent) {
        if let Some(engine) = self.top_mut() {
            engine.handle_pan(host, event);
        }
    }

    /// Routes a scroll view's simultaneous-recognition query to the top.
    pub fn gesture_should_recognize_simultaneously(&mut self, view: ViewId) -> bool {
        self.top_mut()
            .is_some_and(|engine| engine.gesture_should_recognize_simultaneously(view))
    }

    /// Routes a backdrop tap to the topmost presentation.
    pub fn handle_backdrop_tap(
        &mut self,
        host: &mut dyn PresentationHost,
        transaction: Transaction,
    ) -> bool {
        self.top_mut()
            .is_some_and(|engine| engine.handle_backdrop_tap(host, transaction))
    }

    /// Ticks every presentation, then drops the dismissed ones.
    pub fn advance(&mut self, host: &mut dyn PresentationHost, now: f64) {
        for id in &self.order {
            if let Some(engine) = self.entries.get_mut(id) {
                engine.advance(host, now);
            }
        }
        self.prune();
    }

    /// Forwards a keyboard change to every presentation.
    pub fn keyboard_will_change_frame(&mut self, host: &mut dyn PresentationHost, height: f64) {
        for id in &self.order {
            if let Some(engine) = self.entries.get_mut(id) {
                engine.keyboard_will_change_frame(host, height);
            }
        }
    }

    /// Forwards the start of a container size change to every presentation.
    pub fn view_will_transition_to_size(
        &mut self,
        host: &mut dyn PresentationHost,
        metrics: ContainerMetrics,
    ) {
        for id in &self.order {
            if let Some(engine) = self.entries.get_mut(id) {
                engine.view_will_transition_to_size(host, metrics);
            }
        }
    }

    /// Forwards the end of a container size change to every presentation.
    pub fn size_transition_did_end(&mut self, host: &mut dyn PresentationHost) {
        for id in &self.order {
            if let Some(engine) = self.entries.get_mut(id) {
                engine.size_transition_did_end(host);
            }
        }
    }

    fn top_mut(&mut self) -> Option<&mut DynPresentation> {
        let id = self.top()?;
        self.entries.get_mut(&id)
    }

    fn prune(&mut self) {
        let entries = &mut self.entries;
        self.order.retain(|id| {
            let gone = entries
                .get(id)
                .is_none_or(|engine| engine.phase() == PresentationPhase::Dismissed);
            if gone {
                entries.remove(id);
                log::debug!("{id:?} removed from the stack");
            }
            !gone
        });
    }
}
