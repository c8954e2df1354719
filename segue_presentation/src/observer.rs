// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle notifications, transactions, and the presented-state binding.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::Cell;
use core::fmt;

use smallvec::SmallVec;

use segue_transition::TimingCurve;

use crate::host::PresentationId;

/// A point in a presentation's lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PresentationEvent {
    /// The surface is about to animate in.
    PresentationWillBegin,
    /// The presentation ended; `completed` is `false` if it was reversed.
    PresentationDidEnd {
        /// Whether the surface ended up presented.
        completed: bool,
    },
    /// A dismissal started, from a drag, a tap, or a call to `dismiss`.
    DismissalWillBegin,
    /// The dismissal ended; `completed` is `false` if the surface stayed.
    DismissalDidEnd {
        /// Whether the surface ended up dismissed.
        completed: bool,
    },
    /// The host vetoed a dismissal.
    DidAttemptToDismiss,
}

/// Handle for removing an observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverToken(u64);

type Callback = Box<dyn FnMut(PresentationId, PresentationEvent)>;

/// Callbacks notified of every lifecycle event of one presentation.
///
/// Observers are called in registration order. Every dismissal path of the
/// engine goes through here, including taps and programmatic dismissals.
#[derive(Default)]
pub struct DismissObservers {
    next: u64,
    callbacks: SmallVec<[(ObserverToken, Callback); 2]>,
}

impl fmt::Debug for DismissObservers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DismissObservers")
            .field("len", &self.callbacks.len())
            .finish_non_exhaustive()
    }
}

impl DismissObservers {
    /// Registers `callback` and returns a token that removes it.
    pub fn push(
        &mut self,
        callback: impl FnMut(PresentationId, PresentationEvent) + 'static,
    ) -> ObserverToken {
        let token = ObserverToken(self.next);
        self.next += 1;
        self.callbacks.push((token, Box::new(callback)));
        token
    }

    /// Removes the observer registered under `token`.
    ///
    /// Returns `false` if it was already removed.
    pub fn remove(&mut self, token: ObserverToken) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(t, _)| *t != token);
        self.callbacks.len() != before
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Returns `true` if no observers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Calls every observer with `event`.
    pub fn notify(&mut self, presentation: PresentationId, event: PresentationEvent) {
        log::debug!("{presentation:?}: {event:?}");
        for (_, callback) in &mut self.callbacks {
            callback(presentation, event);
        }
    }
}

/// How a programmatic presentation change animates.
///
/// Passed explicitly to `present` and `dismiss`. Unset fields fall back to
/// the presentation's descriptor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transaction {
    /// Whether to animate at all.
    pub animated: bool,
    /// Duration override, in seconds.
    pub duration: Option<f64>,
    /// Curve override.
    pub curve: Option<TimingCurve>,
}

impl Default for Transaction {
    fn default() -> Self {
        Self {
            animated: true,
            duration: None,
            curve: None,
        }
    }
}

impl Transaction {
    /// A change that happens at once.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            animated: false,
            ..Self::default()
        }
    }

    /// Overrides the duration.
    #[must_use]
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Overrides the curve.
    #[must_use]
    pub fn with_curve(mut self, curve: TimingCurve) -> Self {
        self.curve = Some(curve);
        self
    }
}

/// A shared `is_presented` flag between a front end and the engine.
///
/// Clones observe the same state. The revision increases on every change,
/// so a front end can tell whether it missed an update.
#[derive(Clone, Debug, Default)]
pub struct PresentationBinding {
    state: Rc<Cell<(bool, u64)>>,
}

impl PresentationBinding {
    /// A binding starting at `is_presented`.
    #[must_use]
    pub fn new(is_presented: bool) -> Self {
        Self {
            state: Rc::new(Cell::new((is_presented, 0))),
        }
    }

    /// Whether the surface is, or is becoming, presented.
    #[must_use]
    pub fn is_presented(&self) -> bool {
        self.state.get().0
    }

    /// How many times the flag has changed.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.state.get().1
    }

    /// Sets the flag, bumping the revision if it changed.
    pub fn set(&self, is_presented: bool) {
        let (current, revision) = self.state.get();
        if current != is_presented {
            self.state.set((is_presented, revision + 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[test]
    fn observers_run_in_order_and_can_be_removed() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut observers = DismissObservers::default();
        let a = {
            let log = log.clone();
            observers.push(move |_, e| log.borrow_mut().push(("a", e)))
        };
        {
            let log = log.clone();
            observers.push(move |_, e| log.borrow_mut().push(("b", e)));
        }
        observers.notify(PresentationId(1), PresentationEvent::DismissalWillBegin);
        assert!(observers.remove(a));
        assert!(!observers.remove(a));
        observers.notify(
            PresentationId(1),
            PresentationEvent::DismissalDidEnd { completed: true },
        );
        assert_eq!(
            *log.borrow(),
            [
                ("a", PresentationEvent::DismissalWillBegin),
                ("b", PresentationEvent::DismissalWillBegin),
                ("b", PresentationEvent::DismissalDidEnd { completed: true }),
            ]
        );
        assert_eq!(observers.len(), 1);
    }

    #[test]
    fn binding_counts_changes_only() {
        let binding = PresentationBinding::new(false);
        let front_end = binding.clone();
        binding.set(true);
        binding.set(true);
        assert!(front_end.is_presented());
        assert_eq!(front_end.revision(), 1);
        binding.set(false);
        assert_eq!(front_end.revision(), 2);
    }

    #[test]
    fn immediate_transaction_does_not_animate() {
        let t = Transaction::immediate().with_duration(0.2);
        assert!(!t.animated);
        assert_eq!(t.duration, Some(0.2));
        assert!(Transaction::default().animated);
    }
}
