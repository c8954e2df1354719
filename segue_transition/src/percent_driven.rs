// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single in-flight presentation or dismissal that can be scrubbed,
//! resumed, and resolved.

use core::fmt;

use segue_geometry::lerp;

use crate::timing::TimingCurve;

/// Default length of an automatic transition, in seconds.
pub const DEFAULT_DURATION: f64 = 0.35;

/// Shortest automatic animation, in seconds (one frame at 60 Hz).
pub const MIN_ANIMATION_DURATION: f64 = 1.0 / 60.0;

/// Which direction a transition moves a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// Bringing a surface on screen.
    Presentation,
    /// Taking a surface off screen.
    Dismissal,
}

/// Where a [`PercentDrivenTransition`] is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionState {
    /// Animating forward on its own toward completion.
    Running,
    /// Paused; progress follows [`PercentDrivenTransition::update`].
    Interactive,
    /// Terminated; animating toward its final value.
    Settling,
    /// Done. The outcome has been reported.
    Completed,
}

/// Reported exactly once when a transition ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransitionOutcome {
    /// The transition that ended.
    pub kind: TransitionKind,
    /// `true` if it reached its end, `false` if it was cancelled back to its start.
    pub completed: bool,
}

/// Misuse of a [`PercentDrivenTransition`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionError {
    /// `finish`, `cancel`, `pause` or `update` after `finish` or `cancel`.
    AlreadyTerminated,
    /// `update` while the transition is animating on its own.
    NotInteractive,
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyTerminated => f.write_str("transition was already finished or cancelled"),
            Self::NotInteractive => f.write_str("transition is not paused for interactive updates"),
        }
    }
}

impl core::error::Error for TransitionError {}

#[derive(Clone, Copy, Debug)]
struct Animation {
    from: f64,
    to: f64,
    duration: f64,
    curve: TimingCurve,
    start: Option<f64>,
}

/// A live, single-use driver for one presentation or dismissal.
///
/// A transition is created either interactive (paused at `0.0`, following a
/// gesture) or animated (running toward `1.0` on its own). It is terminated
/// exactly once with [`finish`](Self::finish) or [`cancel`](Self::cancel);
/// after that it settles toward `1.0` or `0.0` and
/// [`advance`](Self::advance) reports the [`TransitionOutcome`] once.
///
/// The settle animation uses the current [`timing_curve`](Self::timing_curve)
/// and lasts `duration × completion_speed`, so a transition released near its
/// end settles faster than one released near its start.
///
/// ```
/// use segue_transition::{PercentDrivenTransition, TransitionKind, TransitionState};
///
/// let mut t = PercentDrivenTransition::interactive(TransitionKind::Dismissal);
/// t.update(0.4).unwrap();
/// t.set_completion_speed(0.6);
/// t.finish().unwrap();
/// assert_eq!(t.state(), TransitionState::Settling);
///
/// // Terminating twice is reported, not ignored.
/// assert!(t.cancel().is_err());
///
/// // Drive the settle animation with the host clock.
/// assert!(t.advance(10.0).is_none());
/// let outcome = t.advance(11.0).unwrap();
/// assert!(outcome.completed);
/// assert_eq!(t.percent_complete(), 1.0);
/// assert!(t.advance(12.0).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct PercentDrivenTransition {
    kind: TransitionKind,
    state: TransitionState,
    percent_complete: f64,
    duration: f64,
    completion_speed: f64,
    timing_curve: TimingCurve,
    animation: Option<Animation>,
    completes: bool,
}

impl PercentDrivenTransition {
    /// Creates a transition paused at `0.0`, ready for [`update`](Self::update).
    #[must_use]
    pub fn interactive(kind: TransitionKind) -> Self {
        Self {
            kind,
            state: TransitionState::Interactive,
            percent_complete: 0.0,
            duration: DEFAULT_DURATION,
            completion_speed: 1.0,
            timing_curve: TimingCurve::default(),
            animation: None,
            completes: true,
        }
    }

    /// Creates a transition running from `0.0` to `1.0` over `duration` seconds.
    ///
    /// The animation starts at the first [`advance`](Self::advance).
    #[must_use]
    pub fn animated(kind: TransitionKind, duration: f64, curve: TimingCurve) -> Self {
        let duration = sanitize_duration(duration);
        Self {
            kind,
            state: TransitionState::Running,
            percent_complete: 0.0,
            duration,
            completion_speed: 1.0,
            timing_curve: curve,
            animation: Some(Animation {
                from: 0.0,
                to: 1.0,
                duration,
                curve,
                start: None,
            }),
            completes: true,
        }
    }

    /// Which way this transition moves its surface.
    #[must_use]
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    /// Returns `true` for presentations.
    #[must_use]
    pub fn is_presenting(&self) -> bool {
        self.kind == TransitionKind::Presentation
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Returns `true` once `finish` or `cancel` has been called.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        matches!(
            self.state,
            TransitionState::Settling | TransitionState::Completed
        )
    }

    /// Current completion fraction in `[0, 1]`.
    #[must_use]
    pub fn percent_complete(&self) -> f64 {
        self.percent_complete
    }

    /// Length of a full-distance settle animation, in seconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Sets the length of a full-distance settle animation, in seconds.
    pub fn set_duration(&mut self, duration: f64) {
        self.duration = sanitize_duration(duration);
    }

    /// Multiplier applied to [`duration`](Self::duration) when settling.
    #[must_use]
    pub fn completion_speed(&self) -> f64 {
        self.completion_speed
    }

    /// Sets the multiplier applied to the duration when settling.
    ///
    /// Negative and non-finite values are treated as `0.0`.
    pub fn set_completion_speed(&mut self, speed: f64) {
        self.completion_speed = if speed.is_finite() { speed.max(0.0) } else { 0.0 };
    }

    /// Curve used by the settle animation.
    #[must_use]
    pub fn timing_curve(&self) -> TimingCurve {
        self.timing_curve
    }

    /// Sets the curve used by the settle animation.
    pub fn set_timing_curve(&mut self, curve: TimingCurve) {
        self.timing_curve = curve;
    }

    /// Sets the completion fraction while paused.
    ///
    /// Values are clamped to `[0, 1]`; NaN is ignored.
    pub fn update(&mut self, percent: f64) -> Result<(), TransitionError> {
        match self.state {
            TransitionState::Interactive => {
                if !percent.is_nan() {
                    self.percent_complete = percent.clamp(0.0, 1.0);
                }
                log::trace!("{:?} transition at {:.3}", self.kind, self.percent_complete);
                Ok(())
            }
            TransitionState::Running => Err(TransitionError::NotInteractive),
            TransitionState::Settling | TransitionState::Completed => {
                Err(TransitionError::AlreadyTerminated)
            }
        }
    }

    /// Freezes a running animation at its current progress.
    ///
    /// Pausing an interactive transition does nothing.
    pub fn pause(&mut self) -> Result<(), TransitionError> {
        match self.state {
            TransitionState::Running => {
                log::debug!(
                    "{:?} transition paused at {:.3}",
                    self.kind,
                    self.percent_complete
                );
                self.animation = None;
                self.state = TransitionState::Interactive;
                Ok(())
            }
            TransitionState::Interactive => Ok(()),
            TransitionState::Settling | TransitionState::Completed => {
                Err(TransitionError::AlreadyTerminated)
            }
        }
    }

    /// Terminates the transition, settling to `1.0`.
    pub fn finish(&mut self) -> Result<(), TransitionError> {
        self.terminate(true)
    }

    /// Terminates the transition, settling back to `0.0`.
    pub fn cancel(&mut self) -> Result<(), TransitionError> {
        self.terminate(false)
    }

    fn terminate(&mut self, completes: bool) -> Result<(), TransitionError> {
        if self.is_terminated() {
            log::warn!(
                "{:?} transition terminated twice (second call: {})",
                self.kind,
                if completes { "finish" } else { "cancel" }
            );
            return Err(TransitionError::AlreadyTerminated);
        }
        let to = if completes { 1.0 } else { 0.0 };
        let duration = (self.duration * self.completion_speed).max(MIN_ANIMATION_DURATION);
        log::debug!(
            "{:?} transition {} from {:.3} over {:.3}s",
            self.kind,
            if completes { "finishing" } else { "cancelling" },
            self.percent_complete,
            duration
        );
        self.completes = completes;
        self.state = TransitionState::Settling;
        self.animation = Some(Animation {
            from: self.percent_complete,
            to,
            duration,
            curve: self.timing_curve,
            start: None,
        });
        Ok(())
    }

    /// Advances any automatic animation to host time `now` (seconds).
    ///
    /// The first call after an animation starts fixes its start time. Returns
    /// the outcome exactly once, when the transition reaches its final value.
    pub fn advance(&mut self, now: f64) -> Option<TransitionOutcome> {
        let animation = self.animation.as_mut()?;
        let start = *animation.start.get_or_insert(now);
        let fraction = ((now - start) / animation.duration).clamp(0.0, 1.0);
        let eased = animation.curve.progress(fraction, animation.duration);
        self.percent_complete = lerp(animation.from, animation.to, eased).clamp(0.0, 1.0);
        if fraction < 1.0 {
            return None;
        }

        let to = animation.to;
        self.animation = None;
        self.end_at(to)
    }

    /// Jumps an automatic animation to its final value.
    ///
    /// Returns the outcome, as [`advance`](Self::advance) would have on its
    /// last tick. Interactive transitions must be terminated first and yield
    /// `None`, as do completed ones.
    pub fn complete_now(&mut self) -> Option<TransitionOutcome> {
        let animation = self.animation.take()?;
        self.end_at(animation.to)
    }

    fn end_at(&mut self, to: f64) -> Option<TransitionOutcome> {
        let completed = match self.state {
            TransitionState::Running => true,
            TransitionState::Settling => self.completes,
            TransitionState::Interactive | TransitionState::Completed => return None,
        };
        self.percent_complete = to;
        self.state = TransitionState::Completed;
        log::debug!("{:?} transition ended, completed: {completed}", self.kind);
        Some(TransitionOutcome {
            kind: self.kind,
            completed,
        })
    }
}

fn sanitize_duration(duration: f64) -> f64 {
    if duration.is_finite() {
        duration.max(MIN_ANIMATION_DURATION)
    } else {
        DEFAULT_DURATION
    }
}
