// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Threshold-crossing haptic feedback for interactive dismissals.

use crate::host::PresentationHost;

/// Strength of an impact feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum HapticStyle {
    /// A subtle tap; also used when a drag falls back below the threshold.
    Soft,
    /// A light tap.
    #[default]
    Light,
    /// A medium tap.
    Medium,
    /// A heavy tap.
    Heavy,
    /// A firm, sharp tap.
    Rigid,
}

/// Per-gesture haptic bookkeeping.
///
/// The host's feedback generator is prepared lazily on the first tracked
/// update and released when the gesture ends. An impact fires once when the
/// drag moves past the activation threshold and once, softer, when it falls
/// back. Holding the drag at the boundary does not fire again.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct HapticsState {
    prepared: Option<HapticStyle>,
    is_past_threshold: bool,
}

impl HapticsState {
    /// Records the latest activation state and fires feedback on crossings.
    pub(crate) fn track(
        &mut self,
        host: &mut dyn PresentationHost,
        style: Option<HapticStyle>,
        activated: bool,
    ) {
        let Some(style) = style else {
            return;
        };
        if self.prepared.is_none() {
            host.prepare_haptics(style);
            self.prepared = Some(style);
        }
        if activated == self.is_past_threshold {
            return;
        }
        self.is_past_threshold = activated;
        let impact = if activated { style } else { HapticStyle::Soft };
        log::trace!("haptic impact {impact:?}");
        host.impact_occurred(impact);
    }

    /// Releases the generator, if one was prepared, and resets.
    pub(crate) fn release(&mut self, host: &mut dyn PresentationHost) {
        if self.prepared.take().is_some() {
            host.release_haptics();
        }
        self.is_past_threshold = false;
    }
}
