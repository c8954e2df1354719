// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between the headless engine and a UI toolkit.

use alloc::vec::Vec;

use kurbo::Vec2;

use crate::animator::{ChromeFrame, SurfaceFrame};
use crate::haptics::HapticStyle;
use crate::scroll::ScrollViewState;

/// Host-assigned identifier of a view in the presented hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub u64);

/// Identifier of one presentation.
///
/// Ids handed out by a [`PresentationStack`](crate::PresentationStack) are
/// never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PresentationId(pub u64);

/// Everything the engine needs from the toolkit that owns the real views.
///
/// Only [`apply_surface`](Self::apply_surface) is required. The defaults
/// describe a host without a keyboard, nested scroll views, or haptics, that
/// never vetoes a dismissal.
pub trait PresentationHost {
    /// Moves, scales, rounds, or fades the presented surface.
    fn apply_surface(&mut self, presentation: PresentationId, surface: &SurfaceFrame);

    /// Updates the dimming backdrop and shadow behind the surface.
    fn apply_chrome(&mut self, presentation: PresentationId, chrome: &ChromeFrame) {
        let _ = (presentation, chrome);
    }

    /// Asked before a tap or a released drag dismisses the surface.
    ///
    /// Returning `false` keeps the surface on screen, e.g. while it has
    /// unsaved changes.
    fn presentation_controller_should_dismiss(&mut self, presentation: PresentationId) -> bool {
        let _ = presentation;
        true
    }

    /// Root of the presented view hierarchy.
    fn presented_root(&self, presentation: PresentationId) -> Option<ViewId> {
        let _ = presentation;
        None
    }

    /// Appends the children of `view` to `out`, front to back.
    fn children(&self, view: ViewId, out: &mut Vec<ViewId>) {
        let _ = (view, out);
    }

    /// Returns `true` if `view` currently owns keyboard input.
    fn is_first_responder(&self, view: ViewId) -> bool {
        let _ = view;
        false
    }

    /// Asks `view` to give up keyboard input. Returns `true` on success.
    fn resign_first_responder(&mut self, view: ViewId) -> bool {
        let _ = view;
        true
    }

    /// Current geometry of a scroll view, or `None` if `view` no longer exists.
    fn scroll_view(&self, view: ViewId) -> Option<ScrollViewState> {
        let _ = view;
        None
    }

    /// Sets a scroll view's content offset.
    fn set_content_offset(&mut self, view: ViewId, offset: Vec2) {
        let _ = (view, offset);
    }

    /// Creates (or warms up) an impact feedback generator.
    fn prepare_haptics(&mut self, style: HapticStyle) {
        let _ = style;
    }

    /// Plays an impact.
    fn impact_occurred(&mut self, style: HapticStyle) {
        let _ = style;
    }

    /// Tears down the feedback generator.
    fn release_haptics(&mut self) {}
}
