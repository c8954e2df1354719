// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Safe-area bookkeeping for surfaces that move while they are laid out.
//!
//! Insets here are *inward* amounts: `x0` is the left inset, `y0` the top,
//! `x1` the right and `y1` the bottom, all positive toward the rect's center.

use kurbo::{Insets, Rect};

/// Returns how far the container's safe area intrudes into `frame`, per edge.
///
/// `safe_area` is the container's safe-area insets. Each result component is
/// clamped to `[0, extent]` of `frame` along its axis.
#[must_use]
pub fn safe_area_overlap(frame: Rect, container: Rect, safe_area: Insets) -> Insets {
    let width = frame.width().max(0.0);
    let height = frame.height().max(0.0);

    let top_line = container.y0 + safe_area.y0;
    let bottom_line = container.y1 - safe_area.y1;
    let left_line = container.x0 + safe_area.x0;
    let right_line = container.x1 - safe_area.x1;

    Insets::new(
        (left_line - frame.x0).clamp(0.0, width),
        (top_line - frame.y0).clamp(0.0, height),
        (frame.x1 - right_line).clamp(0.0, width),
        (frame.y1 - bottom_line).clamp(0.0, height),
    )
}

/// Returns the safe-area insets to add to a presented surface so its content
/// lays out as if it were already at `target`.
///
/// While a transform moves a surface, a toolkit recomputes the inherited
/// safe area from the frame it currently lays out at (`laid_out`). That makes
/// content reflow mid-gesture. The returned insets are the difference between
/// the safe area `target` would inherit and the one `laid_out` inherits, so
/// adding them keeps the effective safe area pinned to the target.
///
/// This is a pure function of its inputs; components may be negative.
#[must_use]
pub fn additional_safe_area_insets(
    laid_out: Rect,
    target: Rect,
    container: Rect,
    safe_area: Insets,
) -> Insets {
    let wanted = safe_area_overlap(target, container, safe_area);
    let inherited = safe_area_overlap(laid_out, container, safe_area);
    Insets::new(
        wanted.x0 - inherited.x0,
        wanted.y0 - inherited.y0,
        wanted.x1 - inherited.x1,
        wanted.y1 - inherited.y1,
    )
}
