// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nested scroll views that share a drag with the presentation.
//!
//! A drag that starts inside a scroll view first scrolls its content. Only
//! once the content cannot scroll any further in the drag's direction does
//! the drag start moving the presented surface. The check is made per edge,
//! on both axes independently, so a surface dismissable both downward and
//! sideways hands off correctly from a scroll view that scrolls both ways.

use kurbo::{Insets, Size, Vec2};
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `abs`

use segue_geometry::{Edge, LayoutDirection};

/// Offsets closer than this to a bound count as being at it.
const EDGE_TOLERANCE: f64 = 0.5;

/// Geometry of a scroll view, as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollViewState {
    /// Current content offset (top-left of the visible content).
    pub content_offset: Vec2,
    /// Size of the scrollable content.
    pub content_size: Size,
    /// Size of the visible viewport.
    pub bounds_size: Size,
    /// Extra scrollable margin around the content (`x0` left, `y0` top, `x1`
    /// right, `y1` bottom).
    pub content_inset: Insets,
}

impl ScrollViewState {
    /// Creates a state with no content inset.
    #[must_use]
    pub fn new(content_offset: Vec2, content_size: Size, bounds_size: Size) -> Self {
        Self {
            content_offset,
            content_size,
            bounds_size,
            content_inset: Insets::ZERO,
        }
    }

    /// Smallest content offset on each axis.
    #[must_use]
    pub fn min_offset(&self) -> Vec2 {
        Vec2::new(-self.content_inset.x0, -self.content_inset.y0)
    }

    /// Largest content offset on each axis; never below [`min_offset`](Self::min_offset).
    #[must_use]
    pub fn max_offset(&self) -> Vec2 {
        let min = self.min_offset();
        Vec2::new(
            (self.content_size.width + self.content_inset.x1 - self.bounds_size.width).max(min.x),
            (self.content_size.height + self.content_inset.y1 - self.bounds_size.height).max(min.y),
        )
    }

    /// The content offset at which a drag toward `edge` can no longer scroll.
    ///
    /// Content follows the finger, so dragging toward the bottom edge scrolls
    /// back to the top of the content, and so on. The cross axis is unchanged.
    #[must_use]
    pub fn offset_at_edge(&self, edge: Edge, layout: LayoutDirection) -> Vec2 {
        let d = edge.direction(layout);
        let min = self.min_offset();
        let max = self.max_offset();
        let mut offset = self.content_offset;
        if d.x > 0.0 {
            offset.x = min.x;
        } else if d.x < 0.0 {
            offset.x = max.x;
        }
        if d.y > 0.0 {
            offset.y = min.y;
        } else if d.y < 0.0 {
            offset.y = max.y;
        }
        offset
    }

    /// Returns `true` if a drag toward `edge` cannot scroll the content further.
    ///
    /// Content that fits its viewport on the edge's axis is always at the edge.
    #[must_use]
    pub fn is_at_edge(&self, edge: Edge, layout: LayoutDirection) -> bool {
        let axis = edge.axis();
        let target = axis.component(self.offset_at_edge(edge, layout));
        let current = axis.component(self.content_offset);
        let d = axis.component(edge.direction(layout));
        // Past the bound (overscrolled) also counts.
        if d > 0.0 {
            current <= target + EDGE_TOLERANCE
        } else {
            current >= target - EDGE_TOLERANCE
        }
    }

    /// Returns `true` if the content can scroll along the axis of `edge`.
    #[must_use]
    pub fn scrolls_along(&self, edge: Edge) -> bool {
        let axis = edge.axis();
        (axis.component(self.max_offset()) - axis.component(self.min_offset())).abs()
            > EDGE_TOLERANCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LTR: LayoutDirection = LayoutDirection::LeftToRight;

    fn list(offset_y: f64) -> ScrollViewState {
        ScrollViewState::new(
            Vec2::new(0.0, offset_y),
            Size::new(390.0, 2000.0),
            Size::new(390.0, 600.0),
        )
    }

    #[test]
    fn vertical_list_at_top_hands_off_downward_drags() {
        assert!(list(0.0).is_at_edge(Edge::Bottom, LTR));
        assert!(!list(120.0).is_at_edge(Edge::Bottom, LTR));
        // Rubber-banded past the top.
        assert!(list(-30.0).is_at_edge(Edge::Bottom, LTR));
    }

    #[test]
    fn vertical_list_at_bottom_hands_off_upward_drags() {
        assert!(list(1400.0).is_at_edge(Edge::Top, LTR));
        assert!(!list(1399.0).is_at_edge(Edge::Top, LTR));
        assert!(!list(0.0).is_at_edge(Edge::Top, LTR));
    }

    #[test]
    fn content_inset_moves_the_bounds() {
        let mut s = list(-44.0);
        s.content_inset = Insets::new(0.0, 44.0, 0.0, 34.0);
        assert!(s.is_at_edge(Edge::Bottom, LTR));
        s.content_offset.y = 0.0;
        assert!(!s.is_at_edge(Edge::Bottom, LTR));
        assert_eq!(s.max_offset().y, 1434.0);
    }

    #[test]
    fn axes_are_checked_independently() {
        // Scrolled down, horizontally unscrollable: sideways drags hand off at once.
        let s = list(300.0);
        assert!(!s.is_at_edge(Edge::Bottom, LTR));
        assert!(s.is_at_edge(Edge::Trailing, LTR));
        assert!(s.is_at_edge(Edge::Leading, LTR));
        assert!(!s.scrolls_along(Edge::Trailing));
        assert!(s.scrolls_along(Edge::Bottom));
    }

    #[test]
    fn horizontal_carousel_respects_layout_direction() {
        let s = ScrollViewState::new(
            Vec2::new(0.0, 0.0),
            Size::new(1200.0, 200.0),
            Size::new(400.0, 200.0),
        );
        // Dragging right in LTR cannot scroll further back.
        assert!(s.is_at_edge(Edge::Trailing, LTR));
        assert!(!s.is_at_edge(Edge::Leading, LTR));
        let rtl = LayoutDirection::RightToLeft;
        assert!(s.is_at_edge(Edge::Leading, rtl));
        assert!(!s.is_at_edge(Edge::Trailing, rtl));
    }

    #[test]
    fn offset_at_edge_keeps_cross_axis() {
        let mut s = list(500.0);
        s.content_offset.x = 7.0;
        assert_eq!(s.offset_at_edge(Edge::Bottom, LTR), Vec2::new(7.0, 0.0));
        assert_eq!(s.offset_at_edge(Edge::Top, LTR), Vec2::new(7.0, 1400.0));
    }
}
