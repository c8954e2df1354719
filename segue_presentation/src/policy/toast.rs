// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Rect, Size};

use segue_geometry::Edge;

use super::{LayoutContext, PresentationPolicy, offscreen_transform};

/// A small, non-modal surface pinned to the top or bottom of the screen.
///
/// The toast takes its ideal content size, shrunk to fit the safe area,
/// centered horizontally and `margin` away from its edge. It fades with its
/// visibility and leaves the content behind it undimmed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToastPolicy {
    /// `Edge::Top` or `Edge::Bottom`; horizontal edges are treated as bottom.
    pub edge: Edge,
    /// Size the toast's content would like to be.
    pub ideal_size: Size,
    /// Distance from the safe area, in points.
    pub margin: f64,
}

impl Default for ToastPolicy {
    fn default() -> Self {
        Self {
            edge: Edge::Top,
            ideal_size: Size::new(320.0, 56.0),
            margin: 8.0,
        }
    }
}

impl ToastPolicy {
    /// A toast of `ideal_size` pinned to `edge`.
    #[must_use]
    pub fn new(edge: Edge, ideal_size: Size) -> Self {
        Self {
            edge,
            ideal_size,
            ..Self::default()
        }
    }

    fn pinned_edge(&self) -> Edge {
        match self.edge {
            Edge::Top => Edge::Top,
            _ => Edge::Bottom,
        }
    }
}

impl PresentationPolicy for ToastPolicy {
    fn frame_of_presented_view(&self, ctx: &LayoutContext) -> Rect {
        let area = ctx.safe_container();
        let m = self.margin.max(0.0);
        let width = self.ideal_size.width.clamp(0.0, (area.width() - 2.0 * m).max(0.0));
        let height = self.ideal_size.height.clamp(0.0, (area.height() - m).max(0.0));
        let x0 = area.center().x - width / 2.0;
        let y0 = match self.pinned_edge() {
            Edge::Top => area.y0 + m,
            _ => area.y1 - m - height,
        };
        Rect::new(x0, y0, x0 + width, y0 + height)
    }

    fn dismissed_transform(&self, ctx: &LayoutContext, frame: Rect) -> Affine {
        offscreen_transform(frame, ctx.container, self.pinned_edge(), ctx.layout_direction)
    }

    fn opacity(&self, visibility: f64) -> f64 {
        visibility.clamp(0.0, 1.0)
    }

    fn dims_backdrop(&self) -> bool {
        false
    }
}
