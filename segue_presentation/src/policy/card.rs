// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Rect};

use segue_geometry::Edge;

use super::{LayoutContext, PresentationPolicy, offscreen_transform};
use crate::descriptor::DescriptorError;

/// Default gap between a card and the safe area.
pub const DEFAULT_CARD_MARGIN: f64 = 16.0;

/// A rounded card inset from the safe area and pinned to one edge.
///
/// The card spans the safe container minus `margin` on every side. With an
/// `aspect_ratio` (width over height) its height is capped so it is never
/// taller than that ratio allows, and it stays pinned to `edge`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPolicy {
    /// The edge the card rests against and leaves toward.
    pub edge: Edge,
    /// Inset from the safe area, in points.
    pub margin: f64,
    /// Width over height cap, if any.
    pub aspect_ratio: Option<f64>,
}

impl Default for CardPolicy {
    fn default() -> Self {
        Self {
            edge: Edge::Bottom,
            margin: DEFAULT_CARD_MARGIN,
            aspect_ratio: None,
        }
    }
}

impl CardPolicy {
    /// Sets the resting edge.
    #[must_use]
    pub fn with_edge(mut self, edge: Edge) -> Self {
        self.edge = edge;
        self
    }

    /// Sets the margin.
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Caps the card's height at `width / ratio`.
    #[must_use]
    pub fn with_aspect_ratio(mut self, ratio: f64) -> Self {
        self.aspect_ratio = Some(ratio);
        self
    }
}

impl PresentationPolicy for CardPolicy {
    fn frame_of_presented_view(&self, ctx: &LayoutContext) -> Rect {
        let m = self.margin.max(0.0);
        let area = ctx.safe_container();
        let mut frame = Rect::new(area.x0 + m, area.y0 + m, area.x1 - m, area.y1 - m);
        if frame.width() < 0.0 || frame.height() < 0.0 {
            return area;
        }
        let Some(ratio) = self.aspect_ratio else {
            return frame;
        };
        let height = (frame.width() / ratio).min(frame.height());
        match self.edge {
            Edge::Top => frame.y1 = frame.y0 + height,
            Edge::Bottom => frame.y0 = frame.y1 - height,
            Edge::Leading | Edge::Trailing => {
                let mid = frame.center().y;
                frame.y0 = mid - height / 2.0;
                frame.y1 = mid + height / 2.0;
            }
        }
        frame
    }

    fn dismissed_transform(&self, ctx: &LayoutContext, frame: Rect) -> Affine {
        offscreen_transform(frame, ctx.container, self.edge, ctx.layout_direction)
    }

    fn validate(&self) -> Result<(), DescriptorError> {
        if self
            .aspect_ratio
            .is_some_and(|ratio| !ratio.is_finite() || ratio <= 0.0)
        {
            return Err(DescriptorError::InvalidAspectRatio);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Insets, Vec2};
    use segue_geometry::{EdgeSet, LayoutDirection};

    fn ctx() -> LayoutContext {
        LayoutContext {
            container: Rect::new(0.0, 0.0, 390.0, 844.0),
            safe_area: Insets::new(0.0, 47.0, 0.0, 34.0),
            device_corner_radius: 47.0,
            corner_radius: 24.0,
            edges: EdgeSet::BOTTOM,
            layout_direction: LayoutDirection::LeftToRight,
        }
    }

    #[test]
    fn insets_from_the_safe_area() {
        let frame = CardPolicy::default().frame_of_presented_view(&ctx());
        assert_eq!(frame, Rect::new(16.0, 63.0, 374.0, 794.0));
    }

    #[test]
    fn aspect_ratio_caps_height_and_pins_to_edge() {
        let policy = CardPolicy::default().with_aspect_ratio(1.0);
        let frame = policy.frame_of_presented_view(&ctx());
        assert_eq!(frame, Rect::new(16.0, 436.0, 374.0, 794.0));

        let top = policy.with_edge(Edge::Top).frame_of_presented_view(&ctx());
        assert_eq!(top, Rect::new(16.0, 63.0, 374.0, 421.0));
    }

    #[test]
    fn wide_ratio_does_not_grow_the_card() {
        let policy = CardPolicy::default().with_aspect_ratio(0.1);
        let frame = policy.frame_of_presented_view(&ctx());
        assert_eq!(frame.height(), 731.0);
    }

    #[test]
    fn corner_radius_is_constant() {
        let policy = CardPolicy::default();
        let moved = Affine::translate(Vec2::new(0.0, 200.0));
        assert_eq!(policy.corner_radius(&ctx(), moved), 24.0);
        assert_eq!(policy.corner_radius(&ctx(), Affine::IDENTITY), 24.0);
    }

    #[test]
    fn leaves_below_the_container() {
        let ctx = ctx();
        let policy = CardPolicy::default();
        let frame = policy.frame_of_presented_view(&ctx);
        let t = policy.dismissed_transform(&ctx, frame);
        assert_eq!(t.translation(), Vec2::new(0.0, 844.0 - 63.0));
    }

    #[test]
    fn rejects_bad_ratios() {
        for ratio in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let policy = CardPolicy::default().with_aspect_ratio(ratio);
            assert_eq!(policy.validate(), Err(DescriptorError::InvalidAspectRatio));
        }
        assert_eq!(CardPolicy::default().validate(), Ok(()));
    }
}
