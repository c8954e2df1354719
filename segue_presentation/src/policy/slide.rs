// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `abs`

use kurbo::{Affine, Rect};

use segue_geometry::{Edge, lerp};

use super::{LayoutContext, PresentationPolicy, offscreen_transform};

/// A full-bleed surface that slides in from one edge.
///
/// At rest the surface uses the descriptor's corner radius. As it moves
/// toward its edge the radius blends into the display's corner radius, so
/// it reads as a card lifting off the screen without a visible jump when
/// the drag starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlidePolicy {
    /// The edge the surface enters from and leaves toward.
    pub edge: Edge,
}

impl SlidePolicy {
    /// A slide from `edge`.
    #[must_use]
    pub fn new(edge: Edge) -> Self {
        Self { edge }
    }
}

impl Default for SlidePolicy {
    fn default() -> Self {
        Self::new(Edge::Bottom)
    }
}

impl PresentationPolicy for SlidePolicy {
    fn frame_of_presented_view(&self, ctx: &LayoutContext) -> Rect {
        ctx.container
    }

    fn dismissed_transform(&self, ctx: &LayoutContext, frame: Rect) -> Affine {
        offscreen_transform(frame, ctx.container, self.edge, ctx.layout_direction)
    }

    fn corner_radius(&self, ctx: &LayoutContext, transform: Affine) -> f64 {
        let axis = self.edge.axis();
        let extent = axis.extent(ctx.container.size());
        if extent <= 0.0 {
            return ctx.corner_radius;
        }
        let displacement = axis.component(transform.translation()).abs() / extent;
        lerp(
            ctx.corner_radius,
            ctx.device_corner_radius,
            displacement.clamp(0.0, 1.0),
        )
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
            corner_radius: 0.0,
            edges: EdgeSet::TRAILING,
            layout_direction: LayoutDirection::LeftToRight,
        }
    }

    #[test]
    fn fills_the_container() {
        let ctx = ctx();
        assert_eq!(SlidePolicy::default().frame_of_presented_view(&ctx), ctx.container);
    }

    #[test]
    fn leaves_through_its_edge() {
        let ctx = ctx();
        let policy = SlidePolicy::new(Edge::Trailing);
        let t = policy.dismissed_transform(&ctx, ctx.container);
        assert_eq!(t.translation(), Vec2::new(390.0, 0.0));
    }

    #[test]
    fn trailing_is_left_in_right_to_left() {
        let ctx = LayoutContext {
            layout_direction: LayoutDirection::RightToLeft,
            ..ctx()
        };
        let policy = SlidePolicy::new(Edge::Trailing);
        let t = policy.dismissed_transform(&ctx, ctx.container);
        assert_eq!(t.translation(), Vec2::new(-390.0, 0.0));
    }

    #[test]
    fn radius_follows_displacement() {
        let ctx = ctx();
        let policy = SlidePolicy::new(Edge::Trailing);
        assert_eq!(policy.corner_radius(&ctx, Affine::IDENTITY), 0.0);
        let halfway = Affine::translate(Vec2::new(195.0, 0.0));
        assert!((policy.corner_radius(&ctx, halfway) - 23.5).abs() < 1e-9);
        let gone = Affine::translate(Vec2::new(390.0, 0.0));
        assert_eq!(policy.corner_radius(&ctx, gone), 47.0);
        let past = Affine::translate(Vec2::new(500.0, 0.0));
        assert_eq!(policy.corner_radius(&ctx, past), 47.0);
    }

    #[test]
    fn first_point_of_a_drag_barely_rounds() {
        let ctx = ctx();
        let policy = SlidePolicy::new(Edge::Bottom);
        let one_point = Affine::translate(Vec2::new(0.0, 1.0));
        let radius = policy.corner_radius(&ctx, one_point);
        assert!(radius > 0.0 && radius < 0.1, "{radius}");
        // Motion across the slide axis does not count.
        let sideways = Affine::translate(Vec2::new(40.0, 0.0));
        assert_eq!(policy.corner_radius(&ctx, sideways), 0.0);
    }
}
