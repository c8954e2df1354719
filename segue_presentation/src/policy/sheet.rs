// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `abs`

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Affine, Rect};

use segue_geometry::Edge;

use super::{LayoutContext, PresentationPolicy, offscreen_transform};
use crate::descriptor::DescriptorError;

/// Gap between a large sheet and the top of the safe area.
pub const LARGE_DETENT_TOP_GAP: f64 = 10.0;

/// How far ahead, in seconds, a release velocity is projected when picking
/// a detent.
pub const DETENT_PROJECTION_TIME: f64 = 0.15;

/// A height a sheet can rest at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SheetDetent {
    /// From just below the top of the safe area to the bottom of the container.
    Large,
    /// Half the container.
    Medium,
    /// A fixed height in points, capped at the large height.
    Custom(f64),
    /// A fraction of the large height.
    Fraction(f64),
}

impl SheetDetent {
    /// Height of this detent in `ctx`, never taller than the large detent.
    #[must_use]
    pub fn resolve(self, ctx: &LayoutContext) -> f64 {
        let top = ctx.container.y0 + ctx.safe_area.y0 + LARGE_DETENT_TOP_GAP;
        let large = (ctx.container.y1 - top).max(0.0);
        let height = match self {
            Self::Large => large,
            Self::Medium => ctx.container.height() / 2.0,
            Self::Custom(h) => h,
            Self::Fraction(f) => large * f,
        };
        height.clamp(0.0, large)
    }

    fn is_valid(self) -> bool {
        match self {
            Self::Large | Self::Medium => true,
            Self::Custom(h) => h.is_finite() && h > 0.0,
            Self::Fraction(f) => f.is_finite() && f > 0.0 && f <= 1.0,
        }
    }
}

/// A bottom sheet resting at one of several detents.
///
/// Sheet dragging is owned by the platform, so the engine does not drive
/// interactive dismissal for this style. The host reports where a drag
/// ended and the sheet picks the detent to rest at.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetPolicy {
    detents: Vec<SheetDetent>,
    selected: usize,
}

impl Default for SheetPolicy {
    fn default() -> Self {
        Self {
            detents: vec![SheetDetent::Large],
            selected: 0,
        }
    }
}

impl SheetPolicy {
    /// A sheet with `detents`, resting at the first.
    #[must_use]
    pub fn new(detents: impl IntoIterator<Item = SheetDetent>) -> Self {
        Self {
            detents: detents.into_iter().collect(),
            selected: 0,
        }
    }

    /// The configured detents.
    #[must_use]
    pub fn detents(&self) -> &[SheetDetent] {
        &self.detents
    }

    /// The detent the sheet rests at.
    #[must_use]
    pub fn selected_detent(&self) -> Option<SheetDetent> {
        self.detents.get(self.selected).copied()
    }

    /// Makes the detent at `index` the resting one.
    ///
    /// Returns `false` and changes nothing when `index` is out of range.
    pub fn select_detent(&mut self, index: usize) -> bool {
        if index >= self.detents.len() {
            return false;
        }
        if index != self.selected {
            log::debug!("sheet detent {} -> {index}", self.selected);
        }
        self.selected = index;
        true
    }

    /// Index of the detent a sheet released at `height` should settle to.
    ///
    /// `velocity` is in points per second, positive when the sheet moves
    /// down. The release is projected [`DETENT_PROJECTION_TIME`] ahead and
    /// the closest detent wins; ties go to the smaller index.
    #[must_use]
    pub fn nearest_detent(&self, ctx: &LayoutContext, height: f64, velocity: f64) -> Option<usize> {
        let projected = height - velocity * DETENT_PROJECTION_TIME;
        let mut best: Option<(usize, f64)> = None;
        for (i, detent) in self.detents.iter().enumerate() {
            let d = (detent.resolve(ctx) - projected).abs();
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }
}

impl PresentationPolicy for SheetPolicy {
    fn frame_of_presented_view(&self, ctx: &LayoutContext) -> Rect {
        let height = self
            .selected_detent()
            .unwrap_or(SheetDetent::Large)
            .resolve(ctx);
        Rect::new(
            ctx.container.x0,
            ctx.container.y1 - height,
            ctx.container.x1,
            ctx.container.y1,
        )
    }

    fn dismissed_transform(&self, ctx: &LayoutContext, frame: Rect) -> Affine {
        offscreen_transform(frame, ctx.container, Edge::Bottom, ctx.layout_direction)
    }

    fn drives_interactive_dismissal(&self) -> bool {
        false
    }

    fn validate(&self) -> Result<(), DescriptorError> {
        if self.detents.is_empty() || !self.detents.iter().all(|d| d.is_valid()) {
            return Err(DescriptorError::InvalidDetent);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Insets, Vec2};
    use segue_geometry::{EdgeSet, LayoutDirection};

    const NO_DETENTS: [SheetDetent; 0] = [];

    fn ctx() -> LayoutContext {
        LayoutContext {
            container: Rect::new(0.0, 0.0, 390.0, 844.0),
            safe_area: Insets::new(0.0, 47.0, 0.0, 34.0),
            device_corner_radius: 47.0,
            corner_radius: 10.0,
            edges: EdgeSet::BOTTOM,
            layout_direction: LayoutDirection::LeftToRight,
        }
    }

    #[test]
    fn resolves_detent_heights() {
        let ctx = ctx();
        assert_eq!(SheetDetent::Large.resolve(&ctx), 787.0);
        assert_eq!(SheetDetent::Medium.resolve(&ctx), 422.0);
        assert_eq!(SheetDetent::Custom(200.0).resolve(&ctx), 200.0);
        assert_eq!(SheetDetent::Custom(2000.0).resolve(&ctx), 787.0);
        assert_eq!(SheetDetent::Fraction(0.5).resolve(&ctx), 393.5);
    }

    #[test]
    fn frame_hangs_from_the_bottom() {
        let ctx = ctx();
        let policy = SheetPolicy::new([SheetDetent::Medium, SheetDetent::Large]);
        assert_eq!(
            policy.frame_of_presented_view(&ctx),
            Rect::new(0.0, 422.0, 390.0, 844.0)
        );
        let t = policy.dismissed_transform(&ctx, policy.frame_of_presented_view(&ctx));
        assert_eq!(t.translation(), Vec2::new(0.0, 422.0));
    }

    #[test]
    fn nearest_detent_projects_velocity() {
        let ctx = ctx();
        let policy = SheetPolicy::new([SheetDetent::Medium, SheetDetent::Large]);
        assert_eq!(policy.nearest_detent(&ctx, 700.0, 0.0), Some(1));
        assert_eq!(policy.nearest_detent(&ctx, 450.0, 0.0), Some(0));
        // A hard flick down from near the top lands on the medium detent.
        assert_eq!(policy.nearest_detent(&ctx, 650.0, 2000.0), Some(0));
        // A flick up from the middle goes large.
        assert_eq!(policy.nearest_detent(&ctx, 500.0, -1500.0), Some(1));
        assert_eq!(SheetPolicy::new(NO_DETENTS).nearest_detent(&ctx, 500.0, 0.0), None);
    }

    #[test]
    fn selecting_a_detent_moves_the_frame() {
        let ctx = ctx();
        let mut policy = SheetPolicy::new([SheetDetent::Medium, SheetDetent::Large]);
        assert!(policy.select_detent(1));
        assert_eq!(policy.selected_detent(), Some(SheetDetent::Large));
        assert_eq!(policy.frame_of_presented_view(&ctx).y0, 57.0);
        assert!(!policy.select_detent(5));
        assert_eq!(policy.selected_detent(), Some(SheetDetent::Large));
    }

    #[test]
    fn engine_does_not_drive_sheets() {
        assert!(!SheetPolicy::default().drives_interactive_dismissal());
    }

    #[test]
    fn validates_detents() {
        assert_eq!(SheetPolicy::default().validate(), Ok(()));
        assert_eq!(
            SheetPolicy::new(NO_DETENTS).validate(),
            Err(DescriptorError::InvalidDetent)
        );
        assert_eq!(
            SheetPolicy::new([SheetDetent::Fraction(1.5)]).validate(),
            Err(DescriptorError::InvalidDetent)
        );
        assert_eq!(
            SheetPolicy::new([SheetDetent::Custom(-3.0)]).validate(),
            Err(DescriptorError::InvalidDetent)
        );
    }
}
