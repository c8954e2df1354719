// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Rect};

use segue_geometry::{corner_radius_for_scale, lerp, rect_transform, vertical_scale};
use segue_transition::TransitionKind;

use super::{DragGeometry, LayoutContext, PresentationPolicy, Release, default_should_finish};
use crate::config::DismissThresholds;
use crate::descriptor::DescriptorError;

/// Drag distance, in points, past which a released zoom dismisses.
pub const DEFAULT_ZOOM_ACTIVATION_DISTANCE: f64 = 100.0;

/// Default smallest scale a zoomed surface shrinks to under a drag.
pub const DEFAULT_MINIMUM_SCALE_FACTOR: f64 = 0.6;

/// A full-screen surface that zooms out of a source view and back into it.
///
/// Presented, the surface fills the container. Dismissed, it is mapped onto
/// `source_frame`. Dragging it follows the finger and shrinks it toward
/// `minimum_scale_factor`, with its corners rounding toward the source's
/// radius as it shrinks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchedGeometryPolicy {
    /// Frame of the source view, in container coordinates.
    pub source_frame: Rect,
    /// Corner radius of the source view.
    pub source_corner_radius: f64,
    /// Smallest scale the surface reaches while dragged.
    pub minimum_scale_factor: f64,
    /// Drag distance past which a slow release still dismisses.
    pub activation_distance: f64,
}

impl MatchedGeometryPolicy {
    /// Zooms from `source_frame`.
    #[must_use]
    pub fn new(source_frame: Rect) -> Self {
        Self {
            source_frame,
            source_corner_radius: 0.0,
            minimum_scale_factor: DEFAULT_MINIMUM_SCALE_FACTOR,
            activation_distance: DEFAULT_ZOOM_ACTIVATION_DISTANCE,
        }
    }

    /// Sets the source view's corner radius.
    #[must_use]
    pub fn with_source_corner_radius(mut self, radius: f64) -> Self {
        self.source_corner_radius = radius;
        self
    }

    /// Sets the smallest drag scale.
    #[must_use]
    pub fn with_minimum_scale_factor(mut self, scale: f64) -> Self {
        self.minimum_scale_factor = scale;
        self
    }

    /// Sets the dismissal distance.
    #[must_use]
    pub fn with_activation_distance(mut self, distance: f64) -> Self {
        self.activation_distance = distance;
        self
    }

    /// Scale of the surface at dismissal `progress`.
    #[must_use]
    pub fn scale_at(&self, progress: f64) -> f64 {
        lerp(1.0, self.minimum_scale_factor, progress.clamp(0.0, 1.0))
    }
}

impl PresentationPolicy for MatchedGeometryPolicy {
    fn frame_of_presented_view(&self, ctx: &LayoutContext) -> Rect {
        ctx.container
    }

    fn dismissed_transform(&self, _ctx: &LayoutContext, frame: Rect) -> Affine {
        rect_transform(frame, self.source_frame)
    }

    fn drag_transform(&self, _ctx: &LayoutContext, drag: &DragGeometry) -> Affine {
        let scale = self.scale_at(drag.progress);
        let center = drag.frame.center().to_vec2();
        Affine::translate(drag.translation + center)
            * Affine::scale(scale)
            * Affine::translate(-center)
    }

    fn corner_radius(&self, ctx: &LayoutContext, transform: Affine) -> f64 {
        // Below the drag scale the surface is zooming into its source.
        let scale = vertical_scale(transform);
        let floor = self
            .minimum_scale_factor
            .min(self.source_frame.height() / ctx.container.height().max(1.0));
        corner_radius_for_scale(
            scale,
            floor,
            ctx.corner_radius,
            self.source_corner_radius,
        )
    }

    fn should_finish(&self, release: &Release, thresholds: &DismissThresholds) -> bool {
        if release.kind == TransitionKind::Presentation {
            return default_should_finish(release, thresholds);
        }
        if release.velocity >= thresholds.zoom_velocity_threshold {
            true
        } else if release.velocity <= -thresholds.zoom_velocity_threshold {
            false
        } else {
            release.distance >= self.activation_distance
        }
    }

    fn validate(&self) -> Result<(), DescriptorError> {
        let s = self.minimum_scale_factor;
        if !s.is_finite() || s <= 0.0 || s > 1.0 {
            return Err(DescriptorError::InvalidScaleFactor);
        }
        if !self.activation_distance.is_finite() || self.activation_distance < 0.0 {
            return Err(DescriptorError::InvalidThreshold);
        }
        Ok(())
    }
}
