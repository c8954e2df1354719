// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation styles as small policies over the shared engine.
//!
//! Every style shares the same gesture handling. A
//! [`PresentationPolicy`] only decides where the surface rests, where it
//! goes when dismissed, how it follows a drag, how round its corners are,
//! and when a released drag counts as a dismissal.

mod card;
mod matched_geometry;
mod sheet;
mod slide;
mod toast;

pub use card::{CardPolicy, DEFAULT_CARD_MARGIN};
pub use matched_geometry::{
    DEFAULT_MINIMUM_SCALE_FACTOR, DEFAULT_ZOOM_ACTIVATION_DISTANCE, MatchedGeometryPolicy,
};
pub use sheet::{DETENT_PROJECTION_TIME, LARGE_DETENT_TOP_GAP, SheetDetent, SheetPolicy};
pub use slide::SlidePolicy;
pub use toast::ToastPolicy;

use alloc::boxed::Box;
use core::fmt::Debug;

use kurbo::{Affine, Insets, Rect, Vec2};

use segue_geometry::{Edge, EdgeSet, LayoutDirection};
use segue_transition::TransitionKind;

use crate::config::DismissThresholds;
use crate::descriptor::DescriptorError;

/// Geometry and styling a policy lays out against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutContext {
    /// Bounds of the container the surface is presented in.
    pub container: Rect,
    /// Safe-area insets of the container.
    pub safe_area: Insets,
    /// Corner radius of the device's display.
    pub device_corner_radius: f64,
    /// Resting corner radius from the descriptor.
    pub corner_radius: f64,
    /// Edges the surface may be dismissed toward.
    pub edges: EdgeSet,
    /// Reading direction.
    pub layout_direction: LayoutDirection,
}

impl LayoutContext {
    /// The container minus its safe area.
    #[must_use]
    pub fn safe_container(&self) -> Rect {
        Rect::new(
            self.container.x0 + self.safe_area.x0,
            self.container.y0 + self.safe_area.y0,
            self.container.x1 - self.safe_area.x1,
            self.container.y1 - self.safe_area.y1,
        )
    }
}

/// A live drag, as seen by a policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragGeometry {
    /// Drag translation, minus whatever a nested scroll view consumed.
    pub translation: Vec2,
    /// The edge the drag is dismissing toward.
    pub edge: Edge,
    /// Unclamped dismissal progress toward `edge`.
    pub progress: f64,
    /// Resting frame of the surface.
    pub frame: Rect,
}

/// A released drag, as seen by a policy deciding its outcome.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Release {
    /// The transition being resolved.
    pub kind: TransitionKind,
    /// Its completion fraction.
    pub percent: f64,
    /// Release velocity toward completion, in points per second.
    pub velocity: f64,
    /// Distance dragged toward dismissal, in points.
    pub distance: f64,
}

/// The base resolution rule.
///
/// Finishes when past the activation fraction and not moving backwards, or
/// when released at least as fast as the velocity threshold in either
/// direction. A hard flick always commits to the transition once it has
/// started, even when the finger was moving back at release.
#[must_use]
pub fn default_should_finish(release: &Release, thresholds: &DismissThresholds) -> bool {
    (release.percent >= thresholds.activation_fraction && release.velocity >= 0.0)
        || (release.percent > 0.0 && release.velocity.abs() >= thresholds.velocity_threshold)
}

/// Slides a surface along `drag.edge` by the dragged distance.
#[must_use]
pub fn default_drag_transform(drag: &DragGeometry, layout: LayoutDirection) -> Affine {
    let distance = drag.edge.directional(drag.translation, layout).max(0.0);
    Affine::translate(drag.edge.direction(layout) * distance)
}

/// Translation that moves `frame` completely past `edge` of `container`.
#[must_use]
pub fn offscreen_transform(
    frame: Rect,
    container: Rect,
    edge: Edge,
    layout: LayoutDirection,
) -> Affine {
    let d = edge.direction(layout);
    let distance = if d.x > 0.0 {
        container.x1 - frame.x0
    } else if d.x < 0.0 {
        frame.x1 - container.x0
    } else if d.y > 0.0 {
        container.y1 - frame.y0
    } else {
        frame.y1 - container.y0
    };
    Affine::translate(d * distance.max(0.0))
}

/// The per-style part of a presentation.
pub trait PresentationPolicy: Debug {
    /// Frame of the surface at rest, in container coordinates.
    fn frame_of_presented_view(&self, ctx: &LayoutContext) -> Rect;

    /// Transform of the surface when fully dismissed (and before it is presented).
    fn dismissed_transform(&self, ctx: &LayoutContext, frame: Rect) -> Affine;

    /// Transform of the surface while a drag drives the transition.
    fn drag_transform(&self, ctx: &LayoutContext, drag: &DragGeometry) -> Affine {
        default_drag_transform(drag, ctx.layout_direction)
    }

    /// Corner radius of the surface under `transform`.
    fn corner_radius(&self, ctx: &LayoutContext, transform: Affine) -> f64 {
        let _ = transform;
        ctx.corner_radius
    }

    /// Opacity of the surface at `visibility` (`0.0` dismissed, `1.0` at rest).
    fn opacity(&self, visibility: f64) -> f64 {
        let _ = visibility;
        1.0
    }

    /// Whether the backdrop is drawn at all.
    fn dims_backdrop(&self) -> bool {
        true
    }

    /// Whether a released drag finishes its transition.
    fn should_finish(&self, release: &Release, thresholds: &DismissThresholds) -> bool {
        default_should_finish(release, thresholds)
    }

    /// Whether the engine handles drags for this style.
    fn drives_interactive_dismissal(&self) -> bool {
        true
    }

    /// Checks the policy's configuration.
    fn validate(&self) -> Result<(), DescriptorError> {
        Ok(())
    }
}

impl<P: PresentationPolicy + ?Sized> PresentationPolicy for Box<P> {
    fn frame_of_presented_view(&self, ctx: &LayoutContext) -> Rect {
        (**self).frame_of_presented_view(ctx)
    }

    fn dismissed_transform(&self, ctx: &LayoutContext, frame: Rect) -> Affine {
        (**self).dismissed_transform(ctx, frame)
    }

    fn drag_transform(&self, ctx: &LayoutContext, drag: &DragGeometry) -> Affine {
        (**self).drag_transform(ctx, drag)
    }

    fn corner_radius(&self, ctx: &LayoutContext, transform: Affine) -> f64 {
        (**self).corner_radius(ctx, transform)
    }

    fn opacity(&self, visibility: f64) -> f64 {
        (**self).opacity(visibility)
    }

    fn dims_backdrop(&self) -> bool {
        (**self).dims_backdrop()
    }

    fn should_finish(&self, release: &Release, thresholds: &DismissThresholds) -> bool {
        (**self).should_finish(release, thresholds)
    }

    fn drives_interactive_dismissal(&self) -> bool {
        (**self).drives_interactive_dismissal()
    }

    fn validate(&self) -> Result<(), DescriptorError> {
        (**self).validate()
    }
}
