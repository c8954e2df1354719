// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State and layout shared by every presentation, interactive or not.

use kurbo::{Affine, Insets, Rect, Vec2};

use segue_geometry::{LayoutDirection, additional_safe_area_insets, transformed_rect};

use crate::animator::{ChromeFrame, SurfaceFrame};
use crate::backdrop::{BackdropCapabilities, ResolvedBackdrop, ShadowOptions};
use crate::descriptor::TransitionDescriptor;
use crate::host::PresentationId;
use crate::keyboard::keyboard_offset;
use crate::policy::{LayoutContext, PresentationPolicy};

/// The container a surface is presented in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerMetrics {
    /// Bounds of the container.
    pub bounds: Rect,
    /// Safe-area insets of the container.
    pub safe_area: Insets,
    /// Corner radius of the display.
    pub device_corner_radius: f64,
    /// Reading direction.
    pub layout_direction: LayoutDirection,
}

impl ContainerMetrics {
    /// A container with `bounds`, no safe area, and square corners.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            safe_area: Insets::ZERO,
            device_corner_radius: 0.0,
            layout_direction: LayoutDirection::default(),
        }
    }

    /// Sets the safe-area insets.
    #[must_use]
    pub fn with_safe_area(mut self, safe_area: Insets) -> Self {
        self.safe_area = safe_area;
        self
    }

    /// Sets the display corner radius.
    #[must_use]
    pub fn with_device_corner_radius(mut self, radius: f64) -> Self {
        self.device_corner_radius = radius;
        self
    }

    /// Sets the reading direction.
    #[must_use]
    pub fn with_layout_direction(mut self, layout_direction: LayoutDirection) -> Self {
        self.layout_direction = layout_direction;
        self
    }
}

/// The non-interactive half of a presentation.
///
/// Owns the descriptor, the container geometry, and the keyboard and
/// size-transition state, and turns a policy transform plus a visibility
/// into the [`SurfaceFrame`] and [`ChromeFrame`] a host applies. It never
/// owns the presented content.
#[derive(Clone, Debug)]
pub struct PresentationController {
    id: PresentationId,
    descriptor: TransitionDescriptor,
    metrics: ContainerMetrics,
    capabilities: BackdropCapabilities,
    keyboard_height: f64,
    is_transitioning_size: bool,
}

impl PresentationController {
    /// A controller for presentation `id`.
    ///
    /// The host is assumed to support no backdrop effects until
    /// [`set_capabilities`](Self::set_capabilities) says otherwise.
    #[must_use]
    pub fn new(id: PresentationId, descriptor: TransitionDescriptor, metrics: ContainerMetrics) -> Self {
        Self {
            id,
            descriptor,
            metrics,
            capabilities: BackdropCapabilities::empty(),
            keyboard_height: 0.0,
            is_transitioning_size: false,
        }
    }

    /// The presentation this controller lays out.
    #[must_use]
    pub fn id(&self) -> PresentationId {
        self.id
    }

    /// The descriptor in effect.
    #[must_use]
    pub fn descriptor(&self) -> &TransitionDescriptor {
        &self.descriptor
    }

    pub(crate) fn set_descriptor(&mut self, descriptor: TransitionDescriptor) {
        self.descriptor = descriptor;
    }

    /// The container geometry.
    #[must_use]
    pub fn metrics(&self) -> &ContainerMetrics {
        &self.metrics
    }

    pub(crate) fn set_metrics(&mut self, metrics: ContainerMetrics) {
        self.metrics = metrics;
    }

    /// Backdrop effects the host can draw.
    #[must_use]
    pub fn capabilities(&self) -> BackdropCapabilities {
        self.capabilities
    }

    /// Declares the backdrop effects the host can draw.
    pub fn set_capabilities(&mut self, capabilities: BackdropCapabilities) {
        self.capabilities = capabilities;
    }

    /// Height of the on-screen keyboard, `0.0` when hidden.
    #[must_use]
    pub fn keyboard_height(&self) -> f64 {
        self.keyboard_height
    }

    pub(crate) fn set_keyboard_height(&mut self, height: f64) {
        self.keyboard_height = if height.is_finite() { height.max(0.0) } else { 0.0 };
    }

    /// Whether the container is in the middle of a size change.
    #[must_use]
    pub fn is_transitioning_size(&self) -> bool {
        self.is_transitioning_size
    }

    pub(crate) fn set_transitioning_size(&mut self, transitioning: bool) {
        self.is_transitioning_size = transitioning;
    }

    /// The context policies lay out against.
    #[must_use]
    pub fn layout_context(&self) -> LayoutContext {
        LayoutContext {
            container: self.metrics.bounds,
            safe_area: self.metrics.safe_area,
            device_corner_radius: self.metrics.device_corner_radius,
            corner_radius: self.descriptor.corner_radius,
            edges: self.descriptor.edges,
            layout_direction: self.metrics.layout_direction,
        }
    }

    /// Resting frame of the surface under `policy`.
    #[must_use]
    pub fn presented_frame<P: PresentationPolicy + ?Sized>(&self, policy: &P) -> Rect {
        policy.frame_of_presented_view(&self.layout_context())
    }

    /// How far the keyboard lifts a surface resting at `frame`.
    #[must_use]
    pub fn keyboard_offset(&self, frame: Rect) -> f64 {
        keyboard_offset(self.keyboard_height, self.metrics.bounds, frame)
    }

    /// The surface for a policy transform and a visibility.
    ///
    /// The keyboard lift is applied after `policy_transform`, so a dragged
    /// surface keeps riding on top of the keyboard.
    #[must_use]
    pub fn surface_frame<P: PresentationPolicy + ?Sized>(
        &self,
        policy: &P,
        frame: Rect,
        policy_transform: Affine,
        visibility: f64,
    ) -> SurfaceFrame {
        let ctx = self.layout_context();
        let lift = self.keyboard_offset(frame);
        let transform = if lift > 0.0 {
            Affine::translate(Vec2::new(0.0, -lift)) * policy_transform
        } else {
            policy_transform
        };
        SurfaceFrame {
            frame,
            transform,
            corner_radius: policy.corner_radius(&ctx, policy_transform),
            opacity: policy.opacity(visibility),
            additional_safe_area_insets: additional_safe_area_insets(
                transformed_rect(transform, frame),
                frame,
                ctx.container,
                ctx.safe_area,
            ),
        }
    }

    /// The backdrop and shadow at `visibility`.
    #[must_use]
    pub fn chrome_frame<P: PresentationPolicy + ?Sized>(
        &self,
        policy: &P,
        visibility: f64,
    ) -> ChromeFrame {
        let visibility = visibility.clamp(0.0, 1.0);
        let backdrop = if policy.dims_backdrop() {
            self.descriptor
                .backdrop
                .resolve(self.capabilities)
                .faded(visibility)
        } else {
            ResolvedBackdrop::None
        };
        let shadow = self.descriptor.shadow.map(|s| ShadowOptions {
            opacity: s.opacity * visibility,
            ..s
        });
        ChromeFrame {
            visibility,
            backdrop,
            shadow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backdrop::BackdropStyle;
    use crate::policy::{CardPolicy, ToastPolicy};
    use segue_geometry::Edge;

    fn controller() -> PresentationController {
        let metrics = ContainerMetrics::new(Rect::new(0.0, 0.0, 390.0, 844.0))
            .with_safe_area(Insets::new(0.0, 47.0, 0.0, 34.0))
            .with_device_corner_radius(47.0);
        let descriptor = TransitionDescriptor {
            corner_radius: 20.0,
            shadow: Some(ShadowOptions::default()),
            ..TransitionDescriptor::default()
        };
        PresentationController::new(PresentationId(7), descriptor, metrics)
    }

    #[test]
    fn resting_surface_is_untouched() {
        let c = controller();
        let policy = CardPolicy::default();
        let frame = c.presented_frame(&policy);
        let surface = c.surface_frame(&policy, frame, Affine::IDENTITY, 1.0);
        assert_eq!(surface.transform, Affine::IDENTITY);
        assert_eq!(surface.corner_radius, 20.0);
        assert_eq!(surface.opacity, 1.0);
        assert_eq!(surface.additional_safe_area_insets, Insets::ZERO);
    }

    #[test]
    fn keyboard_lifts_on_top_of_the_drag() {
        let mut c = controller();
        c.set_keyboard_height(100.0);
        let policy = CardPolicy::default();
        let frame = c.presented_frame(&policy);
        // Card bottom is at 794; keyboard top at 744.
        assert_eq!(c.keyboard_offset(frame), 50.0);
        let drag = Affine::translate(Vec2::new(0.0, 40.0));
        let surface = c.surface_frame(&policy, frame, drag, 1.0);
        assert_eq!(surface.transform.translation(), Vec2::new(0.0, -10.0));
        assert_eq!(surface.corner_radius, 20.0);
    }

    #[test]
    fn keyboard_lift_stops_at_the_top_of_the_container() {
        let mut c = controller();
        c.set_keyboard_height(400.0);
        let frame = c.presented_frame(&CardPolicy::default());
        assert_eq!(c.keyboard_offset(frame), 63.0);
    }

    #[test]
    fn hidden_keyboard_does_not_lift() {
        let mut c = controller();
        c.set_keyboard_height(f64::NAN);
        assert_eq!(c.keyboard_height(), 0.0);
        let frame = c.presented_frame(&CardPolicy::default());
        assert_eq!(c.keyboard_offset(frame), 0.0);
    }

    #[test]
    fn dragged_full_screen_surface_keeps_its_safe_area() {
        let c = controller();
        let policy = crate::policy::SlidePolicy::new(Edge::Bottom);
        let frame = c.presented_frame(&policy);
        let drag = Affine::translate(Vec2::new(0.0, 100.0));
        let surface = c.surface_frame(&policy, frame, drag, 0.9);
        assert_eq!(surface.additional_safe_area_insets.y0, 47.0);
        assert_eq!(surface.additional_safe_area_insets.y1, -100.0);
        assert_eq!(surface.corner_radius, 47.0);
    }

    #[test]
    fn chrome_fades_with_visibility() {
        let c = controller();
        let chrome = c.chrome_frame(&CardPolicy::default(), 0.5);
        let ResolvedBackdrop::Color(color) = chrome.backdrop else {
            panic!("expected a colour backdrop, got {:?}", chrome.backdrop);
        };
        assert!((color.components[3] - 0.2).abs() < 1e-6);
        let shadow = chrome.shadow.expect("descriptor has a shadow");
        assert!((shadow.opacity - 0.075).abs() < 1e-12);
    }

    #[test]
    fn toasts_never_dim() {
        let mut c = controller();
        c.set_descriptor(TransitionDescriptor {
            backdrop: BackdropStyle::Blur {
                radius: 30.0,
                tint: peniko::Color::WHITE,
            },
            ..*c.descriptor()
        });
        let chrome = c.chrome_frame(&ToastPolicy::default(), 1.0);
        assert!(matches!(chrome.backdrop, ResolvedBackdrop::None));
    }
}
