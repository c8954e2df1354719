// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The description of a transition a front end hands to the engine.

use core::fmt;

use segue_geometry::EdgeSet;
use segue_transition::TimingCurve;

use crate::backdrop::{BackdropStyle, ShadowOptions};
use crate::config::DismissThresholds;
use crate::haptics::HapticStyle;

/// Invalid configuration of a transition or a presentation policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DescriptorError {
    /// An interactive transition was given no edges to dismiss toward.
    EmptyEdgeSet,
    /// A corner radius was negative or not finite.
    NegativeCornerRadius,
    /// An aspect ratio was zero, negative, or not finite.
    InvalidAspectRatio,
    /// A scale factor was outside `(0, 1]`.
    InvalidScaleFactor,
    /// A dismissal threshold was out of range.
    InvalidThreshold,
    /// A sheet had no detents, or a detent height was not positive.
    InvalidDetent,
}

impl fmt::Display for DescriptorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::EmptyEdgeSet => "interactive transition has no dismissal edges",
            Self::NegativeCornerRadius => "corner radius must be finite and non-negative",
            Self::InvalidAspectRatio => "aspect ratio must be finite and positive",
            Self::InvalidScaleFactor => "scale factor must be in (0, 1]",
            Self::InvalidThreshold => "dismissal threshold out of range",
            Self::InvalidDetent => "sheet detents must be non-empty with positive heights",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for DescriptorError {}

/// How a surface is presented and how it may be dismissed.
///
/// ```
/// use segue_geometry::EdgeSet;
/// use segue_presentation::{HapticStyle, TransitionDescriptor};
///
/// let descriptor = TransitionDescriptor::builder()
///     .edges(EdgeSet::BOTTOM | EdgeSet::TRAILING)
///     .corner_radius(12.0)
///     .haptics(HapticStyle::Medium)
///     .build()
///     .unwrap();
/// assert!(descriptor.is_interactive);
///
/// let err = TransitionDescriptor::builder().edges(EdgeSet::empty()).build();
/// assert!(err.is_err());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TransitionDescriptor {
    /// Edges a drag may dismiss the surface toward.
    pub edges: EdgeSet,
    /// Corner radius of the surface at rest.
    pub corner_radius: f64,
    /// Shadow cast by the surface, if any.
    pub shadow: Option<ShadowOptions>,
    /// What is drawn behind the surface.
    pub backdrop: BackdropStyle,
    /// Whether a pan gesture may dismiss the surface.
    pub is_interactive: bool,
    /// Whether tapping the backdrop dismisses the surface.
    pub dismiss_on_backdrop_tap: bool,
    /// Impact played when a drag crosses the activation threshold.
    pub haptics: Option<HapticStyle>,
    /// Curve of automatic presentations and dismissals.
    pub animation: TimingCurve,
    /// Dismissal thresholds.
    pub thresholds: DismissThresholds,
}

impl Default for TransitionDescriptor {
    fn default() -> Self {
        Self {
            edges: EdgeSet::BOTTOM,
            corner_radius: 0.0,
            shadow: None,
            backdrop: BackdropStyle::default(),
            is_interactive: true,
            dismiss_on_backdrop_tap: true,
            haptics: None,
            animation: TimingCurve::default(),
            thresholds: DismissThresholds::default(),
        }
    }
}

impl TransitionDescriptor {
    /// Starts building a descriptor from the defaults.
    #[must_use]
    pub fn builder() -> TransitionDescriptorBuilder {
        TransitionDescriptorBuilder::default()
    }

    /// Checks the descriptor for values the engine cannot honour.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        if self.is_interactive && self.edges.is_empty() {
            return Err(DescriptorError::EmptyEdgeSet);
        }
        if !(self.corner_radius.is_finite() && self.corner_radius >= 0.0) {
            return Err(DescriptorError::NegativeCornerRadius);
        }
        self.thresholds.validate()
    }
}

/// Builder for [`TransitionDescriptor`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TransitionDescriptorBuilder {
    descriptor: TransitionDescriptor,
}

impl TransitionDescriptorBuilder {
    /// Sets the dismissal edges.
    #[must_use]
    pub fn edges(mut self, edges: EdgeSet) -> Self {
        self.descriptor.edges = edges;
        self
    }

    /// Sets the resting corner radius.
    #[must_use]
    pub fn corner_radius(mut self, radius: f64) -> Self {
        self.descriptor.corner_radius = radius;
        self
    }

    /// Sets the surface shadow.
    #[must_use]
    pub fn shadow(mut self, shadow: ShadowOptions) -> Self {
        self.descriptor.shadow = Some(shadow);
        self
    }

    /// Sets the backdrop.
    #[must_use]
    pub fn backdrop(mut self, backdrop: BackdropStyle) -> Self {
        self.descriptor.backdrop = backdrop;
        self
    }

    /// Enables or disables interactive dismissal.
    #[must_use]
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.descriptor.is_interactive = interactive;
        self
    }

    /// Enables or disables tap-to-dismiss on the backdrop.
    #[must_use]
    pub fn dismiss_on_backdrop_tap(mut self, enabled: bool) -> Self {
        self.descriptor.dismiss_on_backdrop_tap = enabled;
        self
    }

    /// Plays `style` when a drag crosses the activation threshold.
    #[must_use]
    pub fn haptics(mut self, style: HapticStyle) -> Self {
        self.descriptor.haptics = Some(style);
        self
    }

    /// Sets the curve of automatic transitions.
    #[must_use]
    pub fn animation(mut self, curve: TimingCurve) -> Self {
        self.descriptor.animation = curve;
        self
    }

    /// Sets the dismissal thresholds.
    #[must_use]
    pub fn thresholds(mut self, thresholds: DismissThresholds) -> Self {
        self.descriptor.thresholds = thresholds;
        self
    }

    /// Validates and returns the descriptor.
    pub fn build(self) -> Result<TransitionDescriptor, DescriptorError> {
        self.descriptor.validate()?;
        Ok(self.descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_descriptor_is_valid() {
        let d = TransitionDescriptor::default();
        assert_eq!(d.validate(), Ok(()));
        assert_eq!(d.edges, EdgeSet::BOTTOM);
    }

    #[test]
    fn interactive_requires_an_edge() {
        let err = TransitionDescriptor::builder()
            .edges(EdgeSet::empty())
            .build()
            .unwrap_err();
        assert_eq!(err, DescriptorError::EmptyEdgeSet);

        // A non-interactive surface needs no edges.
        let ok = TransitionDescriptor::builder()
            .edges(EdgeSet::empty())
            .interactive(false)
            .build();
        assert!(ok.is_ok());
    }

    #[test]
    fn corner_radius_must_be_non_negative() {
        for radius in [-1.0, f64::NAN, f64::INFINITY] {
            let err = TransitionDescriptor::builder()
                .corner_radius(radius)
                .build()
                .unwrap_err();
            assert_eq!(err, DescriptorError::NegativeCornerRadius);
        }
    }

    #[test]
    fn thresholds_are_validated() {
        let err = TransitionDescriptor::builder()
            .thresholds(DismissThresholds {
                velocity_threshold: 0.0,
                ..DismissThresholds::default()
            })
            .build()
            .unwrap_err();
        assert_eq!(err, DescriptorError::InvalidThreshold);
    }

    #[test]
    fn errors_render_as_text() {
        use alloc::string::ToString;
        assert_eq!(
            DescriptorError::InvalidScaleFactor.to_string(),
            "scale factor must be in (0, 1]"
        );
    }
}
