// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning transition progress into concrete surface and chrome values.

use kurbo::{Affine, Insets, Rect};

use segue_geometry::{inverse_lerp, lerp, transformed_rect};
use segue_transition::TransitionKind;

use crate::backdrop::{ResolvedBackdrop, ShadowOptions};

/// Everything a host applies to the presented surface for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceFrame {
    /// Resting frame the surface is laid out at, in container coordinates.
    pub frame: Rect,
    /// Transform applied on top of the layout.
    pub transform: Affine,
    /// Corner radius of the surface.
    pub corner_radius: f64,
    /// Opacity of the surface.
    pub opacity: f64,
    /// Safe-area insets to add so content does not reflow under `transform`.
    pub additional_safe_area_insets: Insets,
}

impl SurfaceFrame {
    /// Where the surface appears on screen: its frame under its transform.
    #[must_use]
    pub fn presentation_frame(&self) -> Rect {
        transformed_rect(self.transform, self.frame)
    }
}

/// Everything a host applies behind the presented surface for one frame.
#[derive(Clone, Copy, Debug)]
pub struct ChromeFrame {
    /// How present the surface is, `0.0` dismissed to `1.0` at rest.
    pub visibility: f64,
    /// The backdrop, faded by `visibility`.
    pub backdrop: ResolvedBackdrop,
    /// The shadow, with its opacity scaled by `visibility`.
    pub shadow: Option<ShadowOptions>,
}

/// How present a surface is when a transition of `kind` is at `percent`.
#[must_use]
pub fn visibility(kind: TransitionKind, percent: f64) -> f64 {
    let v = match kind {
        TransitionKind::Presentation => percent,
        TransitionKind::Dismissal => 1.0 - percent,
    };
    v.clamp(0.0, 1.0)
}

/// Interpolates two affine transforms coefficient by coefficient.
///
/// Exact for the scale-and-translate transforms used by presentations.
#[must_use]
pub fn lerp_affine(a: Affine, b: Affine, t: f64) -> Affine {
    let a = a.as_coeffs();
    let b = b.as_coeffs();
    Affine::new(core::array::from_fn(|i| lerp(a[i], b[i], t)))
}

/// Maps the progress of one transition to the transform of its surface.
///
/// An animator moves the surface from `from` to `to` while the transition's
/// completion fraction moves from `from_percent` to `to_percent`. Presenting
/// and dismissing run between identity and the dismissed transform; settling
/// after a drag runs from wherever the drag released the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionAnimator {
    from: Affine,
    to: Affine,
    from_percent: f64,
    to_percent: f64,
}

impl TransitionAnimator {
    /// Brings a surface in from `dismissed`.
    #[must_use]
    pub fn presentation(dismissed: Affine) -> Self {
        Self::settle(dismissed, Affine::IDENTITY, 0.0, 1.0)
    }

    /// Takes a surface out to `dismissed`.
    #[must_use]
    pub fn dismissal(dismissed: Affine) -> Self {
        Self::settle(Affine::IDENTITY, dismissed, 0.0, 1.0)
    }

    /// Moves a surface from `release` to `target` as progress goes from
    /// `from_percent` to `to_percent`.
    #[must_use]
    pub fn settle(release: Affine, target: Affine, from_percent: f64, to_percent: f64) -> Self {
        Self {
            from: release,
            to: target,
            from_percent,
            to_percent,
        }
    }

    /// How far along the animator is at `percent`, in `[0, 1]`.
    #[must_use]
    pub fn fraction_at(&self, percent: f64) -> f64 {
        if self.from_percent == self.to_percent {
            return 1.0;
        }
        inverse_lerp(self.from_percent, self.to_percent, percent).clamp(0.0, 1.0)
    }

    /// The surface transform at `percent`.
    ///
    /// Reaching the end yields the target transform exactly.
    #[must_use]
    pub fn transform_at(&self, percent: f64) -> Affine {
        let t = self.fraction_at(percent);
        if t >= 1.0 {
            self.to
        } else if t <= 0.0 {
            self.from
        } else {
            lerp_affine(self.from, self.to, t)
        }
    }

    /// The transform the animator ends at.
    #[must_use]
    pub fn target(&self) -> Affine {
        self.to
    }
}
