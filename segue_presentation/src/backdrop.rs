// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backdrop and shadow styling, with fallbacks for hosts that lack effects.

use kurbo::Vec2;
use peniko::Color;

/// Default dimming colour: black at 40% opacity.
pub const DEFAULT_DIMMING_COLOR: Color = Color::from_rgba8(0, 0, 0, 102);

bitflags::bitflags! {
    /// Visual effects a host can render behind a presented surface.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct BackdropCapabilities: u8 {
        /// Gaussian blur of the content behind the backdrop.
        const BLUR  = 0b0000_0001;
        /// A translucent material ("glass") effect.
        const GLASS = 0b0000_0010;
    }
}

/// What is drawn between the presenting content and the presented surface.
#[derive(Clone, Copy, Debug)]
pub enum BackdropStyle {
    /// Nothing; the presenting content stays fully visible.
    None,
    /// A flat colour whose alpha follows the transition.
    Dimming(Color),
    /// A blur of the presenting content, tinted.
    Blur {
        /// Blur radius in points.
        radius: f64,
        /// Tint drawn over the blur.
        tint: Color,
    },
    /// A translucent material.
    Glass {
        /// Tint of the material.
        tint: Color,
    },
}

impl Default for BackdropStyle {
    fn default() -> Self {
        Self::Dimming(DEFAULT_DIMMING_COLOR)
    }
}

/// A [`BackdropStyle`] reduced to what the host can actually render.
#[derive(Clone, Copy, Debug)]
pub enum ResolvedBackdrop {
    /// Draw nothing.
    None,
    /// Fill with a colour.
    Color(Color),
    /// Blur, then tint.
    Blur {
        /// Blur radius in points.
        radius: f64,
        /// Tint drawn over the blur.
        tint: Color,
    },
    /// Native material.
    Glass {
        /// Tint of the material.
        tint: Color,
    },
}

impl BackdropStyle {
    /// Resolves this style against the host's capabilities.
    ///
    /// Glass falls back to blur, and blur falls back to its tint as a plain
    /// colour. The fallback is degraded but always renders something.
    #[must_use]
    pub fn resolve(self, capabilities: BackdropCapabilities) -> ResolvedBackdrop {
        match self {
            Self::None => ResolvedBackdrop::None,
            Self::Dimming(color) => ResolvedBackdrop::Color(color),
            Self::Glass { tint } if capabilities.contains(BackdropCapabilities::GLASS) => {
                ResolvedBackdrop::Glass { tint }
            }
            Self::Glass { tint } => Self::Blur {
                radius: GLASS_FALLBACK_BLUR_RADIUS,
                tint,
            }
            .resolve(capabilities),
            Self::Blur { radius, tint } if capabilities.contains(BackdropCapabilities::BLUR) => {
                ResolvedBackdrop::Blur { radius, tint }
            }
            Self::Blur { tint, .. } => {
                log::debug!("backdrop blur unsupported; falling back to a plain tint");
                ResolvedBackdrop::Color(tint)
            }
        }
    }
}

const GLASS_FALLBACK_BLUR_RADIUS: f64 = 20.0;

impl ResolvedBackdrop {
    /// Returns this backdrop with its opacity scaled by `visibility` in `[0, 1]`.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "colour channels are f32; visibility is in [0, 1]"
    )]
    pub fn faded(self, visibility: f64) -> Self {
        let v = visibility.clamp(0.0, 1.0) as f32;
        match self {
            Self::None => Self::None,
            Self::Color(c) => Self::Color(c.multiply_alpha(v)),
            Self::Blur { radius, tint } => Self::Blur {
                radius: radius * f64::from(v),
                tint: tint.multiply_alpha(v),
            },
            Self::Glass { tint } => Self::Glass {
                tint: tint.multiply_alpha(v),
            },
        }
    }
}

/// Drop shadow cast by a presented surface.
#[derive(Clone, Copy, Debug)]
pub struct ShadowOptions {
    /// Shadow colour; its alpha is multiplied by `opacity`.
    pub color: Color,
    /// Blur radius in points.
    pub radius: f64,
    /// Offset from the surface, in points.
    pub offset: Vec2,
    /// Opacity when fully presented.
    pub opacity: f64,
}

impl Default for ShadowOptions {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            radius: 20.0,
            offset: Vec2::new(0.0, 4.0),
            opacity: 0.15,
        }
    }
}

impl ShadowOptions {
    /// A shadow that draws nothing.
    pub const NONE: Self = Self {
        color: Color::TRANSPARENT,
        radius: 0.0,
        offset: Vec2::ZERO,
        opacity: 0.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    const TINT: Color = Color::from_rgba8(255, 255, 255, 128);

    #[test]
    fn glass_is_used_when_supported() {
        let resolved = BackdropStyle::Glass { tint: TINT }.resolve(BackdropCapabilities::all());
        assert!(matches!(resolved, ResolvedBackdrop::Glass { .. }));
    }

    #[test]
    fn glass_falls_back_to_blur_then_colour() {
        let style = BackdropStyle::Glass { tint: TINT };
        let blur = style.resolve(BackdropCapabilities::BLUR);
        assert!(matches!(blur, ResolvedBackdrop::Blur { radius, .. } if radius == GLASS_FALLBACK_BLUR_RADIUS));

        let plain = style.resolve(BackdropCapabilities::empty());
        match plain {
            ResolvedBackdrop::Color(c) => assert_eq!(c.components, TINT.components),
            other => panic!("expected a colour fallback, got {other:?}"),
        }
    }

    #[test]
    fn blur_without_support_becomes_its_tint() {
        let style = BackdropStyle::Blur {
            radius: 12.0,
            tint: TINT,
        };
        assert!(matches!(
            style.resolve(BackdropCapabilities::empty()),
            ResolvedBackdrop::Color(_)
        ));
        assert!(matches!(
            style.resolve(BackdropCapabilities::BLUR),
            ResolvedBackdrop::Blur { radius, .. } if radius == 12.0
        ));
    }

    #[test]
    fn fading_scales_alpha() {
        let dim = BackdropStyle::default().resolve(BackdropCapabilities::empty());
        let ResolvedBackdrop::Color(full) = dim else {
            panic!("dimming resolves to a colour");
        };
        let ResolvedBackdrop::Color(half) = dim.faded(0.5) else {
            panic!("fading keeps the variant");
        };
        assert!((half.components[3] - full.components[3] * 0.5).abs() < 1e-6);
        let ResolvedBackdrop::Color(gone) = dim.faded(-1.0) else {
            panic!("fading keeps the variant");
        };
        assert_eq!(gone.components[3], 0.0);
    }

    #[test]
    fn none_stays_none() {
        let resolved = BackdropStyle::None.resolve(BackdropCapabilities::all());
        assert!(matches!(resolved.faded(1.0), ResolvedBackdrop::None));
    }
}
