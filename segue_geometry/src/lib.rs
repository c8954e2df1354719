// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segue Geometry: stateless math for interactive presentation transitions.
//!
//! This crate provides the small, pure building blocks that the rest of the
//! Segue workspace leans on while a presented surface follows a finger:
//! - Edge sets describing which screen edges a surface may be dismissed toward.
//! - A friction (rubber‑band) curve that damps drag distance as it grows.
//! - Frame, transform, and corner‑radius interpolation.
//! - Safe‑area compensation for surfaces whose laid‑out frame differs from
//!   their target frame while a transform is applied.
//!
//! Nothing here holds state. Callers own their scene and feed values in;
//! results are plain [`kurbo`] values.
//!
//! ## Edges
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use segue_geometry::{Edge, EdgeSet, LayoutDirection};
//!
//! let edges = EdgeSet::BOTTOM | EdgeSet::TRAILING;
//! assert!(edges.contains_edge(Edge::Bottom));
//!
//! // Dragging down by 120pt on a 400pt tall surface is 30% of the way out.
//! let size = Size::new(300.0, 400.0);
//! let progress = Edge::Bottom.progress(Vec2::new(0.0, 120.0), size, LayoutDirection::LeftToRight);
//! assert!((progress - 0.3).abs() < 1e-9);
//! ```
//!
//! ## Friction
//!
//! ```rust
//! use segue_geometry::FrictionCurve;
//!
//! let curve = FrictionCurve::default();
//! // Small drags pass through at the curve's slope, large drags saturate.
//! assert!(curve.apply(10.0) < 10.0);
//! assert!(curve.apply(10_000.0) < curve.distance);
//! // The curve is odd: direction is preserved.
//! assert_eq!(curve.apply(-25.0), -curve.apply(25.0));
//! ```
//!
//! ## Matched frames
//!
//! ```rust
//! use kurbo::Rect;
//! use segue_geometry::{rect_transform, transformed_rect};
//!
//! let source = Rect::new(20.0, 40.0, 120.0, 140.0);
//! let container = Rect::new(0.0, 0.0, 400.0, 800.0);
//!
//! // The transform that makes the full-screen surface look like the source thumbnail.
//! let t = rect_transform(container, source);
//! let shown = transformed_rect(t, container);
//! assert!((shown.x0 - source.x0).abs() < 1e-9);
//! assert!((shown.y1 - source.y1).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod edge;
mod friction;
mod interpolate;
mod safe_area;

pub use edge::{Axis, Edge, EdgeSet, LayoutDirection};
pub use friction::{DEFAULT_FRICTION_COEFFICIENT, DEFAULT_FRICTION_DISTANCE, FrictionCurve, friction_curve};
pub use interpolate::{
    corner_radius_for_scale, inverse_lerp, lerp, lerp_rect, rect_transform, transformed_rect,
    vertical_scale,
};
pub use safe_area::{additional_safe_area_insets, safe_area_overlap};
