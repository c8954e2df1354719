// Copyright 2026 the Segue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect};

/// Linear interpolation between `a` and `b`.
///
/// `t` is not clamped, so values outside `[0, 1]` extrapolate.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Returns where `value` sits between `a` and `b`, as a fraction.
///
/// Returns `0.0` when `a == b`.
#[must_use]
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    let span = b - a;
    if span == 0.0 { 0.0 } else { (value - a) / span }
}

/// Interpolates every edge of a rectangle.
#[must_use]
pub fn lerp_rect(a: Rect, b: Rect, t: f64) -> Rect {
    Rect::new(
        lerp(a.x0, b.x0, t),
        lerp(a.y0, b.y0, t),
        lerp(a.x1, b.x1, t),
        lerp(a.y1, b.y1, t),
    )
}

/// Returns the affine transform mapping rectangle `from` onto rectangle `to`.
///
/// Both rectangles are in the same (container) coordinate space. The
/// transform scales non-uniformly so that the corners line up exactly.
/// Degenerate `from` rectangles produce a pure translation between origins.
#[must_use]
pub fn rect_transform(from: Rect, to: Rect) -> Affine {
    let from = from.abs();
    let to = to.abs();
    if from.width() <= 0.0 || from.height() <= 0.0 {
        return Affine::translate(to.origin() - from.origin());
    }
    let sx = to.width() / from.width();
    let sy = to.height() / from.height();
    Affine::translate(to.origin().to_vec2())
        * Affine::scale_non_uniform(sx, sy)
        * Affine::translate(-from.origin().to_vec2())
}

/// Returns the axis-aligned bounding box of `rect` after applying `transform`.
#[must_use]
pub fn transformed_rect(transform: Affine, rect: Rect) -> Rect {
    // Transform the four corners and take their bounding box.
    let p0 = rect.origin();
    let p1 = Point::new(rect.max_x(), rect.y0);
    let p2 = Point::new(rect.x0, rect.max_y());
    let p3 = Point::new(rect.max_x(), rect.max_y());
    let q0 = transform * p0;
    let q1 = transform * p1;
    let q2 = transform * p2;
    let q3 = transform * p3;
    let min_x = q0.x.min(q1.x).min(q2.x).min(q3.x);
    let min_y = q0.y.min(q1.y).min(q2.y).min(q3.y);
    let max_x = q0.x.max(q1.x).max(q2.x).max(q3.x);
    let max_y = q0.y.max(q1.y).max(q2.y).max(q3.y);
    Rect::new(min_x, min_y, max_x, max_y)
}

/// Returns the vertical scale component of `transform`.
///
/// For the scale+translate transforms produced in this workspace this is the
/// `d` coefficient; rotation is not modelled.
#[must_use]
pub fn vertical_scale(transform: Affine) -> f64 {
    transform.as_coeffs()[3]
}

/// Interpolates a corner radius by how far a surface has shrunk.
///
/// At `scale >= 1.0` the surface is at full size and `full_radius` is
/// returned. At `scale <= minimum_scale` the surface is as small as it gets
/// and `shrunk_radius` is returned. In between, the radius follows the scale
/// linearly.
#[must_use]
pub fn corner_radius_for_scale(
    scale: f64,
    minimum_scale: f64,
    full_radius: f64,
    shrunk_radius: f64,
) -> f64 {
    if minimum_scale >= 1.0 {
        return full_radius;
    }
    let t = inverse_lerp(1.0, minimum_scale, scale).clamp(0.0, 1.0);
    lerp(full_radius, shrunk_radius, t).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rect_close(a: Rect, b: Rect) {
        for (x, y) in [(a.x0, b.x0), (a.y0, b.y0), (a.x1, b.x1), (a.y1, b.y1)] {
            assert!((x - y).abs() < 1e-9, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn lerp_and_inverse_are_consistent() {
        let v = lerp(10.0, 30.0, 0.25);
        assert_eq!(v, 15.0);
        assert_eq!(inverse_lerp(10.0, 30.0, v), 0.25);
        assert_eq!(inverse_lerp(5.0, 5.0, 7.0), 0.0);
    }

    #[test]
    fn lerp_rect_hits_endpoints() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(100.0, 50.0, 300.0, 250.0);
        assert_rect_close(lerp_rect(a, b, 0.0), a);
        assert_rect_close(lerp_rect(a, b, 1.0), b);
        assert_rect_close(lerp_rect(a, b, 0.5), Rect::new(50.0, 25.0, 155.0, 130.0));
    }

    #[test]
    fn rect_transform_maps_corners() {
        let from = Rect::new(0.0, 0.0, 400.0, 800.0);
        let to = Rect::new(20.0, 100.0, 120.0, 180.0);
        let t = rect_transform(from, to);
        assert_rect_close(transformed_rect(t, from), to);
        assert!((vertical_scale(t) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn rect_transform_identity_for_equal_rects() {
        let r = Rect::new(3.0, 4.0, 50.0, 60.0);
        let t = rect_transform(r, r);
        assert_rect_close(transformed_rect(t, r), r);
        assert!((vertical_scale(t) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rect_transform_degenerate_source_translates() {
        let from = Rect::new(10.0, 10.0, 10.0, 10.0);
        let to = Rect::new(30.0, 50.0, 60.0, 80.0);
        let t = rect_transform(from, to);
        assert_eq!(t * from.origin(), to.origin());
    }

    #[test]
    fn corner_radius_follows_scale() {
        assert_eq!(corner_radius_for_scale(1.0, 0.5, 40.0, 10.0), 40.0);
        assert_eq!(corner_radius_for_scale(0.5, 0.5, 40.0, 10.0), 10.0);
        assert_eq!(corner_radius_for_scale(0.75, 0.5, 40.0, 10.0), 25.0);
        // Out of range scales clamp to the endpoints.
        assert_eq!(corner_radius_for_scale(1.2, 0.5, 40.0, 10.0), 40.0);
        assert_eq!(corner_radius_for_scale(0.1, 0.5, 40.0, 10.0), 10.0);
        // No room to shrink.
        assert_eq!(corner_radius_for_scale(0.3, 1.0, 40.0, 10.0), 40.0);
    }
}
