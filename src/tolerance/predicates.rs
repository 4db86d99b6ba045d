//! Scalar and geometric predicates with explicit tolerance.

use crate::primitives::Point2;
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are counter-clockwise (positive area).
    CounterClockwise,
    /// Points are clockwise (negative area).
    Clockwise,
    /// Points are collinear (within tolerance).
    Collinear,
}

/// Computes the orientation of three points with tolerance.
///
/// - `CounterClockwise` if `c` is to the left of the line from `a` to `b`
/// - `Clockwise` if `c` is to the right of the line from `a` to `b`
/// - `Collinear` if twice the signed triangle area is within `eps` of zero
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Orientation {
    let cross = (b - a).cross(c - a);

    if cross > eps {
        Orientation::CounterClockwise
    } else if cross < -eps {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Returns `true` if `a` and `b` differ by at most `eps`.
#[inline]
pub fn approximately<F: Float>(a: F, b: F, eps: F) -> bool {
    (a - b).abs() <= eps
}

/// Returns `true` if `v` lies in `[min, max]`, or within `eps` of either bound.
#[inline]
pub fn between<F: Float>(v: F, min: F, max: F, eps: F) -> bool {
    (min <= v && v <= max) || approximately(v, min, eps) || approximately(v, max, eps)
}

/// Signed angle, in radians, from `v1 - origin` to `v2 - origin`.
///
/// Positive when `v2` lies counter-clockwise of `v1` as seen from `origin`;
/// the result is in `(-π, π]`.
#[inline]
pub fn signed_angle<F: Float>(origin: Point2<F>, v1: Point2<F>, v2: Point2<F>) -> F {
    let a = v1 - origin;
    let b = v2 - origin;
    a.cross(b).atan2(a.dot(b))
}

/// Linearly maps `v` from the range `[ds, de]` onto `[ts, te]`.
#[inline]
pub fn map_range<F: Float>(v: F, ds: F, de: F, ts: F, te: F) -> F {
    let d1 = de - ds;
    let d2 = te - ts;
    ts + d2 * ((v - ds) / d1)
}
