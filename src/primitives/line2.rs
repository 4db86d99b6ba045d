//! 2D infinite line type.

use super::{Point2, Segment2, Vec2};
use num_traits::Float;

/// An infinite line through `origin` along `direction`.
///
/// Lines locate scaling pivots (where two endpoint normals meet) and define
/// local frames: [`Line2::to_local`] maps points into the frame where the
/// line runs along the positive x-axis from the origin. Curve/line
/// intersection reduces to root finding in that frame.
///
/// # Example
///
/// ```
/// use curvum::primitives::{Line2, Point2};
///
/// let line: Line2<f64> = Line2::from_points(Point2::new(1.0, 1.0), Point2::new(1.0, 5.0));
/// let local = line.to_local(Point2::new(0.0, 3.0));
/// assert!((local.x - 2.0).abs() < 1e-12);
/// assert!((local.y - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2<F> {
    pub origin: Point2<F>,
    /// Not necessarily unit length.
    pub direction: Vec2<F>,
}

impl<F: Float> Line2<F> {
    #[inline]
    pub fn new(origin: Point2<F>, direction: Vec2<F>) -> Self {
        Self { origin, direction }
    }

    /// The line through `from` and `to`, directed from `from`.
    #[inline]
    pub fn from_points(from: Point2<F>, to: Point2<F>) -> Self {
        Self::new(from, to - from)
    }

    /// The line carrying `segment`.
    #[inline]
    pub fn from_segment(segment: &Segment2<F>) -> Self {
        Self::new(segment.start, segment.direction())
    }

    /// Where the two lines cross, with the parameter of the crossing along
    /// each line's direction. `None` if the lines are parallel.
    pub fn intersect_line(&self, other: &Self) -> Option<(Point2<F>, F, F)> {
        let denom = self.direction.cross(other.direction);
        if denom.abs() < F::epsilon() {
            return None;
        }

        let between = other.origin - self.origin;
        let s = between.cross(other.direction) / denom;
        let u = between.cross(self.direction) / denom;
        Some((self.origin + self.direction * s, s, u))
    }

    /// Maps `point` into this line's frame.
    ///
    /// x is the distance along the line from `origin`; y is the signed
    /// distance from the line, positive on the left.
    #[inline]
    pub fn to_local(&self, point: Point2<F>) -> Point2<F> {
        Point2::from((point - self.origin).rotated(-self.direction.angle()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_intersect_normals_at_pivot() {
        // Normals at both ends of a quarter circle meet at its center.
        let a: Line2<f64> = Line2::new(Point2::new(10.0, 0.0), Vec2::new(-1.0, 0.0));
        let b = Line2::new(Point2::new(0.0, 10.0), Vec2::new(0.0, -1.0));

        let (point, s, u) = a.intersect_line(&b).unwrap();
        assert_relative_eq!(point.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(point.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(s, 10.0, epsilon = 1e-12);
        assert_relative_eq!(u, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_intersect_parallel() {
        let a: Line2<f64> = Line2::new(Point2::origin(), Vec2::new(1.0, 1.0));
        let b = Line2::from_points(Point2::new(0.0, 3.0), Point2::new(2.0, 5.0));
        assert!(a.intersect_line(&b).is_none());
    }

    #[test]
    fn test_to_local_diagonal() {
        let line: Line2<f64> = Line2::from_points(Point2::new(1.0, 1.0), Point2::new(2.0, 2.0));

        let on_line = line.to_local(Point2::new(3.0, 3.0));
        assert_relative_eq!(on_line.x, 8.0_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(on_line.y, 0.0, epsilon = 1e-12);

        let left = line.to_local(Point2::new(1.0, 2.0));
        assert_relative_eq!(left.y, 0.5_f64.sqrt(), epsilon = 1e-12);
        let right = line.to_local(Point2::new(2.0, 1.0));
        assert_relative_eq!(right.y, -(0.5_f64.sqrt()), epsilon = 1e-12);
    }

    #[test]
    fn test_f32_support() {
        let line: Line2<f32> = Line2::from_segment(&Segment2::from_coords(0.0, 0.0, 0.0, 10.0));
        let local = line.to_local(Point2::new(-1.0, 4.0));
        assert!((local.x - 4.0).abs() < 1e-5);
        assert!((local.y - 1.0).abs() < 1e-5);
    }
}
