//! De Casteljau subdivision.

use super::bezier::Bezier;
use crate::primitives::Point2;
use crate::tolerance::map_range;
use num_traits::Float;

/// The two halves of a curve cut at one parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitResult<F> {
    /// Curve over `[0, t]`.
    pub left: Bezier<F>,
    /// Curve over `[t, 1]`.
    pub right: Bezier<F>,
    /// The de Casteljau triangle both halves were read from.
    pub hull: Vec<Point2<F>>,
}

impl<F: Float> Bezier<F> {
    /// Every intermediate point of one de Casteljau sweep at `t`.
    ///
    /// The control points come first, then each row of interpolated points
    /// down to the single point on the curve, so the result holds the
    /// triangular number `(n + 1)(n + 2) / 2` of points for order `n`.
    pub fn hull(&self, t: F) -> Vec<Point2<F>> {
        let n = self.points().len();
        let mut hull = Vec::with_capacity(n * (n + 1) / 2);
        hull.extend_from_slice(self.points());

        let mut row_start = 0;
        for row_len in (1..n).rev() {
            for i in 0..row_len {
                let a = hull[row_start + i];
                let b = hull[row_start + i + 1];
                hull.push(a.lerp(b, t));
            }
            row_start += row_len + 1;
        }
        hull
    }

    /// Cuts the curve at `t`.
    ///
    /// Both halves share the point `position(t)` and carry their intervals
    /// projected through this curve's interval.
    ///
    /// # Example
    ///
    /// ```
    /// use curvum::{Bezier, Point2};
    ///
    /// let curve: Bezier<f64> = Bezier::cubic(
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(0.0, 100.0),
    ///     Point2::new(100.0, 100.0),
    ///     Point2::new(100.0, 0.0),
    /// );
    ///
    /// let halves = curve.split(0.5);
    /// assert_eq!(halves.left.end(), halves.right.start());
    /// assert_eq!(halves.left.interval().end, 0.5);
    /// ```
    pub fn split(&self, t: F) -> SplitResult<F> {
        let hull = self.hull(t);
        let n = self.points().len();

        let mut left = Vec::with_capacity(n);
        let mut right = Vec::with_capacity(n);
        let mut row_start = 0;
        for row_len in (1..=n).rev() {
            left.push(hull[row_start]);
            right.push(hull[row_start + row_len - 1]);
            row_start += row_len;
        }
        right.reverse();

        let interval = self.interval();
        SplitResult {
            left: Bezier::from_control_points(left).with_interval(interval.sub(F::zero(), t)),
            right: Bezier::from_control_points(right).with_interval(interval.sub(t, F::one())),
            hull,
        }
    }

    /// The piece of the curve between parameters `t1` and `t2`.
    pub fn split_range(&self, t1: F, t2: F) -> Self {
        if t1 == F::zero() && t2 != F::zero() {
            return self.split(t2).left;
        }
        let right = self.split(t1).right;
        if t2 == F::one() {
            return right;
        }
        let local = map_range(t2, t1, F::one(), F::zero(), F::one());
        right.split(local).left
    }

    /// Cuts the curve at `t`, keeping only the two halves.
    pub fn break_at(&self, t: F) -> (Self, Self) {
        let SplitResult { left, right, .. } = self.split(t);
        (left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::Interval;
    use approx::assert_relative_eq;

    fn bulge() -> Bezier<f64> {
        Bezier::cubic(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 100.0),
            Point2::new(100.0, 100.0),
            Point2::new(100.0, 0.0),
        )
    }

    #[test]
    fn test_hull_sizes() {
        assert_eq!(bulge().hull(0.3).len(), 10);
        let quad: Bezier<f64> = Bezier::quadratic(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(2.0, 0.0),
        );
        let hull = quad.hull(0.5);
        assert_eq!(hull.len(), 6);
        assert_eq!(hull[3], Point2::new(0.5, 1.0));
        assert_eq!(hull[4], Point2::new(1.5, 1.0));
        assert_eq!(hull[5], Point2::new(1.0, 1.0));
    }

    #[test]
    fn test_split_uses_fixed_hull_indices() {
        let curve = bulge();
        let s = curve.split(0.3);
        let h = &s.hull;
        assert_eq!(s.left.points(), &[h[0], h[4], h[7], h[9]]);
        assert_eq!(s.right.points(), &[h[9], h[8], h[6], h[3]]);

        let quad: Bezier<f64> = Bezier::quadratic(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(2.0, 0.0),
        );
        let q = quad.split(0.3);
        assert_eq!(q.left.points(), &[q.hull[0], q.hull[3], q.hull[5]]);
        assert_eq!(q.right.points(), &[q.hull[5], q.hull[4], q.hull[2]]);
    }

    #[test]
    fn test_split_junction_matches_position() {
        let curve = bulge();
        for &t in &[0.1, 0.37, 0.5, 0.9] {
            let s = curve.split(t);
            let p = curve.position(t);
            assert_relative_eq!(s.left.end().x, p.x, epsilon = 1e-10);
            assert_relative_eq!(s.left.end().y, p.y, epsilon = 1e-10);
            assert_eq!(s.left.end(), s.right.start());
        }
    }

    #[test]
    fn test_split_halves_follow_curve() {
        let curve = bulge();
        let s = curve.split(0.4);
        let a = s.left.position(0.5);
        let b = curve.position(0.2);
        assert_relative_eq!(a.x, b.x, epsilon = 1e-10);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-10);

        let c = s.right.position(0.5);
        let d = curve.position(0.7);
        assert_relative_eq!(c.x, d.x, epsilon = 1e-10);
        assert_relative_eq!(c.y, d.y, epsilon = 1e-10);
    }

    #[test]
    fn test_split_intervals_are_nested() {
        let s = bulge().split(0.5);
        assert_eq!(s.left.interval(), Interval::new(0.0, 0.5));
        assert_eq!(s.right.interval(), Interval::new(0.5, 1.0));

        let inner = s.right.split(0.5);
        assert_eq!(inner.left.interval(), Interval::new(0.5, 0.75));
        assert_eq!(inner.right.interval(), Interval::new(0.75, 1.0));
    }

    #[test]
    fn test_split_range() {
        let curve = bulge();
        let piece = curve.split_range(0.25, 0.75);
        assert_relative_eq!(piece.interval().start, 0.25, epsilon = 1e-12);
        assert_relative_eq!(piece.interval().end, 0.75, epsilon = 1e-12);

        let start = curve.position(0.25);
        let end = curve.position(0.75);
        assert_relative_eq!(piece.start().x, start.x, epsilon = 1e-10);
        assert_relative_eq!(piece.start().y, start.y, epsilon = 1e-10);
        assert_relative_eq!(piece.end().x, end.x, epsilon = 1e-10);
        assert_relative_eq!(piece.end().y, end.y, epsilon = 1e-10);
    }

    #[test]
    fn test_split_range_shortcuts() {
        let curve = bulge();
        assert_eq!(curve.split_range(0.0, 0.4), curve.split(0.4).left);
        assert_eq!(curve.split_range(0.6, 1.0), curve.split(0.6).right);
    }

    #[test]
    fn test_break_at() {
        let (left, right) = bulge().break_at(0.5);
        assert_eq!(left.end(), right.start());
        assert_relative_eq!(left.end().y, 75.0, epsilon = 1e-10);
    }

    #[test]
    fn test_f32_support() {
        let curve: Bezier<f32> = Bezier::line(Point2::new(0.0, 0.0), Point2::new(3.0, 0.0));
        let s = curve.split(0.5);
        assert_relative_eq!(s.left.end().x, 1.5, epsilon = 1e-6);
    }
}
