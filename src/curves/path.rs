//! Composite shapes: poly-Béziers and the pieces arc fitting produces.

use super::arc_fit::FittedArc;
use super::bezier::{epsilon, Bezier};
use super::interval::Interval;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;
use std::fmt;

/// A straight piece standing in for part of a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePiece<F> {
    /// The straight segment.
    pub segment: Segment2<F>,
    /// Parameter span of the curve this piece replaces.
    pub interval: Interval<F>,
}

impl<F: Float> LinePiece<F> {
    /// Creates a new line piece.
    #[inline]
    pub fn new(segment: Segment2<F>, interval: Interval<F>) -> Self {
        Self { segment, interval }
    }

    /// Splits the piece at `t`.
    pub fn break_at(&self, t: F) -> (Self, Self) {
        let (left, right) = self.segment.split_at(t);
        (
            Self::new(left, self.interval.sub(F::zero(), t)),
            Self::new(right, self.interval.sub(t, F::one())),
        )
    }

    /// Parameters on this piece where `other` crosses it.
    pub fn intersect_segment(&self, other: &Segment2<F>) -> Vec<F> {
        let eps: F = epsilon();
        let dir = self.segment.direction();
        let other_dir = other.direction();
        let denom = dir.cross(other_dir);
        if denom.abs() < F::epsilon() {
            return vec![];
        }

        let rel = other.start - self.segment.start;
        let t = rel.cross(other_dir) / denom;
        let u = rel.cross(dir) / denom;
        let inside = |v: F| v >= -eps && v <= F::one() + eps;
        if inside(t) && inside(u) {
            vec![t.max(F::zero()).min(F::one())]
        } else {
            vec![]
        }
    }
}

/// A sequence of curves treated as one path.
///
/// The path parameter is spread uniformly over the curves: with `n` curves,
/// curve `i` covers `[i / n, (i + 1) / n]` regardless of its length.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyBezier<F> {
    curves: Vec<Bezier<F>>,
    interval: Interval<F>,
}

impl<F: Float> PolyBezier<F> {
    /// Creates a path from a list of curves.
    pub fn new(curves: Vec<Bezier<F>>) -> Self {
        Self {
            curves,
            interval: Interval::unit(),
        }
    }

    /// The member curves, in order.
    pub fn curves(&self) -> &[Bezier<F>] {
        &self.curves
    }

    /// Number of member curves.
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Returns `true` if the path has no curves.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Iterates over the member curves.
    pub fn iter(&self) -> std::slice::Iter<'_, Bezier<F>> {
        self.curves.iter()
    }

    /// Parameter interval on an ancestor shape.
    pub fn interval(&self) -> Interval<F> {
        self.interval
    }

    /// Sets the parameter interval.
    pub fn set_interval(&mut self, interval: Interval<F>) {
        self.interval = interval;
    }

    /// Point at path parameter `t`.
    ///
    /// Returns `None` for an empty path.
    pub fn position(&self, t: F) -> Option<Point2<F>> {
        let (i, local) = self.locate(t)?;
        Some(self.curves[i].position(local))
    }

    /// Total length of the member curves.
    pub fn length(&self) -> F {
        self.curves
            .iter()
            .fold(F::zero(), |acc, c| acc + c.length())
    }

    /// Splits the path at `t`, cutting the member curve that contains it.
    pub fn break_at(&self, t: F) -> (Self, Self) {
        let Some((i, local)) = self.locate(t) else {
            return (self.clone(), self.clone());
        };

        let mut left: Vec<Bezier<F>> = self.curves[..i].to_vec();
        let mut right = Vec::with_capacity(self.curves.len() - i);
        let eps: F = epsilon();
        if local <= eps {
            right.push(self.curves[i].clone());
        } else if local >= F::one() - eps {
            left.push(self.curves[i].clone());
        } else {
            let (a, b) = self.curves[i].break_at(local);
            left.push(a);
            right.push(b);
        }
        right.extend_from_slice(&self.curves[i + 1..]);

        let mut l = Self::new(left);
        let mut r = Self::new(right);
        l.interval = self.interval.sub(F::zero(), t);
        r.interval = self.interval.sub(t, F::one());
        (l, r)
    }

    /// Path parameters where `segment` crosses the path, ascending.
    pub fn intersect_segment(&self, segment: &Segment2<F>) -> Vec<F> {
        let n = F::from(self.curves.len()).unwrap_or_else(F::one);
        self.curves
            .iter()
            .enumerate()
            .flat_map(|(i, c)| {
                let offset = F::from(i).unwrap_or_else(F::zero);
                c.intersect_segment(segment)
                    .into_iter()
                    .map(move |t| (offset + t) / n)
            })
            .collect()
    }

    /// Member index and local parameter for path parameter `t`.
    fn locate(&self, t: F) -> Option<(usize, F)> {
        let n = self.curves.len();
        if n == 0 {
            return None;
        }
        let scaled = t.max(F::zero()).min(F::one()) * F::from(n)?;
        let i = scaled.floor().to_usize()?.min(n - 1);
        Some((i, scaled - F::from(i)?))
    }
}

impl<'a, F> IntoIterator for &'a PolyBezier<F> {
    type Item = &'a Bezier<F>;
    type IntoIter = std::slice::Iter<'a, Bezier<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.curves.iter()
    }
}

impl<F: Float + fmt::Display> fmt::Display for PolyBezier<F> {
    /// Writes each member curve's path data, separated by spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, curve) in self.curves.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", curve)?;
        }
        Ok(())
    }
}

/// Any piece a path can be made of.
#[derive(Debug, Clone, PartialEq)]
pub enum PathShape<F> {
    /// A Bézier curve.
    Bezier(Bezier<F>),
    /// A straight line.
    Line(LinePiece<F>),
    /// A circular arc.
    Arc(FittedArc<F>),
    /// A sequence of curves.
    Poly(PolyBezier<F>),
}

impl<F: Float> PathShape<F> {
    /// Point at local parameter `t`.
    ///
    /// An empty [`PathShape::Poly`] has no points and yields a point with NaN
    /// coordinates; use [`PolyBezier::position`] to get `None` instead.
    pub fn position(&self, t: F) -> Point2<F> {
        match self {
            Self::Bezier(c) => c.position(t),
            Self::Line(l) => l.segment.point_at(t),
            Self::Arc(a) => a.position(t),
            Self::Poly(p) => p
                .position(t)
                .unwrap_or_else(|| Point2::new(F::nan(), F::nan())),
        }
    }

    /// Length of the shape.
    pub fn length(&self) -> F {
        match self {
            Self::Bezier(c) => c.length(),
            Self::Line(l) => l.segment.length(),
            Self::Arc(a) => a.length(),
            Self::Poly(p) => p.length(),
        }
    }

    /// Parameter interval on the ancestor curve.
    pub fn interval(&self) -> Interval<F> {
        match self {
            Self::Bezier(c) => c.interval(),
            Self::Line(l) => l.interval,
            Self::Arc(a) => a.interval,
            Self::Poly(p) => p.interval(),
        }
    }

    /// Replaces the parameter interval.
    pub fn set_interval(&mut self, interval: Interval<F>) {
        match self {
            Self::Bezier(c) => c.set_interval(interval),
            Self::Line(l) => l.interval = interval,
            Self::Arc(a) => a.interval = interval,
            Self::Poly(p) => p.set_interval(interval),
        }
    }

    /// Splits the shape at `t` into two shapes of the same kind.
    pub fn break_at(&self, t: F) -> (Self, Self) {
        match self {
            Self::Bezier(c) => {
                let (a, b) = c.break_at(t);
                (Self::Bezier(a), Self::Bezier(b))
            }
            Self::Line(l) => {
                let (a, b) = l.break_at(t);
                (Self::Line(a), Self::Line(b))
            }
            Self::Arc(arc) => {
                let (a, b) = arc.break_at(t);
                (Self::Arc(a), Self::Arc(b))
            }
            Self::Poly(p) => {
                let (a, b) = p.break_at(t);
                (Self::Poly(a), Self::Poly(b))
            }
        }
    }

    /// Local parameters where `segment` crosses the shape.
    pub fn intersect_segment(&self, segment: &Segment2<F>) -> Vec<F> {
        match self {
            Self::Bezier(c) => c.intersect_segment(segment),
            Self::Line(l) => l.intersect_segment(segment),
            Self::Arc(a) => a.intersect_segment(segment),
            Self::Poly(p) => p.intersect_segment(segment),
        }
    }
}

impl<F> From<Bezier<F>> for PathShape<F> {
    fn from(curve: Bezier<F>) -> Self {
        Self::Bezier(curve)
    }
}

impl<F> From<PolyBezier<F>> for PathShape<F> {
    fn from(poly: PolyBezier<F>) -> Self {
        Self::Poly(poly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn zigzag() -> PolyBezier<f64> {
        PolyBezier::new(vec![
            Bezier::line(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)),
            Bezier::line(Point2::new(10.0, 0.0), Point2::new(10.0, 10.0)),
        ])
    }

    #[test]
    fn test_poly_position_is_uniform_per_curve() {
        let poly = zigzag();
        assert_eq!(poly.len(), 2);

        let quarter = poly.position(0.25).unwrap();
        assert_relative_eq!(quarter.x, 5.0, epsilon = 1e-12);
        let mid = poly.position(0.5).unwrap();
        assert_relative_eq!(mid.x, 10.0, epsilon = 1e-12);
        assert_relative_eq!(mid.y, 0.0, epsilon = 1e-12);
        let end = poly.position(1.0).unwrap();
        assert_relative_eq!(end.y, 10.0, epsilon = 1e-12);

        assert!(PolyBezier::<f64>::new(vec![]).position(0.5).is_none());
    }

    #[test]
    fn test_poly_length() {
        assert_relative_eq!(zigzag().length(), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_poly_break_at() {
        let (left, right) = zigzag().break_at(0.75);
        assert_eq!(left.len(), 2);
        assert_eq!(right.len(), 1);
        assert_relative_eq!(left.curves()[1].end().y, 5.0, epsilon = 1e-9);
        assert_relative_eq!(right.curves()[0].start().y, 5.0, epsilon = 1e-9);
        assert_relative_eq!(left.interval().end, 0.75, epsilon = 1e-12);
        assert_relative_eq!(right.interval().start, 0.75, epsilon = 1e-12);

        let (left, right) = zigzag().break_at(0.5);
        assert_eq!(left.len(), 1);
        assert_eq!(right.len(), 1);
    }

    #[test]
    fn test_poly_intersect_segment() {
        let poly = zigzag();
        let ts = poly.intersect_segment(&Segment2::from_coords(5.0, -1.0, 12.0, 6.0));
        assert_eq!(ts.len(), 2);
        assert_relative_eq!(poly.position(ts[0]).unwrap().y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(poly.position(ts[1]).unwrap().x, 10.0, epsilon = 1e-6);
        assert!(ts[0] < 0.5 && ts[1] > 0.5);
    }

    #[test]
    fn test_poly_display() {
        let poly = PolyBezier::new(vec![
            Bezier::quadratic(
                Point2::new(0.0_f64, 0.0),
                Point2::new(1.0, 2.0),
                Point2::new(2.0, 0.0),
            ),
            Bezier::quadratic(
                Point2::new(2.0, 0.0),
                Point2::new(3.0, -2.0),
                Point2::new(4.0, 0.0),
            ),
        ]);
        assert_eq!(poly.to_string(), "M 0 0 Q 1 2 2 0 M 2 0 Q 3 -2 4 0");
    }

    #[test]
    fn test_line_piece() {
        let piece = LinePiece::new(
            Segment2::from_coords(0.0_f64, 0.0, 10.0, 0.0),
            Interval::new(0.5, 1.0),
        );
        let (a, b) = piece.break_at(0.4);
        assert_relative_eq!(a.segment.end.x, 4.0, epsilon = 1e-12);
        assert_relative_eq!(b.interval.start, 0.7, epsilon = 1e-12);

        let ts = piece.intersect_segment(&Segment2::from_coords(2.5, -1.0, 2.5, 1.0));
        assert_eq!(ts.len(), 1);
        assert_relative_eq!(ts[0], 0.25, epsilon = 1e-12);
        assert!(piece
            .intersect_segment(&Segment2::from_coords(0.0, 1.0, 10.0, 1.0))
            .is_empty());
    }

    #[test]
    fn test_shape_dispatch() {
        let curve: Bezier<f64> = Bezier::quadratic(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(2.0, 0.0),
        );
        let mut shape = PathShape::from(curve.clone());
        assert_eq!(shape.position(0.5), curve.position(0.5));
        assert_relative_eq!(shape.length(), curve.length(), epsilon = 1e-12);

        shape.set_interval(Interval::new(0.0, 0.5));
        let (a, b) = shape.break_at(0.5);
        assert_relative_eq!(a.interval().end, 0.25, epsilon = 1e-12);
        assert_relative_eq!(b.interval().start, 0.25, epsilon = 1e-12);

        let line = PathShape::Line(LinePiece::new(
            Segment2::from_coords(0.0, 0.0, 3.0, 4.0),
            Interval::unit(),
        ));
        assert_relative_eq!(line.length(), 5.0, epsilon = 1e-12);
        assert_eq!(
            line.intersect_segment(&Segment2::from_coords(0.0, 4.0, 3.0, 0.0))
                .len(),
            1
        );
    }

    #[test]
    fn test_empty_poly_shape() {
        let empty: PolyBezier<f64> = PolyBezier::new(Vec::new());
        assert!(empty.position(0.5).is_none());

        let shape = PathShape::Poly(empty);
        let p = shape.position(0.5);
        assert!(p.x.is_nan() && p.y.is_nan());
        assert_eq!(shape.length(), 0.0);
    }

    #[test]
    fn test_f32_support() {
        let poly: PolyBezier<f32> = PolyBezier::new(vec![Bezier::line(
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
        )]);
        assert_relative_eq!(poly.length(), 4.0, epsilon = 1e-4);
    }
}
