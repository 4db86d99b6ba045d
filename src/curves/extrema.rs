//! Axis extrema and tight bounding boxes.

use super::bezier::{epsilon, Bezier};
use super::roots::derivative_roots;
use crate::bounds::Aabb2;
use crate::primitives::{Point2, Vec2};
use crate::tolerance::approximately;
use num_traits::Float;
use std::cmp::Ordering;

/// Parameters in `[0, 1]` where a coordinate's derivative vanishes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Extrema<F> {
    /// Sorted parameters for the x-coordinate.
    pub x: Vec<F>,
    /// Sorted parameters for the y-coordinate.
    pub y: Vec<F>,
    /// Sorted, deduplicated union of `x` and `y`.
    pub values: Vec<F>,
}

impl<F: Float> Bezier<F> {
    /// Critical parameters of each coordinate function.
    ///
    /// Roots of the first derivative are always included; cubics also
    /// contribute the roots of their second derivative.
    pub fn extrema(&self) -> Extrema<F> {
        let levels = if self.order() == 3 { 2 } else { 1 };

        let axis = |coord: fn(&Vec2<F>) -> F| -> Vec<F> {
            let mut roots = Vec::new();
            for level in 0..levels {
                let coeffs: Vec<F> = self.derivatives(level).iter().map(coord).collect();
                roots.extend(
                    derivative_roots(&coeffs)
                        .into_iter()
                        .filter(|&t| t >= F::zero() && t <= F::one()),
                );
            }
            sort_dedup(roots)
        };

        let x = axis(|v| v.x);
        let y = axis(|v| v.y);
        let values = sort_dedup(x.iter().chain(y.iter()).copied().collect());
        Extrema { x, y, values }
    }

    /// Parameters strictly inside `(0, 1)` where a cubic's curvature changes
    /// sign. Quadratics never inflect.
    ///
    /// Works on the curve aligned to its chord, where the numerator of the
    /// curvature reduces to a quadratic in `t`.
    pub fn inflections(&self) -> Vec<F> {
        if self.order() != 3 {
            return Vec::new();
        }

        let p = self.align(self.start(), self.end()).points().to_vec();
        let a = p[2].x * p[1].y;
        let b = p[3].x * p[1].y;
        let c = p[1].x * p[2].y;
        let d = p[3].x * p[2].y;

        let three = F::from(3.0).unwrap();
        let two = F::from(2.0).unwrap();
        let x = -three * a + two * b + three * c - d;
        let y = three * a - b - three * c;
        let z = c - a;

        // x·t² + y·t + z as Bernstein coefficients.
        let half = F::from(0.5).unwrap();
        let coeffs = [z, z + y * half, x + y + z];

        let eps: F = epsilon();
        let roots = derivative_roots(&coeffs)
            .into_iter()
            .filter(|&t| t > eps && t < F::one() - eps)
            .collect();
        sort_dedup(roots)
    }

    /// Axis-aligned bounding box of the curve itself, not its control polygon.
    ///
    /// # Example
    ///
    /// ```
    /// use curvum::{Bezier, Point2};
    ///
    /// let curve: Bezier<f64> = Bezier::quadratic(
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(1.0, 2.0),
    ///     Point2::new(2.0, 0.0),
    /// );
    ///
    /// // The curve peaks at y = 1 even though its control point sits at y = 2.
    /// let bbox = curve.bounding_box();
    /// assert!((bbox.max.y - 1.0).abs() < 1e-12);
    /// ```
    pub fn bounding_box(&self) -> Aabb2<F> {
        let extrema = self.extrema();
        let (x_min, x_max) = self.axis_range(&extrema.x, |p| p.x);
        let (y_min, y_max) = self.axis_range(&extrema.y, |p| p.y);
        Aabb2::from_corners(Point2::new(x_min, y_min), Point2::new(x_max, y_max))
    }

    fn axis_range(&self, ts: &[F], coord: fn(Point2<F>) -> F) -> (F, F) {
        [F::zero(), F::one()]
            .iter()
            .chain(ts)
            .map(|&t| coord(self.position(t)))
            .fold((F::infinity(), F::neg_infinity()), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// Returns `true` if the bounding boxes of the two curves intersect.
    ///
    /// A broad-phase test: overlapping boxes do not imply the curves meet.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.bounding_box().intersects(other.bounding_box())
    }
}

fn sort_dedup<F: Float>(mut values: Vec<F>) -> Vec<F> {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    values.dedup_by(|a, b| approximately(*a, *b, epsilon()));
    values
}
