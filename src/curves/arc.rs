//! Circular arcs.

use crate::primitives::{Point2, Segment2};
use crate::tolerance::{between, orient2d, Orientation};
use num_traits::Float;
use std::cmp::Ordering;
use std::f64::consts::PI;

/// A 2D circular arc defined by center, radius, and angular range.
///
/// Angles are in radians, measured counter-clockwise from the positive x-axis.
/// The arc runs from `start_angle` to `end_angle`; a negative sweep means it
/// runs clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc2<F> {
    /// Center of the arc's circle.
    pub center: Point2<F>,
    /// Radius of the arc.
    pub radius: F,
    /// Start angle in radians.
    pub start_angle: F,
    /// End angle in radians.
    pub end_angle: F,
}

impl<F: Float> Arc2<F> {
    /// Creates a new arc.
    #[inline]
    pub fn new(center: Point2<F>, radius: F, start_angle: F, end_angle: F) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
        }
    }

    /// Creates the arc that starts at `p1`, passes through `p2` and ends at `p3`.
    ///
    /// The sweep is positive when the points turn counter-clockwise and
    /// negative when they turn clockwise. Returns `None` if the points are
    /// collinear or coincide.
    ///
    /// # Example
    ///
    /// ```
    /// use curvum::{curves::Arc2, Point2};
    ///
    /// let arc: Arc2<f64> = Arc2::from_three_points(
    ///     Point2::new(1.0, 0.0),
    ///     Point2::new(0.0, 1.0),
    ///     Point2::new(-1.0, 0.0),
    /// )
    /// .unwrap();
    ///
    /// assert!((arc.radius - 1.0).abs() < 1e-12);
    /// assert!((arc.sweep_angle() - std::f64::consts::PI).abs() < 1e-12);
    /// ```
    pub fn from_three_points(p1: Point2<F>, p2: Point2<F>, p3: Point2<F>) -> Option<Self> {
        let turn = orient2d(p1, p2, p3, F::zero());
        if turn == Orientation::Collinear {
            return None;
        }

        // Circumcenter
        let d = (p1.x * (p2.y - p3.y) + p2.x * (p3.y - p1.y) + p3.x * (p1.y - p2.y))
            * (F::one() + F::one());
        if d.abs() <= F::epsilon() {
            return None;
        }

        let p1_sq = p1.x * p1.x + p1.y * p1.y;
        let p2_sq = p2.x * p2.x + p2.y * p2.y;
        let p3_sq = p3.x * p3.x + p3.y * p3.y;

        let cx = (p1_sq * (p2.y - p3.y) + p2_sq * (p3.y - p1.y) + p3_sq * (p1.y - p2.y)) / d;
        let cy = (p1_sq * (p3.x - p2.x) + p2_sq * (p1.x - p3.x) + p3_sq * (p2.x - p1.x)) / d;

        let center = Point2::new(cx, cy);
        let radius = center.distance(p1);
        if !radius.is_finite() {
            return None;
        }

        let start = (p1.y - cy).atan2(p1.x - cx);
        let mut end = (p3.y - cy).atan2(p3.x - cx);
        let tau = F::from(2.0 * PI).unwrap();
        if turn == Orientation::CounterClockwise && end <= start {
            end = end + tau;
        } else if turn == Orientation::Clockwise && end >= start {
            end = end - tau;
        }

        Some(Self::new(center, radius, start, end))
    }

    /// Returns the point at the given angle on the arc's circle.
    #[inline]
    pub fn point_at_angle(&self, angle: F) -> Point2<F> {
        Point2::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    /// Returns the start point of the arc.
    #[inline]
    pub fn start_point(&self) -> Point2<F> {
        self.point_at_angle(self.start_angle)
    }

    /// Returns the end point of the arc.
    #[inline]
    pub fn end_point(&self) -> Point2<F> {
        self.point_at_angle(self.end_angle)
    }

    /// Returns the signed sweep angle (positive = counter-clockwise).
    #[inline]
    pub fn sweep_angle(&self) -> F {
        self.end_angle - self.start_angle
    }

    /// Returns `true` if the arc runs clockwise.
    #[inline]
    pub fn is_clockwise(&self) -> bool {
        self.sweep_angle() < F::zero()
    }

    /// Returns the arc length.
    #[inline]
    pub fn arc_length(&self) -> F {
        self.radius * self.sweep_angle().abs()
    }

    /// Evaluates the arc at parameter `t` (0 = start, 1 = end).
    #[inline]
    pub fn eval(&self, t: F) -> Point2<F> {
        let angle = self.start_angle + t * self.sweep_angle();
        self.point_at_angle(angle)
    }

    /// Splits the arc at parameter `t`.
    pub fn split(&self, t: F) -> (Self, Self) {
        let mid = self.start_angle + t * self.sweep_angle();
        (
            Self::new(self.center, self.radius, self.start_angle, mid),
            Self::new(self.center, self.radius, mid, self.end_angle),
        )
    }

    /// Parameter of the point at `angle`, measured in the sweep direction
    /// from the start. Values above 1 lie beyond the end.
    pub fn param_at_angle(&self, angle: F) -> F {
        let sweep = self.sweep_angle();
        if sweep == F::zero() {
            return F::zero();
        }
        let tau = F::from(2.0 * PI).unwrap();
        let mut delta = (angle - self.start_angle) % tau;
        if sweep > F::zero() && delta < F::zero() {
            delta = delta + tau;
        } else if sweep < F::zero() && delta > F::zero() {
            delta = delta - tau;
        }
        delta / sweep
    }

    /// Arc parameters where `segment` crosses the arc, ascending.
    pub fn intersect_segment(&self, segment: &Segment2<F>, eps: F) -> Vec<F> {
        let two = F::one() + F::one();
        let dir = segment.direction();
        let rel = segment.start - self.center;

        let a = dir.dot(dir);
        if a <= F::epsilon() {
            return vec![];
        }
        let b = two * dir.dot(rel);
        let c = rel.dot(rel) - self.radius * self.radius;
        let disc = b * b - two * two * a * c;
        if disc < F::zero() {
            return vec![];
        }

        let sq = disc.sqrt();
        let mut candidates = vec![(-b - sq) / (two * a)];
        if sq > F::zero() {
            candidates.push((-b + sq) / (two * a));
        }

        let mut ts: Vec<F> = candidates
            .into_iter()
            .filter(|&s| between(s, F::zero(), F::one(), eps))
            .map(|s| {
                let p = segment.point_at(s);
                self.param_at_angle((p.y - self.center.y).atan2(p.x - self.center.x))
            })
            .filter(|&t| between(t, F::zero(), F::one(), eps))
            .collect();
        ts.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        ts
    }
}
