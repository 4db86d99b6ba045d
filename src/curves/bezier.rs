//! Bézier curve model and evaluation.
//!
//! [`Bezier`] holds the control points of a linear, quadratic or cubic curve
//! together with caches derived from them: the derivative control-point
//! levels, the turn orientation and a linearity flag. The caches are built
//! once at construction; [`Bezier::translate`] is the only mutating operation
//! and rebuilds all of them.

use super::interval::Interval;
use super::quadrature::integrate_unit;
use crate::error::CurveError;
use crate::primitives::{Line2, Point2, Vec2};
use crate::tolerance::{approximately, orient2d, Orientation};
use num_traits::Float;
use std::fmt;

/// Tolerance used for parameter comparisons (`t ≈ 0`, `t ≈ 1`, root filtering).
pub const EPSILON: f64 = 1e-6;

/// Maximum distance of a control point from the endpoint chord for a curve to
/// count as linear.
pub const LINEAR_TOLERANCE: f64 = 1e-4;

#[inline]
pub(crate) fn epsilon<F: Float>() -> F {
    F::from(EPSILON).unwrap()
}

/// A 2D Bézier curve.
///
/// Public constructors accept 2, 3 or 4 control points; two points are
/// promoted to a cubic with control points at 1/3 and 2/3 of the segment.
/// Curves produced internally (for example by [`Bezier::raise`]) may carry
/// more points and are evaluated with de Casteljau's algorithm.
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
/// let mid = curve.position(0.5);
/// assert!((mid.x - 1.0).abs() < 1e-12);
/// assert!((mid.y - 1.0).abs() < 1e-12);
/// assert_eq!(curve.to_string(), "M 0 0 Q 1 2 2 0");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Bezier<F> {
    points: Vec<Point2<F>>,
    derivatives: Vec<Vec<Vec2<F>>>,
    orientation: Orientation,
    linear: bool,
    interval: Interval<F>,
}

impl<F: Float> Bezier<F> {
    /// Creates a curve from 2, 3 or 4 control points.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidPointCount`] for any other count.
    pub fn new(points: &[Point2<F>]) -> Result<Self, CurveError> {
        match *points {
            [p0, p1] => Ok(Self::line(p0, p1)),
            [_, _, _] | [_, _, _, _] => Ok(Self::from_control_points(points.to_vec())),
            _ => Err(CurveError::InvalidPointCount {
                count: points.len(),
            }),
        }
    }

    /// Creates a straight cubic from `p0` to `p1`.
    pub fn line(p0: Point2<F>, p1: Point2<F>) -> Self {
        let third = F::one() / F::from(3.0).unwrap();
        Self::from_control_points(vec![
            p0,
            p0.lerp(p1, third),
            p0.lerp(p1, third + third),
            p1,
        ])
    }

    /// Creates a quadratic curve.
    pub fn quadratic(p0: Point2<F>, p1: Point2<F>, p2: Point2<F>) -> Self {
        Self::from_control_points(vec![p0, p1, p2])
    }

    /// Creates a cubic curve.
    pub fn cubic(p0: Point2<F>, p1: Point2<F>, p2: Point2<F>, p3: Point2<F>) -> Self {
        Self::from_control_points(vec![p0, p1, p2, p3])
    }

    /// Builds a curve of any order from at least two points.
    pub(crate) fn from_control_points(points: Vec<Point2<F>>) -> Self {
        debug_assert!(points.len() >= 2);
        let mut curve = Self {
            points,
            derivatives: Vec::new(),
            orientation: Orientation::Collinear,
            linear: false,
            interval: Interval::unit(),
        };
        curve.update();
        curve
    }

    /// Returns the same curve tagged with `interval`.
    pub(crate) fn with_interval(mut self, interval: Interval<F>) -> Self {
        self.interval = interval;
        self
    }

    fn update(&mut self) {
        self.derivatives = derivative_levels(&self.points);

        let first = self.points[0];
        let last = self.points[self.order()];
        self.orientation = orient2d(first, last, self.points[1], F::zero());

        let chord = Line2::from_points(first, last);
        let tolerance = F::from(LINEAR_TOLERANCE).unwrap();
        self.linear = self
            .points
            .iter()
            .all(|&p| chord.to_local(p).y.abs() <= tolerance);
    }

    /// The control points.
    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// Polynomial degree: 1 for a line, 2 for a quadratic, 3 for a cubic.
    #[inline]
    pub fn order(&self) -> usize {
        self.points.len() - 1
    }

    /// First control point.
    #[inline]
    pub fn start(&self) -> Point2<F> {
        self.points[0]
    }

    /// Last control point.
    #[inline]
    pub fn end(&self) -> Point2<F> {
        self.points[self.order()]
    }

    /// Derivative control points at `level` (0 is the first derivative).
    ///
    /// Level `k` holds `order - k` vectors; levels past the last one are empty.
    pub fn derivatives(&self, level: usize) -> &[Vec2<F>] {
        self.derivatives.get(level).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Parameter interval this curve covers on the curve it was cut from.
    #[inline]
    pub fn interval(&self) -> Interval<F> {
        self.interval
    }

    /// Re-tags the curve with a new parent interval.
    #[inline]
    pub fn set_interval(&mut self, interval: Interval<F>) {
        self.interval = interval;
    }

    /// Turn direction from the chord `start → end` toward the first control point.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns `true` if the first control point lies right of the chord.
    #[inline]
    pub fn is_clockwise(&self) -> bool {
        self.orientation == Orientation::Clockwise
    }

    /// Returns `true` if every control point lies on the endpoint chord.
    #[inline]
    pub fn is_linear(&self) -> bool {
        self.linear
    }

    /// Evaluates the curve at parameter `t`.
    pub fn position(&self, t: F) -> Point2<F> {
        let eps: F = epsilon();
        if approximately(t, F::zero(), eps) {
            return self.start();
        }
        if approximately(t, F::one(), eps) {
            return self.end();
        }

        let one = F::one();
        let mt = one - t;
        let p = &self.points;
        match self.order() {
            1 => p[0].lerp(p[1], t),
            2 => {
                let two = one + one;
                let (a, b, c) = (mt * mt, two * mt * t, t * t);
                Point2::new(
                    a * p[0].x + b * p[1].x + c * p[2].x,
                    a * p[0].y + b * p[1].y + c * p[2].y,
                )
            }
            3 => {
                let three = F::from(3.0).unwrap();
                let (a, b, c, d) = (
                    mt * mt * mt,
                    three * mt * mt * t,
                    three * mt * t * t,
                    t * t * t,
                );
                Point2::new(
                    a * p[0].x + b * p[1].x + c * p[2].x + d * p[3].x,
                    a * p[0].y + b * p[1].y + c * p[2].y + d * p[3].y,
                )
            }
            _ => {
                let values: Vec<Vec2<F>> = p.iter().map(|q| q.to_vec()).collect();
                Point2::from(de_casteljau(values, t))
            }
        }
    }

    /// First derivative at `t`. Not normalized.
    pub fn tangent(&self, t: F) -> Vec2<F> {
        let d = self.derivatives(0);
        let one = F::one();
        let mt = one - t;
        match self.order() {
            1 => d[0],
            2 => d[0] * mt + d[1] * t,
            3 => d[0] * (mt * mt) + d[1] * ((one + one) * mt * t) + d[2] * (t * t),
            _ => de_casteljau(d.to_vec(), t),
        }
    }

    /// Unit normal at `t`, the tangent rotated a quarter turn counter-clockwise.
    ///
    /// Returns `None` where the tangent vanishes (cusps, coincident control points).
    #[inline]
    pub fn normal(&self, t: F) -> Option<Vec2<F>> {
        self.tangent(t).normalize().map(Vec2::perpendicular)
    }

    /// Arc length, by 24-point Legendre–Gauss quadrature of the tangent.
    pub fn length(&self) -> F {
        integrate_unit(|t| self.tangent(t).magnitude())
    }

    /// Elevates the curve by one degree without changing its shape.
    pub fn raise(&self) -> Self {
        let p = &self.points;
        let k = p.len();
        let kf = F::from(k).unwrap();

        let mut raised = Vec::with_capacity(k + 1);
        raised.push(p[0]);
        for i in 1..k {
            let fi = F::from(i).unwrap();
            let v = p[i].to_vec() * ((kf - fi) / kf) + p[i - 1].to_vec() * (fi / kf);
            raised.push(Point2::from(v));
        }
        raised.push(p[k - 1]);

        Self::from_control_points(raised).with_interval(self.interval)
    }

    /// Moves every control point by `offset`, refreshing all derived state.
    pub fn translate(&mut self, offset: Vec2<F>) {
        for p in &mut self.points {
            *p = *p + offset;
        }
        self.update();
    }

    /// Returns the curve in the frame where the line `start → end` runs along
    /// the positive x-axis from the origin.
    pub fn align(&self, start: Point2<F>, end: Point2<F>) -> Self {
        let frame = Line2::from_points(start, end);
        let points = self.points.iter().map(|&p| frame.to_local(p)).collect();
        Self::from_control_points(points).with_interval(self.interval)
    }
}

impl<F: Float + fmt::Display> fmt::Display for Bezier<F> {
    /// Writes SVG path syntax: `M x0 y0 Q x1 y1 x2 y2` or `M x0 y0 C ...`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let command = match self.order() {
            1 => "L",
            2 => "Q",
            _ => "C",
        };
        let first = self.start();
        write!(f, "M {} {} {}", first.x, first.y, command)?;
        for p in &self.points[1..] {
            write!(f, " {} {}", p.x, p.y)?;
        }
        Ok(())
    }
}

/// Derivative control-point levels: level `k` is the scaled forward difference
/// of level `k - 1`, down to a single vector.
fn derivative_levels<F: Float>(points: &[Point2<F>]) -> Vec<Vec<Vec2<F>>> {
    let mut levels = Vec::with_capacity(points.len() - 1);
    let mut current: Vec<Vec2<F>> = points.iter().map(|p| p.to_vec()).collect();
    while current.len() > 1 {
        let c = F::from(current.len() - 1).unwrap();
        let next: Vec<Vec2<F>> = current.windows(2).map(|w| (w[1] - w[0]) * c).collect();
        levels.push(next.clone());
        current = next;
    }
    levels
}

fn de_casteljau<F: Float>(mut values: Vec<Vec2<F>>, t: F) -> Vec2<F> {
    let mt = F::one() - t;
    while values.len() > 1 {
        for i in 0..values.len() - 1 {
            values[i] = values[i] * mt + values[i + 1] * t;
        }
        values.pop();
    }
    values[0]
}
