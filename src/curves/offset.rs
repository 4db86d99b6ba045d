//! Offsetting and outlining by scaling simple segments.
//!
//! The offset of a Bézier curve is generally not a Bézier curve. A simple
//! segment, however, has a pivot where its endpoint normals meet, and moving
//! its control points away from that pivot gives a close approximation. Whole
//! curves are reduced first and each simple segment is scaled on its own.
//!
//! # Example
//!
//! ```
//! use curvum::{Bezier, Point2};
//!
//! let curve: Bezier<f64> = Bezier::cubic(
//!     Point2::new(0.0, 0.0),
//!     Point2::new(0.0, 100.0),
//!     Point2::new(100.0, 100.0),
//!     Point2::new(100.0, 0.0),
//! );
//!
//! // Positive distances go left of the direction of travel.
//! let offset = curve.offset(10.0);
//! assert_eq!(offset[0].start(), Point2::new(-10.0, 0.0));
//!
//! let outline = curve.outline(5.0).unwrap();
//! assert_eq!(outline.len(), 2 * curve.reduce().len() + 2);
//! ```

use super::bezier::Bezier;
use super::path::PolyBezier;
use crate::error::CurveError;
use crate::primitives::{Line2, Point2, Vec2};
use crate::tolerance::{map_range, Orientation};
use num_traits::Float;

impl<F: Float> Bezier<F> {
    /// The point at `t` moved `d` along the unit normal.
    ///
    /// Returns `None` where the normal is undefined.
    pub fn offset_point(&self, t: F, d: F) -> Option<Point2<F>> {
        self.normal(t).map(|n| self.position(t) + n * d)
    }

    /// Scales a simple segment to run at constant distance `d` from it.
    ///
    /// Quadratics are raised to cubics first. Endpoints move along their
    /// normals; each interior control point is placed where the tangent line
    /// through the new endpoint meets the ray from the pivot through the old
    /// control point. Linear curves are translated exactly.
    ///
    /// Returns `None` if the endpoint normals are undefined or parallel, or
    /// the curve is above cubic order. Reduce curves before scaling them.
    pub fn scale(&self, d: F) -> Option<Self> {
        if self.order() == 2 {
            return self.raise().scale(d);
        }
        let n0 = self.normal(F::zero())?;
        let n1 = self.normal(F::one())?;
        if self.is_linear() {
            return Some(self.shifted(n0, d, d));
        }
        if self.order() != 3 {
            return None;
        }

        let pivot = self.pivot(n0, n1)?;
        let p = self.points();
        let start = p[0] + n0 * d;
        let end = p[3] + n1 * d;

        let c1 = Line2::new(start, self.tangent(F::zero()))
            .intersect_line(&Line2::from_points(pivot, p[1]))?
            .0;
        let c2 = Line2::new(end, self.tangent(F::one()))
            .intersect_line(&Line2::from_points(pivot, p[2]))?
            .0;

        Some(Self::from_control_points(vec![start, c1, c2, end]).with_interval(self.interval()))
    }

    /// Scales a simple segment by a distance that varies along it.
    ///
    /// `distance(0)` and `distance(1)` move the endpoints along their normals.
    /// Interior control point `i` moves radially from the pivot by
    /// `distance(i / order)`, with the sign chosen so positive distances
    /// follow the normal side.
    pub fn scale_with<D>(&self, distance: D) -> Option<Self>
    where
        D: Fn(F) -> F,
    {
        if self.order() == 2 {
            return self.raise().scale_with(distance);
        }
        let n0 = self.normal(F::zero())?;
        let n1 = self.normal(F::one())?;
        let (d0, d1) = (distance(F::zero()), distance(F::one()));
        if self.is_linear() {
            return Some(self.shifted(n0, d0, d1));
        }

        let pivot = self.pivot(n0, n1)?;
        let p = self.points();
        let order = self.order();
        let of = F::from(order).unwrap();

        let mut scaled = Vec::with_capacity(p.len());
        scaled.push(p[0] + n0 * d0);
        for (i, &q) in p.iter().enumerate().take(order).skip(1) {
            let mut rc = distance(F::from(i).unwrap() / of);
            if self.orientation() != Orientation::CounterClockwise {
                rc = -rc;
            }
            let radial = (q - pivot).normalize()?;
            scaled.push(q + radial * rc);
        }
        scaled.push(p[order] + n1 * d1);

        Some(Self::from_control_points(scaled).with_interval(self.interval()))
    }

    /// Approximates the curve offset by `d` as a sequence of curves.
    ///
    /// Linear curves give a single exact translation. Other curves are
    /// reduced and each simple segment is scaled; segments that cannot be
    /// scaled are skipped.
    pub fn offset(&self, d: F) -> Vec<Self> {
        if self.is_linear() {
            return self
                .normal(F::zero())
                .map(|n| vec![self.shifted(n, d, d)])
                .unwrap_or_default();
        }

        self.reduce()
            .segments
            .into_iter()
            .filter_map(|segment| {
                let scaled = segment.scale(d);
                if scaled.is_none() {
                    log::warn!(
                        "offset skipped unscalable segment over {:?}",
                        (
                            segment.interval().start.to_f64(),
                            segment.interval().end.to_f64()
                        )
                    );
                }
                scaled
            })
            .collect()
    }

    /// Closed outline at distance `d` on both sides of the curve.
    pub fn outline(&self, d: F) -> Result<PolyBezier<F>, CurveError> {
        self.outline_sides(d, d)
    }

    /// Closed outline at distance `d1` on the normal side and `d2` on the
    /// other side.
    ///
    /// The result runs: start cap, forward rails, end cap, then the backward
    /// rails in reverse, ending where the start cap begins.
    ///
    /// # Errors
    ///
    /// [`CurveError::EmptyReduction`] if the curve reduces to nothing and
    /// [`CurveError::NotScalable`] if a reduced segment cannot be scaled.
    pub fn outline_sides(&self, d1: F, d2: F) -> Result<PolyBezier<F>, CurveError> {
        self.build_outline(|segment, _, _| {
            Ok((
                segment.scale(d1).ok_or(CurveError::NotScalable)?,
                segment.scale(-d2).ok_or(CurveError::NotScalable)?,
            ))
        })
    }

    /// Closed outline whose width varies linearly with arc length, from
    /// `(d1, d2)` at the start of the curve to `(d3, d4)` at the end.
    pub fn outline_graduated(
        &self,
        d1: F,
        d2: F,
        d3: F,
        d4: F,
    ) -> Result<PolyBezier<F>, CurveError> {
        let total = self.length();
        self.build_outline(|segment, before, length| {
            let f1 = before / total;
            let f2 = (before + length) / total;
            let ramp = |s: F, e: F| {
                let (from, to) = (s + f1 * (e - s), s + f2 * (e - s));
                move |v: F| map_range(v, F::zero(), F::one(), from, to)
            };
            Ok((
                segment
                    .scale_with(ramp(d1, d3))
                    .ok_or(CurveError::NotScalable)?,
                segment
                    .scale_with(ramp(-d2, -d4))
                    .ok_or(CurveError::NotScalable)?,
            ))
        })
    }

    /// Reduces the curve and assembles an outline from forward/backward rail
    /// pairs produced by `rails(segment, length_before, segment_length)`.
    fn build_outline<R>(&self, rails: R) -> Result<PolyBezier<F>, CurveError>
    where
        R: Fn(&Self, F, F) -> Result<(Self, Self), CurveError>,
    {
        let reduction = self.reduce();
        if reduction.is_empty() {
            log::debug!("outline failed: curve reduces to no simple segments");
            return Err(CurveError::EmptyReduction);
        }

        let mut forward = Vec::with_capacity(reduction.len());
        let mut backward = Vec::with_capacity(reduction.len());
        let mut before = F::zero();
        for segment in &reduction.segments {
            let length = segment.length();
            let (f, b) = rails(segment, before, length).map_err(|err| {
                log::debug!(
                    "outline failed on segment over {:?}: {}",
                    (
                        segment.interval().start.to_f64(),
                        segment.interval().end.to_f64()
                    ),
                    err
                );
                err
            })?;
            forward.push(f);
            backward.push(b.reversed());
            before = before + length;
        }
        backward.reverse();

        let forward_start = forward[0].start();
        let forward_end = forward[forward.len() - 1].end();
        let backward_start = backward[0].start();
        let backward_end = backward[backward.len() - 1].end();

        let mut curves = Vec::with_capacity(forward.len() + backward.len() + 2);
        curves.push(Self::line(backward_end, forward_start));
        curves.extend(forward);
        curves.push(Self::line(forward_end, backward_start));
        curves.extend(backward);
        Ok(PolyBezier::new(curves))
    }

    /// The same curve traversed from end to start.
    pub fn reversed(&self) -> Self {
        let mut points = self.points().to_vec();
        points.reverse();
        Self::from_control_points(points).with_interval(self.interval())
    }

    /// Translates control point `i` along `normal` by a distance interpolated
    /// from `d0` at the start to `d1` at the end.
    fn shifted(&self, normal: Vec2<F>, d0: F, d1: F) -> Self {
        let of = F::from(self.order()).unwrap();
        let points = self
            .points()
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                let r = F::from(i).unwrap() / of;
                p + normal * (d0 + (d1 - d0) * r)
            })
            .collect();
        Self::from_control_points(points).with_interval(self.interval())
    }

    /// Where the endpoint normal lines meet.
    fn pivot(&self, n0: Vec2<F>, n1: Vec2<F>) -> Option<Point2<F>> {
        Line2::new(self.start(), n0)
            .intersect_line(&Line2::new(self.end(), n1))
            .map(|(point, _, _)| point)
    }
}
