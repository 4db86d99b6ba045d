//! Curve/segment and curve/curve intersection.
//!
//! Segment intersection is closed-form: the curve is moved into the frame of
//! the segment's line and the roots of its y-coordinate are solved directly.
//! Curve/curve intersection reduces both curves to simple segments and
//! subdivides bounding-box-overlapping pairs until they are small enough.
//!
//! # Example
//!
//! ```
//! use curvum::{Bezier, Point2, Segment2};
//!
//! let curve: Bezier<f64> = Bezier::cubic(
//!     Point2::new(0.0, 0.0),
//!     Point2::new(0.0, 100.0),
//!     Point2::new(100.0, 100.0),
//!     Point2::new(100.0, 0.0),
//! );
//!
//! let vertical = Segment2::from_coords(50.0, -10.0, 50.0, 110.0);
//! let ts = curve.intersect_segment(&vertical);
//! assert_eq!(ts.len(), 1);
//! assert!((ts[0] - 0.5).abs() < 1e-9);
//! ```

use super::bezier::{epsilon, Bezier};
use super::roots::aligned_roots;
use crate::primitives::{Line2, Point2, Segment2};
use crate::tolerance::approximately;
use num_traits::Float;
use std::cmp::Ordering;

/// Subdivision depth after which a pair is reported as converged.
const MAX_DEPTH: usize = 48;

/// Live pair count above which subdivision stops; only reached by curves that
/// run along each other.
const MAX_PAIRS: usize = 4096;

/// An intersection between two curves, or between two parts of one curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveIntersection<F> {
    /// Approximate intersection point.
    pub point: Point2<F>,
    /// Parameter on the first curve.
    pub t1: F,
    /// Parameter on the second curve.
    pub t2: F,
}

impl<F: Float> Bezier<F> {
    /// Parameters where the curve crosses `segment`, ascending.
    ///
    /// Only crossings within the segment's extent count, not the whole line.
    /// Curves above cubic order report no crossings.
    pub fn intersect_segment(&self, segment: &Segment2<F>) -> Vec<F> {
        let eps: F = epsilon();
        let frame = Line2::from_segment(segment);
        let ys: Vec<F> = self.points().iter().map(|&p| frame.to_local(p).y).collect();
        let bounds = segment.bounds();

        let mut ts: Vec<F> = aligned_roots(&ys, eps)
            .into_iter()
            .filter(|&t| bounds.contains_point(self.position(t), eps))
            .collect();
        ts.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        ts.dedup_by(|a, b| approximately(*a, *b, eps));
        ts
    }

    /// Intersections with another curve.
    ///
    /// Both curves are reduced; each overlapping pair of simple segments is
    /// halved repeatedly until both members span less than `threshold` in
    /// parameter space. Results are sorted by `t1`. Hits chained within
    /// `2 * threshold` of each other in both parameters count as one crossing,
    /// reported where the two curves are closest.
    pub fn intersect_curve(&self, other: &Self, threshold: F) -> Vec<CurveIntersection<F>> {
        let ours = self.reduce().segments;
        let theirs = other.reduce().segments;

        let mut hits = Vec::new();
        for a in &ours {
            for b in &theirs {
                converge(a, b, threshold, &mut hits);
            }
        }
        merge(hits, threshold, |h| {
            self.position(h.t1).distance(other.position(h.t2))
        })
    }

    /// Points where the curve crosses itself.
    ///
    /// Each simple segment is tested against every segment at least two
    /// places further along; neighbours only meet at their shared endpoint.
    pub fn self_intersections(&self, threshold: F) -> Vec<CurveIntersection<F>> {
        let segments = self.reduce().segments;

        let mut hits = Vec::new();
        for (i, a) in segments.iter().enumerate() {
            for b in segments.iter().skip(i + 2) {
                converge(a, b, threshold, &mut hits);
            }
        }
        merge(hits, threshold, |h| {
            self.position(h.t1).distance(self.position(h.t2))
        })
    }
}

fn converge<F: Float>(
    a: &Bezier<F>,
    b: &Bezier<F>,
    threshold: F,
    hits: &mut Vec<CurveIntersection<F>>,
) {
    if !a.overlaps(b) {
        return;
    }

    let half = F::from(0.5).unwrap();
    let mut pairs = vec![(a.clone(), b.clone())];
    for depth in 0..=MAX_DEPTH {
        let force = depth == MAX_DEPTH || pairs.len() > MAX_PAIRS;
        if pairs.len() > MAX_PAIRS {
            log::warn!(
                "curve intersection stopped subdividing with {} overlapping pairs",
                pairs.len()
            );
        }

        let mut next = Vec::new();
        for (x, y) in pairs {
            let small = x.interval().span().abs() < threshold
                && y.interval().span().abs() < threshold;
            if small || force {
                hits.push(CurveIntersection {
                    point: x.position(half),
                    t1: x.interval().mid(),
                    t2: y.interval().mid(),
                });
                continue;
            }

            let (x1, x2) = x.break_at(half);
            let (y1, y2) = y.break_at(half);
            for (p, q) in [(&x1, &y1), (&x1, &y2), (&x2, &y1), (&x2, &y2)] {
                if p.overlaps(q) {
                    next.push((p.clone(), q.clone()));
                }
            }
        }

        if next.is_empty() {
            return;
        }
        pairs = next;
    }
}

/// Collapses hits that belong to one crossing.
///
/// Hits are grouped transitively: a hit joins a group when it lies within
/// `2 * threshold` of any member in both parameters. Each group keeps the
/// member with the smallest `gap`, the distance between the two curves at its
/// parameters. Groups come out sorted by `t1`.
fn merge<F, G>(hits: Vec<CurveIntersection<F>>, threshold: F, gap: G) -> Vec<CurveIntersection<F>>
where
    F: Float,
    G: Fn(&CurveIntersection<F>) -> F,
{
    let reach = threshold + threshold;
    let near = |a: &CurveIntersection<F>, b: &CurveIntersection<F>| {
        approximately(a.t1, b.t1, reach) && approximately(a.t2, b.t2, reach)
    };

    let mut groups: Vec<Vec<CurveIntersection<F>>> = Vec::new();
    for hit in hits {
        let (joined, rest): (Vec<_>, Vec<_>) = groups
            .into_iter()
            .partition(|group| group.iter().any(|m| near(m, &hit)));
        let mut group: Vec<_> = joined.into_iter().flatten().collect();
        group.push(hit);
        groups = rest;
        groups.push(group);
    }

    let mut merged: Vec<CurveIntersection<F>> = groups
        .into_iter()
        .filter_map(|group| {
            group.into_iter().min_by(|a, b| {
                gap(a).partial_cmp(&gap(b)).unwrap_or(Ordering::Equal)
            })
        })
        .collect();
    merged.sort_by(|a, b| a.t1.partial_cmp(&b.t1).unwrap_or(Ordering::Equal));
    merged
}
