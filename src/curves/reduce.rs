//! Decomposition of a curve into simple segments.
//!
//! A segment is *simple* when it bulges to one side of its chord only and its
//! endpoint normals diverge by less than 60°. Simple segments can be scaled
//! by moving control points along rays from a single pivot, which is what
//! offsetting and outlining rely on.

use super::bezier::{epsilon, Bezier};
use crate::tolerance::{approximately, signed_angle};
use num_traits::Float;
use std::f64::consts::FRAC_PI_3;

/// Options for [`Bezier::reduce_with`].
#[derive(Debug, Clone, Copy)]
pub struct ReduceOptions<F> {
    /// Parameter increment used when growing a simple segment.
    ///
    /// Non-positive values fall back to the default.
    pub step: F,
}

impl<F: Float> Default for ReduceOptions<F> {
    fn default() -> Self {
        Self {
            step: F::from(0.01).unwrap(),
        }
    }
}

impl<F: Float> ReduceOptions<F> {
    /// Creates options with the specified step.
    pub fn with_step(step: F) -> Self {
        Self { step }
    }
}

/// Result of reducing a curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction<F> {
    /// Simple segments in parameter order. Each carries its interval on the
    /// reduced curve.
    pub segments: Vec<Bezier<F>>,
    /// `false` when reduction stopped early because no simple segment could
    /// be grown by even one step; the segments then cover only a prefix of
    /// the curve.
    pub complete: bool,
}

impl<F> Reduction<F> {
    /// Returns `true` if there are no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }
}

impl<F: Float> Bezier<F> {
    /// Returns `true` if the curve is safe to scale: a cubic must not have
    /// control points on both sides of its chord, and the endpoint normals
    /// must be defined and less than 60° apart.
    pub fn is_simple(&self) -> bool {
        if self.order() == 3 {
            let p = self.points();
            let a1 = signed_angle(p[0], p[3], p[1]);
            let a2 = signed_angle(p[0], p[3], p[2]);
            if (a1 > F::zero() && a2 < F::zero()) || (a1 < F::zero() && a2 > F::zero()) {
                return false;
            }
        }

        let (n1, n2) = match (self.normal(F::zero()), self.normal(F::one())) {
            (Some(n1), Some(n2)) => (n1, n2),
            _ => return false,
        };
        let cos = n1.dot(n2).max(-F::one()).min(F::one());
        cos.acos().abs() < F::from(FRAC_PI_3).unwrap()
    }

    /// Splits the curve into simple segments with the default step.
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
    /// let reduction = curve.reduce();
    /// assert!(reduction.complete);
    /// assert!(reduction.segments.iter().all(|s| s.is_simple()));
    /// ```
    pub fn reduce(&self) -> Reduction<F> {
        self.reduce_with(&ReduceOptions::default())
    }

    /// Splits the curve into simple segments.
    ///
    /// The curve is first cut at its extrema. Each piece is then marched in
    /// increments of `options.step`, growing a segment until the next step
    /// would make it non-simple. If a piece cannot be advanced by a single
    /// step the reduction stops and returns what it has, flagged incomplete.
    pub fn reduce_with(&self, options: &ReduceOptions<F>) -> Reduction<F> {
        let step = if options.step > F::zero() {
            options.step
        } else {
            ReduceOptions::default().step
        };

        let mut segments = Vec::new();
        for piece in self.extrema_pieces() {
            let mut t1 = F::zero();
            while t1 < F::one() {
                let Some(t2) = simple_end(&piece, t1, step) else {
                    log::warn!(
                        "reduction stopped at t = {:?} on interval {:?}; {} segment(s) kept",
                        t1.to_f64(),
                        (piece.interval().start.to_f64(), piece.interval().end.to_f64()),
                        segments.len()
                    );
                    return Reduction {
                        segments,
                        complete: false,
                    };
                };
                let interval = piece.interval().sub(t1, t2);
                segments.push(piece.split_range(t1, t2).with_interval(interval));
                t1 = t2;
            }
        }

        Reduction {
            segments,
            complete: true,
        }
    }

    /// Cuts the curve at every extremum.
    fn extrema_pieces(&self) -> Vec<Self> {
        let eps: F = epsilon();
        let mut ts: Vec<F> = self
            .extrema()
            .values
            .into_iter()
            .map(|t| {
                if approximately(t, F::zero(), eps) {
                    F::zero()
                } else if approximately(t, F::one(), eps) {
                    F::one()
                } else {
                    t
                }
            })
            .collect();
        if ts.first() != Some(&F::zero()) {
            ts.insert(0, F::zero());
        }
        if ts.last() != Some(&F::one()) {
            ts.push(F::one());
        }

        let mut pieces = Vec::with_capacity(ts.len() - 1);
        let mut t1 = ts[0];
        for &t2 in &ts[1..] {
            if approximately(t1, t2, eps) {
                continue;
            }
            let interval = self.interval().sub(t1, t2);
            pieces.push(self.split_range(t1, t2).with_interval(interval));
            t1 = t2;
        }
        pieces
    }
}

/// Furthest end parameter, in whole steps from `t1`, for which `[t1, end]`
/// is simple. `None` if not even one step is.
fn simple_end<F: Float>(piece: &Bezier<F>, t1: F, step: F) -> Option<F> {
    let mut k = 1usize;
    loop {
        let raw = t1 + step * F::from(k).unwrap();
        let t2 = raw.min(F::one());
        if !piece.split_range(t1, t2).is_simple() {
            return if k == 1 {
                None
            } else {
                Some(t1 + step * F::from(k - 1).unwrap())
            };
        }
        if raw >= F::one() {
            return Some(F::one());
        }
        k += 1;
    }
}
