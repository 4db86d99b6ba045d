//! Approximating curves with circular arcs.
//!
//! Arcs are fitted greedily from the start of the curve: each arc passes
//! through the curve at the start, middle and end of its parameter span, and
//! the span is shrunk or widened until it is as wide as the error bound
//! allows. Where no arc exists (three collinear samples), a straight line is
//! used instead.

use super::arc::Arc2;
use super::bezier::{epsilon, Bezier};
use super::interval::Interval;
use super::path::{LinePiece, PathShape};
use crate::primitives::{Point2, Segment2};
use crate::tolerance::approximately;
use num_traits::Float;

/// Options for [`Bezier::to_arcs_with`].
#[derive(Debug, Clone, Copy)]
pub struct ArcFitOptions<F> {
    /// Maximum summed distance between curve and arc at 25% and 75% of each
    /// arc's span.
    pub error_threshold: F,
    /// Iteration cap when searching for one arc.
    pub max_iterations: usize,
    /// Cap on the number of pieces; the remainder becomes one straight line.
    pub max_pieces: usize,
}

impl<F: Float> Default for ArcFitOptions<F> {
    fn default() -> Self {
        Self {
            error_threshold: F::from(0.5).unwrap(),
            max_iterations: 100,
            max_pieces: 1024,
        }
    }
}

impl<F: Float> ArcFitOptions<F> {
    /// Creates options with the specified error threshold.
    pub fn with_threshold(error_threshold: F) -> Self {
        Self {
            error_threshold,
            ..Default::default()
        }
    }

    /// Sets the per-arc iteration cap.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the piece cap.
    pub fn max_pieces(mut self, max_pieces: usize) -> Self {
        self.max_pieces = max_pieces;
        self
    }
}

/// A circular arc fitted to part of a curve.
///
/// Angles are in degrees and the arc always runs counter-clockwise from
/// `start_angle` to `end_angle`. `reversed` records that the curve itself
/// traverses the arc clockwise, from `end_angle` back to `start_angle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedArc<F> {
    /// Center of the arc's circle.
    pub center: Point2<F>,
    /// Radius of the arc.
    pub radius: F,
    /// Counter-clockwise start angle in degrees.
    pub start_angle: F,
    /// Counter-clockwise end angle in degrees.
    pub end_angle: F,
    /// `true` if the curve runs from `end_angle` to `start_angle`.
    pub reversed: bool,
    /// Parameter span of the curve this arc replaces.
    pub interval: Interval<F>,
}

impl<F: Float> FittedArc<F> {
    /// Wraps an arc, normalizing it to counter-clockwise degrees.
    pub fn from_arc(arc: &Arc2<F>, interval: Interval<F>) -> Self {
        let reversed = arc.is_clockwise();
        let (start, end) = if reversed {
            (arc.end_angle, arc.start_angle)
        } else {
            (arc.start_angle, arc.end_angle)
        };
        Self {
            center: arc.center,
            radius: arc.radius,
            start_angle: start.to_degrees(),
            end_angle: end.to_degrees(),
            reversed,
            interval,
        }
    }

    /// The arc in radians, running in the curve's direction.
    pub fn to_arc(&self) -> Arc2<F> {
        let (start, end) = (self.start_angle.to_radians(), self.end_angle.to_radians());
        if self.reversed {
            Arc2::new(self.center, self.radius, end, start)
        } else {
            Arc2::new(self.center, self.radius, start, end)
        }
    }

    /// Where the curve enters the arc.
    pub fn start(&self) -> Point2<F> {
        self.to_arc().start_point()
    }

    /// Where the curve leaves the arc.
    pub fn end(&self) -> Point2<F> {
        self.to_arc().end_point()
    }

    /// Point at parameter `t`, following the curve's direction.
    pub fn position(&self, t: F) -> Point2<F> {
        self.to_arc().eval(t)
    }

    /// Arc length.
    pub fn length(&self) -> F {
        self.to_arc().arc_length()
    }

    /// Splits the arc at `t`, dividing its interval to match.
    pub fn break_at(&self, t: F) -> (Self, Self) {
        let (left, right) = self.to_arc().split(t);
        (
            Self::from_arc(&left, self.interval.sub(F::zero(), t)),
            Self::from_arc(&right, self.interval.sub(t, F::one())),
        )
    }

    /// Arc parameters where `segment` crosses the arc, ascending.
    pub fn intersect_segment(&self, segment: &Segment2<F>) -> Vec<F> {
        self.to_arc().intersect_segment(segment, epsilon())
    }
}

impl<F: Float> Bezier<F> {
    /// Approximates the curve by circular arcs within `error_threshold`.
    ///
    /// # Example
    ///
    /// ```
    /// use curvum::{Bezier, PathShape, Point2};
    ///
    /// let curve: Bezier<f64> = Bezier::cubic(
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(0.0, 100.0),
    ///     Point2::new(100.0, 100.0),
    ///     Point2::new(100.0, 0.0),
    /// );
    ///
    /// let shapes = curve.to_arcs(0.5);
    /// assert!(shapes.iter().all(|s| matches!(s, PathShape::Arc(_))));
    /// assert_eq!(shapes.last().unwrap().interval().end, 1.0);
    /// ```
    pub fn to_arcs(&self, error_threshold: F) -> Vec<PathShape<F>> {
        self.to_arcs_with(&ArcFitOptions::with_threshold(error_threshold))
    }

    /// Approximates the curve by circular arcs.
    pub fn to_arcs_with(&self, options: &ArcFitOptions<F>) -> Vec<PathShape<F>> {
        let mut shapes = Vec::new();
        self.fit_span(
            F::zero(),
            F::one(),
            options.error_threshold,
            options,
            &mut shapes,
        );
        shapes
    }

    /// Approximates the curve by circular arcs, fitting each stretch between
    /// extrema separately with an error bound of 1% of the curve length,
    /// scaled by the stretch's share of the parameter range.
    pub fn to_arcs_adaptive(&self) -> Vec<PathShape<F>> {
        let options = ArcFitOptions::default();
        let accuracy = self.length() / F::from(100.0).unwrap();
        let eps: F = epsilon();

        let mut cuts = vec![F::zero()];
        cuts.extend(
            self.extrema()
                .values
                .into_iter()
                .filter(|&t| !approximately(t, F::zero(), eps) && !approximately(t, F::one(), eps)),
        );
        cuts.push(F::one());

        let mut shapes = Vec::new();
        for w in cuts.windows(2) {
            let (from, to) = (w[0], w[1]);
            if approximately(from, to, eps) {
                continue;
            }
            self.fit_span(from, to, accuracy * (to - from), &options, &mut shapes);
        }
        shapes
    }

    /// Covers `[from, to]` with fitted pieces, appending them to `shapes`.
    fn fit_span(
        &self,
        from: F,
        to: F,
        threshold: F,
        options: &ArcFitOptions<F>,
        shapes: &mut Vec<PathShape<F>>,
    ) {
        let mut ts = from;
        while ts < to {
            if shapes.len() + 1 >= options.max_pieces {
                log::warn!(
                    "arc fitting reached {} pieces; covering t = {:?}..{:?} with a line",
                    options.max_pieces,
                    ts.to_f64(),
                    to.to_f64()
                );
                shapes.push(self.line_piece(ts, to));
                return;
            }
            let (shape, end) = self.fit_one(ts, to, threshold, options);
            shapes.push(shape);
            ts = end;
        }
    }

    /// Fits the widest acceptable arc starting at `ts`, ending no later than
    /// `limit`. Returns the piece and the parameter it ends at.
    fn fit_one(
        &self,
        ts: F,
        limit: F,
        threshold: F,
        options: &ArcFitOptions<F>,
    ) -> (PathShape<F>, F) {
        let eps: F = epsilon();
        let half = F::from(0.5).unwrap();
        let start = self.position(ts);

        let mut te = limit;
        let mut best: Option<(Arc2<F>, F)> = None;
        let mut prev_good = false;
        let mut settled = false;

        for _ in 0..options.max_iterations {
            let tm = (ts + te) * half;
            let good = match Arc2::from_three_points(start, self.position(tm), self.position(te)) {
                Some(arc) => {
                    let good = self.arc_error(&arc, ts, te) <= threshold;
                    if good {
                        best = Some((arc, te));
                    }
                    good
                }
                None if self.chord_error(ts, te) <= threshold => {
                    return (self.line_piece(ts, te), te);
                }
                None => false,
            };

            if good {
                if te >= limit {
                    settled = true;
                    break;
                }
                te = (te + (te - ts) * half).min(limit);
            } else {
                if prev_good {
                    settled = true;
                    break;
                }
                te = tm;
            }
            prev_good = good;

            if te - ts <= eps {
                settled = true;
                break;
            }
        }

        if !settled {
            log::warn!(
                "arc fitting hit the {} iteration cap at t = {:?}",
                options.max_iterations,
                ts.to_f64()
            );
        }

        match best {
            Some((arc, end)) => (
                PathShape::Arc(FittedArc::from_arc(&arc, Interval::new(ts, end))),
                end,
            ),
            None => {
                let end = te.max((ts + eps).min(limit));
                log::debug!(
                    "no arc fits from t = {:?}; using a line to {:?}",
                    ts.to_f64(),
                    end.to_f64()
                );
                (self.line_piece(ts, end), end)
            }
        }
    }

    /// Summed distance between curve and arc at 25% and 75% of the span.
    fn arc_error(&self, arc: &Arc2<F>, ts: F, te: F) -> F {
        self.sample_error(ts, te, |r| arc.eval(r))
    }

    /// Summed distance between curve and chord at 25% and 75% of the span.
    fn chord_error(&self, ts: F, te: F) -> F {
        let (a, b) = (self.position(ts), self.position(te));
        self.sample_error(ts, te, |r| a.lerp(b, r))
    }

    fn sample_error<S>(&self, ts: F, te: F, shape: S) -> F
    where
        S: Fn(F) -> Point2<F>,
    {
        let quarter = F::from(0.25).unwrap();
        let span = te - ts;
        [quarter, F::one() - quarter]
            .iter()
            .map(|&r| self.position(ts + span * r).distance(shape(r)))
            .fold(F::zero(), |acc, d| acc + d)
    }

    fn line_piece(&self, ts: F, te: F) -> PathShape<F> {
        PathShape::Line(LinePiece::new(
            Segment2::new(self.position(ts), self.position(te)),
            Interval::new(ts, te),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn bulge() -> Bezier<f64> {
        Bezier::cubic(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 100.0),
            Point2::new(100.0, 100.0),
            Point2::new(100.0, 0.0),
        )
    }

    fn assert_within(curve: &Bezier<f64>, shapes: &[PathShape<f64>], threshold: f64) {
        for shape in shapes {
            let interval = shape.interval();
            for i in 1..10 {
                let r = i as f64 / 10.0;
                let expected = curve.position(interval.project(r));
                assert!(shape.position(r).distance(expected) <= threshold);
            }
        }
    }

    fn assert_contiguous(shapes: &[PathShape<f64>]) {
        assert_eq!(shapes[0].interval().start, 0.0);
        assert_eq!(shapes[shapes.len() - 1].interval().end, 1.0);
        for w in shapes.windows(2) {
            assert_eq!(w[0].interval().end, w[1].interval().start);
        }
    }

    #[test]
    fn test_to_arcs_error_bound() {
        let curve = bulge();
        for &threshold in &[0.5, 0.1, 0.01] {
            let shapes = curve.to_arcs(threshold);
            assert!(!shapes.is_empty());
            assert_contiguous(&shapes);
            assert_within(&curve, &shapes, threshold);
        }
    }

    #[test]
    fn test_fitted_arcs_meet_the_curve() {
        let curve = bulge();
        for shape in curve.to_arcs(0.1) {
            if let PathShape::Arc(arc) = shape {
                let from = curve.position(arc.interval.start);
                let to = curve.position(arc.interval.end);
                assert!(arc.start().distance(from) < 1e-6);
                assert!(arc.end().distance(to) < 1e-6);
            }
        }
    }

    #[test]
    fn test_to_arcs_s_curve() {
        // Start, middle and end of the S are collinear, so the first attempt
        // has no arc and must shrink.
        let s_curve: Bezier<f64> = Bezier::cubic(
            Point2::new(0.0, 0.0),
            Point2::new(100.0, 0.0),
            Point2::new(0.0, 100.0),
            Point2::new(100.0, 100.0),
        );
        let shapes = s_curve.to_arcs(0.5);
        assert!(shapes.len() > 2);
        assert_contiguous(&shapes);
        assert_within(&s_curve, &shapes, 0.5);

        let reversed = shapes
            .iter()
            .filter(|s| matches!(s, PathShape::Arc(a) if a.reversed))
            .count();
        assert!(reversed > 0 && reversed < shapes.len());
    }

    #[test]
    fn test_to_arcs_line() {
        let line: Bezier<f64> = Bezier::line(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));
        let shapes = line.to_arcs(0.1);
        assert_eq!(shapes.len(), 1);
        assert!(matches!(shapes[0], PathShape::Line(_)));
        assert_relative_eq!(shapes[0].length(), 200.0_f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn test_fitted_arc_is_counter_clockwise_in_degrees() {
        // The bulge turns clockwise, so its arcs are stored reversed.
        for shape in bulge().to_arcs(0.5) {
            let PathShape::Arc(arc) = shape else {
                panic!("expected an arc");
            };
            assert!(arc.reversed);
            assert!(arc.end_angle > arc.start_angle);
            assert!(arc.end_angle - arc.start_angle <= 360.0);
        }
    }

    #[test]
    fn test_fitted_arc_round_trip() {
        let arc: Arc2<f64> = Arc2::from_three_points(
            Point2::new(-1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 0.0),
        )
        .unwrap();
        let fitted = FittedArc::from_arc(&arc, Interval::new(0.2, 0.4));
        assert!(fitted.reversed);
        assert_relative_eq!(fitted.start_angle, 0.0, epsilon = 1e-9);
        assert_relative_eq!(fitted.end_angle, 180.0, epsilon = 1e-9);

        let start = fitted.position(0.0);
        assert_relative_eq!(start.x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(fitted.start().x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(fitted.start().y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(fitted.end().x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(fitted.end().y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(fitted.length(), std::f64::consts::PI, epsilon = 1e-12);

        let (left, right) = fitted.break_at(0.5);
        assert_relative_eq!(left.interval.end, 0.3, epsilon = 1e-12);
        assert_relative_eq!(right.interval.start, 0.3, epsilon = 1e-12);
        assert_relative_eq!(left.position(1.0).y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_max_pieces_caps_output() {
        let options = ArcFitOptions::with_threshold(1e-9).max_pieces(4);
        let shapes = bulge().to_arcs_with(&options);
        assert_eq!(shapes.len(), 4);
        assert!(matches!(shapes[3], PathShape::Line(_)));
        assert_eq!(shapes[3].interval().end, 1.0);
    }

    #[test]
    fn test_to_arcs_adaptive() {
        let curve = bulge();
        let shapes = curve.to_arcs_adaptive();
        assert!(!shapes.is_empty());
        assert_contiguous(&shapes);
        // Each half spans half the range, so its bound is 1% of the length halved.
        assert_within(&curve, &shapes, curve.length() / 200.0 + 1e-9);
        assert!(shapes
            .iter()
            .any(|s| approximately(s.interval().end, 0.5, 1e-12)));
    }

    #[test]
    fn test_f32_support() {
        let curve: Bezier<f32> = Bezier::quadratic(
            Point2::new(0.0, 0.0),
            Point2::new(50.0, 100.0),
            Point2::new(100.0, 0.0),
        );
        let shapes = curve.to_arcs(0.5);
        assert!(!shapes.is_empty());
        assert_eq!(shapes[shapes.len() - 1].interval().end, 1.0);
    }
}
