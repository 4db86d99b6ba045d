//! Property-based tests for curve invariants using the `proptest` crate.

use proptest::prelude::*;

use curvum::{Bezier, PathShape, Point2, Segment2};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_point() -> impl Strategy<Value = Point2<f64>> {
    (-100.0f64..100.0, -100.0f64..100.0).prop_map(|(x, y)| Point2::new(x, y))
}

fn arb_cubic() -> impl Strategy<Value = Bezier<f64>> {
    (arb_point(), arb_point(), arb_point(), arb_point())
        .prop_map(|(a, b, c, d)| Bezier::cubic(a, b, c, d))
}

fn arb_quadratic() -> impl Strategy<Value = Bezier<f64>> {
    (arb_point(), arb_point(), arb_point()).prop_map(|(a, b, c)| Bezier::quadratic(a, b, c))
}

fn arb_curve() -> impl Strategy<Value = Bezier<f64>> {
    prop_oneof![arb_cubic(), arb_quadratic()]
}

const TOL: f64 = 1e-8;

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn endpoints_are_exact(curve in arb_curve()) {
        prop_assert_eq!(curve.position(0.0), curve.start());
        prop_assert_eq!(curve.position(1.0), curve.end());
    }

    #[test]
    fn split_halves_meet_on_the_curve(curve in arb_curve(), t in 0.01f64..0.99) {
        let split = curve.split(t);
        let on_curve = curve.position(t);
        prop_assert!(split.left.end().approx_eq(on_curve, TOL));
        prop_assert!(split.right.start().approx_eq(on_curve, TOL));
        prop_assert_eq!(split.left.start(), curve.start());
        prop_assert_eq!(split.right.end(), curve.end());
    }

    #[test]
    fn bounding_box_contains_samples(curve in arb_curve()) {
        let bbox = curve.bounding_box();
        for i in 0..=50 {
            let p = curve.position(i as f64 / 50.0);
            prop_assert!(bbox.contains_point(p, 1e-6), "{:?} outside {:?}", p, bbox);
        }
    }

    #[test]
    fn offset_point_is_at_distance(curve in arb_cubic(), t in 0.0f64..=1.0, d in -50.0f64..50.0) {
        if let Some(q) = curve.offset_point(t, d) {
            let p = curve.position(t);
            prop_assert!((p.distance(q) - d.abs()).abs() < 1e-9);
        }
    }
}

// ---------------------------------------------------------------------------
// Reduction
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn reduced_segments_are_simple_and_contiguous(curve in arb_curve()) {
        let reduction = curve.reduce();
        for segment in &reduction.segments {
            prop_assert!(segment.is_simple());
        }
        for w in reduction.segments.windows(2) {
            prop_assert!((w[0].interval().end - w[1].interval().start).abs() < 1e-12);
        }
        if reduction.complete && !reduction.is_empty() {
            prop_assert_eq!(reduction.segments[0].interval().start, 0.0);
            let last = reduction.segments[reduction.len() - 1].interval();
            prop_assert!((last.end - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn reduced_segments_follow_the_curve(curve in arb_curve()) {
        for segment in curve.reduce().segments {
            let interval = segment.interval();
            for i in 0..=4 {
                let r = i as f64 / 4.0;
                let expected = curve.position(interval.project(r));
                prop_assert!(segment.position(r).approx_eq(expected, 1e-6));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Intersection
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn segment_hits_are_sorted_and_in_range(curve in arb_curve(), a in arb_point(), b in arb_point()) {
        let ts = curve.intersect_segment(&Segment2::new(a, b));
        for &t in &ts {
            prop_assert!((0.0..=1.0).contains(&t));
        }
        for w in ts.windows(2) {
            prop_assert!(w[0] < w[1]);
        }
    }
}

// ---------------------------------------------------------------------------
// Arc fitting
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn arc_pieces_cover_the_curve(curve in arb_curve()) {
        let shapes = curve.to_arcs(0.5);
        prop_assert!(!shapes.is_empty());
        prop_assert_eq!(shapes[0].interval().start, 0.0);
        prop_assert_eq!(shapes[shapes.len() - 1].interval().end, 1.0);
        for w in shapes.windows(2) {
            prop_assert_eq!(w[0].interval().end, w[1].interval().start);
        }
        for shape in &shapes {
            if let PathShape::Arc(arc) = shape {
                prop_assert!(arc.end_angle >= arc.start_angle);
            }
            let interval = shape.interval();
            for i in 1..10 {
                let r = i as f64 / 10.0;
                let expected = curve.position(interval.project(r));
                prop_assert!(shape.position(r).distance(expected) <= 0.5);
            }
        }
    }
}
