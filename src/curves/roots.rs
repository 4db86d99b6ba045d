//! Closed-form polynomial roots for Bézier coordinate functions.
//!
//! Both solvers work on Bernstein-form coefficients (the coordinate values of
//! control points) rather than power-basis coefficients, which is what the
//! curve code has at hand.

use crate::tolerance::{approximately, between};
use num_traits::Float;
use std::f64::consts::PI;

/// Roots of a linear or quadratic Bernstein polynomial, unfiltered.
///
/// `coeffs` holds one coordinate of a derivative control-point level:
/// two values for a linear function, three for a quadratic. Any other length
/// yields no roots. Roots may lie outside `[0, 1]`; callers filter.
pub(crate) fn derivative_roots<F: Float>(coeffs: &[F]) -> Vec<F> {
    match *coeffs {
        [a, b, c] => {
            // In power form: d·t² + 2m·t + a, with discriminant 4·(b² - ac).
            let d = a - (b + b) + c;
            let m = b - a;
            let disc = b * b - a * c;
            if disc < F::zero() {
                return vec![];
            }
            let sq = disc.sqrt();
            let q = if m >= F::zero() { -(m + sq) } else { sq - m };

            // q / d and a / q avoid cancellation when d is tiny.
            let mut roots = Vec::with_capacity(2);
            if d != F::zero() {
                roots.push(q / d);
            }
            if q != F::zero() {
                roots.push(a / q);
            }
            roots
        }
        [a, b] => {
            if a != b {
                vec![a / (a - b)]
            } else {
                vec![]
            }
        }
        _ => vec![],
    }
}

/// Roots in `[0, 1]` of the y-coordinate function of a curve that has
/// already been aligned so the intersecting line is the x-axis.
///
/// `ys` holds the aligned y-coordinates of the control points (2, 3 or 4
/// values). Cubics are solved with the trigonometric/Cardano real-root
/// formulas.
pub(crate) fn aligned_roots<F: Float>(ys: &[F], eps: F) -> Vec<F> {
    let in_domain = |t: &F| between(*t, F::zero(), F::one(), eps);
    let clamp = |t: F| t.max(F::zero()).min(F::one());

    let roots = match *ys {
        [a, b] => {
            if a != b {
                vec![a / (a - b)]
            } else {
                vec![]
            }
        }
        [_, _, _] => derivative_roots(ys),
        [pa, pb, pc, pd] => cubic_roots(pa, pb, pc, pd, eps),
        _ => vec![],
    };

    roots.into_iter().filter(in_domain).map(clamp).collect()
}

fn cubic_roots<F: Float>(pa: F, pb: F, pc: F, pd: F, eps: F) -> Vec<F> {
    let two = F::one() + F::one();
    let three = two + F::one();
    let six = three + three;

    let d = -pa + three * pb - three * pc + pd;
    let mut a = three * pa - six * pb + three * pc;
    let mut b = -three * pa + three * pb;
    let mut c = pa;

    if approximately(d, F::zero(), eps) {
        // Not a cubic after all.
        if approximately(a, F::zero(), eps) {
            if approximately(b, F::zero(), eps) {
                return vec![];
            }
            return vec![-c / b];
        }
        let disc = b * b - two * two * a * c;
        if disc < F::zero() {
            return vec![];
        }
        let q = disc.sqrt();
        let a2 = two * a;
        return vec![(q - b) / a2, (-b - q) / a2];
    }

    a = a / d;
    b = b / d;
    c = c / d;

    let nine = three * three;
    let twenty_seven = nine * three;
    let p = (three * b - a * a) / three;
    let p3 = p / three;
    let q = (two * a * a * a - nine * a * b + twenty_seven * c) / twenty_seven;
    let q2 = q / two;
    let discriminant = q2 * q2 + p3 * p3 * p3;
    let a3 = a / three;

    if discriminant < F::zero() {
        let tau = F::from(2.0 * PI).unwrap();
        let mp3 = -p / three;
        let r = (mp3 * mp3 * mp3).sqrt();
        let cosphi = (-q / (two * r)).max(-F::one()).min(F::one());
        let phi = cosphi.acos();
        let t1 = two * r.cbrt();
        vec![
            t1 * (phi / three).cos() - a3,
            t1 * ((phi + tau) / three).cos() - a3,
            t1 * ((phi + two * tau) / three).cos() - a3,
        ]
    } else if discriminant == F::zero() {
        let u1 = if q2 < F::zero() {
            (-q2).cbrt()
        } else {
            -q2.cbrt()
        };
        vec![two * u1 - a3, -u1 - a3]
    } else {
        let sd = discriminant.sqrt();
        let u1 = (-q2 + sd).cbrt();
        let v1 = (q2 + sd).cbrt();
        vec![u1 - v1 - a3]
    }
}
