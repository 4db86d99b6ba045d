//! Legendre–Gauss quadrature for arc length.

use num_traits::Float;

/// Abscissae and weights of the 24-point Legendre–Gauss rule on `[-1, 1]`.
const LEGENDRE_GAUSS_24: [(f64, f64); 24] = [
    (-0.06405689286260563, 0.12793819534675224),
    (0.06405689286260563, 0.12793819534675224),
    (-0.1911188674736163, 0.12583745634682839),
    (0.1911188674736163, 0.12583745634682839),
    (-0.3150426796961634, 0.12167047292780335),
    (0.3150426796961634, 0.12167047292780335),
    (-0.4337935076260452, 0.11550566805372554),
    (0.4337935076260452, 0.11550566805372554),
    (-0.5454214713888396, 0.10744427011596562),
    (0.5454214713888396, 0.10744427011596562),
    (-0.6480936519369755, 0.0976186521041139),
    (0.6480936519369755, 0.0976186521041139),
    (-0.7401241915785544, 0.08619016153195322),
    (0.7401241915785544, 0.08619016153195322),
    (-0.820001985973903, 0.07334648141108027),
    (0.820001985973903, 0.07334648141108027),
    (-0.8864155270044011, 0.05929858491543666),
    (0.8864155270044011, 0.05929858491543666),
    (-0.9382745520027328, 0.044277438817419676),
    (0.9382745520027328, 0.044277438817419676),
    (-0.9747285559713095, 0.028531388628933813),
    (0.9747285559713095, 0.028531388628933813),
    (-0.9951872199970213, 0.012341229799987334),
    (0.9951872199970213, 0.012341229799987334),
];

/// Integrates `speed(t)` over `t ∈ [0, 1]`.
///
/// With `speed` the magnitude of a curve's derivative this is the curve's
/// arc length; exact for polynomial integrands up to degree 47.
pub(crate) fn integrate_unit<F, S>(speed: S) -> F
where
    F: Float,
    S: Fn(F) -> F,
{
    let half = F::from(0.5).unwrap();
    let sum = LEGENDRE_GAUSS_24
        .iter()
        .fold(F::zero(), |acc, &(x, w)| {
            let t = half * F::from(x).unwrap() + half;
            acc + F::from(w).unwrap() * speed(t)
        });
    half * sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_weights_sum_to_interval_length() {
        let total: f64 = LEGENDRE_GAUSS_24.iter().map(|&(_, w)| w).sum();
        assert_relative_eq!(total, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_integrates_polynomials_exactly() {
        let integral: f64 = integrate_unit(|t: f64| 5.0 * t.powi(4) + 1.0);
        assert_relative_eq!(integral, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_integrates_quarter_circle_speed() {
        // sqrt(1 - t²) over [0, 1] is π/4
        let integral: f64 = integrate_unit(|t: f64| (1.0 - t * t).sqrt());
        assert_relative_eq!(integral, std::f64::consts::FRAC_PI_4, epsilon = 1e-3);
    }
}
