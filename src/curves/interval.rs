//! Parameter intervals tying a piece back to the curve it was cut from.

use crate::tolerance::map_range;
use num_traits::Float;

/// A parameter interval `[start, end]` on an ancestor curve.
///
/// Every curve produced by splitting, reducing or arc fitting carries the
/// interval of the original curve it covers, so results can be reported in
/// the original curve's parameter space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<F> {
    /// Start parameter on the ancestor curve.
    pub start: F,
    /// End parameter on the ancestor curve.
    pub end: F,
}

impl<F: Float> Interval<F> {
    /// Creates a new interval.
    #[inline]
    pub fn new(start: F, end: F) -> Self {
        Self { start, end }
    }

    /// The full unit interval `[0, 1]`.
    #[inline]
    pub fn unit() -> Self {
        Self::new(F::zero(), F::one())
    }

    /// Width of the interval.
    #[inline]
    pub fn span(self) -> F {
        self.end - self.start
    }

    /// Midpoint of the interval.
    #[inline]
    pub fn mid(self) -> F {
        (self.start + self.end) / (F::one() + F::one())
    }

    /// Projects a local parameter `t ∈ [0, 1]` into this interval.
    #[inline]
    pub fn project(self, t: F) -> F {
        map_range(t, F::zero(), F::one(), self.start, self.end)
    }

    /// Returns the sub-interval covering local parameters `[t1, t2]`.
    #[inline]
    pub fn sub(self, t1: F, t2: F) -> Self {
        Self::new(self.project(t1), self.project(t2))
    }
}

impl<F: Float> Default for Interval<F> {
    fn default() -> Self {
        Self::unit()
    }
}
