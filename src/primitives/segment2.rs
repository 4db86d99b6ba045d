//! 2D line segment type.

use super::{Point2, Vec2};
use crate::bounds::Aabb2;
use num_traits::Float;

/// A finite straight segment.
///
/// Curves are intersected against segments rather than infinite lines, and
/// arc fitting uses segments as its straight fallback pieces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// `end - start`.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Point at `t`; values outside `[0, 1]` extrapolate.
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.start.lerp(self.end, t)
    }

    /// Two segments meeting at `point_at(t)`.
    #[inline]
    pub fn split_at(self, t: F) -> (Self, Self) {
        let cut = self.point_at(t);
        (Self::new(self.start, cut), Self::new(cut, self.end))
    }

    /// Box spanned by the endpoints, whichever way the segment points.
    #[inline]
    pub fn bounds(self) -> Aabb2<F> {
        Aabb2::from_corners(self.start, self.end)
    }
}
