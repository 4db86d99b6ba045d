//! Axis-aligned bounding box.

use crate::primitives::Point2;
use num_traits::Float;

/// A 2D axis-aligned bounding box.
///
/// Curve bounding boxes are broad-phase values only: two overlapping boxes
/// say nothing about whether the curves inside them actually touch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2<F> {
    /// Smallest x and y.
    pub min: Point2<F>,
    /// Largest x and y.
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates a box from its corners without checking `min <= max`.
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Creates the box spanned by two opposite corners in any order.
    #[inline]
    pub fn from_corners(a: Point2<F>, b: Point2<F>) -> Self {
        Self::new(
            Point2::new(a.x.min(b.x), a.y.min(b.y)),
            Point2::new(a.x.max(b.x), a.y.max(b.y)),
        )
    }

    /// `true` if `p` lies inside the box grown by `eps` on every side.
    ///
    /// The slack matters for degenerate boxes: a vertical segment's box has
    /// zero width, and computed crossing points land on either side of it.
    #[inline]
    pub fn contains_point(self, p: Point2<F>, eps: F) -> bool {
        (self.min.x - eps..=self.max.x + eps).contains(&p.x)
            && (self.min.y - eps..=self.max.y + eps).contains(&p.y)
    }

    /// `true` if the boxes share any point, edges included.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}
