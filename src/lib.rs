//! curvum - Bézier curve algorithms
//!
//! Evaluation, splitting, bounding boxes, reduction into simple segments,
//! offsetting and outlining, intersection, and approximation by circular
//! arcs for 2D quadratic and cubic Bézier curves. Everything is generic over
//! `f32` and `f64`.
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
//! assert_eq!(curve.position(0.5), Point2::new(50.0, 75.0));
//! assert!(curve.reduce().complete);
//! ```

pub mod bounds;
pub mod curves;
pub mod error;
pub mod primitives;
pub mod tolerance;

pub use bounds::Aabb2;
pub use curves::{
    ArcFitOptions, Bezier, CurveIntersection, Extrema, FittedArc, Interval, LinePiece, PathShape,
    PolyBezier, ReduceOptions, Reduction, SplitResult,
};
pub use error::CurveError;
pub use primitives::{Line2, Point2, Segment2, Vec2};
pub use tolerance::{orient2d, Orientation};
