//! Bézier curves and the shapes derived from them.
//!
//! [`Bezier`] holds a quadratic or cubic curve with its derivative control
//! points cached. The other modules extend it with splitting, extrema,
//! reduction to simple segments, offsetting and outlining, intersection,
//! and approximation by circular arcs.

mod arc;
mod arc_fit;
mod bezier;
mod extrema;
mod interval;
mod intersect;
mod offset;
mod path;
mod quadrature;
mod reduce;
mod roots;
mod split;

pub use arc::Arc2;
pub use arc_fit::{ArcFitOptions, FittedArc};
pub use bezier::{Bezier, EPSILON, LINEAR_TOLERANCE};
pub use extrema::Extrema;
pub use interval::Interval;
pub use intersect::CurveIntersection;
pub use path::{LinePiece, PathShape, PolyBezier};
pub use reduce::{ReduceOptions, Reduction};
pub use split::SplitResult;
