//! Error types for curve operations.

use thiserror::Error;

/// Errors that can occur while building or transforming curves.
///
/// Single-valued queries on degenerate geometry (a zero-length tangent,
/// parallel endpoint normals) return `None` instead; these errors are for
/// operations that cannot produce any meaningful value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// A curve needs 2, 3 or 4 control points.
    #[error("invalid control point count {count}: expected 2, 3 or 4")]
    InvalidPointCount {
        /// Number of points supplied.
        count: usize,
    },

    /// A reduced segment could not be scaled because its endpoint normals never meet.
    #[error("segment is not scalable: endpoint normals are parallel or undefined")]
    NotScalable,

    /// Reduction produced no segments to work with.
    #[error("reduction produced no simple segments")]
    EmptyReduction,
}
