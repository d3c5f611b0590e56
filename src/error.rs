//! Error types for vector set analysis.

use thiserror::Error;

/// Errors produced when a vector set is rejected before any computation runs.
///
/// Numerical near-degeneracy is *not* an error: it is handled uniformly by the pivot
/// [`TOLERANCE`][crate::TOLERANCE]. Every failure here rejects the whole call; nothing is ever
/// partially computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The vector set contains no vectors.
    #[error("vector set is empty")]
    Empty,

    /// A vector's component count differs from the first vector's.
    #[error("vector {index} has {found} component(s), expected {expected}")]
    DimensionMismatch {
        /// Position of the offending vector in the set.
        index: usize,
        /// Component count of the first vector.
        expected: usize,
        /// Component count actually found.
        found: usize,
    },

    /// Every component of every vector is zero.
    #[error("all vector components are zero, enter at least one non-zero vector")]
    ZeroVectorSet,
}
