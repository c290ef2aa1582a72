//! The error type shared by every algorithm in this crate.
//!
//! Only precondition violations are errors.  Unreachable vertices, missing
//! paths and sequences that are not walks are ordinary results.

use std::fmt::Debug;

/// Errors reported when an argument violates an algorithm's preconditions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A vertex index outside `[0, len)`.
    #[error("index out of range: {index} (graph has {len} vertices)")]
    IndexOutOfRange { index: usize, len: usize },
    /// A vertex label that is not part of the graph.
    #[error("unknown vertex: {0}")]
    UnknownVertex(String),
    /// A negative or NaN edge weight.
    #[error("invalid weight {weight} on edge ({from}, {to})")]
    InvalidWeight {
        from: usize,
        to: usize,
        weight: String,
    },
    /// A matrix row whose length differs from the number of rows.
    #[error("row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
}

impl GraphError {
    pub(crate) fn unknown_vertex<V: Debug>(vertex: &V) -> Self {
        GraphError::UnknownVertex(format!("{vertex:?}"))
    }

    pub(crate) fn invalid_weight<W: Debug>(from: usize, to: usize, weight: W) -> Self {
        GraphError::InvalidWeight {
            from,
            to,
            weight: format!("{weight:?}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
