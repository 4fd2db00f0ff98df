//! Error types for the digraph library.

use thiserror::Error;

/// All errors that can occur in the digraph library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A required argument was absent.
    #[error("Required argument `{0}` is missing")]
    NullArgument(&'static str),

    /// Vertex index is not below the current vertex count.
    #[error("Vertex `{name}` = {index} out of range (vertex count {count})")]
    OutOfRange {
        name: &'static str,
        index: u32,
        count: u32,
    },

    /// Graphs need at least one vertex.
    #[error("Invalid graph size: {0} (must be at least 1)")]
    InvalidSize(u32),

    /// Edge text could not be parsed.
    #[error("Invalid edge specification: {0:?} (expected u:v or u->v)")]
    InvalidEdgeSpec(String),

    /// Representation name is not recognised.
    #[error("Unknown representation: {0:?} (expected list or matrix)")]
    UnknownRepresentation(String),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
