//! Shared data types for the digraph library.

pub mod edge;
pub mod error;

pub use edge::{Edge, Representation};
pub use error::{GraphError, GraphResult};

/// Zero-based vertex index in `0..vertex_count`.
pub type VertexId = u32;

/// Hop count from a source vertex.
pub type Distance = u32;

/// Distance reported for vertices with no path from the source.
pub const UNREACHABLE: Distance = Distance::MAX;
