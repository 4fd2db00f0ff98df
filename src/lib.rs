//! Digraph — directed graphs with interchangeable storage.
//!
//! Two representations (adjacency list and adjacency matrix) implement the
//! same [`DirectedGraph`] capability, and the unit-cost shortest-path solver
//! accepts either one.

pub mod cli;
pub mod engine;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{min_distances, DistanceReport, ShortestPathSolver};
pub use graph::{AdjacencyListGraph, AdjacencyMatrixGraph, DirectedGraph, Edges, GraphBuilder};
pub use types::{
    Distance, Edge, GraphError, GraphResult, Representation, VertexId, UNREACHABLE,
};
