//! The edge value and the storage representation tag.

use serde::Serialize;

use super::VertexId;

/// Backing store used by a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    /// One growable neighbor list per vertex. Sparse.
    List,
    /// Square grid of 0/1 cells. Dense.
    Matrix,
}

impl Representation {
    /// Return a human-readable name for this representation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Matrix => "matrix",
        }
    }

    /// Parse a representation from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "list" | "adjacency_list" | "adjlist" => Some(Self::List),
            "matrix" | "adjacency_matrix" | "adjmatrix" => Some(Self::Matrix),
            _ => None,
        }
    }
}

/// A directed edge from `source` to `target`. Every edge costs one hop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Edge {
    /// Tail vertex.
    pub source: VertexId,
    /// Head vertex.
    pub target: VertexId,
}

impl Edge {
    /// Create a new edge.
    pub fn new(source: VertexId, target: VertexId) -> Self {
        Self { source, target }
    }
}

impl From<(VertexId, VertexId)> for Edge {
    fn from((source, target): (VertexId, VertexId)) -> Self {
        Self::new(source, target)
    }
}

impl From<Edge> for (VertexId, VertexId) {
    fn from(edge: Edge) -> Self {
        (edge.source, edge.target)
    }
}
