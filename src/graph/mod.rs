//! Graph representations behind one capability trait.

pub mod builder;
pub mod list_graph;
pub mod matrix_graph;

use std::ops::Range;

use crate::types::{Edge, GraphError, GraphResult, Representation, VertexId};

pub use builder::GraphBuilder;
pub use list_graph::AdjacencyListGraph;
pub use matrix_graph::AdjacencyMatrixGraph;

/// Operations every directed graph representation supports.
///
/// Vertex arguments must satisfy `index < vertex_count()`; anything else
/// fails with [`GraphError::OutOfRange`] and leaves the graph untouched.
pub trait DirectedGraph {
    /// Create a graph with `n` vertices and no edges. `n` must be at least 1.
    fn with_vertices(n: u32) -> GraphResult<Self>
    where
        Self: Sized;

    /// Whether the edge `u -> v` is present.
    fn has_edge(&self, u: VertexId, v: VertexId) -> GraphResult<bool>;

    /// Add the edge `u -> v`.
    fn add_edge(&mut self, u: VertexId, v: VertexId) -> GraphResult<()>;

    /// Remove the edge `u -> v`. Absent edges are a no-op.
    fn remove_edge(&mut self, u: VertexId, v: VertexId) -> GraphResult<()>;

    /// Append one vertex with no incident edges.
    fn add_vertex(&mut self);

    /// Current number of vertices, always at least 1.
    fn vertex_count(&self) -> u32;

    /// Which backing store this graph uses.
    fn representation(&self) -> Representation;

    /// Fail with `OutOfRange` unless `index` names an existing vertex.
    fn check_vertex(&self, name: &'static str, index: VertexId) -> GraphResult<()> {
        let count = self.vertex_count();
        if index >= count {
            return Err(GraphError::OutOfRange { name, index, count });
        }
        Ok(())
    }

    /// All vertex ids.
    fn vertices(&self) -> Range<VertexId> {
        0..self.vertex_count()
    }

    /// Number of distinct `(u, v)` pairs with an edge.
    fn edge_count(&self) -> usize {
        Edges::new(self).count()
    }

    /// Lazily enumerate present edges in row-major order.
    fn edges(&self) -> Edges<'_, Self>
    where
        Self: Sized,
    {
        Edges::new(self)
    }
}

/// Row-major scan over every `(u, v)` cell of a graph, yielding present edges.
///
/// Each pair is reported once even if the backing store records it more
/// than once. Works for trait objects through [`Edges::new`].
pub struct Edges<'a, G: DirectedGraph + ?Sized> {
    graph: &'a G,
    count: VertexId,
    u: VertexId,
    v: VertexId,
}

impl<'a, G: DirectedGraph + ?Sized> Edges<'a, G> {
    /// Start a fresh enumeration over `graph`.
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            count: graph.vertex_count(),
            u: 0,
            v: 0,
        }
    }
}

impl<G: DirectedGraph + ?Sized> Iterator for Edges<'_, G> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        while self.u < self.count {
            let (u, v) = (self.u, self.v);
            self.v += 1;
            if self.v == self.count {
                self.v = 0;
                self.u += 1;
            }
            if matches!(self.graph.has_edge(u, v), Ok(true)) {
                return Some(Edge::new(u, v));
            }
        }
        None
    }
}
