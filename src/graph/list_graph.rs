//! Sparse representation: one neighbor list per vertex.

use crate::types::{GraphError, GraphResult, Representation, VertexId};

use super::DirectedGraph;

/// Directed graph stored as an array of neighbor lists.
///
/// Space grows with the number of edges, which suits sparse graphs.
/// `has_edge` and `remove_edge` scan the source's list, so they are
/// O(degree(u)). Adding the same edge twice records it twice; `has_edge`
/// still reports `true` and `remove_edge` drops one record at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyListGraph {
    /// `adjacency[u]` holds the targets of u's outgoing edges, in insertion order.
    adjacency: Vec<Vec<VertexId>>,
}

impl AdjacencyListGraph {
    /// Create a graph with `n` vertices. Fails with `InvalidSize` when `n == 0`.
    pub fn new(n: u32) -> GraphResult<Self> {
        if n == 0 {
            return Err(GraphError::InvalidSize(n));
        }
        Ok(Self {
            adjacency: vec![Vec::new(); n as usize],
        })
    }

    /// Recorded targets of `u`, duplicates included.
    pub fn neighbors(&self, u: VertexId) -> GraphResult<&[VertexId]> {
        self.check_vertex("u", u)?;
        Ok(&self.adjacency[u as usize])
    }

    /// Total number of recorded edges, duplicates included.
    pub fn edge_records(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }
}

impl DirectedGraph for AdjacencyListGraph {
    fn with_vertices(n: u32) -> GraphResult<Self> {
        Self::new(n)
    }

    fn has_edge(&self, u: VertexId, v: VertexId) -> GraphResult<bool> {
        self.check_vertex("u", u)?;
        self.check_vertex("v", v)?;
        Ok(self.adjacency[u as usize].contains(&v))
    }

    fn add_edge(&mut self, u: VertexId, v: VertexId) -> GraphResult<()> {
        self.check_vertex("u", u)?;
        self.check_vertex("v", v)?;
        log::trace!("list graph: add edge {} -> {}", u, v);
        self.adjacency[u as usize].push(v);
        Ok(())
    }

    fn remove_edge(&mut self, u: VertexId, v: VertexId) -> GraphResult<()> {
        self.check_vertex("u", u)?;
        self.check_vertex("v", v)?;
        let targets = &mut self.adjacency[u as usize];
        if let Some(pos) = targets.iter().position(|&t| t == v) {
            log::trace!("list graph: remove edge {} -> {}", u, v);
            targets.remove(pos);
        }
        Ok(())
    }

    fn add_vertex(&mut self) {
        debug_assert!(self.adjacency.len() < u32::MAX as usize, "vertex ids are u32");
        // Existing lists move into the grown outer Vec; only the spine is reallocated.
        self.adjacency.push(Vec::new());
        log::debug!(
            "list graph: vertex count {} -> {}",
            self.adjacency.len() - 1,
            self.adjacency.len()
        );
    }

    fn vertex_count(&self) -> u32 {
        self.adjacency.len() as u32
    }

    fn representation(&self) -> Representation {
        Representation::List
    }
}
