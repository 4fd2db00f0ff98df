//! Dense representation: a square grid of 0/1 cells.

use crate::types::{GraphError, GraphResult, Representation, VertexId};

use super::DirectedGraph;

/// Directed graph stored as a `vertex_count x vertex_count` matrix.
///
/// Edge queries and updates are O(1) cell accesses, and an edge is either
/// present or not, so adding it twice is a no-op. The price is n² space and
/// an O(n²) copy every time a vertex is added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrixGraph {
    /// Row-major cells; `cells[u * n + v] == 1` iff `u -> v`.
    cells: Vec<u8>,
    n: u32,
}

impl AdjacencyMatrixGraph {
    /// Create a graph with `n` vertices. Fails with `InvalidSize` when `n == 0`.
    pub fn new(n: u32) -> GraphResult<Self> {
        if n == 0 {
            return Err(GraphError::InvalidSize(n));
        }
        let side = n as usize;
        Ok(Self {
            cells: vec![0; side * side],
            n,
        })
    }

    /// The row of cells for source vertex `u`.
    pub fn row(&self, u: VertexId) -> GraphResult<&[u8]> {
        self.check_vertex("u", u)?;
        let side = self.n as usize;
        let start = u as usize * side;
        Ok(&self.cells[start..start + side])
    }

    #[inline]
    fn cell(&self, u: VertexId, v: VertexId) -> usize {
        u as usize * self.n as usize + v as usize
    }
}

impl DirectedGraph for AdjacencyMatrixGraph {
    fn with_vertices(n: u32) -> GraphResult<Self> {
        Self::new(n)
    }

    fn has_edge(&self, u: VertexId, v: VertexId) -> GraphResult<bool> {
        self.check_vertex("u", u)?;
        self.check_vertex("v", v)?;
        Ok(self.cells[self.cell(u, v)] == 1)
    }

    fn add_edge(&mut self, u: VertexId, v: VertexId) -> GraphResult<()> {
        self.check_vertex("u", u)?;
        self.check_vertex("v", v)?;
        log::trace!("matrix graph: add edge {} -> {}", u, v);
        let idx = self.cell(u, v);
        self.cells[idx] = 1;
        Ok(())
    }

    fn remove_edge(&mut self, u: VertexId, v: VertexId) -> GraphResult<()> {
        self.check_vertex("u", u)?;
        self.check_vertex("v", v)?;
        log::trace!("matrix graph: remove edge {} -> {}", u, v);
        let idx = self.cell(u, v);
        self.cells[idx] = 0;
        Ok(())
    }

    fn add_vertex(&mut self) {
        debug_assert!(self.n < u32::MAX, "vertex ids are u32");
        let old = self.n as usize;
        let new = old + 1;
        let mut grown = vec![0u8; new * new];
        for (u, row) in self.cells.chunks_exact(old).enumerate() {
            grown[u * new..u * new + old].copy_from_slice(row);
        }
        log::debug!(
            "matrix graph: vertex count {} -> {} ({} cells copied)",
            old,
            new,
            old * old
        );
        self.cells = grown;
        self.n += 1;
    }

    fn vertex_count(&self) -> u32 {
        self.n
    }

    fn representation(&self) -> Representation {
        Representation::Matrix
    }
}
