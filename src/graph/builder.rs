//! Fluent API for building graphs of either representation.

use crate::types::{Edge, GraphResult, Representation, VertexId};

use super::{AdjacencyListGraph, AdjacencyMatrixGraph, DirectedGraph};

/// Fluent builder collecting a vertex count and edges, validated on build.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    vertices: u32,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Start a builder for a graph with `vertices` vertices.
    pub fn new(vertices: u32) -> Self {
        Self {
            vertices,
            edges: Vec::new(),
        }
    }

    /// Add an edge `u -> v`.
    pub fn edge(&mut self, u: VertexId, v: VertexId) -> &mut Self {
        self.edges.push(Edge::new(u, v));
        self
    }

    /// Add several edges.
    pub fn edges<I, E>(&mut self, edges: I) -> &mut Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        self.edges.extend(edges.into_iter().map(Into::into));
        self
    }

    /// Build a concrete graph. Edges are added in the order given.
    pub fn build<G: DirectedGraph>(&self) -> GraphResult<G> {
        let mut graph = G::with_vertices(self.vertices)?;
        for edge in &self.edges {
            graph.add_edge(edge.source, edge.target)?;
        }
        Ok(graph)
    }

    /// Build a graph whose representation is chosen at runtime.
    pub fn build_boxed(&self, repr: Representation) -> GraphResult<Box<dyn DirectedGraph>> {
        Ok(match repr {
            Representation::List => Box::new(self.build::<AdjacencyListGraph>()?),
            Representation::Matrix => Box::new(self.build::<AdjacencyMatrixGraph>()?),
        })
    }
}
