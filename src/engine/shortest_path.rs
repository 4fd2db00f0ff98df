//! Single-source minimum hop counts.

use serde::Serialize;

use crate::graph::DirectedGraph;
use crate::types::{Distance, GraphError, GraphResult, VertexId, UNREACHABLE};

/// Cost of traversing any edge.
const EDGE_COST: Distance = 1;

/// Computes minimum hop counts from a source vertex.
///
/// Edges are relaxed in fixed vertex-index order, sweeping until nothing
/// changes, rather than by smallest tentative distance. Each sweep is
/// O(V²) `has_edge` probes. This is only valid because every edge costs
/// exactly one hop; weighted edges would need minimum-distance-first
/// selection instead. There is no visited set: a vertex may be lowered on a
/// later sweep, and only `i -> i` is skipped since a self-loop never helps.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestPathSolver;

impl ShortestPathSolver {
    /// Create a new solver. It holds no state between calls.
    pub fn new() -> Self {
        Self
    }

    /// Minimum number of edges from `start` to every vertex.
    ///
    /// The result has `vertex_count()` entries; unreachable vertices get
    /// [`UNREACHABLE`]. Fails with `OutOfRange` if `start` is not a vertex.
    pub fn compute_min_distances<G>(
        &self,
        graph: &G,
        start: VertexId,
    ) -> GraphResult<Vec<Distance>>
    where
        G: DirectedGraph + ?Sized,
    {
        graph.check_vertex("start", start)?;

        let n = graph.vertex_count();
        log::debug!(
            "shortest path: {} vertices ({}), start {}",
            n,
            graph.representation().name(),
            start
        );

        let mut dist = vec![UNREACHABLE; n as usize];
        dist[start as usize] = 0;

        // A sweep relaxes every edge in index order; a shortest path has at
        // most n - 1 edges, so n - 1 sweeps always suffice.
        let mut sweeps = 0;
        loop {
            sweeps += 1;
            let mut changed = false;
            for i in 0..n {
                let base = dist[i as usize];
                if base == UNREACHABLE {
                    continue;
                }
                for j in 0..n {
                    if j == i || !graph.has_edge(i, j)? {
                        continue;
                    }
                    let candidate = base.saturating_add(EDGE_COST);
                    if candidate < dist[j as usize] {
                        dist[j as usize] = candidate;
                        changed = true;
                    }
                }
            }
            if !changed || sweeps >= n {
                break;
            }
        }
        log::trace!("shortest path: settled after {} sweep(s)", sweeps);

        Ok(dist)
    }

    /// Solve and package the result for display.
    pub fn report<G>(&self, graph: &G, start: VertexId) -> GraphResult<DistanceReport>
    where
        G: DirectedGraph + ?Sized,
    {
        let distances = self.compute_min_distances(graph, start)?;
        Ok(DistanceReport {
            source: start,
            distances,
        })
    }
}

/// Like [`ShortestPathSolver::compute_min_distances`], for callers that may
/// not have a graph. `None` fails with `NullArgument`.
pub fn min_distances(
    graph: Option<&dyn DirectedGraph>,
    start: VertexId,
) -> GraphResult<Vec<Distance>> {
    let graph = graph.ok_or(GraphError::NullArgument("graph"))?;
    ShortestPathSolver::new().compute_min_distances(graph, start)
}

/// Distances from one source vertex, indexed by vertex id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceReport {
    /// The vertex distances are measured from.
    pub source: VertexId,
    /// `distances[v]`, [`UNREACHABLE`] when there is no path.
    pub distances: Vec<Distance>,
}

impl DistanceReport {
    /// Distance to `v`, or `None` if `v` is unreachable or not a vertex.
    pub fn distance(&self, v: VertexId) -> Option<Distance> {
        self.distances
            .get(v as usize)
            .copied()
            .filter(|&d| d != UNREACHABLE)
    }

    /// Whether some path leads from the source to `v`.
    pub fn is_reachable(&self, v: VertexId) -> bool {
        self.distance(v).is_some()
    }
}
