//! Text and JSON views of graphs and distance reports.

use serde::Serialize;

use crate::engine::DistanceReport;
use crate::graph::{DirectedGraph, Edges};
use crate::types::{Distance, Edge, Representation, UNREACHABLE};

/// Serializable picture of a graph at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSnapshot {
    /// Backing store of the captured graph.
    pub representation: Representation,
    /// Vertex count; ids run `0..vertices`.
    pub vertices: u32,
    /// Present edges in row-major order, each pair once.
    pub edges: Vec<Edge>,
}

impl GraphSnapshot {
    /// Capture vertex count and edges of `graph`.
    pub fn capture(graph: &dyn DirectedGraph) -> Self {
        Self {
            representation: graph.representation(),
            vertices: graph.vertex_count(),
            edges: Edges::new(graph).collect(),
        }
    }
}

/// Vertex list followed by one `u -> v` line per edge.
pub fn graph_text(graph: &dyn DirectedGraph) -> String {
    let mut out = String::from("Vertices:\n");
    for v in graph.vertices() {
        out.push_str(&format!("{},", v));
    }
    out.push_str("\nEdges:\n");
    for edge in Edges::new(graph) {
        out.push_str(&format!("{} -> {}\n", edge.source, edge.target));
    }
    out
}

/// One `s -> v = d` line per vertex.
pub fn distances_text(report: &DistanceReport) -> String {
    let mut out = format!(
        "Compute distances from vertex {} to all other vertices\n",
        report.source
    );
    for (v, &d) in report.distances.iter().enumerate() {
        out.push_str(&format!(
            "{} -> {} = {}\n",
            report.source,
            v,
            format_distance(d)
        ));
    }
    out
}

/// JSON object for a graph.
pub fn graph_json(graph: &dyn DirectedGraph) -> serde_json::Value {
    serde_json::to_value(GraphSnapshot::capture(graph)).unwrap_or_default()
}

/// JSON object for a report; unreachable vertices map to `null`.
pub fn distances_json(report: &DistanceReport) -> serde_json::Value {
    let distances: Vec<Option<Distance>> = report
        .distances
        .iter()
        .map(|&d| (d != UNREACHABLE).then_some(d))
        .collect();
    serde_json::json!({
        "source": report.source,
        "distances": distances,
    })
}

fn format_distance(d: Distance) -> String {
    if d == UNREACHABLE {
        "unreachable".to_string()
    } else {
        d.to_string()
    }
}
