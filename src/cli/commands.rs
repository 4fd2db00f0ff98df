//! CLI command implementations.

use crate::engine::ShortestPathSolver;
use crate::graph::{DirectedGraph, GraphBuilder};
use crate::types::{Edge, GraphError, GraphResult, Representation, VertexId};

use super::render::{distances_json, distances_text, graph_json, graph_text};

/// Vertex count and edges of the sample graph used by `demo`.
const DEMO_VERTICES: u32 = 5;
const DEMO_EDGES: [(VertexId, VertexId); 7] =
    [(0, 1), (1, 2), (2, 3), (1, 3), (3, 4), (1, 4), (0, 4)];
/// Edges into the vertex `demo` appends.
const DEMO_GROWTH_EDGES: [(VertexId, VertexId); 3] = [(0, 5), (4, 5), (2, 5)];

/// Parse an edge written as `u:v` or `u->v`.
pub fn parse_edge(text: &str) -> GraphResult<Edge> {
    let invalid = || GraphError::InvalidEdgeSpec(text.to_string());
    let (u, v) = text
        .split_once("->")
        .or_else(|| text.split_once(':'))
        .ok_or_else(invalid)?;
    let u = u.trim().parse().map_err(|_| invalid())?;
    let v = v.trim().parse().map_err(|_| invalid())?;
    Ok(Edge::new(u, v))
}

/// Parse a representation name.
pub fn parse_representation(name: &str) -> GraphResult<Representation> {
    Representation::from_name(name)
        .ok_or_else(|| GraphError::UnknownRepresentation(name.to_string()))
}

/// Build a graph from command-line pieces.
pub fn build_graph(
    repr: Representation,
    vertices: u32,
    edges: &[Edge],
) -> GraphResult<Box<dyn DirectedGraph>> {
    GraphBuilder::new(vertices)
        .edges(edges.iter().copied())
        .build_boxed(repr)
}

/// Build a graph and print it.
pub fn cmd_show(
    repr: Representation,
    vertices: u32,
    edges: &[Edge],
    json: bool,
) -> GraphResult<()> {
    let graph = build_graph(repr, vertices, edges)?;
    if json {
        print_json(&graph_json(graph.as_ref()));
    } else {
        print!("{}", graph_text(graph.as_ref()));
    }
    Ok(())
}

/// Build a graph, compute distances from `start` and print both.
pub fn cmd_solve(
    repr: Representation,
    vertices: u32,
    edges: &[Edge],
    start: VertexId,
    json: bool,
) -> GraphResult<()> {
    let graph = build_graph(repr, vertices, edges)?;
    let report = ShortestPathSolver::new().report(graph.as_ref(), start)?;
    if json {
        print_json(&serde_json::json!({
            "graph": graph_json(graph.as_ref()),
            "shortest_paths": distances_json(&report),
        }));
    } else {
        print!("{}", graph_text(graph.as_ref()));
        print!("{}", distances_text(&report));
    }
    Ok(())
}

/// Walk the sample scenario on both representations.
///
/// Each run builds the sample graph, appends vertex 5 with three incoming
/// edges, solves, then removes those edges again. The matrix run solves
/// from vertex 0 and the list run from vertex 2.
pub fn cmd_demo(json: bool) -> GraphResult<()> {
    let mut runs = Vec::new();
    for (repr, start) in [(Representation::Matrix, 0), (Representation::List, 2)] {
        runs.push(demo_run(repr, start, json)?);
    }
    if json {
        print_json(&serde_json::Value::Array(runs));
    }
    Ok(())
}

fn demo_run(
    repr: Representation,
    start: VertexId,
    json: bool,
) -> GraphResult<serde_json::Value> {
    let mut steps = Vec::new();
    let mut record = |label: &str, graph: &dyn DirectedGraph| {
        if json {
            steps.push(serde_json::json!({ "step": label, "graph": graph_json(graph) }));
        } else {
            print!("{}", graph_text(graph));
        }
    };

    if !json {
        println!("Directed graph as {}", repr.name());
    }
    let mut graph = GraphBuilder::new(DEMO_VERTICES)
        .edges(DEMO_EDGES)
        .build_boxed(repr)?;
    record("built", graph.as_ref());

    graph.add_vertex();
    for (u, v) in DEMO_GROWTH_EDGES {
        graph.add_edge(u, v)?;
    }
    record("grown", graph.as_ref());

    let report = ShortestPathSolver::new().report(graph.as_ref(), start)?;
    if !json {
        print!("{}", distances_text(&report));
    }

    for (u, v) in DEMO_GROWTH_EDGES {
        graph.remove_edge(u, v)?;
    }
    record("shrunk", graph.as_ref());

    Ok(serde_json::json!({
        "representation": repr,
        "steps": steps,
        "shortest_paths": distances_json(&report),
    }))
}

fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}
