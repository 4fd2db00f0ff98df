//! Phase 3 tests: edge parsing, rendering, the command functions and the binary.

use std::path::PathBuf;
use std::process::{Command, Output};

use digraph::cli::commands::{
    build_graph, cmd_demo, cmd_show, cmd_solve, parse_edge, parse_representation,
};
use digraph::cli::render::{
    distances_json, distances_text, graph_json, graph_text, GraphSnapshot,
};
use digraph::engine::{DistanceReport, ShortestPathSolver};
use digraph::types::{Edge, GraphError, Representation, UNREACHABLE};

/// Path to the `digraph` binary built alongside the tests.
fn digraph_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove "deps"
    path.push("digraph");
    path
}

/// Run the `digraph` CLI with the given arguments and return the output.
fn run_digraph(args: &[&str]) -> Output {
    Command::new(digraph_bin())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run digraph")
}

/// Helper: assert that the CLI ran successfully (exit code 0).
fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "digraph failed with status {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

/// Helper: get stdout as a string from an Output.
fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Helper: get stderr as a string from an Output.
fn stderr_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn sample_edges() -> Vec<Edge> {
    ["0:1", "1->2", "2 -> 3", "1:3", "3:4", "1:4", "0:4"]
        .iter()
        .map(|s| parse_edge(s).unwrap())
        .collect()
}

// ==================== Parsing ====================

#[test]
fn test_parse_edge_forms() {
    assert_eq!(parse_edge("3:7").unwrap(), Edge::new(3, 7));
    assert_eq!(parse_edge("3->7").unwrap(), Edge::new(3, 7));
    assert_eq!(parse_edge(" 10 -> 0 ").unwrap(), Edge::new(10, 0));
}

#[test]
fn test_parse_edge_rejects_garbage() {
    for bad in ["", "3", "3-7", "a:b", "-1:2", "1:2:3", "1->"] {
        assert_eq!(
            parse_edge(bad).unwrap_err(),
            GraphError::InvalidEdgeSpec(bad.to_string()),
            "input {:?}",
            bad
        );
    }
}

#[test]
fn test_parse_representation() {
    assert_eq!(parse_representation("list").unwrap(), Representation::List);
    assert_eq!(
        parse_representation("MATRIX").unwrap(),
        Representation::Matrix
    );
    assert_eq!(
        parse_representation("csr").unwrap_err(),
        GraphError::UnknownRepresentation("csr".to_string())
    );
}

// ==================== Rendering ====================

#[test]
fn test_graph_text() {
    let edges = [Edge::new(2, 0), Edge::new(0, 1)];
    let graph = build_graph(Representation::List, 3, &edges).unwrap();
    assert_eq!(
        graph_text(graph.as_ref()),
        "Vertices:\n0,1,2,\nEdges:\n0 -> 1\n2 -> 0\n"
    );
}

#[test]
fn test_distances_text_marks_unreachable() {
    let report = DistanceReport {
        source: 1,
        distances: vec![UNREACHABLE, 0, 1],
    };
    assert_eq!(
        distances_text(&report),
        "Compute distances from vertex 1 to all other vertices\n\
         1 -> 0 = unreachable\n\
         1 -> 1 = 0\n\
         1 -> 2 = 1\n"
    );
}

#[test]
fn test_graph_json_and_snapshot() {
    let graph = build_graph(Representation::Matrix, 5, &sample_edges()).unwrap();
    let snapshot = GraphSnapshot::capture(graph.as_ref());
    assert_eq!(snapshot.vertices, 5);
    assert_eq!(snapshot.edges.len(), 7);
    assert_eq!(snapshot.edges[0], Edge::new(0, 1));

    let value = graph_json(graph.as_ref());
    assert_eq!(value["representation"], "matrix");
    assert_eq!(value["vertices"], 5);
    assert_eq!(value["edges"][1]["source"], 0);
    assert_eq!(value["edges"][1]["target"], 4);
}

#[test]
fn test_distances_json_uses_null() {
    let mut graph = build_graph(Representation::List, 5, &sample_edges()).unwrap();
    graph.add_vertex();
    let report = ShortestPathSolver::new().report(graph.as_ref(), 0).unwrap();
    let value = distances_json(&report);
    assert_eq!(value["source"], 0);
    assert_eq!(
        value["distances"],
        serde_json::json!([0, 1, 2, 2, 1, null])
    );
}

// ==================== Commands ====================

#[test]
fn test_commands_succeed() {
    let edges = sample_edges();
    cmd_show(Representation::List, 5, &edges, false).unwrap();
    cmd_show(Representation::Matrix, 5, &edges, true).unwrap();
    cmd_solve(Representation::Matrix, 5, &edges, 0, false).unwrap();
    cmd_solve(Representation::List, 5, &edges, 2, true).unwrap();
    cmd_demo(false).unwrap();
    cmd_demo(true).unwrap();
}

#[test]
fn test_commands_report_errors() {
    let edges = sample_edges();
    assert_eq!(
        cmd_show(Representation::List, 0, &[], false).unwrap_err(),
        GraphError::InvalidSize(0)
    );
    assert!(matches!(
        cmd_show(Representation::Matrix, 4, &edges, false),
        Err(GraphError::OutOfRange { index: 4, .. })
    ));
    assert!(matches!(
        cmd_solve(Representation::List, 5, &edges, 5, false),
        Err(GraphError::OutOfRange { name: "start", .. })
    ));
}

// ==================== Binary ====================

#[test]
fn test_cli_solve_text() {
    let output = run_digraph(&[
        "solve", "--repr", "matrix", "--vertices", "3", "--edge", "0:1", "--edge", "1->2",
    ]);
    assert_success(&output);
    let stdout = stdout_str(&output);
    assert!(stdout.contains("Edges:\n0 -> 1\n1 -> 2\n"));
    assert!(stdout.contains("0 -> 2 = 2"));
}

#[test]
fn test_cli_solve_json() {
    let output = run_digraph(&[
        "--format", "json", "solve", "--vertices", "4", "--edge", "0:1", "--edge", "1:2",
        "--start", "0",
    ]);
    assert_success(&output);
    let value: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(value["graph"]["representation"], "list");
    assert_eq!(value["graph"]["vertices"], 4);
    assert_eq!(value["shortest_paths"]["source"], 0);
    assert_eq!(
        value["shortest_paths"]["distances"],
        serde_json::json!([0, 1, 2, null])
    );
}

#[test]
fn test_cli_start_out_of_range_exits_4() {
    let output = run_digraph(&[
        "solve", "--repr", "matrix", "--vertices", "3", "--edge", "0:1", "--start", "3",
    ]);
    assert_eq!(output.status.code(), Some(4));
    let stderr = stderr_str(&output);
    assert!(stderr.starts_with("Error:"), "stderr: {}", stderr);
    assert!(stderr.contains("start"));
    assert!(stdout_str(&output).is_empty());
}

#[test]
fn test_cli_invalid_arguments_exit_3() {
    let output = run_digraph(&["show", "--repr", "bogus", "--vertices", "2"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr_str(&output).starts_with("Error:"));

    let output = run_digraph(&["show", "--vertices", "2", "--edge", "0-1"]);
    assert_eq!(output.status.code(), Some(3));

    let output = run_digraph(&["show", "--vertices", "0"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_cli_demo_json() {
    let output = run_digraph(&["--format", "json", "demo"]);
    assert_success(&output);
    let value: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    let runs = value.as_array().unwrap();
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0]["representation"], "matrix");
    assert_eq!(
        runs[0]["shortest_paths"]["distances"],
        serde_json::json!([0, 1, 2, 2, 1, 1])
    );
    assert_eq!(runs[1]["representation"], "list");
    assert_eq!(
        runs[1]["shortest_paths"]["distances"],
        serde_json::json!([null, null, 0, 1, 2, 1])
    );
    assert_eq!(runs[1]["steps"][2]["graph"]["vertices"], 6);
}
