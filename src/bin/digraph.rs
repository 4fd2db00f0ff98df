//! CLI entry point for the `digraph` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use digraph::cli::commands;
use digraph::{Edge, GraphError, Representation};

#[derive(Parser)]
#[command(
    name = "digraph",
    about = "Directed graphs as adjacency lists or matrices, with unit-cost shortest paths"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the sample scenario on both representations
    Demo,
    /// Build a graph and print its vertices and edges
    Show {
        /// Representation: list or matrix
        #[arg(long, default_value = "list")]
        repr: String,
        /// Number of vertices
        #[arg(long)]
        vertices: u32,
        /// Edge as u:v or u->v (repeatable)
        #[arg(long = "edge")]
        edges: Vec<String>,
    },
    /// Build a graph and compute hop distances from a start vertex
    Solve {
        /// Representation: list or matrix
        #[arg(long, default_value = "list")]
        repr: String,
        /// Number of vertices
        #[arg(long)]
        vertices: u32,
        /// Edge as u:v or u->v (repeatable)
        #[arg(long = "edge")]
        edges: Vec<String>,
        /// Start vertex
        #[arg(long, default_value = "0")]
        start: u32,
    },
}

fn parse_edges(edges: &[String]) -> Result<Vec<Edge>, GraphError> {
    edges.iter().map(|e| commands::parse_edge(e)).collect()
}

fn run(command: Commands, json: bool) -> Result<(), GraphError> {
    match command {
        Commands::Demo => commands::cmd_demo(json),
        Commands::Show {
            repr,
            vertices,
            edges,
        } => {
            let repr: Representation = commands::parse_representation(&repr)?;
            commands::cmd_show(repr, vertices, &parse_edges(&edges)?, json)
        }
        Commands::Solve {
            repr,
            vertices,
            edges,
            start,
        } => {
            let repr = commands::parse_representation(&repr)?;
            commands::cmd_solve(repr, vertices, &parse_edges(&edges)?, start, json)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    if let Err(e) = run(cli.command, json) {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::InvalidSize(_)
            | GraphError::InvalidEdgeSpec(_)
            | GraphError::UnknownRepresentation(_) => 3,
            GraphError::OutOfRange { .. } => 4,
            GraphError::NullArgument(_) => 5,
        };
        process::exit(code);
    }
}
