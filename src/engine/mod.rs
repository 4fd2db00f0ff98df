//! Algorithms over the graph capability.

pub mod shortest_path;

pub use shortest_path::{min_distances, DistanceReport, ShortestPathSolver};
