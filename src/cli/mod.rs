//! Command implementations and rendering for the `digraph` binary.

pub mod commands;
pub mod render;
