//! Command implementations for the costar CLI
//!
//! Each command module provides a `run` function that executes the command logic.

pub mod path;
pub mod repl;
pub mod stats;

use anyhow::{Context, Result};
use costar_core::Graph;
use std::path::Path;

/// Build the co-appearance graph from a record file.
pub(crate) fn load_graph(file: &Path) -> Result<Graph> {
    Graph::from_path(file)
        .with_context(|| format!("Failed to load records from {}", file.display()))
}

/// Warn when the target does not appear in the graph; every lookup will then
/// report no path.
pub(crate) fn check_target(graph: &Graph, target: &str) {
    if !graph.contains(target) {
        tracing::warn!("Target '{}' does not appear in any record group", target);
    }
}
