//! Stats command - size of the graph built from a record file

use crate::output::{CsvOutput, Output, OutputConfig, OutputFormat, Outputter, TableOutput};
use anyhow::Result;
use costar_core::Graph;
use serde::Serialize;
use std::path::Path;

/// Graph size summary
#[derive(Debug, Serialize)]
pub struct GraphStats {
    pub file: String,
    pub entities: usize,
    pub events: usize,
    pub edges: usize,
}

impl GraphStats {
    pub fn new(file: &Path, graph: &Graph) -> Self {
        Self {
            file: file.display().to_string(),
            entities: graph.entity_count(),
            events: graph.event_count(),
            edges: graph.edge_count(),
        }
    }
}

impl Outputter for GraphStats {
    fn to_table(&self, config: &OutputConfig) -> String {
        let pairs = vec![
            ("File", self.file.clone()),
            ("Entities", self.entities.to_string()),
            ("Events", self.events.to_string()),
            ("Edges", self.edges.to_string()),
        ];
        TableOutput::format_key_value(&pairs, config)
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        CsvOutput::from_rows(
            &["file", "entities", "events", "edges"],
            &[vec![
                self.file.clone(),
                self.entities.to_string(),
                self.events.to_string(),
                self.edges.to_string(),
            ]],
        )
    }
}

/// Run the stats command
pub fn run(file: &Path, format: OutputFormat) -> Result<()> {
    let graph = super::load_graph(file)?;
    Output::new(GraphStats::new(file, &graph), format).render()
}
