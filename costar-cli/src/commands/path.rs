//! Path command - connect one or more entities to the target
//!
//! `costar path <file> <name>... [--to <target>]`
//!
//! Each name is resolved independently. Several names are searched in
//! parallel against the same graph.

use crate::output::{CsvOutput, Output, OutputConfig, OutputFormat, Outputter};
use anyhow::Result;
use colored::Colorize;
use costar_core::{Graph, Hop};
use serde::Serialize;
use std::path::Path;

pub(crate) const CSV_HEADERS: &[&str] = &["start", "target", "found", "step", "from", "event", "to"];

/// Outcome of one path lookup
#[derive(Debug, Serialize)]
pub struct PathReport<'g> {
    pub start: String,
    pub target: String,
    pub found: bool,
    /// Number of hops, when a path exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    pub hops: Vec<Hop<'g>>,
}

impl<'g> PathReport<'g> {
    pub fn new(graph: &'g Graph, start: &str, target: &str, path: Option<&[String]>) -> Self {
        let hops = path.and_then(|p| graph.hops(p));
        Self {
            start: start.to_string(),
            target: target.to_string(),
            found: hops.is_some(),
            length: hops.as_ref().map(Vec::len),
            hops: hops.unwrap_or_default(),
        }
    }

    /// Look up the path from `start` to `target` and describe it.
    pub fn lookup(graph: &'g Graph, start: &str, target: &str) -> Self {
        let path = graph.shortest_path(start, target);
        Self::new(graph, start, target, path.as_deref())
    }

    /// Rows under [`CSV_HEADERS`]: one per hop, or a single row without hop
    /// columns when there is no path or the start is the target.
    pub(crate) fn csv_rows(&self) -> Vec<Vec<String>> {
        if self.hops.is_empty() {
            let (found, step) = if self.found { ("true", "0") } else { ("false", "") };
            return vec![vec![
                self.start.clone(),
                self.target.clone(),
                found.to_string(),
                step.to_string(),
                String::new(),
                String::new(),
                String::new(),
            ]];
        }

        self.hops
            .iter()
            .enumerate()
            .map(|(i, hop)| {
                vec![
                    self.start.clone(),
                    self.target.clone(),
                    "true".to_string(),
                    (i + 1).to_string(),
                    hop.from.to_string(),
                    hop.event.to_string(),
                    hop.to.to_string(),
                ]
            })
            .collect()
    }
}

impl Outputter for PathReport<'_> {
    fn to_table(&self, _config: &OutputConfig) -> String {
        if !self.found {
            return format!(
                "{} {} {} {}",
                "no path from".yellow(),
                self.start.bold(),
                "to".yellow(),
                self.target.bold()
            );
        }

        if self.hops.is_empty() {
            return format!("{} {}", self.start.bold(), "is the target".dimmed());
        }

        self.hops
            .iter()
            .map(|hop| {
                format!(
                    "{} was in {} with {}",
                    hop.from.cyan(),
                    format!("\"{}\"", hop.event).yellow(),
                    hop.to.cyan()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        CsvOutput::from_rows(CSV_HEADERS, &self.csv_rows())
    }
}

/// Reports for several start names, in command-line order
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct PathBatch<'g> {
    pub reports: Vec<PathReport<'g>>,
}

impl Outputter for PathBatch<'_> {
    fn to_table(&self, config: &OutputConfig) -> String {
        self.reports
            .iter()
            .map(|report| report.to_table(config))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn to_csv(&self, _config: &OutputConfig) -> String {
        let rows: Vec<Vec<String>> = self
            .reports
            .iter()
            .flat_map(|report| report.csv_rows())
            .collect();
        CsvOutput::from_rows(CSV_HEADERS, &rows)
    }
}

/// Run the path command
pub fn run(file: &Path, names: &[String], target: &str, format: OutputFormat) -> Result<()> {
    let graph = super::load_graph(file)?;
    super::check_target(&graph, target);

    let paths = if names.len() == 1 {
        vec![graph.shortest_path(&names[0], target)]
    } else {
        graph.shortest_paths_to(names, target)
    };

    let mut reports: Vec<PathReport> = names
        .iter()
        .zip(paths.iter())
        .map(|(name, path)| PathReport::new(&graph, name, target, path.as_deref()))
        .collect();

    if reports.len() == 1 {
        if let Some(report) = reports.pop() {
            return Output::new(report, format).render();
        }
    }

    Output::new(PathBatch { reports }, format).render()
}
