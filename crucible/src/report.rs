//! Per-input results and their text / JSON output

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crucible_core::Point;
use crucible_paths::{CostMap, RunLimits, ShortestPath};
use serde::Serialize;

use crate::error::CliError;

/// What the search found for one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Solved { cost: u32, path: Vec<Point> },
    NoPath,
}

/// Result of solving one input file
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub input: PathBuf,
    pub start: Point,
    pub end: Point,
    pub limits: RunLimits,
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_map: Option<CostMap>,
}

impl Report {
    /// Render the human-readable block for this report
    pub fn render(&self, show_path: bool) -> String {
        let mut out = String::new();
        let name = self.input.display();
        match &self.outcome {
            Outcome::Solved { cost, path } => {
                let _ = writeln!(out, "{name}: {cost}");
                if show_path {
                    let cells: Vec<String> = path.iter().map(Point::to_string).collect();
                    let _ = writeln!(out, "  path: {}", cells.join(" "));
                    let found = ShortestPath {
                        cost: *cost,
                        path: path.clone(),
                    };
                    let route: Vec<String> = found
                        .runs()
                        .into_iter()
                        .map(|(dir, len)| format!("{dir}{len}"))
                        .collect();
                    let _ = writeln!(out, "  route: {}", route.join(" "));
                }
            }
            Outcome::NoPath => {
                let _ = writeln!(out, "{name}: no path from {} to {}", self.start, self.end);
            }
        }
        if let Some(map) = &self.cost_map {
            for line in map.to_string().lines() {
                let _ = writeln!(out, "  {line}");
            }
        }
        out
    }
}

/// Write all reports as pretty JSON to `path`
pub fn dump(path: &Path, reports: &[Report]) -> Result<(), CliError> {
    let io_err = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, reports)?;
    writer.flush().map_err(io_err)?;
    log::info!("wrote {} report(s) to {}", reports.len(), path.display());
    Ok(())
}

/// Number of reports whose end could not be reached
pub fn unsolved(reports: &[Report]) -> usize {
    reports
        .iter()
        .filter(|r| r.outcome == Outcome::NoPath)
        .count()
}

/// Write the optional dump, then fail if any input went unsolved
pub fn finish(reports: &[Report], dump_to: Option<&Path>) -> Result<(), CliError> {
    if let Some(path) = dump_to {
        dump(path, reports)?;
    }
    match unsolved(reports) {
        0 => Ok(()),
        n => Err(CliError::Unsolved(n)),
    }
}
