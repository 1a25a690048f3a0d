//! CLI argument parsing using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use crucible_core::Point;

/// Least-cost crucible routes through digit grids
#[derive(Parser, Debug)]
#[command(
    name = "crucible",
    about = "Find least-cost crucible routes through digit grids",
    version
)]
pub struct Args {
    /// Grid files: rows of digits, one row per line
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Start position as ROW,COL
    #[arg(long, value_parser = parse_point, default_value = "0,0")]
    pub start: Point,

    /// End position as ROW,COL (bottom-right cell of each grid if omitted)
    #[arg(long, value_parser = parse_point)]
    pub end: Option<Point>,

    /// Moves required in a straight line before turning or stopping
    #[arg(long)]
    pub min_run: Option<u8>,

    /// Maximum moves in a straight line
    #[arg(long)]
    pub max_run: Option<u8>,

    /// Use ultra crucible limits (4 to 10 moves per straight line)
    #[arg(long)]
    pub ultra: bool,

    /// JSON file with run limits, e.g. {"min_run": 0, "max_run": 3}
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the route of each path
    #[arg(long)]
    pub path: bool,

    /// Print the table of cheapest costs per cell
    #[arg(long)]
    pub map: bool,

    /// Write a JSON report of every result to this file
    #[arg(long)]
    pub dump: Option<PathBuf>,

    /// Number of worker threads for multiple inputs
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// More log output (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Parse `ROW,COL` into a [`Point`].
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = row
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad row {row:?}: {e}"))?;
    let col = col
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad column {col:?}: {e}"))?;
    Ok(Point::new(row, col))
}
