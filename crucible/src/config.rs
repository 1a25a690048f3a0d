//! Configuration resolution from CLI args

use std::fs;
use std::path::{Path, PathBuf};

use crucible_core::Point;
use crucible_paths::RunLimits;
use log::LevelFilter;

use crate::cli::Args;
use crate::error::CliError;

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Grid files to solve
    pub inputs: Vec<PathBuf>,
    /// Start position shared by all inputs
    pub start: Point,
    /// End position (None = bottom-right of each grid)
    pub end: Option<Point>,
    /// Validated run limits
    pub limits: RunLimits,
    /// Print routes
    pub show_path: bool,
    /// Compute and print cost maps
    pub show_map: bool,
    /// JSON report destination
    pub dump: Option<PathBuf>,
    /// Worker threads (None = rayon default)
    pub threads: Option<usize>,
    /// Log verbosity
    pub log_level: LevelFilter,
}

impl Config {
    /// Build config from CLI args, reading the limits file if one is given
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let file_limits = args.config.as_deref().map(read_limits).transpose()?;
        let limits = resolve_limits(&args, file_limits)?;

        Ok(Config {
            limits,
            log_level: log_level(args.verbose, args.quiet),
            inputs: args.inputs,
            start: args.start,
            end: args.end,
            show_path: args.path,
            show_map: args.map,
            dump: args.dump,
            threads: args.threads,
        })
    }
}

/// Read run limits from a JSON file
fn read_limits(path: &Path) -> Result<RunLimits, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// Flags beat `--ultra`, which beats the config file, which beats defaults
fn resolve_limits(args: &Args, file: Option<RunLimits>) -> Result<RunLimits, CliError> {
    let mut limits = if args.ultra {
        RunLimits::ULTRA
    } else {
        file.unwrap_or_default()
    };
    if let Some(min_run) = args.min_run {
        limits.min_run = min_run;
    }
    if let Some(max_run) = args.max_run {
        limits.max_run = max_run;
    }
    Ok(limits.validate()?)
}

/// Map `-q` / `-v` counts to a level filter
fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["crucible", "grid.txt"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn default_limits() {
        let config = Config::from_args(args(&[])).unwrap();
        assert_eq!(config.limits, RunLimits::CRUCIBLE);
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn ultra_beats_file() {
        let limits = resolve_limits(&args(&["--ultra"]), Some(RunLimits::new(1, 2).unwrap()));
        assert_eq!(limits.unwrap(), RunLimits::ULTRA);
    }

    #[test]
    fn flags_beat_ultra() {
        let limits = resolve_limits(&args(&["--ultra", "--max-run", "6"]), None).unwrap();
        assert_eq!(limits, RunLimits::new(4, 6).unwrap());
    }

    #[test]
    fn file_beats_default() {
        let limits = resolve_limits(&args(&[]), Some(RunLimits::new(2, 5).unwrap())).unwrap();
        assert_eq!(limits, RunLimits::new(2, 5).unwrap());
    }

    #[test]
    fn invalid_flags_are_rejected() {
        let err = resolve_limits(&args(&["--min-run", "5"]), None).unwrap_err();
        assert!(matches!(err, CliError::Limits(_)));
        assert!(resolve_limits(&args(&["--max-run", "0"]), None).is_err());
    }

    #[test]
    fn limits_file_round_trip() {
        let path =
            std::env::temp_dir().join(format!("crucible-limits-{}.json", std::process::id()));
        fs::write(&path, r#"{"min_run": 1, "max_run": 7}"#).unwrap();
        let read = read_limits(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(read.unwrap(), RunLimits::new(1, 7).unwrap());
    }

    #[test]
    fn missing_limits_file() {
        let err = read_limits(Path::new("/nonexistent/crucible/limits.json")).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(log_level(0, true), LevelFilter::Error);
        assert_eq!(log_level(1, false), LevelFilter::Info);
        assert_eq!(log_level(2, false), LevelFilter::Debug);
        assert_eq!(log_level(9, false), LevelFilter::Trace);
    }
}
