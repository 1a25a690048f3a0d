//! Running searches over input files

use std::fs;
use std::path::Path;

use crucible_core::CostGrid;
use crucible_paths::{
    InvalidInput, LogObserver, NoopObserver, SearchError, cost_map, find_shortest_path_with,
};
use rayon::prelude::*;

use crate::config::Config;
use crate::error::CliError;
use crate::report::{Outcome, Report};

/// Solve every input, in parallel, keeping input order
pub fn solve_all(config: &Config) -> Result<Vec<Report>, CliError> {
    let run = || {
        config
            .inputs
            .par_iter()
            .map(|path| solve_file(path, config))
            .collect::<Result<Vec<_>, _>>()
    };
    match config.threads {
        Some(n) => rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build()?
            .install(run),
        None => run(),
    }
}

/// Read and solve one input file
pub fn solve_file(path: &Path, config: &Config) -> Result<Report, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    solve_text(path, &text, config)
}

/// Solve a grid given as text; `path` only names it in reports and errors
pub fn solve_text(path: &Path, text: &str, config: &Config) -> Result<Report, CliError> {
    let search_err = |source| CliError::Search {
        path: path.to_path_buf(),
        source,
    };

    // Malformed grids are reported as invalid search input.
    let grid = text.parse::<CostGrid>().map_err(|err| search_err(SearchError::from(err)))?;
    let end = match config.end {
        Some(end) => end,
        None => grid.range().last().ok_or_else(|| search_err(InvalidInput::EmptyGrid.into()))?,
    };
    log::info!(
        "{}: {}x{} grid, {} -> {}",
        path.display(),
        grid.height(),
        grid.width(),
        config.start,
        end
    );

    let found = find_shortest_path_with(&grid, config.start, end, config.limits, &mut LogObserver);
    let outcome = match found {
        Ok(found) => Outcome::Solved {
            cost: found.cost,
            path: found.path,
        },
        Err(SearchError::NoPathFound { .. }) => {
            log::warn!("{}: no path from {} to {}", path.display(), config.start, end);
            Outcome::NoPath
        }
        Err(source) => return Err(search_err(source)),
    };

    let map = if config.show_map {
        Some(cost_map(&grid, config.start, config.limits, &mut NoopObserver).map_err(search_err)?)
    } else {
        None
    };

    Ok(Report {
        input: path.to_path_buf(),
        start: config.start,
        end,
        limits: config.limits,
        outcome,
        cost_map: map,
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crucible_core::Point;
    use crucible_paths::RunLimits;
    use log::LevelFilter;

    use super::*;

    const EXAMPLE: &str = "\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533
";

    fn config(limits: RunLimits) -> Config {
        Config {
            inputs: Vec::new(),
            start: Point::ZERO,
            end: None,
            limits,
            show_path: false,
            show_map: false,
            dump: None,
            threads: None,
            log_level: LevelFilter::Off,
        }
    }

    fn cost_of(report: &Report) -> Option<u32> {
        match report.outcome {
            Outcome::Solved { cost, .. } => Some(cost),
            Outcome::NoPath => None,
        }
    }

    #[test]
    fn solves_example_both_ways() {
        let path = Path::new("example.txt");
        let report = solve_text(path, EXAMPLE, &config(RunLimits::CRUCIBLE)).unwrap();
        assert_eq!(report.end, Point::new(12, 12));
        assert_eq!(cost_of(&report), Some(102));
        let report = solve_text(path, EXAMPLE, &config(RunLimits::ULTRA)).unwrap();
        assert_eq!(cost_of(&report), Some(94));
    }

    #[test]
    fn unreachable_end_is_an_outcome() {
        let cfg = config(RunLimits::CRUCIBLE);
        let report = solve_text(Path::new("line.txt"), "111111\n", &cfg).unwrap();
        assert_eq!(report.outcome, Outcome::NoPath);
    }

    #[test]
    fn bad_grid_is_an_error() {
        let cfg = config(RunLimits::CRUCIBLE);
        let err = solve_text(Path::new("bad.txt"), "12\n3\n", &cfg).unwrap_err();
        match &err {
            CliError::Search { source, .. } => assert!(source.is_invalid_input()),
            other => panic!("expected a search error, got {other:?}"),
        }
        assert!(err.to_string().starts_with("bad.txt: invalid input: ragged grid"));

        let err = solve_text(Path::new("bad.txt"), "1x\n", &cfg).unwrap_err();
        assert!(matches!(
            err,
            CliError::Search {
                source: SearchError::InvalidInput(InvalidInput::Grid(_)),
                ..
            }
        ));
    }

    #[test]
    fn out_of_bounds_end_is_an_error() {
        let mut cfg = config(RunLimits::CRUCIBLE);
        cfg.end = Some(Point::new(40, 0));
        let err = solve_text(Path::new("small.txt"), "12\n34\n", &cfg).unwrap_err();
        assert!(matches!(err, CliError::Search { .. }));
    }

    #[test]
    fn cost_map_on_request() {
        let mut cfg = config(RunLimits::CRUCIBLE);
        cfg.show_map = true;
        let report = solve_text(Path::new("small.txt"), "12\n34\n", &cfg).unwrap();
        let map = report.cost_map.unwrap();
        assert_eq!(map.get(Point::new(1, 1)), Some(6));
        assert_eq!(map.to_string(), "  0  2\n  3  6\n");
    }

    #[test]
    fn solves_files_in_order() {
        let dir = std::env::temp_dir();
        let pid = std::process::id();
        let a = dir.join(format!("crucible-a-{pid}.txt"));
        let b = dir.join(format!("crucible-b-{pid}.txt"));
        fs::write(&a, EXAMPLE).unwrap();
        fs::write(&b, "19\n11\n").unwrap();

        let mut cfg = config(RunLimits::CRUCIBLE);
        cfg.inputs = vec![a.clone(), b.clone()];
        cfg.threads = Some(2);
        let reports = solve_all(&cfg);
        fs::remove_file(&a).unwrap();
        fs::remove_file(&b).unwrap();

        let reports = reports.unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].input, a);
        assert_eq!(cost_of(&reports[0]), Some(102));
        assert_eq!(reports[1].input, b);
        assert_eq!(cost_of(&reports[1]), Some(2));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let mut cfg = config(RunLimits::CRUCIBLE);
        cfg.inputs = vec![PathBuf::from("/nonexistent/crucible/grid.txt")];
        assert!(matches!(solve_all(&cfg), Err(CliError::Io { .. })));
    }
}
