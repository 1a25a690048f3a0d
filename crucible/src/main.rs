//! crucible - least-cost crucible routes through digit grids

mod cli;
mod config;
mod error;
mod logger;
mod report;
mod solve;

use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    if let Err(e) = logger::init(config.log_level) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    log::debug!("limits {:?}, {} input(s)", config.limits, config.inputs.len());

    let reports = solve::solve_all(&config)?;
    for report in &reports {
        print!("{}", report.render(config.show_path));
    }

    report::finish(&reports, config.dump.as_deref())
}
