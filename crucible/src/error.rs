//! Error types for the CLI

use std::path::PathBuf;

use crucible_paths::{InvalidInput, SearchError};
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Reading or writing a file failed
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A search rejected its input, including malformed grid text
    #[error("{}: {source}", .path.display())]
    Search {
        path: PathBuf,
        #[source]
        source: SearchError,
    },

    /// Configuration file could not be decoded
    #[error("{}: invalid configuration: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Resolved run limits are unusable
    #[error("{0}")]
    Limits(#[from] InvalidInput),

    /// JSON encoding of the report failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Some inputs have no valid path
    #[error("no path found for {0} input(s)")]
    Unsolved(usize),
}
