//! Error types for path searches.

use std::fmt;

use crucible_core::{GridError, Point, Range};
use thiserror::Error;

/// Which end of a search a position belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// Malformed input to a search. Never worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// The grid text could not be parsed.
    #[error(transparent)]
    Grid(#[from] GridError),
    /// The cost field has no cells.
    #[error("grid is empty")]
    EmptyGrid,
    /// A start or end position lies outside the field.
    #[error("{endpoint} position {pos} is outside the grid {range}")]
    OutOfBounds {
        endpoint: Endpoint,
        pos: Point,
        range: Range,
    },
    /// Run limits that no crucible can satisfy.
    #[error(
        "invalid run limits: min_run {min_run}, max_run {max_run} \
         (need max_run >= 1 and min_run <= max_run)"
    )]
    InvalidLimits { min_run: u8, max_run: u8 },
}

/// Error returned by the path searches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
    /// The input was well formed but the end cannot be reached under the
    /// run limits.
    #[error("no path from {start} to {end}")]
    NoPathFound { start: Point, end: Point },
}

impl SearchError {
    /// Whether this error is an [`InvalidInput`].
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl From<GridError> for SearchError {
    fn from(err: GridError) -> Self {
        Self::InvalidInput(InvalidInput::Grid(err))
    }
}
