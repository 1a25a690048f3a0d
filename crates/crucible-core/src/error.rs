//! Error types for building cost grids.

use thiserror::Error;

use crate::geom::Point;

/// Errors that can occur when building a [`CostGrid`](crate::CostGrid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The input has no rows.
    #[error("grid is empty")]
    Empty,
    /// The first row has no cells.
    #[error("grid has no columns")]
    NoColumns,
    /// A row's width differs from the first row's.
    #[error("ragged grid: row {row} has width {found}, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A cell is not an ASCII digit.
    #[error("invalid cost digit {ch:?} at {pos}")]
    InvalidDigit { ch: char, pos: Point },
    /// A cell value given directly is above 9.
    #[error("cost {value} at {pos} is not a single digit")]
    CostTooLarge { value: u8, pos: Point },
}
