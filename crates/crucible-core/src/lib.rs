//! **crucible-core**: geometry and cost grids.
//!
//! This crate provides the foundational types used by the crucible path
//! search: `(row, col)` points, move directions, half-open ranges and the
//! immutable digit [`CostGrid`].

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Direction, Point, Range, RangeIter};
pub use grid::{CostGrid, MAX_COST};
