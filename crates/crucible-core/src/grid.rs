//! The [`CostGrid`] type, a read-only rectangle of single-digit costs.
//!
//! Cells live in a shared `Arc<[u8]>` buffer. Cloning a `CostGrid` yields
//! another handle to the **same** storage, so a grid can be handed to any
//! number of threads without copying.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::GridError;
use crate::geom::{Point, Range};

/// Largest cost a cell may hold.
pub const MAX_COST: u8 = 9;

/// A rectangular grid of costs in `0..=9`. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostGrid {
    cells: Arc<[u8]>,
    bounds: Range,
}

impl CostGrid {
    /// Build a grid from rows of cost values.
    ///
    /// Fails if there are no rows, the first row is empty, rows differ in
    /// length, or any value is above [`MAX_COST`].
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let first = rows.first().ok_or(GridError::Empty)?;
        let width = first.as_ref().len();
        if width == 0 {
            return Err(GridError::NoColumns);
        }
        let mut cells = Vec::with_capacity(width * rows.len());
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::Ragged {
                    row: r,
                    expected: width,
                    found: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                if value > MAX_COST {
                    return Err(GridError::CostTooLarge {
                        value,
                        pos: Point::new(r as i32, c as i32),
                    });
                }
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            cells: cells.into(),
            bounds: Range::sized(rows.len() as i32, width as i32),
        })
    }

    /// Build a grid where every cell holds `cost`.
    pub fn filled(height: usize, width: usize, cost: u8) -> Result<Self, GridError> {
        let row = vec![cost; width];
        let rows = vec![row; height];
        Self::from_rows(&rows)
    }

    /// The bounding range, `[0, height) x [0, width)`.
    #[inline]
    pub fn range(&self) -> Range {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.bounds.height() as usize
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.bounds.width() as usize
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Cost of the cell at `p`, or `None` outside the grid.
    #[inline]
    pub fn cost(&self, p: Point) -> Option<u8> {
        self.bounds.index_of(p).map(|i| self.cells[i])
    }

    /// Row-major iterator over `(Point, cost)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, u8)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Sum of the costs of the cells at `points`, skipping the first one.
    ///
    /// This is how a path's cost is defined: entering a cell costs its
    /// value, the starting cell is free. Points outside the grid count 0.
    pub fn entered_cost(&self, points: &[Point]) -> u32 {
        points
            .iter()
            .skip(1)
            .map(|&p| u32::from(self.cost(p).unwrap_or(0)))
            .sum()
    }
}

impl FromStr for CostGrid {
    type Err = GridError;

    /// Parse rows of ASCII digits, one row per line.
    ///
    /// A trailing `\r` on each line and empty lines at the end of the input
    /// are ignored.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut lines: Vec<&str> = input
            .lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }

        let rows = lines
            .iter()
            .enumerate()
            .map(|(r, line)| {
                line.chars()
                    .enumerate()
                    .map(|(c, ch)| {
                        ch.to_digit(10)
                            .map(|d| d as u8)
                            .ok_or(GridError::InvalidDigit {
                                ch,
                                pos: Point::new(r as i32, c as i32),
                            })
                    })
                    .collect::<Result<Vec<u8>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(&rows)
    }
}

impl fmt::Display for CostGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width()) {
            for &cost in row {
                write!(f, "{cost}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
