//! Grid dimensions and cell addressing
//!
//! Every scan over cells in this crate follows the row-major order produced
//! by [`GridDimensions::cells`], which makes tie-breaks reproducible.

use std::fmt;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{PuzzleError, Result, invalid_parameter};

/// Address of one grid cell (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIndex {
    /// Row, counted from the top
    pub row: usize,
    /// Column, counted from the left
    pub column: usize,
}

impl CellIndex {
    /// Create a cell address
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Validated puzzle dimensions
///
/// Both axes are at least 1 and at most
/// [`MAX_GRID_DIMENSION`](crate::io::configuration::MAX_GRID_DIMENSION).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDimensions {
    rows: usize,
    columns: usize,
}

impl GridDimensions {
    /// Validate and create grid dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if either axis is zero or exceeds the maximum grid dimension
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        for (parameter, value) in [("rows", rows), ("columns", columns)] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be at least 1"));
            }
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must not exceed {MAX_GRID_DIMENSION}"),
                ));
            }
        }
        Ok(Self { rows, columns })
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells, equal to the piece count of a level
    pub const fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Shape tuple as used by `ndarray`
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Check if a cell lies inside the grid
    pub const fn contains(&self, cell: CellIndex) -> bool {
        cell.row < self.rows && cell.column < self.columns
    }

    /// Fail with [`PuzzleError::InvalidCell`] for cells outside the grid
    ///
    /// # Errors
    ///
    /// Returns an error if the cell lies outside the grid
    pub fn check(&self, cell: CellIndex) -> Result<CellIndex> {
        if self.contains(cell) {
            Ok(cell)
        } else {
            Err(PuzzleError::InvalidCell {
                row: cell.row,
                column: cell.column,
                grid_dimensions: (self.rows, self.columns),
            })
        }
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = CellIndex> + use<> {
        let columns = self.columns;
        (0..self.rows)
            .flat_map(move |row| (0..columns).map(move |column| CellIndex::new(row, column)))
    }

    /// Row-major position of a cell, if it lies inside the grid
    pub const fn linear_index(&self, cell: CellIndex) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.row * self.columns + cell.column)
        } else {
            None
        }
    }
}

impl fmt::Display for GridDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}
