//! Grid geometry registry: the latest reported rectangle of every cell
//!
//! The layout pass reports cell rectangles as they settle; later reports
//! for the same cell overwrite earlier ones. The registry is re-dimensioned
//! and cleared on every level load so geometry from a previous level or
//! orientation is never consulted.

use ndarray::Array2;

use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::spatial::geometry::{Board, Point, Rect};
use crate::spatial::grid::{CellIndex, GridDimensions};

/// One recorded cell and its rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRecord {
    /// Cell address
    pub cell: CellIndex,
    /// Latest reported rectangle in board space
    pub rect: Rect<Board>,
}

/// Result of a nearest-cell search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestCell {
    /// Closest recorded cell
    pub cell: CellIndex,
    /// Distance from the query point to the cell's center
    pub distance: f64,
}

/// Board-space rectangles of the active grid's cells
///
/// Storage is a dense `rows x columns` array of optional rectangles, so
/// every scan runs in row-major order and is deterministic for a given
/// registry state.
#[derive(Debug, Clone, Default)]
pub struct GridGeometryRegistry {
    rects: Array2<Option<Rect<Board>>>,
    reported: usize,
}

impl GridGeometryRegistry {
    /// Create an empty registry sized for the grid
    pub fn new(dimensions: GridDimensions) -> Self {
        Self {
            rects: Array2::from_elem(dimensions.shape(), None),
            reported: 0,
        }
    }

    /// Grid shape (rows, columns) the registry currently expects
    pub fn shape(&self) -> (usize, usize) {
        self.rects.dim()
    }

    /// Check whether the registry was sized for these dimensions
    pub fn matches(&self, dimensions: GridDimensions) -> bool {
        self.shape() == dimensions.shape()
    }

    /// Insert or overwrite the rectangle of a cell
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The cell lies outside the registry's grid
    /// - The rectangle has non-finite coordinates or a negative size
    pub fn record_cell_rect(&mut self, cell: CellIndex, rect: Rect<Board>) -> Result<()> {
        if !rect.is_valid() {
            return Err(invalid_parameter(
                "rect",
                &format!("{rect:?}"),
                &"cell rectangles need finite coordinates and a non-negative size",
            ));
        }

        let (rows, columns) = self.shape();
        let slot = self
            .rects
            .get_mut([cell.row, cell.column])
            .ok_or_else(|| PuzzleError::InvalidCell {
                row: cell.row,
                column: cell.column,
                grid_dimensions: (rows, columns),
            })?;

        if slot.is_none() {
            self.reported += 1;
        }
        *slot = Some(rect);
        Ok(())
    }

    /// Exact lookup of a cell's rectangle
    pub fn rect_for(&self, cell: CellIndex) -> Option<Rect<Board>> {
        self.rects.get([cell.row, cell.column]).copied().flatten()
    }

    /// Closest recorded cell by distance from `point` to the cell center
    ///
    /// Ties go to the cell met first in row-major order. A point with a
    /// non-finite coordinate has no nearest cell.
    pub fn nearest_cell(&self, point: Point<Board>) -> Option<NearestCell> {
        if !point.is_finite() {
            return None;
        }
        let mut best: Option<NearestCell> = None;
        for record in self.cells() {
            let distance = record.rect.center().distance_to(point);
            if best.is_none_or(|current| distance < current.distance) {
                best = Some(NearestCell {
                    cell: record.cell,
                    distance,
                });
            }
        }
        best
    }

    /// Cells whose rectangle, grown by `margin` on every side, contains `point`
    ///
    /// Yields in row-major order.
    pub fn cells_within(
        &self,
        point: Point<Board>,
        margin: f64,
    ) -> impl Iterator<Item = CellIndex> + '_ {
        self.cells()
            .filter(move |record| record.rect.expanded(margin).contains(point))
            .map(|record| record.cell)
    }

    /// Recorded cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = CellRecord> + '_ {
        self.rects
            .indexed_iter()
            .filter_map(|((row, column), rect)| {
                rect.map(|rect| CellRecord {
                    cell: CellIndex::new(row, column),
                    rect,
                })
            })
    }

    /// Forget every recorded rectangle, keeping the grid shape
    pub fn reset(&mut self) {
        self.rects.fill(None);
        self.reported = 0;
    }

    /// Forget every recorded rectangle and adopt new grid dimensions
    pub fn resize(&mut self, dimensions: GridDimensions) {
        *self = Self::new(dimensions);
    }

    /// No cell has been reported yet
    pub const fn is_empty(&self) -> bool {
        self.reported == 0
    }

    /// Number of distinct cells reported since the last reset
    pub const fn reported_count(&self) -> usize {
        self.reported
    }

    /// Number of cells the grid contains
    pub fn expected_count(&self) -> usize {
        self.rects.len()
    }

    /// Every cell of the grid has been reported at least once
    pub fn is_ready(&self) -> bool {
        self.reported > 0 && self.reported == self.expected_count()
    }
}
