//! Grid layout pass: cell rectangles for a given viewport
//!
//! The grid occupies a square whose side is a fixed share of the smaller
//! viewport dimension. Cells are square, separated by `spacing`, and the
//! whole grid is inset by `spacing` from the board origin.

use crate::io::configuration::GRID_VIEWPORT_FRACTION;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::geometry::{Board, Point, Rect, Size};
use crate::spatial::grid::{CellIndex, GridDimensions};
use crate::spatial::registry::{CellRecord, GridGeometryRegistry};

/// Computed geometry of every cell of a grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    dimensions: GridDimensions,
    origin: Point<Board>,
    cell_size: f64,
    spacing: f64,
}

/// Lay out a grid inside a viewport
///
/// # Errors
///
/// Returns an error if:
/// - The viewport size is not finite and positive
/// - The spacing is negative or not finite
/// - The spacing leaves no room for the cells
pub fn compute_grid_layout(
    viewport: Size,
    dimensions: GridDimensions,
    spacing: f64,
) -> Result<GridLayout> {
    if !viewport.is_positive() {
        return Err(invalid_parameter(
            "viewport",
            &format!("{}x{}", viewport.width, viewport.height),
            &"viewport must have a finite, positive size",
        ));
    }
    if !spacing.is_finite() || spacing < 0.0 {
        return Err(invalid_parameter(
            "spacing",
            &spacing,
            &"spacing must be finite and non-negative",
        ));
    }

    let side = viewport.width.min(viewport.height) * GRID_VIEWPORT_FRACTION;
    let cells_across = dimensions.rows().max(dimensions.columns()) as f64;
    let inner = 2.0f64.mul_add(-spacing, side);
    let cell_size = (cells_across - 1.0).mul_add(-spacing, inner) / cells_across;

    if !cell_size.is_finite() || cell_size <= 0.0 {
        return Err(invalid_parameter(
            "spacing",
            &spacing,
            &format!("no room left for a {dimensions} grid in a {side} wide area"),
        ));
    }

    Ok(GridLayout {
        dimensions,
        origin: Point::new(spacing, spacing),
        cell_size,
        spacing,
    })
}

impl GridLayout {
    /// Dimensions the layout was computed for
    pub const fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Side length of one square cell, the `cell_size` passed to placement
    pub const fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Gap between cells
    pub const fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Rectangle of a cell, if it lies inside the grid
    pub fn cell_rect(&self, cell: CellIndex) -> Option<Rect<Board>> {
        if !self.dimensions.contains(cell) {
            return None;
        }
        let pitch = self.cell_size + self.spacing;
        Some(Rect::new(
            (cell.column as f64).mul_add(pitch, self.origin.x),
            (cell.row as f64).mul_add(pitch, self.origin.y),
            self.cell_size,
            self.cell_size,
        ))
    }

    /// Every cell with its rectangle, row-major
    pub fn cells(&self) -> impl Iterator<Item = CellRecord> + '_ {
        self.dimensions
            .cells()
            .filter_map(|cell| self.cell_rect(cell).map(|rect| CellRecord { cell, rect }))
    }

    /// Rectangle enclosing the grid including its outer spacing
    pub fn bounds(&self) -> Rect<Board> {
        let pitch = self.cell_size + self.spacing;
        Rect::new(
            0.0,
            0.0,
            (self.dimensions.columns() as f64).mul_add(pitch, self.spacing),
            (self.dimensions.rows() as f64).mul_add(pitch, self.spacing),
        )
    }

    /// Report every cell rectangle to the registry
    ///
    /// # Errors
    ///
    /// Returns an error if the registry was sized for a different grid
    pub fn report_to(&self, registry: &mut GridGeometryRegistry) -> Result<()> {
        if !registry.matches(self.dimensions) {
            let (rows, columns) = registry.shape();
            return Err(invalid_parameter(
                "registry",
                &format!("{rows}x{columns}"),
                &format!("layout was computed for a {} grid", self.dimensions),
            ));
        }
        for record in self.cells() {
            registry.record_cell_rect(record.cell, record.rect)?;
        }
        Ok(())
    }
}
