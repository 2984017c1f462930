//! Drop tolerance around cell rectangles

use crate::io::configuration::DEFAULT_DROP_TOLERANCE;
use crate::io::error::{Result, invalid_parameter};

/// How far outside a cell a drop still counts as being on it
///
/// Expressed as a fraction of the cell size added on every side of the
/// cell's rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceWindow {
    fraction: f64,
}

impl ToleranceWindow {
    /// 0.20 per side: a window 40% larger than the cell
    pub const GENEROUS: Self = Self { fraction: 0.20 };

    /// 0.15 per side: a window 30% larger than the cell
    pub const RELAXED: Self = Self { fraction: 0.15 };

    /// 0.01 per side: near-exact placement
    pub const PRECISE: Self = Self {
        fraction: DEFAULT_DROP_TOLERANCE,
    };

    /// Create a window from a per-side fraction of the cell size
    ///
    /// # Errors
    ///
    /// Returns an error if the fraction is negative or not finite
    pub fn new(fraction: f64) -> Result<Self> {
        if !fraction.is_finite() || fraction < 0.0 {
            return Err(invalid_parameter(
                "tolerance",
                &fraction,
                &"tolerance must be a finite, non-negative fraction of the cell size",
            ));
        }
        Ok(Self { fraction })
    }

    /// Per-side fraction of the cell size
    pub const fn fraction(self) -> f64 {
        self.fraction
    }

    /// Margin added on every side for a given cell size
    ///
    /// Non-finite or negative cell sizes give no margin.
    pub const fn margin(self, cell_size: f64) -> f64 {
        if cell_size.is_finite() && cell_size > 0.0 {
            self.fraction * cell_size
        } else {
            0.0
        }
    }
}

impl Default for ToleranceWindow {
    fn default() -> Self {
        Self::PRECISE
    }
}
