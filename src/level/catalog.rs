//! Static level catalog

use std::fmt;

use crate::io::error::{PuzzleError, Result};
use crate::spatial::grid::GridDimensions;

/// Level difficulty, ordered from easiest to hardest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    /// Small grids for first-time players
    Easy,
    /// Mid-sized grids
    Medium,
    /// Large grids
    Hard,
    /// Grids with many small pieces
    Hardcore,
}

impl Difficulty {
    /// All difficulties in ascending order
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Hardcore];

    /// Display label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Hardcore => "Hardcore",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Position of a level in a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LevelIndex(pub usize);

impl LevelIndex {
    /// Index of the following catalog entry
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for LevelIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 + 1)
    }
}

/// One playable puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    /// Display name
    pub name: &'static str,
    /// Source image name, without extension
    pub image_name: &'static str,
    /// Number of piece rows
    pub grid_rows: usize,
    /// Number of piece columns
    pub grid_columns: usize,
    /// Difficulty shown on the level card
    pub difficulty: Difficulty,
}

impl Level {
    /// Number of pieces the level is cut into
    pub const fn piece_count(&self) -> usize {
        self.grid_rows * self.grid_columns
    }

    /// Validated grid dimensions of the level
    ///
    /// # Errors
    ///
    /// Returns an error if either grid axis is zero or exceeds the maximum grid dimension
    pub fn dimensions(&self) -> Result<GridDimensions> {
        GridDimensions::new(self.grid_rows, self.grid_columns).map_err(|e| {
            PuzzleError::InvalidLevel {
                name: self.name.to_string(),
                reason: e.to_string(),
            }
        })
    }
}

/// Levels in the order they are offered
pub const LEVEL_CATALOG: &[Level] = &[
    Level {
        name: "Frozen",
        image_name: "anna_elza",
        grid_rows: 2,
        grid_columns: 2,
        difficulty: Difficulty::Easy,
    },
    Level {
        name: "Snow Castle",
        image_name: "snow_castle",
        grid_rows: 3,
        grid_columns: 3,
        difficulty: Difficulty::Medium,
    },
    Level {
        name: "Northern Lights",
        image_name: "northern_lights",
        grid_rows: 3,
        grid_columns: 4,
        difficulty: Difficulty::Hard,
    },
    Level {
        name: "Ice Palace",
        image_name: "ice_palace",
        grid_rows: 5,
        grid_columns: 6,
        difficulty: Difficulty::Hardcore,
    },
];

/// Look up a level by index
pub fn level_at(levels: &[Level], index: LevelIndex) -> Option<&Level> {
    levels.get(index.0)
}

/// Look up a level by index, failing for indices past the end
///
/// # Errors
///
/// Returns an error if the index is outside the catalog
pub fn require_level(levels: &[Level], index: LevelIndex) -> Result<&Level> {
    level_at(levels, index).ok_or(PuzzleError::UnknownLevel {
        index: index.0,
        catalog_len: levels.len(),
    })
}

/// Find a level by name, ignoring case and surrounding whitespace
pub fn level_by_name<'a>(levels: &'a [Level], name: &str) -> Option<(LevelIndex, &'a Level)> {
    let trimmed = name.trim();
    levels
        .iter()
        .enumerate()
        .find(|(_, level)| level.name.eq_ignore_ascii_case(trimmed))
        .map(|(index, level)| (LevelIndex(index), level))
}
