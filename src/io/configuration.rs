//! Game constants and runtime configuration defaults

// Drop handling
/// Fraction of the cell size added on every side of a cell's hit rectangle
///
/// Earlier builds accepted drops in a window 40% larger than the cell (0.20
/// per side), later 30% (0.15). The current value requires near-exact
/// placement.
pub const DEFAULT_DROP_TOLERANCE: f64 = 0.01;

// Grid layout, in board units
/// Gap between neighbouring cells and around the grid
pub const GRID_SPACING: f64 = 2.0;

/// Share of the smaller viewport side occupied by the grid
pub const GRID_VIEWPORT_FRACTION: f64 = 0.6;

/// Viewport width used by simulated play
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1180.0;

/// Viewport height used by simulated play
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 820.0;

// Safety limit to keep piece lists and slice buffers reasonable
/// Maximum allowed rows or columns of a level
pub const MAX_GRID_DIMENSION: usize = 64;

// Default values for configurable parameters
/// Fixed seed for reproducible shuffles
pub const DEFAULT_SEED: u64 = 42;

/// Probability that the simulated player drops a piece on a random cell
pub const DEFAULT_MISDROP_CHANCE: f64 = 0.25;

/// Span of the simulated drop scatter around a cell center, as a fraction of the cell size
pub const DROP_JITTER_FRACTION: f64 = 0.4;

/// Attempts per piece before simulated play gives up on a level
pub const MAX_ATTEMPTS_PER_PIECE: usize = 1000;

// Output settings
/// Suffix of the directory receiving sliced pieces
pub const PIECES_DIR_SUFFIX: &str = "_pieces";
/// Extension used for piece dumps and slice inputs
pub const PIECE_FILE_EXTENSION: &str = "png";
