//! Error types for puzzle setup, geometry recording and image handling

use std::fmt;
use std::path::PathBuf;

/// Main error type for all fallible puzzle operations
///
/// Placement attempts themselves never fail; they resolve to a
/// [`PlacementOutcome`](crate::placement::PlacementOutcome). Errors cover
/// the surrounding setup: level validation, geometry reports and image I/O.
#[derive(Debug)]
pub enum PuzzleError {
    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a sliced piece to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Cell coordinates outside the active grid
    InvalidCell {
        /// Requested row
        row: usize,
        /// Requested column
        column: usize,
        /// Grid dimensions (rows, columns) at the time of the request
        grid_dimensions: (usize, usize),
    },

    /// Level definition cannot be played
    InvalidLevel {
        /// Level name from the catalog
        name: String,
        /// Description of what's wrong with the level
        reason: String,
    },

    /// Level index does not exist in the catalog
    UnknownLevel {
        /// Requested catalog index
        index: usize,
        /// Number of levels in the catalog
        catalog_len: usize,
    },

    /// Internal computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export piece to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidCell {
                row,
                column,
                grid_dimensions,
            } => {
                write!(
                    f,
                    "Cell ({row}, {column}) is outside the {}x{} grid",
                    grid_dimensions.0, grid_dimensions.1
                )
            }
            Self::InvalidLevel { name, reason } => {
                write!(f, "Level '{name}' is not playable: {reason}")
            }
            Self::UnknownLevel { index, catalog_len } => {
                write!(
                    f,
                    "Level index {index} is out of bounds (catalog has {catalog_len} levels)"
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

impl From<image::ImageError> for PuzzleError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> PuzzleError {
    PuzzleError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
