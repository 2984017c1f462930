//! Spatial data structures for the puzzle grid
//!
//! This module contains spatial-related functionality including:
//! - Coordinate-space tagged points and rectangles
//! - Grid dimensions and cell addressing
//! - The grid layout pass
//! - The registry of reported cell rectangles

/// Points, rectangles and the window-to-board viewport
pub mod geometry;
/// Grid dimensions and row-major cell addressing
pub mod grid;
/// Cell rectangle computation for a viewport
pub mod layout;
/// Latest reported rectangle of every cell
pub mod registry;

pub use geometry::{Board, Point, Rect, Size, Viewport, Window};
pub use grid::{CellIndex, GridDimensions};
pub use layout::{GridLayout, compute_grid_layout};
pub use registry::{CellRecord, GridGeometryRegistry, NearestCell};
