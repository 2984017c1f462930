//! Grid puzzle core: cell geometry, drop validation and level flow
//!
//! A source image is cut into a rectangular grid of pieces. The layout pass
//! reports where every cell sits on the board, and the placement engine
//! decides whether a dropped piece seats in its cell, using a tolerance
//! window around the reported rectangles. A level completes once every
//! piece is seated.

#![forbid(unsafe_code)]

/// Input/output operations and error handling
pub mod io;
/// Level catalog and navigation between levels
pub mod level;
/// Pieces, drop validation and completion detection
pub mod placement;
/// A played level tying geometry and placement together
pub mod session;
/// Coordinate spaces, grid addressing and the geometry registry
pub mod spatial;
/// Render-ready snapshots of the board
pub mod view;

pub use io::error::{PuzzleError, Result};
