//! Level definitions and navigation between levels

/// Static catalog of playable levels
pub mod catalog;
/// Pure screen transitions driven by navigation events
pub mod navigator;

pub use catalog::{Difficulty, LEVEL_CATALOG, Level, LevelIndex};
pub use navigator::{NavigationEvent, Screen, navigate};
