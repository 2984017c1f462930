//! Input/output operations and error handling

/// Command-line parsing and the command runner
pub mod cli;
/// Tunable constants
pub mod configuration;
/// Error type shared by the whole crate
pub mod error;
/// Image loading, slicing and piece export
pub mod image;
/// Simulated play-through of catalog levels
pub mod play;
/// Terminal progress bars
pub mod progress;
