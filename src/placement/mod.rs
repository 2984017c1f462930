//! Piece placement state machine and drop validation

/// Placement decisions and completion tracking
pub mod engine;
/// Pieces and piece identifiers
pub mod piece;
/// Hit window around cell rectangles
pub mod tolerance;

pub use engine::{PlacementConfig, PlacementEngine, PlacementOutcome, RejectReason};
pub use piece::{Piece, PieceId};
pub use tolerance::ToleranceWindow;
