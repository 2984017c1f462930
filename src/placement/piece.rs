//! Puzzle pieces and their identities

use std::fmt;

use crate::spatial::grid::CellIndex;

/// Stable identifier of a piece
///
/// Identifiers come from a counter owned by the placement engine and are
/// handed out in shuffled order, so they say nothing about where a piece
/// belongs. Identifiers from a previous level never match a current piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(u64);

impl PieceId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw identifier value
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One fragment of the sliced image
///
/// The piece's pixels live in the host (or a
/// [`SlicedImage`](crate::io::image::SlicedImage)) and are looked up by the
/// piece's correct cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    correct: CellIndex,
    placed: bool,
}

impl Piece {
    pub(crate) const fn new(id: PieceId, correct: CellIndex) -> Self {
        Self {
            id,
            correct,
            placed: false,
        }
    }

    /// Identifier of the piece
    pub const fn id(&self) -> PieceId {
        self.id
    }

    /// Cell the piece belongs in
    pub const fn correct_cell(&self) -> CellIndex {
        self.correct
    }

    /// Piece has been seated in its cell
    pub const fn is_placed(&self) -> bool {
        self.placed
    }

    // Placed is terminal until the level is reset.
    pub(crate) const fn mark_placed(&mut self) {
        self.placed = true;
    }

    pub(crate) const fn reset(&mut self) {
        self.placed = false;
    }
}
