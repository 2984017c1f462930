//! Render-ready snapshot of a session and a plain-text renderer

use std::fmt::Write as _;

use ndarray::Array2;

use crate::placement::{PieceId, PlacementEngine};

/// What a renderer needs to draw the board and the tray
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// Seated piece per cell, `None` for empty cells
    pub cells: Array2<Option<PieceId>>,
    /// Unplaced pieces in tray order
    pub tray: Vec<PieceId>,
    /// Number of seated pieces
    pub placed: usize,
    /// Number of pieces in the level
    pub total: usize,
    /// The level is complete
    pub completed: bool,
}

impl BoardView {
    /// Capture the engine's current state
    pub fn from_engine(engine: &PlacementEngine) -> Self {
        let shape = engine.dimensions().map_or((0, 0), |d| d.shape());
        let mut cells = Array2::from_elem(shape, None);
        for piece in engine.pieces().iter().filter(|piece| piece.is_placed()) {
            let correct = piece.correct_cell();
            if let Some(slot) = cells.get_mut([correct.row, correct.column]) {
                *slot = Some(piece.id());
            }
        }

        Self {
            cells,
            tray: engine.tray(),
            placed: engine.placed_count(),
            total: engine.pieces().len(),
            completed: engine.is_completed(),
        }
    }
}

/// Draw the board as text: `[x]` for a seated piece, `[ ]` for an empty cell
pub fn render_text(view: &BoardView) -> String {
    let mut out = String::new();
    for row in view.cells.rows() {
        for cell in row {
            out.push_str(if cell.is_some() { "[x]" } else { "[ ]" });
        }
        out.push('\n');
    }

    let _ = write!(out, "placed {}/{}", view.placed, view.total);
    if view.completed {
        out.push_str(" - complete");
    }
    out.push('\n');

    if !view.tray.is_empty() {
        out.push_str("tray:");
        for id in &view.tray {
            let _ = write!(out, " {id}");
        }
        out.push('\n');
    }
    out
}
