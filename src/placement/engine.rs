//! Placement engine: piece ownership, drop resolution and completion
//!
//! Each piece moves from unplaced to placed exactly once per play-through.
//! A level completes the moment its last piece is accepted and stays
//! completed until [`PlacementEngine::reset_level`].

use rand::seq::SliceRandom;
use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use crate::io::error::Result;
use crate::level::catalog::Level;
use crate::placement::piece::{Piece, PieceId};
use crate::placement::tolerance::ToleranceWindow;
use crate::spatial::geometry::{Board, Point};
use crate::spatial::grid::{CellIndex, GridDimensions};
use crate::spatial::registry::{GridGeometryRegistry, NearestCell};

/// Tunables of the placement engine
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementConfig {
    /// Hit window around each cell
    pub tolerance: ToleranceWindow,
    /// Reject drops until every cell of the grid has been reported
    ///
    /// When disabled, drops are resolved as soon as any cell is known.
    pub require_complete_layout: bool,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            tolerance: ToleranceWindow::default(),
            require_complete_layout: true,
        }
    }
}

/// Why a drop did not seat the piece
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RejectReason {
    /// No level loaded, or cell geometry not (fully) reported yet
    NotReady,
    /// The identifier does not belong to a piece of the current level
    UnknownPiece,
    /// The piece is already seated
    AlreadyPlaced,
    /// The drop point lies outside every cell's window
    OutsideGrid {
        /// Closest recorded cell, for hinting
        nearest: Option<NearestCell>,
    },
    /// The drop resolved to another piece's cell
    WrongCell {
        /// Cell the drop resolved to
        cell: CellIndex,
    },
}

/// Result of one drop
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementOutcome {
    /// The piece was seated in its cell
    Accepted {
        /// Cell the piece now occupies
        cell: CellIndex,
        /// This placement completed the level
        completed: bool,
    },
    /// Nothing changed; the host returns the piece to the tray
    Rejected(RejectReason),
}

impl PlacementOutcome {
    /// The drop seated the piece
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// The drop seated the last piece of the level
    pub const fn completed_level(&self) -> bool {
        matches!(
            self,
            Self::Accepted {
                completed: true,
                ..
            }
        )
    }
}

/// Owner of the active level's pieces and their placement state
#[derive(Debug, Clone)]
pub struct PlacementEngine {
    config: PlacementConfig,
    dimensions: Option<GridDimensions>,
    /// Pieces in tray order
    pieces: Vec<Piece>,
    completed: bool,
    next_id: u64,
    rng: StdRng,
}

impl PlacementEngine {
    /// Create an engine with no level loaded
    pub fn new(config: PlacementConfig, seed: u64) -> Self {
        Self {
            config,
            dimensions: None,
            pieces: Vec::new(),
            completed: false,
            next_id: 1,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create one unplaced piece per cell of the level and shuffle the tray
    ///
    /// Does not touch any geometry registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the level's grid dimensions are invalid
    pub fn initialize(&mut self, level: &Level) -> Result<()> {
        let dimensions = level.dimensions()?;

        let mut cells: Vec<CellIndex> = dimensions.cells().collect();
        cells.shuffle(&mut self.rng);

        let pieces: Vec<Piece> = cells
            .into_iter()
            .map(|cell| {
                let id = PieceId::new(self.next_id);
                self.next_id += 1;
                Piece::new(id, cell)
            })
            .collect();
        debug_assert_eq!(pieces.len(), dimensions.cell_count());

        self.pieces = pieces;
        self.dimensions = Some(dimensions);
        self.completed = false;

        info!(
            level = level.name,
            grid = %dimensions,
            pieces = self.pieces.len(),
            "level initialized"
        );
        Ok(())
    }

    /// Try to seat a piece at a drop point
    ///
    /// Every cell rectangle in the registry is grown by the configured
    /// tolerance. When several windows contain the point, the piece's own
    /// cell wins if it is among them, otherwise the first one in row-major
    /// order. Only a drop resolving to the piece's own cell is accepted;
    /// every rejection leaves all state untouched.
    pub fn attempt_placement(
        &mut self,
        registry: &GridGeometryRegistry,
        piece_id: PieceId,
        drop_point: Point<Board>,
        cell_size: f64,
    ) -> PlacementOutcome {
        let Some(position) = self.pieces.iter().position(|piece| piece.id() == piece_id) else {
            return self.reject(piece_id, RejectReason::UnknownPiece);
        };
        let correct = match self.pieces.get(position) {
            Some(piece) if piece.is_placed() => {
                return self.reject(piece_id, RejectReason::AlreadyPlaced);
            }
            Some(piece) => piece.correct_cell(),
            None => return self.reject(piece_id, RejectReason::UnknownPiece),
        };

        if !self.layout_ready(registry) {
            return self.reject(piece_id, RejectReason::NotReady);
        }

        let margin = self.config.tolerance.margin(cell_size);
        let Some(target) = resolve_target(registry, correct, drop_point, margin) else {
            let nearest = registry.nearest_cell(drop_point);
            return self.reject(piece_id, RejectReason::OutsideGrid { nearest });
        };

        if target != correct {
            return self.reject(piece_id, RejectReason::WrongCell { cell: target });
        }

        if let Some(piece) = self.pieces.get_mut(position) {
            piece.mark_placed();
        }
        let completed = self.update_completion();

        debug!(piece = %piece_id, cell = %target, completed, "piece placed");
        PlacementOutcome::Accepted {
            cell: target,
            completed,
        }
    }

    /// Unplace every piece, reshuffle the tray and clear completion
    ///
    /// Geometry registries are left alone.
    pub fn reset_level(&mut self) {
        for piece in &mut self.pieces {
            piece.reset();
        }
        self.pieces.shuffle(&mut self.rng);
        self.completed = false;
        debug!(pieces = self.pieces.len(), "level reset");
    }

    /// Every piece of the level is placed
    ///
    /// False while no level is loaded.
    pub fn check_completion(&self) -> bool {
        !self.pieces.is_empty() && self.pieces.iter().all(Piece::is_placed)
    }

    /// The level reached completion during this play-through
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Dimensions of the loaded level
    pub const fn dimensions(&self) -> Option<GridDimensions> {
        self.dimensions
    }

    /// Active configuration
    pub const fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// All pieces in tray order, placed or not
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Look up a piece of the current level
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.id() == id)
    }

    /// Unplaced pieces in tray order
    pub fn tray(&self) -> Vec<PieceId> {
        self.pieces
            .iter()
            .filter(|piece| !piece.is_placed())
            .map(Piece::id)
            .collect()
    }

    /// Number of seated pieces
    pub fn placed_count(&self) -> usize {
        self.pieces.iter().filter(|piece| piece.is_placed()).count()
    }

    fn layout_ready(&self, registry: &GridGeometryRegistry) -> bool {
        let Some(dimensions) = self.dimensions else {
            return false;
        };
        if registry.is_empty() || !registry.matches(dimensions) {
            return false;
        }
        !self.config.require_complete_layout || registry.is_ready()
    }

    // Returns true only on the transition into the completed state.
    fn update_completion(&mut self) -> bool {
        let all_placed = self.check_completion();
        let transitioned = all_placed && !self.completed;
        self.completed = all_placed;
        transitioned
    }

    fn reject(&self, piece_id: PieceId, reason: RejectReason) -> PlacementOutcome {
        debug!(
            piece = %piece_id,
            reason = ?reason,
            placed = self.placed_count(),
            "drop rejected"
        );
        PlacementOutcome::Rejected(reason)
    }
}

fn resolve_target(
    registry: &GridGeometryRegistry,
    correct: CellIndex,
    drop_point: Point<Board>,
    margin: f64,
) -> Option<CellIndex> {
    let mut first = None;
    for cell in registry.cells_within(drop_point, margin) {
        if cell == correct {
            return Some(cell);
        }
        if first.is_none() {
            first = Some(cell);
        }
    }
    first
}
