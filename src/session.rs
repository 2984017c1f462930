//! Game session: one level, its cell geometry and its pieces
//!
//! The session is the single writer of its registry and engine. Hosts feed
//! it layout reports and drops, read [`BoardView`] snapshots for rendering,
//! and receive [`GameEvent`]s on the channel handed to [`GameSession::new`].

use std::sync::mpsc::Sender;

use tracing::{info, warn};

use crate::io::error::Result;
use crate::level::catalog::{Level, LevelIndex, require_level};
use crate::placement::{PieceId, PlacementConfig, PlacementEngine, PlacementOutcome};
use crate::spatial::geometry::{Board, Point, Rect};
use crate::spatial::grid::CellIndex;
use crate::spatial::layout::GridLayout;
use crate::spatial::registry::GridGeometryRegistry;
use crate::view::BoardView;

/// Messages from the game screen to the level selection side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Every piece of the level is placed; sent once per play-through
    LevelFinished {
        /// Catalog index of the finished level
        level: LevelIndex,
    },
}

/// State of the game screen
#[derive(Debug)]
pub struct GameSession {
    levels: &'static [Level],
    current: Option<LevelIndex>,
    registry: GridGeometryRegistry,
    engine: PlacementEngine,
    events: Sender<GameEvent>,
}

impl GameSession {
    /// Create a session over a level catalog with no level loaded
    pub fn new(
        levels: &'static [Level],
        config: PlacementConfig,
        seed: u64,
        events: Sender<GameEvent>,
    ) -> Self {
        Self {
            levels,
            current: None,
            registry: GridGeometryRegistry::default(),
            engine: PlacementEngine::new(config, seed),
            events,
        }
    }

    /// Enter a level: clear and re-dimension the geometry, deal new pieces
    ///
    /// # Errors
    ///
    /// Returns an error if the index is outside the catalog or the level's
    /// grid is invalid
    pub fn load_level(&mut self, index: LevelIndex) -> Result<&'static Level> {
        let levels = self.levels;
        let level = require_level(levels, index)?;
        let dimensions = level.dimensions()?;

        self.registry.resize(dimensions);
        self.engine.initialize(level)?;
        self.current = Some(index);

        info!(
            level = level.name,
            index = %index,
            difficulty = %level.difficulty,
            "level loaded"
        );
        Ok(level)
    }

    /// Record the rectangle of one cell as reported by the layout pass
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is outside the current grid or the
    /// rectangle is invalid
    pub fn record_cell_rect(&mut self, cell: CellIndex, rect: Rect<Board>) -> Result<()> {
        self.registry.record_cell_rect(cell, rect)
    }

    /// Record every cell of a computed layout
    ///
    /// # Errors
    ///
    /// Returns an error if the layout was computed for a different grid
    pub fn apply_layout(&mut self, layout: &GridLayout) -> Result<()> {
        layout.report_to(&mut self.registry)
    }

    /// Resolve one completed drag gesture
    ///
    /// Publishes [`GameEvent::LevelFinished`] when this drop completes the
    /// level.
    pub fn drop_piece(
        &mut self,
        piece: PieceId,
        drop_point: Point<Board>,
        cell_size: f64,
    ) -> PlacementOutcome {
        let outcome = self
            .engine
            .attempt_placement(&self.registry, piece, drop_point, cell_size);

        if outcome.completed_level() {
            if let Some(level) = self.current {
                info!(index = %level, "level finished");
                if self.events.send(GameEvent::LevelFinished { level }).is_err() {
                    warn!(index = %level, "no listener for level completion");
                }
            }
        }
        outcome
    }

    /// Start the current level over with a freshly shuffled tray
    ///
    /// Geometry stays as reported.
    pub fn play_again(&mut self) {
        self.engine.reset_level();
    }

    /// Snapshot for rendering
    pub fn view(&self) -> BoardView {
        BoardView::from_engine(&self.engine)
    }

    /// Every cell of the current grid has reported its geometry
    pub fn is_ready(&self) -> bool {
        self.current.is_some() && self.registry.is_ready()
    }

    /// Index of the loaded level
    pub const fn current_level(&self) -> Option<LevelIndex> {
        self.current
    }

    /// Catalog the session plays from
    pub const fn levels(&self) -> &'static [Level] {
        self.levels
    }

    /// Recorded cell geometry
    pub const fn registry(&self) -> &GridGeometryRegistry {
        &self.registry
    }

    /// Pieces and placement state
    pub const fn engine(&self) -> &PlacementEngine {
        &self.engine
    }
}
