//! Simulated play-through of a loaded level
//!
//! Stands in for a human dragging pieces: takes the first piece of the
//! tray, usually drops it near the center of its own cell, sometimes on a
//! random cell, and repeats until the level reports completion.

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use crate::io::configuration::{DROP_JITTER_FRACTION, MAX_ATTEMPTS_PER_PIECE};
use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::level::catalog::LevelIndex;
use crate::session::GameSession;
use crate::spatial::geometry::{Board, Point};
use crate::spatial::grid::CellIndex;
use crate::spatial::layout::GridLayout;

/// Drop statistics of one played level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSummary {
    /// Catalog index of the level
    pub level: LevelIndex,
    /// Level name
    pub name: &'static str,
    /// Drops performed
    pub attempts: usize,
    /// Drops that seated a piece
    pub accepted: usize,
    /// Drops that were rejected
    pub rejected: usize,
}

/// Seeded stand-in for a player's drag gestures
#[derive(Debug, Clone)]
pub struct SimulatedPlayer {
    rng: StdRng,
    misdrop_chance: f64,
}

impl SimulatedPlayer {
    /// Create a player that aims at a random cell with probability `misdrop_chance`
    ///
    /// # Errors
    ///
    /// Returns an error if the chance is not in `[0, 1)`
    pub fn new(seed: u64, misdrop_chance: f64) -> Result<Self> {
        if !(0.0..1.0).contains(&misdrop_chance) {
            return Err(invalid_parameter(
                "misdrop",
                &misdrop_chance,
                &"misdrop chance must be at least 0 and below 1",
            ));
        }
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            misdrop_chance,
        })
    }

    /// Pick a drop point for a piece belonging in `target`
    ///
    /// The point lies inside the aimed cell, scattered around its center.
    pub fn choose_drop(&mut self, layout: &GridLayout, target: CellIndex) -> Point<Board> {
        let dimensions = layout.dimensions();
        let aimed = if self.rng.random_bool(self.misdrop_chance) {
            CellIndex::new(
                self.rng.random_range(0..dimensions.rows()),
                self.rng.random_range(0..dimensions.columns()),
            )
        } else {
            target
        };

        let Some(rect) = layout.cell_rect(aimed) else {
            return Point::new(-1.0, -1.0);
        };
        let jitter = layout.cell_size() * DROP_JITTER_FRACTION / 2.0;
        let center = rect.center();
        center.offset(
            self.rng.random_range(-jitter..=jitter),
            self.rng.random_range(-jitter..=jitter),
        )
    }
}

/// Drop tray pieces until the session's level completes
///
/// # Errors
///
/// Returns an error if:
/// - No level is loaded or its geometry is incomplete
/// - The level does not complete within the attempt budget
pub fn play_level(
    session: &mut GameSession,
    layout: &GridLayout,
    player: &mut SimulatedPlayer,
    progress: Option<&ProgressManager>,
) -> Result<LevelSummary> {
    let level = session
        .current_level()
        .ok_or_else(|| computation_error("play_level", &"no level loaded"))?;
    if !session.is_ready() {
        return Err(computation_error(
            "play_level",
            &"cell geometry has not been fully reported",
        ));
    }
    let name = session
        .levels()
        .get(level.0)
        .map_or("<unknown>", |entry| entry.name);

    let budget = session
        .engine()
        .pieces()
        .len()
        .saturating_mul(MAX_ATTEMPTS_PER_PIECE);
    let mut summary = LevelSummary {
        level,
        name,
        attempts: 0,
        accepted: 0,
        rejected: 0,
    };

    while !session.engine().is_completed() {
        if summary.attempts >= budget {
            return Err(computation_error(
                "play_level",
                &format!("level '{name}' unfinished after {budget} drops"),
            ));
        }

        let Some(piece_id) = session.engine().tray().first().copied() else {
            break;
        };
        let Some(target) = session
            .engine()
            .piece(piece_id)
            .map(|piece| piece.correct_cell())
        else {
            break;
        };

        let drop_point = player.choose_drop(layout, target);
        let outcome = session.drop_piece(piece_id, drop_point, layout.cell_size());
        summary.attempts += 1;
        if outcome.is_accepted() {
            summary.accepted += 1;
        } else {
            summary.rejected += 1;
            debug!(piece = %piece_id, ?outcome, "simulated drop missed");
        }

        if let Some(progress) = progress {
            progress.update_level(session.engine().placed_count(), summary.attempts);
        }
    }

    info!(
        level = name,
        attempts = summary.attempts,
        rejected = summary.rejected,
        "level played"
    );
    Ok(summary)
}
