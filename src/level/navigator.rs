//! Screen navigation as a pure transition function
//!
//! The game screen reports a finished level as a [`GameEvent`]; the level
//! selection side feeds it through [`navigate`] together with player
//! choices and renders whatever [`Screen`] comes back.

use crate::level::catalog::{Level, LevelIndex, level_at};
use crate::session::GameEvent;

/// What the player is looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The level list
    LevelSelect,
    /// A level in progress
    Playing(LevelIndex),
    /// The congratulations screen of a completed level
    Finished(LevelIndex),
}

/// Inputs that move between screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEvent {
    /// A level card was chosen in the level list
    LevelChosen(LevelIndex),
    /// The game screen reported the last piece placed
    LevelFinished(LevelIndex),
    /// "Next level" on the congratulations screen
    NextLevel,
    /// "Play again" on the congratulations screen
    PlayAgain,
    /// "Menu" from anywhere
    BackToMenu,
}

impl From<GameEvent> for NavigationEvent {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::LevelFinished { level } => Self::LevelFinished(level),
        }
    }
}

/// Index of the level after `index`, if the catalog has one
pub fn next_level(levels: &[Level], index: LevelIndex) -> Option<LevelIndex> {
    let next = index.next();
    level_at(levels, next).map(|_| next)
}

/// Compute the screen that follows `current` after `event`
///
/// Events that make no sense on the current screen leave it unchanged.
/// Finishing the last level and asking for the next one returns to the
/// level list.
pub fn navigate(levels: &[Level], current: Screen, event: NavigationEvent) -> Screen {
    match (current, event) {
        (_, NavigationEvent::BackToMenu) => Screen::LevelSelect,
        (Screen::LevelSelect, NavigationEvent::LevelChosen(index)) => {
            if level_at(levels, index).is_some() {
                Screen::Playing(index)
            } else {
                current
            }
        }
        (Screen::Playing(playing), NavigationEvent::LevelFinished(finished))
            if playing == finished =>
        {
            Screen::Finished(finished)
        }
        (Screen::Finished(index), NavigationEvent::NextLevel) => {
            next_level(levels, index).map_or(Screen::LevelSelect, Screen::Playing)
        }
        (Screen::Finished(index), NavigationEvent::PlayAgain) => Screen::Playing(index),
        _ => current,
    }
}
