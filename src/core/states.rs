//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Enemy behavior,
//! player control, and damage routing only run in the InGame state.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// - Start in `Loading` while enemy definitions are read
/// - `InGame` once the sandbox is ready
/// - `GameOver` when every player has died; `R` restarts
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading data files
    #[default]
    Loading,
    /// Active gameplay
    InGame,
    /// All players are dead
    GameOver,
}
