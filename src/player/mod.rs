//! Player module - keyboard-driven side-scrolling players that enemies hunt.

mod attack;
mod components;
mod movement;
mod plugin;

pub use attack::{in_swing_arc, player_attack};
pub use components::*;
pub use movement::{player_movement, spawn_player};
pub use plugin::PlayerPlugin;
