//! Combat module - health, damage routing, and death.

mod components;
mod plugin;
mod systems;

pub use components::*;
pub use plugin::CombatPlugin;
pub use systems::CombatSet;
