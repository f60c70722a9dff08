//! Enemies module - behavior engine, archetype data, and the ECS adapter.
//!
//! The engine core (`config`, `cooldown`, `target`, `probe`, `intent`,
//! `engine`, `combat`) never touches the ECS world. The adapter (`ai`,
//! `components`, `spawning`, `plugin`) feeds it positions, targets, and probes
//! each frame and applies the intents it emits.

mod ai;
mod combat;
mod components;
pub mod config;
mod cooldown;
pub mod data;
mod engine;
mod error;
mod intent;
mod plugin;
mod probe;
mod spawning;
mod target;

#[cfg(test)]
mod sim;

pub use ai::{EnemySet, PhysicsProbe, WorldSink};
pub use combat::DamageOutcome;
pub use components::*;
pub use config::{Archetype, EnemyConfig};
pub use cooldown::{Cooldown, CooldownSet};
pub use data::{EnemyDefinition, EnemyRegistry};
pub use engine::{AiState, BehaviorEngine, TickContext};
pub use error::{ConfigError, DataLoadError};
pub use intent::{Cue, Facing, Intent, SignalSink};
pub use plugin::EnemyPlugin;
pub use probe::{EnvironmentProbe, OpenGround};
pub use spawning::spawn_enemy;
pub use target::{select_target, Sighting, TargetInfo, TargetRegistry};
