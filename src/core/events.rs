//! Global events used for cross-system communication.
//!
//! Enemies and players never touch each other's health directly: they send
//! DamageEvents, and the combat systems decide what a hit does.

use bevy::prelude::*;

/// Sent when an entity should take damage.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct DamageEvent {
    /// Entity receiving damage
    pub target: Entity,
    /// Entity that caused the damage
    pub source: Entity,
    /// Hit points to remove; zero or less is ignored
    pub amount: i32,
}

/// Sent exactly once when an entity dies.
///
/// Systems can listen for this to trigger death effects, score, etc.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct DeathEvent {
    /// Entity that died
    pub entity: Entity,
    /// Entity that killed them (if any)
    pub killed_by: Option<Entity>,
}
