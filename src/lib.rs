//! Hostile Behavior - data-driven enemy AI for a 2D side-scroller in Bevy.
//!
//! Every enemy carries a [`enemies::BehaviorEngine`]: a small state machine
//! (dormant, patrol, chase, attack, hurt-stun, dash, dead) that sees the world
//! only through a target registry and an environment probe, and acts on it
//! only by emitting intents.
//!
//! # Architecture
//!
//! - **Core**: Game states, global events
//! - **Enemies**: Behavior engine, archetype definitions, ECS adapter
//! - **Combat**: Damage routing and death
//! - **Player**: Keyboard-driven targets for the enemies
//! - **World**: The sandbox arena

pub mod combat;
pub mod core;
pub mod enemies;
pub mod player;
pub mod world;

use bevy::prelude::*;

/// Main plugin that adds all sub-plugins. Physics is added by the caller.
pub struct HostilesPlugin;

impl Plugin for HostilesPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)
            .add_plugins(enemies::EnemyPlugin)
            .add_plugins(combat::CombatPlugin)
            .add_plugins(player::PlayerPlugin)
            .add_plugins(world::WorldPlugin);
    }
}
