//! Enemy plugin - registers all enemy systems.

use bevy::prelude::*;

use super::ai::{self, EnemySet};
use super::components::*;
use super::data::{load_enemy_definitions, EnemyRegistry};
use crate::core::GameState;

/// Enemy plugin - handles definitions, target tracking, and behavior ticks.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemyRegistry>()
            .init_resource::<TrackedTargets>()
            .init_resource::<SimulationSeed>()
            .add_event::<EnemyCueEvent>()
            // Definitions must be in place before the sandbox spawns anything
            .add_systems(Startup, load_enemy_definitions)
            .configure_sets(
                Update,
                (EnemySet::Sense, EnemySet::Think)
                    .chain()
                    .run_if(in_state(GameState::InGame)),
            )
            .add_systems(Update, ai::refresh_targets.in_set(EnemySet::Sense))
            .add_systems(
                Update,
                (ai::tick_enemies, ai::log_enemy_cues)
                    .chain()
                    .in_set(EnemySet::Think),
            );
    }
}
