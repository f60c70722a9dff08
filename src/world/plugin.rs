//! World plugin - sandbox setup and teardown.

use bevy::prelude::*;

use super::builder::{build_sandbox, SandboxEntity};
use super::layout::SandboxLayout;
use crate::core::GameState;
use crate::enemies::{EnemyRegistry, SimulationSeed};
use crate::player::PlayerConfig;

/// World plugin - builds the sandbox whenever a round starts.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::InGame), setup_sandbox)
            .add_systems(OnExit(GameState::InGame), cleanup_sandbox);
    }
}

/// Build the default sandbox.
pub fn setup_sandbox(
    mut commands: Commands,
    enemy_registry: Res<EnemyRegistry>,
    player_config: Res<PlayerConfig>,
    seed: Res<SimulationSeed>,
) {
    let layout = SandboxLayout::default();
    info!(
        "Building sandbox: {} terrain blocks, {} players, {} enemies",
        layout.terrain.len(),
        layout.players.len(),
        layout.enemies.len()
    );
    build_sandbox(&mut commands, &layout, &enemy_registry, &player_config, *seed);
}

/// Clean up sandbox entities when leaving InGame state.
fn cleanup_sandbox(mut commands: Commands, query: Query<Entity, With<SandboxEntity>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
