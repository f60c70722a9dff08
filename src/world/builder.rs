//! Sandbox construction.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::layout::SandboxLayout;
use crate::enemies::{spawn_enemy, EnemyRegistry, SimulationSeed, Terrain};
use crate::player::{spawn_player, PlayerConfig, PlayerControls};

/// Marker for everything the sandbox spawned, cleaned up on exit.
#[derive(Component)]
pub struct SandboxEntity;

/// Spawn terrain, players, and enemies described by `layout`.
pub fn build_sandbox(
    commands: &mut Commands,
    layout: &SandboxLayout,
    enemy_registry: &EnemyRegistry,
    player_config: &PlayerConfig,
    seed: SimulationSeed,
) {
    for block in &layout.terrain {
        commands.spawn((
            Terrain,
            SandboxEntity,
            Transform::from_translation(block.center.extend(0.0)),
            RigidBody::Fixed,
            Collider::cuboid(block.half_size.x, block.half_size.y),
        ));
    }

    let controls = [PlayerControls::left_hand(), PlayerControls::right_hand()];
    for (index, (position, controls)) in layout.players.iter().zip(controls).enumerate() {
        let number = index as u8 + 1;
        let player = spawn_player(commands, player_config, number, controls, *position);
        commands.entity(player).insert(SandboxEntity);
    }

    for (index, (archetype, position)) in layout.enemies.iter().enumerate() {
        // Each enemy gets its own stream so spawn order doesn't shift the others' rolls
        let rng = StdRng::seed_from_u64(seed.0.wrapping_add(index as u64));
        if let Some(enemy) = spawn_enemy(commands, enemy_registry, archetype.key(), *position, rng) {
            commands.entity(enemy).insert(SandboxEntity);
        }
    }
}
