//! Enemy spawning from registry definitions.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::rngs::StdRng;

use super::components::{Enemy, EnemyType};
use super::data::EnemyRegistry;
use super::engine::BehaviorEngine;
use super::intent::Facing;

/// Spawn an enemy of `enemy_type` at `position`.
///
/// Returns `None` (and logs) when the type is unknown or its config is rejected.
pub fn spawn_enemy(
    commands: &mut Commands,
    registry: &EnemyRegistry,
    enemy_type: &str,
    position: Vec2,
    rng: StdRng,
) -> Option<Entity> {
    let Some(definition) = registry.get(enemy_type) else {
        warn!("Unknown enemy type: {}", enemy_type);
        return None;
    };

    let engine = match BehaviorEngine::new(definition.config.clone(), position, rng) {
        Ok(engine) => engine,
        Err(e) => {
            error!("Cannot spawn {}: {}", enemy_type, e);
            return None;
        }
    };

    let collider = definition.collider;
    let entity = commands
        .spawn((
            Enemy,
            EnemyType(enemy_type.to_string()),
            engine,
            Facing::default(),
            Transform::from_translation(position.extend(0.0)),
            RigidBody::Dynamic,
            Collider::capsule_y(collider.half_height, collider.radius),
            LockedAxes::ROTATION_LOCKED,
            Velocity::zero(),
            GravityScale(definition.gravity_scale),
            Friction::coefficient(0.0),
        ))
        .id();

    info!("Spawned {} at ({:.1}, {:.1})", definition.name, position.x, position.y);
    Some(entity)
}
