//! Side-scrolling player movement.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::*;
use crate::combat::{CombatState, Dead, Health, Weapon};
use crate::enemies::{Facing, Target, Terrain};

/// Ground check: a short ray just below the capsule, against terrain only.
pub fn update_grounded(
    config: Res<PlayerConfig>,
    rapier_context: Query<&RapierContext>,
    terrain: Query<(), With<Terrain>>,
    mut player_query: Query<(&Transform, &mut MovementState), With<Player>>,
) {
    let Ok(context) = rapier_context.get_single() else {
        // Fallback: assume grounded if no physics context
        for (_, mut movement) in player_query.iter_mut() {
            movement.is_grounded = true;
        }
        return;
    };

    let foot = config.half_height + config.radius;
    let is_terrain = |entity: Entity| terrain.contains(entity);
    for (transform, mut movement) in player_query.iter_mut() {
        let ray_origin = transform.translation.truncate() - Vec2::Y * (foot - 0.05);
        movement.is_grounded = context
            .cast_ray(
                ray_origin,
                Vec2::NEG_Y,
                0.15,
                true,
                QueryFilter::new().predicate(&is_terrain),
            )
            .is_some();
    }
}

/// Handle left/right movement and jumping for every living player.
pub fn player_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<PlayerConfig>,
    mut player_query: Query<
        (&PlayerControls, &MovementState, &mut Velocity, &mut Facing),
        (With<Player>, Without<Dead>),
    >,
) {
    for (controls, movement, mut velocity, mut facing) in player_query.iter_mut() {
        let axis = controls.axis(&keyboard);
        velocity.linvel.x = axis * config.move_speed;
        if let Some(toward) = Facing::toward(axis) {
            *facing = toward;
        }

        if movement.is_grounded && keyboard.just_pressed(controls.jump) {
            velocity.linvel.y = config.jump_force;
        }
    }
}

/// Spawn a player entity. Players are [`Target`]s for every enemy.
pub fn spawn_player(
    commands: &mut Commands,
    config: &PlayerConfig,
    number: u8,
    controls: PlayerControls,
    position: Vec2,
) -> Entity {
    commands
        .spawn((
            Player(number),
            Target,
            controls,
            MovementState::default(),
            Facing::default(),
            // Combat components
            Health::new(config.max_health),
            CombatState::default(),
            Weapon::default(),
            Transform::from_translation(position.extend(0.0)),
            // Rapier physics components
            RigidBody::Dynamic,
            Collider::capsule_y(config.half_height, config.radius),
            LockedAxes::ROTATION_LOCKED,
            Velocity::zero(),
            GravityScale(3.0),
            Friction::coefficient(0.0),
        ))
        .id()
}
