//! Player melee swings.

use bevy::prelude::*;

use super::components::*;
use crate::combat::{CombatState, DamageEvent, Dead, Weapon};
use crate::enemies::{BehaviorEngine, Enemy, Facing};

/// Whether `target` is within `reach` of `from` and not behind a wielder facing `facing`.
pub fn in_swing_arc(from: Vec2, facing: Facing, target: Vec2, reach: f32) -> bool {
    let dx = target.x - from.x;
    dx * facing.sign() >= 0.0 && from.distance(target) <= reach
}

/// Swing at every living enemy in front of the player.
pub fn player_attack(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut player_query: Query<
        (Entity, &PlayerControls, &Transform, &Facing, &Weapon, &mut CombatState),
        (With<Player>, Without<Dead>),
    >,
    enemy_query: Query<(Entity, &Transform, &BehaviorEngine), With<Enemy>>,
    mut damage_events: EventWriter<DamageEvent>,
) {
    for (player, controls, transform, facing, weapon, mut combat) in player_query.iter_mut() {
        if !keyboard.just_pressed(controls.attack) || !combat.can_attack() {
            continue;
        }
        combat.attack_cooldown = weapon.attack_cooldown;

        let from = transform.translation.truncate();
        for (enemy, enemy_transform, engine) in enemy_query.iter() {
            if engine.is_dead() {
                continue;
            }
            if in_swing_arc(from, *facing, enemy_transform.translation.truncate(), weapon.reach) {
                damage_events.send(DamageEvent {
                    target: enemy,
                    source: player,
                    amount: weapon.damage,
                });
            }
        }
    }
}
