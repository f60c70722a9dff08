//! Combat systems - damage routing, deaths, cooldowns.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use std::collections::HashSet;

use super::components::*;
use crate::core::GameState;
use crate::enemies::{BehaviorEngine, DamageOutcome, Enemy, EnemySet, Facing, WorldSink};
use crate::player::Player;

/// System set ordering for combat.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CombatSet {
    /// Player input and attacks, before enemies look around.
    Input,
    /// Damage routing, after enemies have acted.
    Damage,
}

/// Configure combat systems.
pub fn setup_combat_systems(app: &mut App) {
    app.configure_sets(
        Update,
        (
            CombatSet::Input.before(EnemySet::Sense),
            CombatSet::Damage.after(EnemySet::Think),
        )
            .run_if(in_state(GameState::InGame)),
    )
    .add_systems(Update, update_cooldowns.in_set(CombatSet::Input))
    .add_systems(
        Update,
        (apply_damage, check_deaths).chain().in_set(CombatSet::Damage),
    );
}

/// Update combat cooldowns.
fn update_cooldowns(time: Res<Time>, mut query: Query<&mut CombatState>) {
    for mut combat in query.iter_mut() {
        if combat.attack_cooldown > 0.0 {
            combat.attack_cooldown = (combat.attack_cooldown - time.delta_secs()).max(0.0);
        }
    }
}

/// Route damage to behavior engines (enemies) or plain health (everyone else).
pub fn apply_damage(
    mut commands: Commands,
    mut damage_events: EventReader<DamageEvent>,
    mut enemy_query: Query<(&mut BehaviorEngine, &mut Velocity, &mut Facing), With<Enemy>>,
    mut health_query: Query<(&mut Health, Has<Dead>), Without<Enemy>>,
    mut death_events: EventWriter<DeathEvent>,
) {
    // Track entities that died this frame to avoid duplicate death events
    let mut died_this_frame = HashSet::new();

    for event in damage_events.read() {
        if died_this_frame.contains(&event.target) {
            continue;
        }

        if let Ok((mut engine, mut velocity, mut facing)) = enemy_query.get_mut(event.target) {
            let mut sink = WorldSink {
                commands: &mut commands,
                entity: event.target,
                velocity: &mut velocity,
                facing: &mut facing,
            };
            if engine.apply_damage(event.amount, &mut sink) == DamageOutcome::Killed {
                died_this_frame.insert(event.target);
                commands.entity(event.target).insert(Dead);
                death_events.send(DeathEvent {
                    entity: event.target,
                    killed_by: Some(event.source),
                });
            }
            continue;
        }

        let Ok((mut health, dead)) = health_query.get_mut(event.target) else {
            continue;
        };
        // Skip if already dead (from previous frames)
        if dead || event.amount <= 0 {
            continue;
        }

        health.take_damage(event.amount);
        if health.is_dead() {
            died_this_frame.insert(event.target);
            commands.entity(event.target).insert(Dead);
            death_events.send(DeathEvent {
                entity: event.target,
                killed_by: Some(event.source),
            });
        }
    }
}

/// React to deaths: game over once no player is left standing.
fn check_deaths(
    mut death_events: EventReader<DeathEvent>,
    player_query: Query<(), With<Player>>,
    living_players: Query<(), (With<Player>, Without<Dead>)>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let mut player_died = false;
    for event in death_events.read() {
        if player_query.contains(event.entity) {
            info!("Player {:?} died", event.entity);
            player_died = true;
        } else {
            info!("{:?} was slain by {:?}", event.entity, event.killed_by);
        }
    }

    if player_died && living_players.is_empty() {
        info!("All players are down. Press R to restart");
        next_state.set(GameState::GameOver);
    }
}
