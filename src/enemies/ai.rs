//! Enemy AI systems - feed the behavior engines and apply what they ask for.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::components::*;
use super::engine::{BehaviorEngine, TickContext};
use super::config::ProbeReach;
use super::intent::{Facing, Intent, SignalSink};
use super::probe::{EnvironmentProbe, OpenGround};
use super::target::TargetInfo;
use crate::combat::{Dead, Health};
use crate::core::DamageEvent;

/// System set ordering for enemy behavior.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum EnemySet {
    /// Rebuild the target snapshot.
    Sense,
    /// Tick every engine.
    Think,
}

/// Rebuild [`TrackedTargets`] from every [`Target`] entity.
pub fn refresh_targets(
    mut tracked: ResMut<TrackedTargets>,
    targets: Query<(Entity, &Transform, Option<&Health>, Has<Dead>), With<Target>>,
) {
    tracked.0.clear();
    tracked
        .0
        .extend(targets.iter().map(|(entity, transform, health, dead)| TargetInfo {
            id: entity,
            position: transform.translation.truncate(),
            alive: !dead && health.map_or(true, |h| !h.is_dead()),
        }));
    tracked.0.sort_by_key(|target| target.id);
}

/// Advance every enemy's behavior engine by one frame.
pub fn tick_enemies(
    mut commands: Commands,
    time: Res<Time>,
    tracked: Res<TrackedTargets>,
    rapier_context: Query<&RapierContext>,
    terrain: Query<(), With<Terrain>>,
    mut enemies: Query<
        (
            Entity,
            &mut BehaviorEngine,
            &Transform,
            &mut Velocity,
            &mut Facing,
        ),
        With<Enemy>,
    >,
) {
    let dt = time.delta_secs();
    let context = rapier_context.get_single().ok();

    for (entity, mut engine, transform, mut velocity, mut facing) in enemies.iter_mut() {
        let physics;
        let probe: &dyn EnvironmentProbe = match context {
            Some(context) => {
                physics = PhysicsProbe {
                    context,
                    terrain: &terrain,
                    reach: engine.config().probe,
                };
                &physics
            }
            None => &OpenGround,
        };
        let ctx = TickContext {
            position: transform.translation.truncate(),
            targets: &*tracked,
            probe,
        };
        let mut sink = WorldSink {
            commands: &mut commands,
            entity,
            velocity: &mut velocity,
            facing: &mut facing,
        };
        engine.tick(dt, &ctx, &mut sink);
    }
}

/// Log presentation cues until something renders them.
pub fn log_enemy_cues(mut cues: EventReader<EnemyCueEvent>) {
    for event in cues.read() {
        debug!("Enemy {:?} cue: {}", event.enemy, event.cue.name());
    }
}

/// Environment probe backed by rapier ray casts against [`Terrain`] only.
pub struct PhysicsProbe<'a, 'w, 's> {
    pub context: &'a RapierContext,
    pub terrain: &'a Query<'w, 's, (), With<Terrain>>,
    pub reach: ProbeReach,
}

impl PhysicsProbe<'_, '_, '_> {
    fn hits_terrain(&self, origin: Vec2, direction: Vec2, length: f32) -> bool {
        let is_terrain = |entity: Entity| self.terrain.contains(entity);
        let filter = QueryFilter::new().exclude_sensors().predicate(&is_terrain);
        self.context
            .cast_ray(origin, direction, length, true, filter)
            .is_some()
    }
}

impl EnvironmentProbe for PhysicsProbe<'_, '_, '_> {
    fn ground_ahead(&self, position: Vec2, direction: Facing) -> bool {
        if self.reach.depth <= 0.0 {
            return true;
        }
        let origin = position + Vec2::new(direction.sign() * self.reach.ahead, 0.0);
        self.hits_terrain(origin, Vec2::NEG_Y, self.reach.depth)
    }

    fn wall_ahead(&self, position: Vec2, direction: Facing) -> bool {
        if self.reach.wall <= 0.0 {
            return false;
        }
        self.hits_terrain(position, Vec2::new(direction.sign(), 0.0), self.reach.wall)
    }
}

/// Applies engine intents to one enemy entity.
pub struct WorldSink<'a, 'w, 's> {
    pub commands: &'a mut Commands<'w, 's>,
    pub entity: Entity,
    pub velocity: &'a mut Velocity,
    pub facing: &'a mut Facing,
}

impl SignalSink for WorldSink<'_, '_, '_> {
    fn emit(&mut self, intent: Intent) {
        match intent {
            Intent::SetVelocity { x, y } => {
                self.velocity.linvel.x = x;
                if let Some(y) = y {
                    self.velocity.linvel.y = y;
                }
            }
            Intent::SetFacing(facing) => *self.facing = facing,
            Intent::Cue(cue) => {
                self.commands.send_event(EnemyCueEvent {
                    enemy: self.entity,
                    cue,
                });
            }
            Intent::RequestDamage { target, amount } => {
                self.commands.send_event(DamageEvent {
                    target,
                    source: self.entity,
                    amount,
                });
            }
            Intent::DisableCollision => {
                self.commands
                    .entity(self.entity)
                    .insert((ColliderDisabled, RigidBody::Fixed));
            }
            Intent::RequestRemoval => {
                debug!("Despawning enemy {:?}", self.entity);
                self.commands.entity(self.entity).despawn_recursive();
            }
        }
    }
}
