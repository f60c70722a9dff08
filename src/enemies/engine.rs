//! Per-enemy behavior engine: a timed state machine re-evaluated every tick.
//!
//! The engine owns all mutable enemy state. It reads the world only through a
//! [`TickContext`] and writes to it only through a [`SignalSink`], so it can be
//! driven by the ECS or by a plain loop in tests.

use bevy::log::debug;
use bevy::prelude::{Component, Entity, Vec2};
use rand::rngs::StdRng;
use rand::Rng;

use super::config::EnemyConfig;
use super::cooldown::{Cooldown, CooldownSet};
use super::error::ConfigError;
use super::intent::{Cue, Facing, Intent, SignalSink};
use super::probe::EnvironmentProbe;
use super::target::{select_target, Sighting, TargetRegistry};

/// An attack in progress, timed from its start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackAction {
    pub elapsed: f32,
    /// The hit test already ran.
    pub struck: bool,
    /// A stun landed during the windup and takes over once the hit resolves.
    pub stun_pending: bool,
}

/// A dash in progress along a direction locked at its start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashAction {
    pub remaining: f32,
    pub direction: Facing,
}

/// Time left before a dead enemy asks to be removed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeathCountdown {
    pub remaining: f32,
    pub removal_requested: bool,
}

/// Discrete behavior state. `Dead` is terminal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AiState {
    /// Asleep until a target enters detection range. Never re-entered.
    Dormant,
    Patrol,
    Chase,
    Attack(AttackAction),
    /// Hit-stun; the remaining time lives in the [`Cooldown::Stun`] timer.
    HurtStun,
    Dash(DashAction),
    Dead(DeathCountdown),
}

impl AiState {
    pub fn name(&self) -> &'static str {
        match self {
            AiState::Dormant => "dormant",
            AiState::Patrol => "patrol",
            AiState::Chase => "chase",
            AiState::Attack(_) => "attack",
            AiState::HurtStun => "hurt-stun",
            AiState::Dash(_) => "dash",
            AiState::Dead(_) => "dead",
        }
    }

    pub fn is_dead(&self) -> bool {
        matches!(self, AiState::Dead(_))
    }
}

/// The world as one enemy sees it during one tick.
pub struct TickContext<'a> {
    /// Current position of the enemy's body.
    pub position: Vec2,
    pub targets: &'a dyn TargetRegistry,
    pub probe: &'a dyn EnvironmentProbe,
}

/// Behavior state machine for a single enemy.
#[derive(Component, Debug)]
pub struct BehaviorEngine {
    pub(super) config: EnemyConfig,
    pub(super) state: AiState,
    pub(super) health: i32,
    pub(super) facing: Facing,
    pub(super) patrol_origin: Vec2,
    pub(super) patrol_direction: Facing,
    pub(super) target: Option<Entity>,
    pub(super) cooldowns: CooldownSet,
    pub(super) rng: StdRng,
}

impl BehaviorEngine {
    /// Create the engine for an enemy spawning at `spawn`.
    ///
    /// `rng` drives every random decision (attack variant, stun roll).
    pub fn new(config: EnemyConfig, spawn: Vec2, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = if config.capabilities.starts_dormant {
            AiState::Dormant
        } else {
            AiState::Patrol
        };
        Ok(Self {
            health: config.max_health,
            config,
            state,
            facing: Facing::Right,
            patrol_origin: spawn,
            patrol_direction: Facing::Right,
            target: None,
            cooldowns: CooldownSet::new(),
            rng,
        })
    }

    pub fn config(&self) -> &EnemyConfig {
        &self.config
    }

    pub fn state(&self) -> &AiState {
        &self.state
    }

    /// Current health, never reported below zero.
    pub fn health(&self) -> i32 {
        self.health.max(0)
    }

    pub fn is_dead(&self) -> bool {
        self.state.is_dead()
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn patrol_origin(&self) -> Vec2 {
        self.patrol_origin
    }

    pub fn patrol_direction(&self) -> Facing {
        self.patrol_direction
    }

    /// Target chosen at the last decision, if any.
    pub fn target(&self) -> Option<Entity> {
        self.target
    }

    pub fn cooldowns(&self) -> &CooldownSet {
        &self.cooldowns
    }

    /// Advance the simulation by `dt` seconds.
    pub fn tick(&mut self, dt: f32, ctx: &TickContext<'_>, sink: &mut dyn SignalSink) {
        let dt = dt.max(0.0);

        if let AiState::Dead(countdown) = &mut self.state {
            countdown.remaining = (countdown.remaining - dt).max(0.0);
            if countdown.remaining <= 0.0 && !countdown.removal_requested {
                countdown.removal_requested = true;
                sink.emit(Intent::RequestRemoval);
            }
            return;
        }

        self.cooldowns.tick(dt);

        // Committed actions resolve their own timers and skip decisions.
        match self.state {
            AiState::HurtStun => {
                // The knockback from entry plays out untouched until the stun ends.
                if self.cooldowns.is_ready(Cooldown::Stun) {
                    sink.emit(halt());
                    self.resume();
                }
                return;
            }
            AiState::Attack(action) => {
                self.advance_attack(action, dt, ctx, sink);
                return;
            }
            AiState::Dash(dash) => {
                let remaining = dash.remaining - dt;
                if remaining > 0.0 {
                    self.state = AiState::Dash(DashAction { remaining, ..dash });
                    sink.emit(horizontal(dash.direction.sign() * self.config.dash.speed));
                    return;
                }
            }
            _ => {}
        }

        let sighting = select_target(ctx.targets, ctx.position, self.config.detection_range);
        self.target = sighting.map(|sighting| sighting.target.id);

        if self.state == AiState::Dormant {
            sink.emit(halt());
            if sighting.is_some() {
                self.enter(AiState::Patrol);
                sink.emit(Intent::Cue(Cue::Wake));
            }
            return;
        }

        match sighting {
            Some(sighting) => self.engage(sighting, ctx, sink),
            None => self.patrol(ctx, sink),
        }

        if self.config.capabilities.contact_damage_only {
            self.contact_damage(ctx, sink);
        }
    }

    fn engage(&mut self, sighting: Sighting, ctx: &TickContext<'_>, sink: &mut dyn SignalSink) {
        let toward = Facing::toward(sighting.target.position.x - ctx.position.x);
        let config = &self.config;

        if config.capabilities.contact_damage_only || sighting.distance > config.attack_range {
            let can_dash = config.capabilities.can_dash
                && !config.capabilities.contact_damage_only
                && sighting.distance > 2.0 * config.attack_range
                && self.cooldowns.is_ready(Cooldown::Dash);
            match toward {
                Some(direction) if can_dash => self.start_dash(direction, sink),
                _ => self.chase(toward, sink),
            }
        } else if self.cooldowns.is_ready(Cooldown::Attack) {
            self.start_attack(toward, sink);
        } else {
            // In reach but still cooling down: hold position facing the target.
            self.enter(AiState::Chase);
            if let Some(direction) = toward {
                self.set_facing(direction, sink);
            }
            sink.emit(halt());
        }
    }

    fn chase(&mut self, toward: Option<Facing>, sink: &mut dyn SignalSink) {
        self.enter(AiState::Chase);
        match toward {
            Some(direction) => {
                self.set_facing(direction, sink);
                sink.emit(horizontal(direction.sign() * self.config.chase_speed));
            }
            None => sink.emit(halt()),
        }
    }

    fn start_dash(&mut self, direction: Facing, sink: &mut dyn SignalSink) {
        self.enter(AiState::Dash(DashAction {
            remaining: self.config.dash.duration,
            direction,
        }));
        self.cooldowns.start(Cooldown::Dash, self.config.dash.cooldown);
        self.set_facing(direction, sink);
        sink.emit(Intent::Cue(Cue::Dash));
        sink.emit(horizontal(direction.sign() * self.config.dash.speed));
    }

    fn start_attack(&mut self, toward: Option<Facing>, sink: &mut dyn SignalSink) {
        let variant = if self.config.attack_variants > 1 {
            self.rng.gen_range(0..self.config.attack_variants)
        } else {
            0
        };
        self.enter(AiState::Attack(AttackAction {
            elapsed: 0.0,
            struck: false,
            stun_pending: false,
        }));
        if let Some(direction) = toward {
            self.set_facing(direction, sink);
        }
        sink.emit(halt());
        sink.emit(Intent::Cue(Cue::AttackBegin { variant }));
    }

    fn patrol(&mut self, ctx: &TickContext<'_>, sink: &mut dyn SignalSink) {
        self.enter(AiState::Patrol);

        if self.cooldowns.is_ready(Cooldown::TurnDebounce) {
            let offset = ctx.position.x - self.patrol_origin.x;
            let beyond_range = match self.patrol_direction {
                Facing::Right => offset >= self.config.patrol_range,
                Facing::Left => offset <= -self.config.patrol_range,
            };
            if beyond_range || self.path_blocked(ctx) {
                self.patrol_direction = self.patrol_direction.flipped();
                self.cooldowns
                    .start(Cooldown::TurnDebounce, self.config.turn_debounce);
                debug!(
                    "patrol reversed to {:?} at offset {:.2}",
                    self.patrol_direction, offset
                );
            }
        }

        let direction = self.patrol_direction;
        self.set_facing(direction, sink);
        sink.emit(horizontal(direction.sign() * self.config.patrol_speed));
    }

    fn path_blocked(&self, ctx: &TickContext<'_>) -> bool {
        let reach = &self.config.probe;
        let direction = self.patrol_direction;
        (reach.wall > 0.0 && ctx.probe.wall_ahead(ctx.position, direction))
            || (reach.depth > 0.0 && !ctx.probe.ground_ahead(ctx.position, direction))
    }

    /// Return to normal decision-making on the next tick.
    pub(super) fn resume(&mut self) {
        if self.target.is_some() {
            self.enter(AiState::Chase);
        } else {
            self.enter(AiState::Patrol);
        }
    }

    pub(super) fn enter(&mut self, next: AiState) {
        if std::mem::discriminant(&self.state) != std::mem::discriminant(&next) {
            debug!("enemy state {} -> {}", self.state.name(), next.name());
        }
        self.state = next;
    }

    pub(super) fn set_facing(&mut self, facing: Facing, sink: &mut dyn SignalSink) {
        if self.facing != facing {
            self.facing = facing;
            sink.emit(Intent::SetFacing(facing));
        }
    }
}

/// Horizontal velocity, vertical left to physics.
pub(super) fn horizontal(x: f32) -> Intent {
    Intent::SetVelocity { x, y: None }
}

pub(super) fn halt() -> Intent {
    horizontal(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemies::config::Archetype;
    use crate::enemies::sim::{damage_intents, Sim};

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn spawns_patrolling_at_full_health() {
        let sim = Sim::new(Archetype::Boar.config(), 10.0);
        assert_eq!(*sim.engine.state(), AiState::Patrol);
        assert_eq!(sim.engine.health(), 80);
        assert_eq!(sim.engine.patrol_origin(), Vec2::new(10.0, 0.0));
        assert!(sim.engine.target().is_none());
    }

    #[test]
    fn dormant_archetype_spawns_dormant() {
        let sim = Sim::new(Archetype::Bat.config(), 0.0);
        assert_eq!(*sim.engine.state(), AiState::Dormant);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = Archetype::Boar.config();
        config.attack_range = 10.0;
        let result = BehaviorEngine::new(config, Vec2::ZERO, Sim::rng());
        assert!(matches!(
            result,
            Err(ConfigError::AttackBeyondDetection { .. })
        ));
    }

    #[test]
    fn patrols_symmetrically_without_overshoot() {
        let mut sim = Sim::new(Archetype::Boar.config(), 0.0);
        let step = 2.0 * DT;
        let mut min_x = f32::MAX;
        let mut max_x = f32::MIN;
        for _ in 0..(20.0 / DT) as usize {
            sim.step(DT);
            assert_eq!(*sim.engine.state(), AiState::Patrol);
            min_x = min_x.min(sim.position.x);
            max_x = max_x.max(sim.position.x);
        }
        assert!(max_x >= 3.0 - 1e-3, "never reached right edge: {max_x}");
        assert!(min_x <= -3.0 + 1e-3, "never reached left edge: {min_x}");
        assert!(max_x <= 3.0 + step + 1e-3, "overshot right edge: {max_x}");
        assert!(min_x >= -3.0 - step - 1e-3, "overshot left edge: {min_x}");
    }

    #[test]
    fn wall_reversals_are_debounced() {
        let mut sim = Sim::new(Archetype::Boar.config(), 0.0);
        sim.probe.wall = true;

        let mut reversals = Vec::new();
        let mut elapsed = 0.0;
        for _ in 0..(3.0 / DT) as usize {
            let intents = sim.step(DT);
            if intents
                .iter()
                .any(|intent| matches!(intent, Intent::SetFacing(_)))
            {
                reversals.push(elapsed);
            }
            elapsed += DT;
        }

        assert!(reversals.len() >= 5, "expected repeated reversals");
        for pair in reversals.windows(2) {
            assert!(pair[1] - pair[0] >= 0.4 - 1e-4, "reversals too close: {pair:?}");
        }
    }

    #[test]
    fn missing_ground_reverses_patrol() {
        let mut sim = Sim::new(Archetype::Boar.config(), 0.0);
        sim.probe.ground = false;
        sim.step(DT);
        assert_eq!(sim.engine.patrol_direction(), Facing::Left);
        assert!(sim.velocity.x < 0.0);
    }

    #[test]
    fn fliers_ignore_missing_ground() {
        let mut sim = Sim::new(Archetype::Bat.config(), 0.0);
        sim.probe.ground = false;
        sim.add_target(1, 5.0);
        sim.step(DT);
        sim.clear_targets();
        sim.step(DT);
        assert_eq!(*sim.engine.state(), AiState::Patrol);
        assert_eq!(sim.engine.patrol_direction(), Facing::Right);
    }

    #[test]
    fn chases_detected_target() {
        let mut sim = Sim::new(Archetype::Boar.config(), 0.0);
        sim.add_target(1, -5.0);
        let intents = sim.step(DT);
        assert_eq!(*sim.engine.state(), AiState::Chase);
        assert_eq!(sim.engine.target(), Some(Entity::from_raw(1)));
        assert_eq!(sim.engine.facing(), Facing::Left);
        assert!(intents.contains(&Intent::SetFacing(Facing::Left)));
        assert_eq!(sim.velocity.x, -5.0);
    }

    #[test]
    fn loses_target_beyond_detection_range() {
        let mut sim = Sim::new(Archetype::Boar.config(), 0.0);
        sim.add_target(1, 5.0);
        sim.step(DT);
        assert_eq!(*sim.engine.state(), AiState::Chase);

        sim.targets[0].position.x = 20.0;
        sim.step(DT);
        assert_eq!(*sim.engine.state(), AiState::Patrol);
        assert!(sim.engine.target().is_none());
    }

    #[test]
    fn dead_target_is_not_tracked() {
        let mut sim = Sim::new(Archetype::Boar.config(), 0.0);
        sim.add_target(1, 2.0);
        sim.targets[0].alive = false;
        sim.step(DT);
        assert_eq!(*sim.engine.state(), AiState::Patrol);
    }

    #[test]
    fn chase_then_attack_lands_one_hit() {
        let mut sim = Sim::new(Archetype::Boar.config(), 0.0);
        sim.add_target(1, 5.0);
        sim.step(DT);
        assert_eq!(*sim.engine.state(), AiState::Chase);

        sim.targets[0].position.x = sim.position.x + 1.0;
        let intents = sim.step(DT);
        assert!(matches!(sim.engine.state(), AiState::Attack(_)));
        assert!(intents.contains(&Intent::Cue(Cue::AttackBegin { variant: 0 })));
        assert_eq!(sim.velocity.x, 0.0);

        let intents = sim.run(0.8, DT);
        assert_eq!(
            damage_intents(&intents),
            vec![(Entity::from_raw(1), 15)],
            "one hit per attack cycle"
        );
        let begins = intents
            .iter()
            .filter(|intent| matches!(intent, Intent::Cue(Cue::AttackBegin { .. })))
            .count();
        assert_eq!(begins, 0, "attack-begin is emitted once, at the start");
    }

    #[test]
    fn windup_suppresses_movement_and_decisions() {
        let mut sim = Sim::new(Archetype::Boar.config(), 0.0);
        sim.add_target(1, 1.0);
        sim.step(DT);
        assert!(matches!(sim.engine.state(), AiState::Attack(_)));

        // Target runs away mid-windup; the attack still plays out in place.
        sim.targets[0].position.x = 6.0;
        let intents = sim.run(0.2, DT);
        assert!(matches!(sim.engine.state(), AiState::Attack(_)));
        assert!(intents
            .iter()
            .all(|intent| !matches!(intent, Intent::SetVelocity { x, .. } if *x != 0.0)));
        assert_eq!(sim.position.x, 0.0);
    }

    #[test]
    fn attack_hits_every_target_within_slop_range() {
        let mut sim = Sim::new(Archetype::Boar.config(), 0.0);
        sim.add_target(1, 1.0);
        sim.add_target(2, -1.5);
        sim.add_target(3, 1.7);
        sim.add_target(4, -1.1);
        sim.targets[3].alive = false;

        let intents = sim.run(0.4, DT);
        let mut hits = damage_intents(&intents);
        hits.sort_by_key(|(target, _)| target.index());
        assert_eq!(
            hits,
            vec![(Entity::from_raw(1), 15), (Entity::from_raw(2), 15)]
        );
    }

    #[test]
    fn vanished_target_is_a_miss() {
        let mut sim = Sim::new(Archetype::Boar.config(), 0.0);
        sim.add_target(1, 1.0);
        sim.step(DT);
        assert!(matches!(sim.engine.state(), AiState::Attack(_)));

        sim.clear_targets();
        let intents = sim.run(1.0, DT);
        assert!(damage_intents(&intents).is_empty());
        assert_eq!(*sim.engine.state(), AiState::Patrol);
    }

    #[test]
    fn holds_position_while_attack_cools_down() {
        let mut sim = Sim::new(Archetype::Boar.config(), 0.0);
        sim.add_target(1, 1.0);
        sim.run(0.9, DT);
        assert!(!sim.engine.cooldowns().is_ready(Cooldown::Attack));

        sim.step(DT);
        assert_eq!(*sim.engine.state(), AiState::Chase);
        assert_eq!(sim.velocity.x, 0.0);

        // Cooldown of 1.2s elapses, then the next swing starts.
        let intents = sim.run(1.3, DT);
        assert!(intents.contains(&Intent::Cue(Cue::AttackBegin { variant: 0 })));
    }

    #[test]
    fn attack_variant_comes_from_seeded_rng() {
        let variants = |seed: u64| {
            let mut sim = Sim::with_seed(Archetype::Skeleton.config(), 0.0, seed);
            sim.add_target(1, 0.5);
            let intents = sim.run(20.0, DT);
            intents
                .iter()
                .filter_map(|intent| match intent {
                    Intent::Cue(Cue::AttackBegin { variant }) => Some(*variant),
                    _ => None,
                })
                .collect::<Vec<_>>()
        };
        let first = variants(42);
        assert!(first.len() > 5);
        assert!(first.iter().all(|variant| *variant < 2));
        assert_eq!(first, variants(42));
    }

    #[test]
    fn boss_dashes_at_distant_targets() {
        let mut sim = Sim::new(Archetype::SkeletonBoss.config(), 0.0);
        sim.add_target(1, 5.0);
        let intents = sim.step(DT);
        assert!(matches!(sim.engine.state(), AiState::Dash(_)));
        assert!(intents.contains(&Intent::Cue(Cue::Dash)));
        assert_eq!(sim.velocity.x, 8.0);
        // Re-armed on start, not on completion.
        assert!(sim.engine.cooldowns().remaining(Cooldown::Dash) > 3.9);

        // Direction is locked even if the target jumps behind.
        sim.targets[0].position.x = -1.0;
        sim.run(0.2, DT);
        assert!(matches!(sim.engine.state(), AiState::Dash(_)));
        assert_eq!(sim.velocity.x, 8.0);

        sim.run(0.3, DT);
        assert_eq!(*sim.engine.state(), AiState::Chase);
        assert!(sim.velocity.x < 0.0);
    }

    #[test]
    fn boss_does_not_dash_at_close_targets_or_while_cooling_down() {
        let mut sim = Sim::new(Archetype::SkeletonBoss.config(), 0.0);
        sim.add_target(1, 2.0);
        sim.step(DT);
        assert_eq!(*sim.engine.state(), AiState::Chase);

        let mut sim = Sim::new(Archetype::SkeletonBoss.config(), 0.0);
        sim.add_target(1, 6.5);
        sim.run(0.5, DT);
        sim.targets[0].position.x = sim.position.x + 6.5;
        sim.step(DT);
        assert_eq!(*sim.engine.state(), AiState::Chase);
    }

    #[test]
    fn dormant_wakes_once_and_never_sleeps_again() {
        let mut sim = Sim::new(Archetype::Bat.config(), 0.0);
        sim.add_target(1, 10.0);
        sim.run(1.0, DT);
        assert_eq!(*sim.engine.state(), AiState::Dormant);
        assert_eq!(sim.position.x, 0.0);

        sim.targets[0].position.x = 5.0;
        let intents = sim.step(DT);
        assert_eq!(*sim.engine.state(), AiState::Patrol);
        assert!(intents.contains(&Intent::Cue(Cue::Wake)));

        sim.clear_targets();
        let intents = sim.run(2.0, DT);
        assert_eq!(*sim.engine.state(), AiState::Patrol);
        assert!(!intents.contains(&Intent::Cue(Cue::Wake)));
    }

    #[test]
    fn crawler_deals_contact_damage_on_cooldown() {
        let mut sim = Sim::new(Archetype::Slime.config(), 0.0);
        sim.add_target(1, 0.5);
        let intents = sim.step(DT);
        assert_eq!(damage_intents(&intents), vec![(Entity::from_raw(1), 10)]);

        // Keep the target glued to the slime.
        let mut hits = 0;
        for _ in 0..(1.0 / DT) as usize {
            sim.targets[0].position.x = sim.position.x + 0.3;
            let intents = sim.step(DT);
            hits += damage_intents(&intents).len();
            assert!(!matches!(sim.engine.state(), AiState::Attack(_)));
        }
        assert_eq!(hits, 1, "one more hit after the 0.8s contact cooldown");
    }

    #[test]
    fn cooldowns_stay_non_negative() {
        let mut sim = Sim::new(Archetype::SkeletonBoss.config(), 0.0);
        sim.add_target(1, 5.0);
        for _ in 0..600 {
            sim.step(DT);
            for name in Cooldown::ALL {
                assert!(sim.engine.cooldowns().remaining(name) >= 0.0);
            }
        }
    }
}
