//! Deterministic test harness: one engine, a flat line, and scripted probes.

use bevy::prelude::{Entity, Vec2};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::combat::DamageOutcome;
use super::config::EnemyConfig;
use super::engine::{BehaviorEngine, TickContext};
use super::intent::{Facing, Intent};
use super::probe::EnvironmentProbe;
use super::target::TargetInfo;

/// Probe with fixed answers, editable between steps.
pub struct ScriptedProbe {
    pub ground: bool,
    pub wall: bool,
}

impl EnvironmentProbe for ScriptedProbe {
    fn ground_ahead(&self, _position: Vec2, _direction: Facing) -> bool {
        self.ground
    }

    fn wall_ahead(&self, _position: Vec2, _direction: Facing) -> bool {
        self.wall
    }
}

pub struct Sim {
    pub engine: BehaviorEngine,
    pub position: Vec2,
    pub velocity: Vec2,
    pub targets: Vec<TargetInfo>,
    pub probe: ScriptedProbe,
}

impl Sim {
    pub fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    pub fn new(config: EnemyConfig, x: f32) -> Self {
        Self::with_seed(config, x, 7)
    }

    pub fn with_seed(config: EnemyConfig, x: f32, seed: u64) -> Self {
        let position = Vec2::new(x, 0.0);
        let engine = BehaviorEngine::new(config, position, StdRng::seed_from_u64(seed))
            .expect("test config is valid");
        Self {
            engine,
            position,
            velocity: Vec2::ZERO,
            targets: Vec::new(),
            probe: ScriptedProbe {
                ground: true,
                wall: false,
            },
        }
    }

    pub fn add_target(&mut self, index: u32, x: f32) {
        self.targets.push(TargetInfo {
            id: Entity::from_raw(index),
            position: Vec2::new(x, 0.0),
            alive: true,
        });
    }

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    /// Tick once, apply the emitted velocity, and return the intents.
    pub fn step(&mut self, dt: f32) -> Vec<Intent> {
        let mut intents = Vec::new();
        let ctx = TickContext {
            position: self.position,
            targets: &self.targets,
            probe: &self.probe,
        };
        self.engine.tick(dt, &ctx, &mut intents);
        self.apply(&intents);
        self.position.x += self.velocity.x * dt;
        intents
    }

    /// Step for `seconds` and return every intent emitted on the way.
    pub fn run(&mut self, seconds: f32, dt: f32) -> Vec<Intent> {
        let steps = (seconds / dt).round() as usize;
        let mut all = Vec::new();
        for _ in 0..steps {
            all.extend(self.step(dt));
        }
        all
    }

    pub fn hit(&mut self, amount: i32) -> (DamageOutcome, Vec<Intent>) {
        let mut intents = Vec::new();
        let outcome = self.engine.apply_damage(amount, &mut intents);
        self.apply(&intents);
        (outcome, intents)
    }

    fn apply(&mut self, intents: &[Intent]) {
        for intent in intents {
            if let Intent::SetVelocity { x, y } = intent {
                self.velocity.x = *x;
                if let Some(y) = y {
                    self.velocity.y = *y;
                }
            }
        }
    }
}

pub fn damage_intents(intents: &[Intent]) -> Vec<(Entity, i32)> {
    intents
        .iter()
        .filter_map(|intent| match intent {
            Intent::RequestDamage { target, amount } => Some((*target, *amount)),
            _ => None,
        })
        .collect()
}
