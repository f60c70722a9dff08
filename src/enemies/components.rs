//! Enemy-related components, resources, and events.

use bevy::prelude::*;

use super::intent::Cue;
use super::target::{TargetInfo, TargetRegistry};

/// Marker component for all enemies.
#[derive(Component)]
pub struct Enemy;

/// Enemy type identifier (matches the RON file stem).
#[derive(Component, Clone, Debug)]
pub struct EnemyType(pub String);

/// Marker for entities enemies may track and hurt.
#[derive(Component)]
pub struct Target;

/// Marker for colliders the environment probes react to.
#[derive(Component)]
pub struct Terrain;

/// Snapshot of every [`Target`], rebuilt once per frame before enemies think.
///
/// Sorted by entity so target selection ties resolve the same way every frame.
#[derive(Resource, Default, Debug)]
pub struct TrackedTargets(pub Vec<TargetInfo>);

impl TargetRegistry for TrackedTargets {
    fn targets(&self) -> &[TargetInfo] {
        &self.0
    }
}

/// Base seed for per-enemy random number generators.
#[derive(Resource, Clone, Copy, Debug)]
pub struct SimulationSeed(pub u64);

impl Default for SimulationSeed {
    fn default() -> Self {
        Self(0x5eed)
    }
}

/// Presentation cue raised by an enemy (animation and sound hooks).
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct EnemyCueEvent {
    pub enemy: Entity,
    pub cue: Cue,
}
