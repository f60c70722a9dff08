//! Combat-related components.

use bevy::prelude::*;

// Re-export from core to avoid duplication
pub use crate::core::{DamageEvent, DeathEvent};

/// Hit points for entities that are not driven by a behavior engine.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub current: i32,
    pub maximum: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self {
            current: max,
            maximum: max,
        }
    }

    /// Remove up to `amount` hit points and return how many were removed.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let actual = amount.clamp(0, self.current.max(0));
        self.current -= actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }
}

/// A melee weapon carried by a player.
#[derive(Component, Debug, Clone)]
pub struct Weapon {
    pub damage: i32,
    /// Attack range in units, measured from the wielder's center
    pub reach: f32,
    /// Attack cooldown in seconds
    pub attack_cooldown: f32,
}

impl Default for Weapon {
    fn default() -> Self {
        Self {
            damage: 1,
            reach: 1.4,
            attack_cooldown: 0.4,
        }
    }
}

/// Combat state for a player.
#[derive(Component, Default, Debug)]
pub struct CombatState {
    /// Cooldown timer after attack
    pub attack_cooldown: f32,
}

impl CombatState {
    pub fn can_attack(&self) -> bool {
        self.attack_cooldown <= 0.0
    }
}

/// Marker component for entities that have died (prevents multiple death events).
#[derive(Component)]
pub struct Dead;
