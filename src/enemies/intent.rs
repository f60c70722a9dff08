//! Intents emitted by the behavior engine and the sink that consumes them.
//!
//! Intents are fire-and-forget: the engine never reads back whether the
//! world applied them.

use bevy::prelude::{Component, Entity};

/// Horizontal facing of a side-scrolling entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Facing toward positive `dx`; `None` when `dx` is zero.
    pub fn toward(dx: f32) -> Option<Self> {
        if dx > 0.0 {
            Some(Facing::Right)
        } else if dx < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }

    /// `+1.0` for right, `-1.0` for left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }
}

/// Presentation cues for animation and audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Attack windup started; `variant` picks the swing animation.
    AttackBegin { variant: u8 },
    Hurt,
    Die,
    Dash,
    /// Left the dormant state.
    Wake,
}

impl Cue {
    pub fn name(self) -> &'static str {
        match self {
            Cue::AttackBegin { .. } => "attack-begin",
            Cue::Hurt => "hurt",
            Cue::Die => "die",
            Cue::Dash => "dash",
            Cue::Wake => "wake",
        }
    }
}

/// One request from an enemy to the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// Set the body velocity. `y: None` leaves vertical motion to physics.
    SetVelocity { x: f32, y: Option<f32> },
    SetFacing(Facing),
    Cue(Cue),
    RequestDamage { target: Entity, amount: i32 },
    DisableCollision,
    RequestRemoval,
}

/// Consumer of engine intents.
pub trait SignalSink {
    fn emit(&mut self, intent: Intent);
}

impl SignalSink for Vec<Intent> {
    fn emit(&mut self, intent: Intent) {
        self.push(intent);
    }
}
