//! Environment queries answered by the physics layer.

use bevy::prelude::Vec2;

use super::intent::Facing;

/// "What is in front of me?" queries, evaluated against the world as it is now.
pub trait EnvironmentProbe {
    /// Is there ground to walk onto ahead of `position` when moving `direction`?
    fn ground_ahead(&self, position: Vec2, direction: Facing) -> bool;

    /// Is there a wall directly ahead of `position` when moving `direction`?
    fn wall_ahead(&self, position: Vec2, direction: Facing) -> bool;
}

/// Used when no physics world is available: flat ground everywhere, no walls.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenGround;

impl EnvironmentProbe for OpenGround {
    fn ground_ahead(&self, _position: Vec2, _direction: Facing) -> bool {
        true
    }

    fn wall_ahead(&self, _position: Vec2, _direction: Facing) -> bool {
        false
    }
}
