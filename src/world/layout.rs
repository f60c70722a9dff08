//! The sandbox arena: where terrain, players, and enemies go.

use bevy::prelude::*;

use crate::enemies::Archetype;

/// An axis-aligned solid block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub center: Vec2,
    pub half_size: Vec2,
}

impl Block {
    pub const fn new(x: f32, y: f32, half_width: f32, half_height: f32) -> Self {
        Self {
            center: Vec2::new(x, y),
            half_size: Vec2::new(half_width, half_height),
        }
    }

    pub fn top(&self) -> f32 {
        self.center.y + self.half_size.y
    }

    /// Whether `x` lies over this block's top surface.
    pub fn spans(&self, x: f32) -> bool {
        (self.center.x - x).abs() <= self.half_size.x
    }
}

/// Static description of the sandbox.
#[derive(Debug, Clone)]
pub struct SandboxLayout {
    pub terrain: Vec<Block>,
    pub players: Vec<Vec2>,
    pub enemies: Vec<(Archetype, Vec2)>,
}

impl Default for SandboxLayout {
    /// Two ground strips split by a pit, a raised ledge, and boundary walls.
    fn default() -> Self {
        Self {
            terrain: vec![
                // Left ground, ends in a drop at x = -2
                Block::new(-8.0, -0.5, 6.0, 0.5),
                // Right ground
                Block::new(8.0, -0.5, 8.0, 0.5),
                // Pit floor
                Block::new(-1.0, -3.5, 3.0, 0.5),
                // Raised ledge
                Block::new(-6.0, 2.5, 2.0, 0.25),
                // Boundary walls
                Block::new(-14.5, 3.0, 0.5, 4.0),
                Block::new(16.5, 3.0, 0.5, 4.0),
            ],
            players: vec![Vec2::new(1.5, 1.0), Vec2::new(2.5, 1.0)],
            enemies: vec![
                (Archetype::Boar, Vec2::new(-10.0, 0.6)),
                (Archetype::Skeleton, Vec2::new(-3.5, 0.9)),
                (Archetype::SkeletonBoss, Vec2::new(11.0, 1.2)),
                (Archetype::Slime, Vec2::new(5.0, 0.5)),
                (Archetype::Bat, Vec2::new(-6.0, 5.0)),
            ],
        }
    }
}
