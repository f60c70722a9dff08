//! Hostile Behavior sandbox - Entry Point
//!
//! Controls:
//! - Player 1: A/D move, W jump, F attack
//! - Player 2: Arrows move, Up jump, Right Ctrl attack
//! - R: Restart after game over

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

/// World units to screen pixels.
const PIXELS_PER_UNIT: f32 = 40.0;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Hostile Behavior Sandbox".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))
        // Physics, with colliders drawn since there are no sprites
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        .add_plugins(RapierDebugRenderPlugin::default())
        // Our game plugin
        .add_plugins(hostile_behavior::HostilesPlugin)
        .add_systems(Startup, spawn_camera)
        .run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        OrthographicProjection {
            scale: 1.0 / PIXELS_PER_UNIT,
            ..OrthographicProjection::default_2d()
        },
        Transform::from_xyz(1.0, 2.0, 0.0),
    ));
}
