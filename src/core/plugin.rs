//! Core plugin that sets up game states and global events.

use bevy::prelude::*;

use super::events::*;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()
            // Register global events
            .add_event::<DamageEvent>()
            .add_event::<DeathEvent>()
            // Definitions load during Startup, so Loading can finish right away
            .add_systems(OnEnter(GameState::Loading), finish_loading)
            .add_systems(
                Update,
                handle_restart_input.run_if(in_state(GameState::GameOver)),
            );
    }
}

fn finish_loading(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::InGame);
}

/// Restart the sandbox with R after a game over.
fn handle_restart_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::KeyR) {
        info!("Restarting sandbox");
        next_state.set(GameState::InGame);
    }
}
