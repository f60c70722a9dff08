//! Player-related components.

use bevy::prelude::*;

/// Marker component for player entities. Players are numbered from 1.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player(pub u8);

/// Keyboard bindings for one player.
#[derive(Component, Debug, Clone, Copy)]
pub struct PlayerControls {
    pub left: KeyCode,
    pub right: KeyCode,
    pub jump: KeyCode,
    pub attack: KeyCode,
}

impl PlayerControls {
    /// A/D to move, W to jump, F to swing.
    pub fn left_hand() -> Self {
        Self {
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            jump: KeyCode::KeyW,
            attack: KeyCode::KeyF,
        }
    }

    /// Arrow keys to move and jump, right Ctrl to swing.
    pub fn right_hand() -> Self {
        Self {
            left: KeyCode::ArrowLeft,
            right: KeyCode::ArrowRight,
            jump: KeyCode::ArrowUp,
            attack: KeyCode::ControlRight,
        }
    }

    /// -1, 0, or 1 depending on which movement keys are held.
    pub fn axis(&self, keyboard: &ButtonInput<KeyCode>) -> f32 {
        let mut axis = 0.0;
        if keyboard.pressed(self.left) {
            axis -= 1.0;
        }
        if keyboard.pressed(self.right) {
            axis += 1.0;
        }
        axis
    }
}

/// Tracks player movement state for physics.
#[derive(Component, Default, Debug)]
pub struct MovementState {
    pub is_grounded: bool,
}

/// Tuning shared by every player.
#[derive(Resource, Debug)]
pub struct PlayerConfig {
    /// Base movement speed in units per second
    pub move_speed: f32,
    /// Jump velocity
    pub jump_force: f32,
    pub max_health: i32,
    /// Capsule half height and radius
    pub half_height: f32,
    pub radius: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: 4.0,
            jump_force: 9.0,
            max_health: 100,
            half_height: 0.4,
            radius: 0.3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposing_keys_cancel_out() {
        let controls = PlayerControls::left_hand();
        let mut keyboard = ButtonInput::<KeyCode>::default();
        assert_eq!(controls.axis(&keyboard), 0.0);

        keyboard.press(KeyCode::KeyA);
        assert_eq!(controls.axis(&keyboard), -1.0);

        keyboard.press(KeyCode::KeyD);
        assert_eq!(controls.axis(&keyboard), 0.0);

        keyboard.release(KeyCode::KeyA);
        assert_eq!(controls.axis(&keyboard), 1.0);
    }

    #[test]
    fn the_two_layouts_do_not_overlap() {
        let a = PlayerControls::left_hand();
        let b = PlayerControls::right_hand();
        let keys_a = [a.left, a.right, a.jump, a.attack];
        let keys_b = [b.left, b.right, b.jump, b.attack];
        assert!(keys_a.iter().all(|key| !keys_b.contains(key)));
    }
}
