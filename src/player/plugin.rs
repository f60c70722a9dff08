//! Player plugin - movement and melee.

use bevy::prelude::*;

use super::components::*;
use super::{attack, movement};
use crate::combat::CombatSet;

/// Player plugin - handles player movement and attacks.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerConfig>().add_systems(
            Update,
            (
                movement::update_grounded,
                movement::player_movement,
                attack::player_attack,
            )
                .chain()
                .in_set(CombatSet::Input),
        );
    }
}
