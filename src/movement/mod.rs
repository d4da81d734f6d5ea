//! Movement domain: player controller plugin wiring and public exports.

mod bootstrap;
mod components;
mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
mod resources;
mod state;
mod sweep;
mod systems;


pub use components::{
    ControllerHits, Facing, GameLayer, Ground, PLAYER_CAPSULE_LENGTH, PLAYER_CAPSULE_RADIUS,
    PLAYER_SPAWN, Player, Wall,
};
pub use controller::{
    ControllerError, ControllerEvent, ForcedState, PlayerController, PushTarget, TickReport,
};
pub use resources::{ControllerTuning, MovementInput};
pub use state::{Locomotion, Transition};
pub use sweep::{ControllerHit, KinematicSweep, SweepOutcome};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{apply_controller, finish_rolls, read_input, sync_player_transform};

/// Per-frame ordering of the controller pipeline.
///
/// Input is sampled, the controller steps, interaction hooks react to the
/// step's contacts and overlaps, clips and fades tick, latent sequences
/// consume their completions, and finally the transform is synced from the
/// controller.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControllerSet {
    Input,
    Simulate,
    Interact,
    Animate,
    Sequence,
    Sync,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControllerTuning>()
            .init_resource::<MovementInput>()
            .configure_sets(
                Update,
                (
                    ControllerSet::Input,
                    ControllerSet::Simulate,
                    ControllerSet::Interact,
                    ControllerSet::Animate,
                    ControllerSet::Sequence,
                    ControllerSet::Sync,
                )
                    .chain(),
            )
            .add_systems(Startup, spawn_player)
            .add_systems(Update, read_input.in_set(ControllerSet::Input))
            .add_systems(Update, apply_controller.in_set(ControllerSet::Simulate))
            .add_systems(Update, finish_rolls.in_set(ControllerSet::Sequence))
            .add_systems(Update, sync_player_transform.in_set(ControllerSet::Sync));

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_level);
    }
}
