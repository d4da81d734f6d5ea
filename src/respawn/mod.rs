//! Respawn domain: fade out, freeze, relocate, fade in, unfreeze.

mod events;
mod sequencer;
mod systems;

#[cfg(test)]
mod tests;

pub use events::RespawnRequestedEvent;
pub use sequencer::{RespawnDirective, RespawnError, RespawnPhase, RespawnSequencer, RespawnTiming};

use bevy::prelude::*;

use crate::movement::ControllerSet;
use crate::respawn::systems::{drive_respawn_sequence, start_respawn};

pub struct RespawnPlugin;

impl Plugin for RespawnPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RespawnSequencer>()
            .add_message::<RespawnRequestedEvent>()
            .add_systems(
                Update,
                (start_respawn, drive_respawn_sequence)
                    .chain()
                    .in_set(ControllerSet::Sequence),
            );
    }
}
