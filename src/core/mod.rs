//! Core domain: camera setup and framing.

mod systems;

use bevy::prelude::*;

use crate::core::systems::{follow_player, setup_camera};
use crate::movement::ControllerSet;

/// How quickly the camera catches up with the player, per second.
#[derive(Resource, Debug)]
pub struct CameraFollow {
    pub smoothing: f32,
}

impl Default for CameraFollow {
    fn default() -> Self {
        Self { smoothing: 6.0 }
    }
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraFollow>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, follow_player.after(ControllerSet::Sync));
    }
}
