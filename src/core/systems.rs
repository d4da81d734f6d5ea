//! Core domain: camera systems.

use bevy::prelude::*;

use crate::core::CameraFollow;
use crate::movement::Player;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Eases the camera toward the player, keeping its own depth.
pub(crate) fn follow_player(
    time: Res<Time>,
    follow: Res<CameraFollow>,
    player_query: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut camera_query: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };
    let Ok(mut camera) = camera_query.single_mut() else {
        return;
    };

    let target = player.translation.truncate().extend(camera.translation.z);
    let t = (follow.smoothing * time.delta_secs()).min(1.0);
    camera.translation = camera.translation.lerp(target, t);
}
