//! Movement domain: player bootstrap.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::interaction::SensorOverlaps;
use crate::movement::{
    ControllerHits, GameLayer, PLAYER_CAPSULE_LENGTH, PLAYER_CAPSULE_RADIUS, PLAYER_SPAWN, Player,
    PlayerController,
};
use crate::sprites::AnimationController;

/// Spawns the single player entity. It lives for the whole session and is
/// only ever repositioned, never respawned as a new entity.
pub(crate) fn spawn_player(mut commands: Commands, existing_player: Query<Entity, With<Player>>) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    info!("Spawning player at {:?}", PLAYER_SPAWN);

    commands.spawn((
        // Identity & controller
        (
            Player,
            PlayerController::new(PLAYER_SPAWN),
            ControllerHits::default(),
            SensorOverlaps::default(),
            AnimationController::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(
                PLAYER_CAPSULE_RADIUS * 2.0,
                PLAYER_CAPSULE_LENGTH + PLAYER_CAPSULE_RADIUS * 2.0,
            )),
            ..default()
        },
        Transform::from_xyz(PLAYER_SPAWN.x, PLAYER_SPAWN.y, 1.0),
        // Physics: moved only by the kinematic sweep
        (
            RigidBody::Kinematic,
            Collider::capsule(PLAYER_CAPSULE_RADIUS, PLAYER_CAPSULE_LENGTH),
            CollisionLayers::new(
                GameLayer::Player,
                [
                    GameLayer::Ground,
                    GameLayer::Wall,
                    GameLayer::Crate,
                    GameLayer::Sensor,
                ],
            ),
        ),
    ));
}
