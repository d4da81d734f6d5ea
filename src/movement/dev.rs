//! Movement domain: debug-only test level exercising every interaction.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::interaction::{Coin, KillZone, LadderTop, LadderZone, Ledge, Pushable};
use crate::movement::{GameLayer, Ground, PLAYER_SPAWN, Wall};

/// Trigger volume that reports collisions with the player only.
fn sensor() -> (Sensor, CollisionEventsEnabled, CollisionLayers) {
    (
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
    )
}

pub(crate) fn spawn_test_level(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(
        GameLayer::Ground,
        [GameLayer::Player, GameLayer::Crate],
    );
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player, GameLayer::Crate]);

    // Ground (top surface at y = -180)
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(1240.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -200.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(1240.0, 40.0),
        ground_layers,
    ));

    for x in [-640.0, 640.0] {
        commands.spawn((
            Wall,
            Sprite {
                color: wall_color,
                custom_size: Some(Vec2::new(40.0, 600.0)),
                ..default()
            },
            Transform::from_xyz(x, 80.0, 0.0),
            RigidBody::Static,
            Collider::rectangle(40.0, 600.0),
            wall_layers,
        ));
    }

    // Block with a grabbable left ledge (top surface at y = -60)
    commands.spawn((
        Wall,
        Sprite {
            color: platform_color,
            custom_size: Some(Vec2::new(200.0, 120.0)),
            ..default()
        },
        Transform::from_xyz(150.0, -120.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(200.0, 120.0),
        wall_layers,
    ));
    commands.spawn((
        Ledge {
            hand_anchor: Vec2::new(36.0, -84.0),
            stand_up: Vec2::new(76.0, -34.0),
        },
        Transform::from_xyz(44.0, -70.0, 0.0),
        Collider::rectangle(16.0, 24.0),
        sensor(),
    ));

    // High platform reached by the ladder (top surface at y = 70)
    commands.spawn((
        Ground,
        Sprite {
            color: platform_color,
            custom_size: Some(Vec2::new(160.0, 20.0)),
            ..default()
        },
        Transform::from_xyz(-70.0, 60.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(160.0, 20.0),
        ground_layers,
    ));

    // Ladder running from the ground to the high platform
    commands.spawn((
        LadderZone,
        Sprite {
            color: Color::srgba(0.6, 0.45, 0.2, 0.6),
            custom_size: Some(Vec2::new(28.0, 250.0)),
            ..default()
        },
        Transform::from_xyz(-172.0, -55.0, -0.5),
        Collider::rectangle(40.0, 250.0),
        sensor(),
    ));
    commands.spawn((
        LadderTop {
            stand_up: Vec2::new(-120.0, 96.0),
        },
        Transform::from_xyz(-172.0, 72.0, 0.0),
        Collider::rectangle(40.0, 8.0),
        sensor(),
    ));

    // A crate that can be pushed and one that cannot
    for (x, body, color) in [
        (330.0, RigidBody::Dynamic, Color::srgb(0.65, 0.5, 0.3)),
        (470.0, RigidBody::Kinematic, Color::srgb(0.35, 0.35, 0.35)),
    ] {
        commands.spawn((
            Pushable,
            Sprite {
                color,
                custom_size: Some(Vec2::new(48.0, 48.0)),
                ..default()
            },
            Transform::from_xyz(x, -156.0, 0.0),
            body,
            Collider::rectangle(48.0, 48.0),
            LockedAxes::ROTATION_LOCKED,
            CollisionLayers::new(
                GameLayer::Crate,
                [
                    GameLayer::Ground,
                    GameLayer::Wall,
                    GameLayer::Player,
                    GameLayer::Crate,
                ],
            ),
        ));
    }

    for position in [
        Vec2::new(-400.0, -150.0),
        Vec2::new(-250.0, -150.0),
        Vec2::new(-60.0, 100.0),
        Vec2::new(150.0, -30.0),
    ] {
        commands.spawn((
            Coin,
            Sprite {
                color: Color::srgb(0.9, 0.75, 0.2),
                custom_size: Some(Vec2::new(12.0, 12.0)),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.0),
            Collider::circle(8.0),
            sensor(),
        ));
    }

    // Spikes next to the right wall, and a catch-all below the level
    commands.spawn((
        KillZone {
            respawn_point: PLAYER_SPAWN,
        },
        Sprite {
            color: Color::srgb(0.8, 0.15, 0.15),
            custom_size: Some(Vec2::new(60.0, 10.0)),
            ..default()
        },
        Transform::from_xyz(580.0, -175.0, 0.0),
        Collider::rectangle(60.0, 10.0),
        sensor(),
    ));
    commands.spawn((
        KillZone {
            respawn_point: PLAYER_SPAWN,
        },
        Transform::from_xyz(0.0, -600.0, 0.0),
        Collider::rectangle(4000.0, 40.0),
        sensor(),
    ));
}
