//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::sweep::ControllerHit;

/// Capsule radius of the player collider.
pub const PLAYER_CAPSULE_RADIUS: f32 = 12.0;
/// Length of the capsule's straight segment (total height is this plus two radii).
pub const PLAYER_CAPSULE_LENGTH: f32 = 24.0;
/// Where the player appears at level start.
pub const PLAYER_SPAWN: Vec2 = Vec2::new(-300.0, -140.0);

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms, ladder tops)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Crates and other pushable props
    Crate,
    /// Sensors (ledges, ladders, coins, kill zones) - never block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Unit sign along the horizontal axis.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Contacts reported by the last kinematic sweep, consumed by interaction hooks.
#[derive(Component, Debug, Default)]
pub struct ControllerHits(pub Vec<ControllerHit>);

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;
