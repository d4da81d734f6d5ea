//! Movement domain: the kinematic sweep seam.
//!
//! The controller never talks to the physics backend directly. It asks a
//! [`KinematicSweep`] to move the capsule by a displacement and gets back the
//! reached position, whether it ended on ground, and every contact made on
//! the way. The avian implementation lives in `systems::collisions`.

use bevy::prelude::*;

/// Minimum upward normal component for a contact to count as ground.
pub const GROUND_NORMAL_MIN_Y: f32 = 0.7;

/// A contact made while sweeping the character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerHit {
    /// The collider that was hit.
    pub entity: Entity,
    /// Surface normal of the hit collider, pointing towards the character.
    pub normal: Vec2,
    /// Normalized direction of the full displacement requested this tick.
    pub move_direction: Vec2,
}

/// Result of one sweep.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SweepOutcome {
    pub position: Vec2,
    pub grounded: bool,
    pub hits: Vec<ControllerHit>,
}

/// Moves a capsule through the world, stopping early on obstruction.
///
/// Motion is never pushed back; a blocked axis simply yields less (or zero)
/// displacement along it.
pub trait KinematicSweep {
    fn sweep(&mut self, from: Vec2, displacement: Vec2) -> SweepOutcome;
}
