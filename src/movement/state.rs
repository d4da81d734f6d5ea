//! Movement domain: locomotion modes and the transition acceptance table.
//!
//! Ledge hanging and the ladder climb-up are full members of [`Locomotion`]
//! rather than flags checked around it, so a request can only land when
//! [`Locomotion::accepts`] says the current mode allows it.

use std::fmt;

use bevy::prelude::*;

use crate::movement::components::Facing;

/// The single active locomotion mode of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locomotion {
    /// Grounded/air movement, ladder mode, facing updates.
    #[default]
    Normal,
    /// Committed dash along the facing recorded at entry.
    Rolling { direction: Facing },
    /// Control suspended (respawn). The integrator does not run.
    Frozen,
    /// Anchored to a ledge's hand position until climbing up.
    LedgeHang { ledge: Entity },
    /// Playing the ladder climb-up clip; completes at the ladder top's stand-up point.
    LadderClimbUp { ladder: Entity },
}

/// Requests that change [`Locomotion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    BeginRoll,
    FinishRoll,
    Freeze,
    Unfreeze,
    GrabLedge,
    ClimbLedge,
    BeginLadderClimbUp,
    CompleteLadderClimbUp,
}

impl Locomotion {
    /// Whether `transition` may be applied from this mode.
    ///
    /// | from \ request   | roll | finish roll | freeze | unfreeze | grab | climb ledge | begin ladder top | complete ladder top |
    /// |------------------|------|-------------|--------|----------|------|-------------|------------------|---------------------|
    /// | Normal           | yes  |             | yes    |          | yes  |             | yes              |                     |
    /// | Rolling          |      | yes         | yes    | yes      | yes  |             |                  |                     |
    /// | Frozen           |      |             | yes    | yes      |      |             |                  |                     |
    /// | LedgeHang        |      |             | yes    |          |      | yes         |                  |                     |
    /// | LadderClimbUp    |      |             | yes    |          |      |             |                  | yes                 |
    ///
    /// Freeze overrides everything since it is only requested by respawn.
    pub fn accepts(&self, transition: Transition) -> bool {
        use Transition as T;

        match (self, transition) {
            (_, T::Freeze) => true,
            (Locomotion::Frozen | Locomotion::Rolling { .. }, T::Unfreeze) => true,
            (Locomotion::Normal, T::BeginRoll) => true,
            (Locomotion::Rolling { .. }, T::FinishRoll) => true,
            (Locomotion::Normal | Locomotion::Rolling { .. }, T::GrabLedge) => true,
            (Locomotion::LedgeHang { .. }, T::ClimbLedge) => true,
            (Locomotion::Normal, T::BeginLadderClimbUp) => true,
            (Locomotion::LadderClimbUp { .. }, T::CompleteLadderClimbUp) => true,
            _ => false,
        }
    }

    /// Whether the kinematic sweep runs in this mode.
    pub fn integrates(&self) -> bool {
        matches!(self, Locomotion::Normal | Locomotion::Rolling { .. })
    }
}

impl fmt::Display for Locomotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locomotion::Normal => write!(f, "Normal"),
            Locomotion::Rolling { .. } => write!(f, "Rolling"),
            Locomotion::Frozen => write!(f, "Frozen"),
            Locomotion::LedgeHang { .. } => write!(f, "LedgeHang"),
            Locomotion::LadderClimbUp { .. } => write!(f, "LadderClimbUp"),
        }
    }
}
