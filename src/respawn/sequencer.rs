//! Respawn domain: the timed fade/freeze/relocate sequence.
//!
//! The sequence is a small state machine resumed once per frame. It only
//! waits at the two fades and the hold in between; everything else happens
//! on the frame the awaited condition completes.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ui::Fade;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RespawnError {
    #[error("respawn already in progress ({0:?})")]
    InProgress(RespawnPhase),
}

/// Durations of the respawn sequence, in seconds.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RespawnTiming {
    pub fade_to_opaque: f32,
    pub freeze_delay: f32,
    pub fade_from_opaque: f32,
}

impl Default for RespawnTiming {
    fn default() -> Self {
        Self {
            fade_to_opaque: 0.5,
            freeze_delay: 0.5,
            fade_from_opaque: 2.0,
        }
    }
}

/// Where the sequence is suspended.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RespawnPhase {
    #[default]
    Idle,
    /// Screen is fading to opaque; the player still has control.
    FadingOut { target: Vec2 },
    /// Player is frozen behind the opaque screen.
    Holding { target: Vec2, remaining: f32 },
    /// Player has been moved; screen is clearing.
    FadingIn,
}

/// Side effects the sequence asks the world to perform, in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RespawnDirective {
    BeginFade { fade: Fade, duration: f32 },
    Freeze,
    Relocate(Vec2),
    Unfreeze,
}

#[derive(Resource, Debug, Default)]
pub struct RespawnSequencer {
    pub timing: RespawnTiming,
    phase: RespawnPhase,
}

impl RespawnSequencer {
    pub fn phase(&self) -> RespawnPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase != RespawnPhase::Idle
    }

    /// Starts a respawn at `target`. A sequence that is already running is
    /// never restarted or queued.
    pub fn request(&mut self, target: Vec2) -> Result<Vec<RespawnDirective>, RespawnError> {
        if self.is_running() {
            return Err(RespawnError::InProgress(self.phase));
        }

        self.phase = RespawnPhase::FadingOut { target };
        Ok(vec![RespawnDirective::BeginFade {
            fade: Fade::ToOpaque,
            duration: self.timing.fade_to_opaque,
        }])
    }

    /// Resumes the sequence. `finished` is the fade that completed this
    /// frame, if any.
    pub fn advance(&mut self, dt: f32, finished: Option<Fade>) -> Vec<RespawnDirective> {
        match self.phase {
            RespawnPhase::Idle => Vec::new(),
            RespawnPhase::FadingOut { target } => {
                if finished != Some(Fade::ToOpaque) {
                    return Vec::new();
                }
                self.phase = RespawnPhase::Holding {
                    target,
                    remaining: self.timing.freeze_delay,
                };
                vec![RespawnDirective::Freeze]
            }
            RespawnPhase::Holding { target, remaining } => {
                let remaining = remaining - dt;
                if remaining > 0.0 {
                    self.phase = RespawnPhase::Holding { target, remaining };
                    return Vec::new();
                }
                self.phase = RespawnPhase::FadingIn;
                vec![
                    RespawnDirective::Relocate(target),
                    RespawnDirective::BeginFade {
                        fade: Fade::FromOpaque,
                        duration: self.timing.fade_from_opaque,
                    },
                ]
            }
            RespawnPhase::FadingIn => {
                if finished != Some(Fade::FromOpaque) {
                    return Vec::new();
                }
                self.phase = RespawnPhase::Idle;
                vec![RespawnDirective::Unfreeze]
            }
        }
    }
}
