//! Movement domain: the player controller.
//!
//! [`PlayerController`] owns everything the character is: position,
//! velocities, facing, the active [`Locomotion`] mode, ladder/push flags and
//! coins. Systems feed it input once per frame through [`PlayerController::tick`]
//! and collaborators (sensors, animation clips, respawn) go through the
//! transition methods, which reject requests the current mode does not accept.

use bevy::prelude::*;
use thiserror::Error;

use crate::movement::components::Facing;
use crate::movement::resources::{ControllerTuning, MovementInput};
use crate::movement::state::{Locomotion, Transition};
use crate::movement::sweep::{ControllerHit, GROUND_NORMAL_MIN_Y, KinematicSweep};

/// Vertical component below which a contact's move direction means the
/// character is landing on top of the object.
const STANDING_ON_TOP_Y: f32 = -0.3;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ControllerError {
    #[error("cannot {transition:?} while {from}")]
    Rejected {
        transition: Transition,
        from: Locomotion,
    },
    #[error("cannot climb to the ladder top while off the ladder")]
    NotOnLadder,
    #[error("cannot relocate while {0}; freeze first")]
    NotFrozen(Locomotion),
    #[error("anchor {0:?} no longer exists")]
    MissingAnchor(Entity),
}

/// Things that happened during a tick that collaborators care about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControllerEvent {
    RollStarted { direction: Facing },
    Jumped,
    EnteredLadder,
    Landed,
}

#[derive(Debug, Default)]
pub struct TickReport {
    pub hits: Vec<ControllerHit>,
    pub events: Vec<ControllerEvent>,
}

/// States that can be forced from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForcedState {
    Normal,
    Freeze,
}

/// Whether a pushable target can be moved at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushTarget {
    Movable,
    Immovable,
}

#[derive(Component, Debug, Clone)]
pub struct PlayerController {
    position: Vec2,
    velocity: Vec2,
    vertical_velocity: f32,
    facing: Facing,
    locomotion: Locomotion,
    grounded: bool,
    is_jumping: bool,
    on_ladder: bool,
    can_climb_ladder: bool,
    is_pushing: bool,
    coins: u32,
}

impl PlayerController {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            vertical_velocity: 0.0,
            facing: Facing::Right,
            locomotion: Locomotion::Normal,
            grounded: false,
            is_jumping: false,
            on_ladder: false,
            can_climb_ladder: false,
            is_pushing: false,
            coins: 0,
        }
    }

    /// Advances one simulation step.
    ///
    /// Nothing moves while hanging from a ledge, climbing up a ladder top or
    /// frozen. Contacts made by the sweep are returned for the interaction
    /// hooks to process.
    pub fn tick(
        &mut self,
        input: &MovementInput,
        tuning: &ControllerTuning,
        dt: f32,
        body: &mut impl KinematicSweep,
    ) -> TickReport {
        let mut report = TickReport::default();

        if input.push_released {
            self.is_pushing = false;
        }

        if !self.locomotion.integrates() {
            return report;
        }

        match self.locomotion {
            Locomotion::Normal => {
                self.calculate_movement(input, tuning, dt, body, &mut report);
                self.update_facing(input.axis.x);
                if input.roll_pressed && !self.on_ladder {
                    if let Err(err) = self.begin_roll(&mut report) {
                        debug!("Roll ignored: {}", err);
                    }
                }
            }
            Locomotion::Rolling { direction } => {
                self.apply_roll(direction, tuning, dt, body, &mut report);
            }
            _ => {}
        }

        report
    }

    fn calculate_movement(
        &mut self,
        input: &MovementInput,
        tuning: &ControllerTuning,
        dt: f32,
        body: &mut impl KinematicSweep,
        report: &mut TickReport,
    ) {
        if self.grounded {
            self.is_jumping = false;
            self.on_ladder = false;
            self.velocity.x = input.axis.x * tuning.move_speed;

            // One step of gravity keeps the sweep probing the floor
            self.vertical_velocity = tuning.gravity;

            if input.jump_pressed {
                self.vertical_velocity = tuning.jump_impulse;
                self.is_jumping = true;
                report.events.push(ControllerEvent::Jumped);
            }

            if input.climb_pressed && self.can_climb_ladder {
                self.on_ladder = true;
                self.can_climb_ladder = false;
                self.is_jumping = false;
                report.events.push(ControllerEvent::EnteredLadder);
            }
        } else if !self.on_ladder {
            self.vertical_velocity += tuning.gravity;
        }

        if self.on_ladder {
            self.vertical_velocity = 0.0;
            self.velocity = Vec2::new(0.0, input.axis.y * tuning.ladder_climb_speed);
        } else {
            self.velocity.y = self.vertical_velocity;
        }

        self.integrate(dt, body, report);
    }

    fn apply_roll(
        &mut self,
        direction: Facing,
        tuning: &ControllerTuning,
        dt: f32,
        body: &mut impl KinematicSweep,
        report: &mut TickReport,
    ) {
        if self.grounded {
            self.vertical_velocity = tuning.gravity;
        } else {
            self.vertical_velocity += tuning.gravity;
        }
        self.velocity = Vec2::new(direction.sign() * tuning.roll_speed, self.vertical_velocity);

        self.integrate(dt, body, report);
    }

    fn integrate(&mut self, dt: f32, body: &mut impl KinematicSweep, report: &mut TickReport) {
        let was_grounded = self.grounded;
        let outcome = body.sweep(self.position, self.velocity * dt);

        self.position = outcome.position;
        self.grounded = outcome.grounded;
        report.hits = outcome.hits;

        if self.grounded && !was_grounded {
            report.events.push(ControllerEvent::Landed);
        }
    }

    fn update_facing(&mut self, horizontal: f32) {
        if self.on_ladder || self.grabbed_ledge() {
            return;
        }

        if horizontal > 0.0 {
            self.facing = Facing::Right;
        } else if horizontal < 0.0 {
            self.facing = Facing::Left;
        }
    }

    fn begin_roll(&mut self, report: &mut TickReport) -> Result<(), ControllerError> {
        self.check(Transition::BeginRoll)?;

        let direction = self.facing;
        self.locomotion = Locomotion::Rolling { direction };
        report.events.push(ControllerEvent::RollStarted { direction });
        Ok(())
    }

    fn check(&self, transition: Transition) -> Result<(), ControllerError> {
        if self.locomotion.accepts(transition) {
            Ok(())
        } else {
            Err(ControllerError::Rejected {
                transition,
                from: self.locomotion,
            })
        }
    }

    /// Ends a roll once its clip has finished.
    pub fn finish_roll(&mut self) -> Result<(), ControllerError> {
        self.check(Transition::FinishRoll)?;
        self.locomotion = Locomotion::Normal;
        Ok(())
    }

    /// Forces `Normal` (unfreeze) or `Freeze`.
    pub fn force_state(&mut self, state: ForcedState) -> Result<(), ControllerError> {
        match state {
            ForcedState::Freeze => {
                self.check(Transition::Freeze)?;
                self.locomotion = Locomotion::Frozen;
            }
            ForcedState::Normal => {
                self.check(Transition::Unfreeze)?;
                self.locomotion = Locomotion::Normal;
            }
        }
        Ok(())
    }

    /// Teleports a frozen character and clears any motion it carried.
    pub fn respawn_at(&mut self, target: Vec2) -> Result<(), ControllerError> {
        if self.locomotion != Locomotion::Frozen {
            return Err(ControllerError::NotFrozen(self.locomotion));
        }

        self.position = target;
        self.velocity = Vec2::ZERO;
        self.vertical_velocity = 0.0;
        self.grounded = false;
        self.is_jumping = false;
        self.on_ladder = false;
        self.is_pushing = false;
        Ok(())
    }

    /// Hangs from a ledge at `hand_anchor`, remembering the ledge for the climb-up.
    ///
    /// Grabbing from a ladder lets go of the ladder.
    pub fn grab_ledge(&mut self, hand_anchor: Vec2, ledge: Entity) -> Result<(), ControllerError> {
        self.check(Transition::GrabLedge)?;

        self.locomotion = Locomotion::LedgeHang { ledge };
        self.position = hand_anchor;
        self.velocity = Vec2::ZERO;
        self.vertical_velocity = 0.0;
        self.is_jumping = false;
        self.on_ladder = false;
        Ok(())
    }

    /// Climbs onto the ledge being held.
    ///
    /// `stand_up_of` resolves the recorded ledge to its stand-up position.
    pub fn climb_up_from_ledge<F>(&mut self, stand_up_of: F) -> Result<Vec2, ControllerError>
    where
        F: FnOnce(Entity) -> Option<Vec2>,
    {
        let Locomotion::LedgeHang { ledge } = self.locomotion else {
            return Err(ControllerError::Rejected {
                transition: Transition::ClimbLedge,
                from: self.locomotion,
            });
        };

        let stand_up = stand_up_of(ledge).ok_or(ControllerError::MissingAnchor(ledge))?;
        self.position = stand_up;
        self.grounded = false;
        self.locomotion = Locomotion::Normal;
        Ok(stand_up)
    }

    /// Marks that a ladder is within reach.
    pub fn enter_ladder_proximity(&mut self) {
        self.can_climb_ladder = true;
    }

    pub fn leave_ladder_proximity(&mut self) {
        self.can_climb_ladder = false;
    }

    /// First phase of the ladder-top climb: stop integrating and wait for the clip.
    pub fn begin_ladder_climb_up(&mut self, ladder: Entity) -> Result<(), ControllerError> {
        if !self.on_ladder {
            return Err(ControllerError::NotOnLadder);
        }
        self.check(Transition::BeginLadderClimbUp)?;

        self.locomotion = Locomotion::LadderClimbUp { ladder };
        self.velocity = Vec2::ZERO;
        Ok(())
    }

    /// Second phase, once the climb-up clip has finished.
    pub fn complete_ladder_climb_up<F>(&mut self, stand_up_of: F) -> Result<Vec2, ControllerError>
    where
        F: FnOnce(Entity) -> Option<Vec2>,
    {
        let Locomotion::LadderClimbUp { ladder } = self.locomotion else {
            return Err(ControllerError::Rejected {
                transition: Transition::CompleteLadderClimbUp,
                from: self.locomotion,
            });
        };

        let stand_up = stand_up_of(ladder).ok_or(ControllerError::MissingAnchor(ladder))?;
        self.on_ladder = false;
        self.position = stand_up;
        self.grounded = false;
        self.locomotion = Locomotion::Normal;
        Ok(stand_up)
    }

    /// Reacts to the sweep touching a pushable object.
    ///
    /// Returns the horizontal velocity to give the object, if any. The
    /// character's own motion is never affected.
    pub fn push_contact(
        &mut self,
        hit: &ControllerHit,
        target: PushTarget,
        push_held: bool,
        tuning: &ControllerTuning,
    ) -> Option<f32> {
        if target == PushTarget::Immovable {
            return None;
        }
        if hit.move_direction.y < STANDING_ON_TOP_Y || hit.normal.y >= GROUND_NORMAL_MIN_Y {
            return None;
        }

        if push_held {
            self.is_pushing = true;
            Some(hit.move_direction.x * tuning.push_force)
        } else {
            self.is_pushing = false;
            None
        }
    }

    pub fn add_coin(&mut self) -> u32 {
        self.coins += 1;
        self.coins
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    pub fn horizontal_speed(&self) -> f32 {
        self.velocity.x.abs()
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn locomotion(&self) -> Locomotion {
        self.locomotion
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn is_jumping(&self) -> bool {
        self.is_jumping
    }

    pub fn is_pushing(&self) -> bool {
        self.is_pushing
    }

    pub fn on_ladder(&self) -> bool {
        self.on_ladder
    }

    pub fn can_climb_ladder(&self) -> bool {
        self.can_climb_ladder
    }

    pub fn grabbed_ledge(&self) -> bool {
        matches!(self.locomotion, Locomotion::LedgeHang { .. })
    }

    pub fn is_frozen(&self) -> bool {
        self.locomotion == Locomotion::Frozen
    }

    pub fn coins(&self) -> u32 {
        self.coins
    }
}
