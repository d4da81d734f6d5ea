//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Movement constants, loaded once at startup and never mutated afterwards.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ControllerTuning {
    /// Ground speed at full horizontal input (units per second).
    pub move_speed: f32,
    /// Vertical speed on a ladder at full vertical input.
    pub ladder_climb_speed: f32,
    /// Vertical velocity set by a grounded jump.
    pub jump_impulse: f32,
    /// Added to vertical velocity once per airborne tick (negative pulls down).
    /// There is no terminal velocity.
    pub gravity: f32,
    /// Speed imparted on a pushed crate along the contact's horizontal axis.
    pub push_force: f32,
    /// Fixed dash speed while rolling.
    pub roll_speed: f32,
    /// Length of the roll clip; the roll ends when it finishes.
    pub roll_duration: f32,
    /// Length of the ladder climb-up clip.
    pub ladder_climb_up_duration: f32,
}

impl Default for ControllerTuning {
    fn default() -> Self {
        Self {
            move_speed: 320.0,
            ladder_climb_speed: 160.0,
            jump_impulse: 620.0,
            gravity: -30.0,
            push_force: 240.0,
            roll_speed: 480.0,
            roll_duration: 0.45,
            ladder_climb_up_duration: 0.6,
        }
    }
}

impl ControllerTuning {
    /// Apex height of a standing jump at the given tick length.
    ///
    /// Gravity is applied per tick, so the result depends on the tick rate.
    pub fn jump_apex(&self, dt: f32) -> f32 {
        if self.gravity >= 0.0 {
            return f32::INFINITY;
        }
        let impulse = f64::from(self.jump_impulse);
        let gravity = f64::from(self.gravity);

        // Sum of v, v+g, v+2g, ... over the n ticks that are still rising
        let rising_ticks = (impulse / -gravity).ceil().max(0.0);
        let height = rising_ticks * impulse + gravity * rising_ticks * (rising_ticks - 1.0) / 2.0;
        (height * f64::from(dt)) as f32
    }
}

/// Debounced control signals sampled once per frame.
#[derive(Resource, Debug, Default, Clone)]
pub struct MovementInput {
    /// Horizontal (x) and vertical (y) axes, each in [-1, 1].
    pub axis: Vec2,
    pub jump_pressed: bool,
    pub roll_pressed: bool,
    /// Climb edge: starts ladder mode and climbs up from a ledge.
    pub climb_pressed: bool,
    pub push_held: bool,
    pub push_released: bool,
}
