//! Interaction domain: sensor and prop components.

use bevy::prelude::*;

/// A prop the player can push while holding the push action.
#[derive(Component, Debug)]
pub struct Pushable;

/// Ledge sensor. Entering it hangs the player at `hand_anchor`; climbing up
/// moves them to `stand_up`. Both are world positions.
#[derive(Component, Debug, Clone, Copy)]
pub struct Ledge {
    pub hand_anchor: Vec2,
    pub stand_up: Vec2,
}

/// Area in which the player may start climbing a ladder.
#[derive(Component, Debug)]
pub struct LadderZone;

/// Trigger at the top of a ladder; reaching it while climbing plays the
/// climb-up clip and ends at `stand_up`.
#[derive(Component, Debug, Clone, Copy)]
pub struct LadderTop {
    pub stand_up: Vec2,
}

#[derive(Component, Debug)]
pub struct Coin;

/// Touching this sends the player back to `respawn_point`.
#[derive(Component, Debug, Clone, Copy)]
pub struct KillZone {
    pub respawn_point: Vec2,
}

/// Sensors overlapping the player, with what changed this frame.
#[derive(Component, Debug, Default)]
pub struct SensorOverlaps {
    current: Vec<Entity>,
    entered: Vec<Entity>,
    exited: Vec<Entity>,
}

impl SensorOverlaps {
    /// Applies this frame's collision starts and ends.
    ///
    /// A sensor touched and left within the same frame shows up in both
    /// `entered` and `exited` but not in `current`.
    pub fn apply(&mut self, started: &[Entity], ended: &[Entity]) {
        self.entered.clear();
        self.exited.clear();

        for &entity in started {
            if !self.current.contains(&entity) {
                self.current.push(entity);
                self.entered.push(entity);
            }
        }
        for &entity in ended {
            if let Some(index) = self.current.iter().position(|e| *e == entity) {
                self.current.swap_remove(index);
                self.exited.push(entity);
            }
        }
    }

    pub fn current(&self) -> &[Entity] {
        &self.current
    }

    pub fn entered(&self) -> &[Entity] {
        &self.entered
    }

    pub fn exited(&self) -> &[Entity] {
        &self.exited
    }
}
