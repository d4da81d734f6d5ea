//! Interaction domain: crates, ledges, ladders, coins and kill zones.

mod components;
mod events;
mod systems;


pub use components::{Coin, KillZone, LadderTop, LadderZone, Ledge, Pushable, SensorOverlaps};
pub use events::CoinsChangedEvent;

use bevy::prelude::*;

use crate::interaction::systems::{
    climb_ladder_tops, climb_ledges, collect_coins, complete_ladder_climbs, grab_ledges,
    push_crates, track_ladder_proximity, track_sensor_overlaps, trigger_kill_zones,
};
use crate::movement::ControllerSet;

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<CoinsChangedEvent>()
            .add_systems(
                Update,
                (
                    push_crates,
                    climb_ledges,
                    track_sensor_overlaps,
                    grab_ledges,
                    track_ladder_proximity,
                    climb_ladder_tops,
                    collect_coins,
                    trigger_kill_zones,
                )
                    .chain()
                    .in_set(ControllerSet::Interact),
            )
            .add_systems(
                Update,
                complete_ladder_climbs.in_set(ControllerSet::Sequence),
            );
    }
}
