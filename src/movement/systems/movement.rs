//! Movement domain: per-frame controller stepping and transform sync.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::controller::ControllerEvent;
use crate::movement::systems::collisions::{SpatialSweep, blocking_filter};
use crate::movement::{ControllerHits, ControllerTuning, MovementInput, Player, PlayerController};
use crate::sprites::{Clip, ClipFinishedEvent, PlayClipEvent};

pub(crate) fn apply_controller(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<ControllerTuning>,
    spatial_query: SpatialQuery,
    mut clip_events: MessageWriter<PlayClipEvent>,
    mut query: Query<
        (Entity, &Collider, &mut PlayerController, &mut ControllerHits),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (entity, collider, mut controller, mut hits) in &mut query {
        let filter = blocking_filter(entity);
        let mut body = SpatialSweep {
            spatial_query: &spatial_query,
            shape: collider,
            filter: &filter,
        };

        let report = controller.tick(&input, &tuning, dt, &mut body);

        for event in &report.events {
            match event {
                ControllerEvent::RollStarted { direction } => {
                    debug!("Roll started towards {:?}", direction);
                    clip_events.write(PlayClipEvent {
                        entity,
                        clip: Clip::Roll,
                    });
                }
                ControllerEvent::Jumped => {
                    debug!("Jump: vertical_velocity={}", controller.vertical_velocity());
                }
                ControllerEvent::EnteredLadder => debug!("Entered ladder"),
                ControllerEvent::Landed => debug!("Landed at {:?}", controller.position()),
            }
        }

        hits.0 = report.hits;
    }
}

/// Returns control once the roll clip has played out.
pub(crate) fn finish_rolls(
    mut clip_finished: MessageReader<ClipFinishedEvent>,
    mut query: Query<&mut PlayerController, With<Player>>,
) {
    for event in clip_finished.read() {
        if event.clip != Clip::Roll {
            continue;
        }
        let Ok(mut controller) = query.get_mut(event.entity) else {
            continue;
        };

        // A grab or freeze during the roll already replaced it
        if let Err(err) = controller.finish_roll() {
            debug!("Roll clip finished but {}", err);
        }
    }
}

/// Writes the controller's position into the transform; nothing else moves the player.
pub(crate) fn sync_player_transform(
    mut query: Query<(&PlayerController, &mut Transform), With<Player>>,
) {
    for (controller, mut transform) in &mut query {
        let position = controller.position();
        transform.translation.x = position.x;
        transform.translation.y = position.y;
    }
}
