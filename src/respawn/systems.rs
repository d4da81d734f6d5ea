//! Respawn domain: systems that feed the sequencer and apply its directives.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{ForcedState, Player, PlayerController};
use crate::respawn::events::RespawnRequestedEvent;
use crate::respawn::sequencer::{RespawnDirective, RespawnSequencer};
use crate::ui::{FadeFinishedEvent, FadeRequestEvent};

fn apply_directives(
    directives: Vec<RespawnDirective>,
    controller: &mut PlayerController,
    fade_requests: &mut MessageWriter<FadeRequestEvent>,
) {
    for directive in directives {
        let result = match directive {
            RespawnDirective::BeginFade { fade, duration } => {
                fade_requests.write(FadeRequestEvent { fade, duration });
                Ok(())
            }
            RespawnDirective::Freeze => controller.force_state(ForcedState::Freeze),
            RespawnDirective::Relocate(target) => controller.respawn_at(target),
            RespawnDirective::Unfreeze => controller.force_state(ForcedState::Normal),
        };

        match result {
            Ok(()) => debug!("Respawn step {:?}", directive),
            Err(err) => error!("Respawn step {:?} failed: {}", directive, err),
        }
    }
}

pub(crate) fn start_respawn(
    mut requests: MessageReader<RespawnRequestedEvent>,
    mut sequencer: ResMut<RespawnSequencer>,
    mut fade_requests: MessageWriter<FadeRequestEvent>,
    mut players: Query<&mut PlayerController, With<Player>>,
) {
    for request in requests.read() {
        let Ok(mut controller) = players.single_mut() else {
            warn!("Respawn requested with no player");
            continue;
        };

        match sequencer.request(request.target) {
            Ok(directives) => {
                info!("Respawning player at {:?}", request.target);
                apply_directives(directives, &mut controller, &mut fade_requests);
            }
            Err(err) => warn!("Ignoring respawn request: {}", err),
        }
    }
}

pub(crate) fn drive_respawn_sequence(
    time: Res<Time>,
    mut fade_finished: MessageReader<FadeFinishedEvent>,
    mut sequencer: ResMut<RespawnSequencer>,
    mut fade_requests: MessageWriter<FadeRequestEvent>,
    mut players: Query<&mut PlayerController, With<Player>>,
) {
    let finished = fade_finished.read().last().map(|event| event.fade);

    if !sequencer.is_running() {
        return;
    }

    let Ok(mut controller) = players.single_mut() else {
        return;
    };

    let directives = sequencer.advance(time.delta_secs(), finished);
    if !sequencer.is_running() && !directives.is_empty() {
        info!("Respawn complete at {:?}", controller.position());
    }
    apply_directives(directives, &mut controller, &mut fade_requests);
}
