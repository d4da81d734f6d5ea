//! Interaction domain: hooks that turn contacts and overlaps into controller transitions.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::interaction::components::{
    Coin, KillZone, LadderTop, LadderZone, Ledge, Pushable, SensorOverlaps,
};
use crate::interaction::events::CoinsChangedEvent;
use crate::movement::{
    ControllerHits, ControllerTuning, Locomotion, MovementInput, Player, PlayerController,
    PushTarget,
};
use crate::respawn::RespawnRequestedEvent;
use crate::sprites::{Clip, ClipFinishedEvent, PlayClipEvent};

/// Pushes crates the sweep ran into this frame.
pub(crate) fn push_crates(
    input: Res<MovementInput>,
    tuning: Res<ControllerTuning>,
    mut players: Query<(&ControllerHits, &mut PlayerController), With<Player>>,
    mut crates: Query<(&RigidBody, &mut LinearVelocity), With<Pushable>>,
) {
    for (hits, mut controller) in &mut players {
        for hit in &hits.0 {
            let Ok((body, mut velocity)) = crates.get_mut(hit.entity) else {
                continue;
            };

            let target = if matches!(body, RigidBody::Dynamic) {
                PushTarget::Movable
            } else {
                PushTarget::Immovable
            };

            if let Some(push) = controller.push_contact(hit, target, input.push_held, &tuning) {
                velocity.x = push;
            }
        }
    }
}

/// Feeds sensor collision starts and ends into the player's overlap set.
pub(crate) fn track_sensor_overlaps(
    mut collision_start: MessageReader<CollisionStart>,
    mut collision_end: MessageReader<CollisionEnd>,
    sensors: Query<(), With<Sensor>>,
    mut players: Query<(Entity, &mut SensorOverlaps), With<Player>>,
) {
    let Ok((player, mut overlaps)) = players.single_mut() else {
        return;
    };

    // The sensor side of a pair that involves the player
    let sensor_of = |collider1: Entity, collider2: Entity| {
        if collider1 == player && sensors.contains(collider2) {
            Some(collider2)
        } else if collider2 == player && sensors.contains(collider1) {
            Some(collider1)
        } else {
            None
        }
    };

    let started: Vec<Entity> = collision_start
        .read()
        .filter_map(|event| sensor_of(event.collider1, event.collider2))
        .collect();
    let ended: Vec<Entity> = collision_end
        .read()
        .filter_map(|event| sensor_of(event.collider1, event.collider2))
        .collect();

    overlaps.apply(&started, &ended);
}

pub(crate) fn grab_ledges(
    ledges: Query<&Ledge>,
    mut players: Query<(&SensorOverlaps, &mut PlayerController), With<Player>>,
) {
    for (overlaps, mut controller) in &mut players {
        for &entity in overlaps.entered() {
            let Ok(ledge) = ledges.get(entity) else {
                continue;
            };

            match controller.grab_ledge(ledge.hand_anchor, entity) {
                Ok(()) => debug!("Grabbed ledge {:?} at {:?}", entity, ledge.hand_anchor),
                Err(err) => debug!("Ignored ledge {:?}: {}", entity, err),
            }
        }
    }
}

pub(crate) fn climb_ledges(
    input: Res<MovementInput>,
    ledges: Query<&Ledge>,
    mut players: Query<&mut PlayerController, With<Player>>,
) {
    if !input.climb_pressed {
        return;
    }

    for mut controller in &mut players {
        if !controller.grabbed_ledge() {
            continue;
        }

        match controller.climb_up_from_ledge(|ledge| ledges.get(ledge).ok().map(|l| l.stand_up)) {
            Ok(stand_up) => debug!("Climbed up from ledge to {:?}", stand_up),
            Err(err) => error!("Ledge climb failed: {}", err),
        }
    }
}

pub(crate) fn track_ladder_proximity(
    ladders: Query<(), With<LadderZone>>,
    mut players: Query<(&SensorOverlaps, &mut PlayerController), With<Player>>,
) {
    for (overlaps, mut controller) in &mut players {
        if overlaps.entered().iter().any(|&e| ladders.contains(e)) {
            controller.enter_ladder_proximity();
        }
        if overlaps.exited().iter().any(|&e| ladders.contains(e))
            && !overlaps.current().iter().any(|&e| ladders.contains(e))
        {
            controller.leave_ladder_proximity();
        }
    }
}

/// Starts the two-phase climb-up when a climbing player reaches a ladder top.
pub(crate) fn climb_ladder_tops(
    tops: Query<(), With<LadderTop>>,
    mut clip_events: MessageWriter<PlayClipEvent>,
    mut players: Query<(Entity, &SensorOverlaps, &mut PlayerController), With<Player>>,
) {
    for (player, overlaps, mut controller) in &mut players {
        if !controller.on_ladder() || controller.locomotion() != Locomotion::Normal {
            continue;
        }

        let Some(&top) = overlaps.current().iter().find(|&&e| tops.contains(e)) else {
            continue;
        };

        match controller.begin_ladder_climb_up(top) {
            Ok(()) => {
                debug!("Climbing up at ladder top {:?}", top);
                clip_events.write(PlayClipEvent {
                    entity: player,
                    clip: Clip::LadderClimbUp,
                });
            }
            Err(err) => warn!("Ladder climb-up rejected: {}", err),
        }
    }
}

/// Second phase of the ladder climb-up, driven by the clip finishing.
pub(crate) fn complete_ladder_climbs(
    mut clip_finished: MessageReader<ClipFinishedEvent>,
    tops: Query<&LadderTop>,
    mut players: Query<&mut PlayerController, With<Player>>,
) {
    for event in clip_finished.read() {
        if event.clip != Clip::LadderClimbUp {
            continue;
        }
        let Ok(mut controller) = players.get_mut(event.entity) else {
            continue;
        };

        match controller.complete_ladder_climb_up(|top| tops.get(top).ok().map(|t| t.stand_up)) {
            Ok(stand_up) => debug!("Stood up from ladder at {:?}", stand_up),
            Err(err) => warn!("Ladder climb-up completion rejected: {}", err),
        }
    }
}

pub(crate) fn collect_coins(
    mut commands: Commands,
    coins: Query<(), With<Coin>>,
    mut coins_changed: MessageWriter<CoinsChangedEvent>,
    mut players: Query<(&SensorOverlaps, &mut PlayerController), With<Player>>,
) {
    for (overlaps, mut controller) in &mut players {
        for &entity in overlaps.entered() {
            if !coins.contains(entity) {
                continue;
            }

            let total = controller.add_coin();
            commands.entity(entity).despawn();
            coins_changed.write(CoinsChangedEvent { total });
            info!("Coin collected, total {}", total);
        }
    }
}

pub(crate) fn trigger_kill_zones(
    zones: Query<&KillZone>,
    mut respawn_events: MessageWriter<RespawnRequestedEvent>,
    players: Query<&SensorOverlaps, With<Player>>,
) {
    for overlaps in &players {
        for &entity in overlaps.entered() {
            if let Ok(zone) = zones.get(entity) {
                info!("Player hit kill zone {:?}", entity);
                respawn_events.write(RespawnRequestedEvent {
                    target: zone.respawn_point,
                });
            }
        }
    }
}
