//! Respawn domain: events that start the sequence.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Event fired when the player dies and must come back at `target`
#[derive(Debug)]
pub struct RespawnRequestedEvent {
    pub target: Vec2,
}

impl Message for RespawnRequestedEvent {}
