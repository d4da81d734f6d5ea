//! Interaction domain: notifications for UI collaborators.

use bevy::ecs::message::Message;

/// Event fired whenever the player's coin total changes
#[derive(Debug)]
pub struct CoinsChangedEvent {
    pub total: u32,
}

impl Message for CoinsChangedEvent {}
