//! Sprites module for player animation.
//!
//! This module handles:
//! - Deriving the animation state from the controller
//! - One-shot clip playback and completion messages
//! - Sprite facing and tint
//! - Debug logging of animation state changes

pub mod animation;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use animation::*;

use crate::movement::ControllerSet;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PlayClipEvent>()
            .add_message::<ClipFinishedEvent>()
            .add_message::<AnimationStateChanged>()
            .add_systems(
                Update,
                (start_clips, update_clips)
                    .chain()
                    .in_set(ControllerSet::Animate),
            )
            .add_systems(
                Update,
                (
                    animation_state_machine,
                    log_animation_transitions,
                    sync_sprite_visuals,
                )
                    .chain()
                    .after(ControllerSet::Sync),
            );
    }
}
