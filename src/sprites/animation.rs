//! Animation state and one-shot clip playback.
//!
//! The looping state is derived from the controller every frame. One-shot
//! clips (roll, ladder climb-up) run on a timer and report completion back
//! to the controller through [`ClipFinishedEvent`].

use bevy::ecs::message::{Message, MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{ControllerTuning, Facing, Locomotion, Player, PlayerController};

/// Animation states for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
    Climb,
    Hang,
    Push,
    Roll,
    ClimbUp,
    Frozen,
}

impl AnimationState {
    /// Picks the state matching what the controller is doing.
    pub fn from_controller(controller: &PlayerController) -> Self {
        match controller.locomotion() {
            Locomotion::Frozen => return AnimationState::Frozen,
            Locomotion::LedgeHang { .. } => return AnimationState::Hang,
            Locomotion::LadderClimbUp { .. } => return AnimationState::ClimbUp,
            Locomotion::Rolling { .. } => return AnimationState::Roll,
            Locomotion::Normal => {}
        }

        if controller.on_ladder() {
            AnimationState::Climb
        } else if controller.is_pushing() {
            AnimationState::Push
        } else if !controller.is_grounded() {
            if controller.vertical_velocity() > 0.0 {
                AnimationState::Jump
            } else {
                AnimationState::Fall
            }
        } else if controller.horizontal_speed() > 0.0 {
            AnimationState::Run
        } else {
            AnimationState::Idle
        }
    }

    /// Placeholder body color until the player has real frames.
    pub fn tint(self) -> Color {
        match self {
            AnimationState::Idle => Color::srgb(0.3, 0.6, 0.9),
            AnimationState::Run => Color::srgb(0.35, 0.7, 1.0),
            AnimationState::Jump | AnimationState::Fall => Color::srgb(0.5, 0.8, 1.0),
            AnimationState::Climb | AnimationState::ClimbUp => Color::srgb(0.6, 0.5, 0.9),
            AnimationState::Hang => Color::srgb(0.7, 0.5, 0.8),
            AnimationState::Push => Color::srgb(0.9, 0.6, 0.3),
            AnimationState::Roll => Color::srgb(0.95, 0.95, 0.5),
            AnimationState::Frozen => Color::srgb(0.5, 0.5, 0.55),
        }
    }
}

/// One-shot clips whose completion drives a controller transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clip {
    Roll,
    LadderClimbUp,
}

impl Clip {
    pub fn duration(self, tuning: &ControllerTuning) -> f32 {
        match self {
            Clip::Roll => tuning.roll_duration,
            Clip::LadderClimbUp => tuning.ladder_climb_up_duration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveClip {
    pub clip: Clip,
    pub remaining: f32,
}

/// Component for animation playback on the player sprite.
#[derive(Component, Debug, Default)]
pub struct AnimationController {
    /// Current animation state.
    pub state: AnimationState,
    /// Previous state (for detecting transitions).
    pub previous_state: AnimationState,
    clip: Option<ActiveClip>,
}

impl AnimationController {
    /// Set the animation state. Returns true if it changed.
    pub fn set_state(&mut self, state: AnimationState) -> bool {
        if self.state == state {
            return false;
        }
        self.previous_state = self.state;
        self.state = state;
        true
    }

    /// Starts `clip`, replacing whatever clip was playing.
    pub fn play(&mut self, clip: Clip, duration: f32) {
        self.clip = Some(ActiveClip {
            clip,
            remaining: duration.max(0.0),
        });
    }

    /// Advances the active clip; returns it once it has run out.
    pub fn tick(&mut self, dt: f32) -> Option<Clip> {
        let active = self.clip.as_mut()?;
        active.remaining -= dt;
        if active.remaining > 0.0 {
            return None;
        }

        let finished = active.clip;
        self.clip = None;
        Some(finished)
    }

    pub fn active_clip(&self) -> Option<ActiveClip> {
        self.clip
    }
}

/// Request to play a one-shot clip on an entity.
#[derive(Debug)]
pub struct PlayClipEvent {
    pub entity: Entity,
    pub clip: Clip,
}

impl Message for PlayClipEvent {}

/// Message fired when a one-shot clip completes.
#[derive(Debug)]
pub struct ClipFinishedEvent {
    pub entity: Entity,
    pub clip: Clip,
}

impl Message for ClipFinishedEvent {}

/// Message fired when animation state changes.
#[derive(Debug)]
pub struct AnimationStateChanged {
    pub entity: Entity,
    pub from: AnimationState,
    pub to: AnimationState,
}

impl Message for AnimationStateChanged {}

pub fn start_clips(
    tuning: Res<ControllerTuning>,
    mut play_events: MessageReader<PlayClipEvent>,
    mut query: Query<&mut AnimationController>,
) {
    for event in play_events.read() {
        let Ok(mut controller) = query.get_mut(event.entity) else {
            warn!("Clip {:?} requested for entity without animation", event.clip);
            continue;
        };
        controller.play(event.clip, event.clip.duration(&tuning));
    }
}

/// System that advances one-shot clips based on time.
pub fn update_clips(
    time: Res<Time>,
    mut query: Query<(Entity, &mut AnimationController)>,
    mut finished_events: MessageWriter<ClipFinishedEvent>,
) {
    for (entity, mut controller) in &mut query {
        if let Some(clip) = controller.tick(time.delta_secs()) {
            finished_events.write(ClipFinishedEvent { entity, clip });
        }
    }
}

/// System that applies animation state based on the controller.
pub fn animation_state_machine(
    mut query: Query<(Entity, &PlayerController, &mut AnimationController), With<Player>>,
    mut changed_events: MessageWriter<AnimationStateChanged>,
) {
    for (entity, player, mut controller) in &mut query {
        let from = controller.state;
        let to = AnimationState::from_controller(player);
        if controller.set_state(to) {
            changed_events.write(AnimationStateChanged { entity, from, to });
        }
    }
}

pub fn log_animation_transitions(mut changed_events: MessageReader<AnimationStateChanged>) {
    for event in changed_events.read() {
        debug!(
            "Animation {:?}: {:?} -> {:?}",
            event.entity, event.from, event.to
        );
    }
}

pub fn sync_sprite_visuals(
    mut query: Query<(&PlayerController, &AnimationController, &mut Sprite), With<Player>>,
) {
    for (player, controller, mut sprite) in &mut query {
        sprite.flip_x = player.facing() == Facing::Left;
        sprite.color = controller.state.tint();
    }
}
