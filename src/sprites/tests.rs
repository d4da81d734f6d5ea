//! Sprites domain: tests for clip playback and state derivation.

use bevy::ecs::message::{MessageReader, Messages};
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::{
    AnimationController, AnimationState, AnimationStateChanged, Clip, animation_state_machine,
    log_animation_transitions,
};
use crate::movement::{ControllerTuning, ForcedState, Player, PlayerController};

// -----------------------------------------------------------------------------
// Clip playback tests
// -----------------------------------------------------------------------------

#[test]
fn test_clip_finishes_once_after_duration() {
    let mut controller = AnimationController::default();
    controller.play(Clip::Roll, 0.45);

    assert_eq!(controller.tick(0.2), None);
    assert_eq!(controller.tick(0.3), Some(Clip::Roll));
    assert_eq!(controller.tick(0.3), None);
    assert!(controller.active_clip().is_none());
}

#[test]
fn test_play_replaces_active_clip() {
    let mut controller = AnimationController::default();
    controller.play(Clip::Roll, 1.0);
    controller.play(Clip::LadderClimbUp, 0.1);

    assert_eq!(controller.tick(0.1), Some(Clip::LadderClimbUp));
}

#[test]
fn test_zero_length_clip_finishes_on_first_tick() {
    let mut controller = AnimationController::default();
    controller.play(Clip::Roll, 0.0);

    assert_eq!(controller.tick(0.0), Some(Clip::Roll));
}

#[test]
fn test_clip_durations_come_from_tuning() {
    let tuning = ControllerTuning::default();
    assert_eq!(Clip::Roll.duration(&tuning), tuning.roll_duration);
    assert_eq!(
        Clip::LadderClimbUp.duration(&tuning),
        tuning.ladder_climb_up_duration
    );
}

// -----------------------------------------------------------------------------
// State derivation tests
// -----------------------------------------------------------------------------

#[test]
fn test_set_state_reports_changes_only() {
    let mut controller = AnimationController::default();

    assert!(!controller.set_state(AnimationState::Idle));
    assert!(controller.set_state(AnimationState::Run));
    assert_eq!(controller.previous_state, AnimationState::Idle);
}

#[test]
fn test_airborne_at_rest_is_falling() {
    let player = PlayerController::new(Vec2::ZERO);
    assert_eq!(AnimationState::from_controller(&player), AnimationState::Fall);
}

#[test]
fn test_locomotion_modes_override_motion() {
    let mut player = PlayerController::new(Vec2::ZERO);
    player
        .grab_ledge(Vec2::new(4.0, 8.0), Entity::PLACEHOLDER)
        .unwrap();
    assert_eq!(AnimationState::from_controller(&player), AnimationState::Hang);

    player.force_state(ForcedState::Freeze).unwrap();
    assert_eq!(
        AnimationState::from_controller(&player),
        AnimationState::Frozen
    );
}

#[test]
fn test_state_change_message_written_once_per_change() {
    let mut world = World::new();
    world.init_resource::<Messages<AnimationStateChanged>>();
    world.spawn((
        Player,
        PlayerController::new(Vec2::ZERO),
        AnimationController::default(),
    ));

    world.run_system_once(animation_state_machine).unwrap();
    world.run_system_once(animation_state_machine).unwrap();

    let changes = world
        .run_system_once(|mut reader: MessageReader<AnimationStateChanged>| {
            reader
                .read()
                .map(|event| (event.from, event.to))
                .collect::<Vec<_>>()
        })
        .unwrap();
    assert_eq!(changes, vec![(AnimationState::Idle, AnimationState::Fall)]);

    world.run_system_once(log_animation_transitions).unwrap();
}
