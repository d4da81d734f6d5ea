//! Respawn domain: tests for sequence ordering and re-trigger guarding.

use bevy::prelude::*;

use super::{RespawnDirective, RespawnError, RespawnPhase, RespawnSequencer, RespawnTiming};
use crate::movement::{ForcedState, Locomotion, PlayerController};
use crate::ui::Fade;

const DT: f32 = 0.1;

/// Runs a whole respawn against a controller, completing each fade as soon
/// as it is requested. Returns every directive in order.
fn run_to_completion(
    sequencer: &mut RespawnSequencer,
    controller: &mut PlayerController,
    target: Vec2,
) -> Vec<RespawnDirective> {
    let mut log = Vec::new();
    let mut pending = sequencer.request(target).unwrap();

    for _ in 0..100 {
        let mut finished = None;
        for directive in pending.drain(..) {
            match directive {
                RespawnDirective::BeginFade { fade, .. } => finished = Some(fade),
                RespawnDirective::Freeze => controller.force_state(ForcedState::Freeze).unwrap(),
                RespawnDirective::Relocate(target) => controller.respawn_at(target).unwrap(),
                RespawnDirective::Unfreeze => controller.force_state(ForcedState::Normal).unwrap(),
            }
            log.push(directive);
        }

        if !sequencer.is_running() {
            break;
        }
        pending = sequencer.advance(DT, finished);
    }

    log
}

#[test]
fn test_default_timing() {
    let timing = RespawnTiming::default();
    assert_eq!(timing.fade_to_opaque, 0.5);
    assert_eq!(timing.freeze_delay, 0.5);
    assert_eq!(timing.fade_from_opaque, 2.0);
}

#[test]
fn test_sequence_order() {
    let mut sequencer = RespawnSequencer::default();
    let mut controller = PlayerController::new(Vec2::new(500.0, -400.0));
    let target = Vec2::new(-300.0, -140.0);

    let log = run_to_completion(&mut sequencer, &mut controller, target);

    assert_eq!(
        log,
        vec![
            RespawnDirective::BeginFade {
                fade: Fade::ToOpaque,
                duration: 0.5
            },
            RespawnDirective::Freeze,
            RespawnDirective::Relocate(target),
            RespawnDirective::BeginFade {
                fade: Fade::FromOpaque,
                duration: 2.0
            },
            RespawnDirective::Unfreeze,
        ]
    );
    assert_eq!(controller.locomotion(), Locomotion::Normal);
    assert_eq!(controller.position(), target);
    assert_eq!(sequencer.phase(), RespawnPhase::Idle);
}

#[test]
fn test_waits_for_fade_to_opaque() {
    let mut sequencer = RespawnSequencer::default();
    sequencer.request(Vec2::ZERO).unwrap();

    for _ in 0..20 {
        assert!(sequencer.advance(DT, None).is_empty());
    }
    assert!(sequencer.advance(DT, Some(Fade::FromOpaque)).is_empty());
    assert_eq!(
        sequencer.advance(DT, Some(Fade::ToOpaque)),
        vec![RespawnDirective::Freeze]
    );
}

#[test]
fn test_hold_lasts_freeze_delay() {
    let mut sequencer = RespawnSequencer::default();
    sequencer.request(Vec2::ONE).unwrap();
    sequencer.advance(DT, Some(Fade::ToOpaque));

    // 0.5s hold at 0.125s steps: three steps wait, the fourth relocates
    for _ in 0..3 {
        assert!(sequencer.advance(0.125, None).is_empty());
    }
    let directives = sequencer.advance(0.125, None);
    assert_eq!(directives[0], RespawnDirective::Relocate(Vec2::ONE));
    assert_eq!(sequencer.phase(), RespawnPhase::FadingIn);
}

#[test]
fn test_retrigger_is_rejected() {
    let mut sequencer = RespawnSequencer::default();
    sequencer.request(Vec2::ZERO).unwrap();

    let err = sequencer.request(Vec2::new(10.0, 10.0)).unwrap_err();
    assert!(matches!(err, RespawnError::InProgress(RespawnPhase::FadingOut { .. })));

    // Original target survives the rejected request
    sequencer.advance(DT, Some(Fade::ToOpaque));
    assert!(matches!(
        sequencer.phase(),
        RespawnPhase::Holding { target, .. } if target == Vec2::ZERO
    ));
}

#[test]
fn test_can_respawn_again_after_completion() {
    let mut sequencer = RespawnSequencer::default();
    let mut controller = PlayerController::new(Vec2::ZERO);

    run_to_completion(&mut sequencer, &mut controller, Vec2::new(1.0, 2.0));
    run_to_completion(&mut sequencer, &mut controller, Vec2::new(3.0, 4.0));

    assert_eq!(controller.position(), Vec2::new(3.0, 4.0));
    assert!(!controller.is_frozen());
}

#[test]
fn test_frozen_strictly_between_fade_and_relocation() {
    let mut sequencer = RespawnSequencer::default();
    let mut controller = PlayerController::new(Vec2::ZERO);

    sequencer.request(Vec2::ONE).unwrap();
    assert!(!controller.is_frozen());

    for directive in sequencer.advance(DT, Some(Fade::ToOpaque)) {
        if directive == RespawnDirective::Freeze {
            controller.force_state(ForcedState::Freeze).unwrap();
        }
    }
    assert!(controller.is_frozen());
    assert_eq!(controller.position(), Vec2::ZERO);
}

#[test]
fn test_relocation_requires_freeze() {
    let mut controller = PlayerController::new(Vec2::ZERO);
    assert!(controller.respawn_at(Vec2::ONE).is_err());
    assert_eq!(controller.position(), Vec2::ZERO);
}
