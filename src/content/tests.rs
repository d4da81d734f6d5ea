//! Content domain: tests for controller config parsing.

use std::path::Path;

use super::loader::{
    ContentLoadError, ControllerConfig, load_controller_config, parse_controller_config,
};
use crate::movement::ControllerTuning;
use crate::respawn::RespawnTiming;

#[test]
fn test_shipped_config_matches_defaults() {
    let config = load_controller_config(Path::new(super::CONTROLLER_CONFIG_PATH))
        .expect("shipped controller.ron should parse");
    assert_eq!(config, ControllerConfig::default());
}

#[test]
fn test_partial_config_keeps_defaults() {
    let config = parse_controller_config(
        "inline",
        "(tuning: (move_speed: 200.0), respawn: (freeze_delay: 1.0))",
    )
    .unwrap();

    assert_eq!(config.tuning.move_speed, 200.0);
    assert_eq!(
        config.tuning.jump_impulse,
        ControllerTuning::default().jump_impulse
    );
    assert_eq!(config.respawn.freeze_delay, 1.0);
    assert_eq!(
        config.respawn.fade_from_opaque,
        RespawnTiming::default().fade_from_opaque
    );
}

#[test]
fn test_empty_config_is_default() {
    let config = parse_controller_config("inline", "()").unwrap();
    assert_eq!(config, ControllerConfig::default());
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_controller_config("broken.ron", "(tuning: (move_speed: fast))").unwrap_err();
    assert!(matches!(err, ContentLoadError::Parse { .. }));
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_controller_config(Path::new("assets/data/does_not_exist.ron")).unwrap_err();
    assert!(matches!(err, ContentLoadError::Io { .. }));
}

#[test]
fn test_jump_apex_is_finite_with_default_gravity() {
    let apex = ControllerTuning::default().jump_apex(1.0 / 60.0);
    assert!(apex.is_finite());
    assert!((apex - 112.0).abs() < 1e-3);
}

#[test]
fn test_jump_apex_with_negligible_gravity_returns() {
    let tuning = ControllerTuning {
        gravity: -1e-5,
        ..ControllerTuning::default()
    };

    let apex = tuning.jump_apex(1.0 / 60.0);
    assert!(apex.is_finite());
    assert!(apex > ControllerTuning::default().jump_apex(1.0 / 60.0));
}

#[test]
fn test_jump_apex_with_huge_impulse_returns() {
    let tuning = ControllerTuning {
        jump_impulse: f32::MAX,
        gravity: -1e-5,
        ..ControllerTuning::default()
    };

    let apex = tuning.jump_apex(1.0 / 60.0);
    assert!(!apex.is_nan());
    assert!(apex > 0.0);
}

#[test]
fn test_jump_apex_without_upward_impulse_is_zero() {
    let tuning = ControllerTuning {
        jump_impulse: 0.0,
        ..ControllerTuning::default()
    };
    assert_eq!(tuning.jump_apex(1.0 / 60.0), 0.0);
}
