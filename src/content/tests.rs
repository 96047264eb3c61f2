//! Content domain: tests for tuning loading and validation.

use std::path::Path;

use super::{ContentLoadError, load_tuning, parse_tuning};
use crate::locomotion::LocomotionTuning;

#[test]
fn test_shipped_tuning_matches_defaults() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data/locomotion.ron");
    let tuning = load_tuning(&path).expect("shipped tuning should load");
    assert_eq!(tuning, LocomotionTuning::default());
    assert!(tuning.validate().is_empty());
}

#[test]
fn test_partial_file_keeps_defaults() {
    let tuning = parse_tuning("inline", "(movement: (run_speed: 5.5), vertical: (gravity: 30.0))")
        .expect("partial tuning should parse");

    assert_eq!(tuning.movement.run_speed, 5.5);
    assert_eq!(tuning.vertical.gravity, 30.0);
    assert_eq!(tuning.movement.sprint_speed, 7.0);
    assert_eq!(tuning.look, LocomotionTuning::default().look);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_tuning("broken.ron", "(movement: (run_speed: fast))").unwrap_err();
    assert!(matches!(err, ContentLoadError::Parse { .. }));
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_tuning(Path::new("does/not/exist.ron")).unwrap_err();
    assert!(matches!(err, ContentLoadError::Io { .. }));
}

#[test]
fn test_validation_reports_every_violation() {
    let mut tuning = LocomotionTuning::default();
    tuning.vertical.gravity = 0.0;
    tuning.movement.drag = -1.0;
    tuning.look.pitch_limit = 120.0;
    tuning.look.continue_rotation_threshold = 120.0;

    let fields: Vec<_> = tuning.validate().iter().map(|v| v.field).collect();
    assert_eq!(
        fields,
        vec![
            "movement.drag",
            "vertical.gravity",
            "look.pitch_limit",
            "look.continue_rotation_threshold",
        ]
    );
}

#[test]
fn test_action_durations_must_be_positive() {
    let mut tuning = parse_tuning("inline", "(action: (gather_duration: 0.0))")
        .expect("action tuning should parse");
    assert_eq!(tuning.action.attack_duration, 0.8);

    let fields: Vec<_> = tuning.validate().iter().map(|v| v.field).collect();
    assert_eq!(fields, vec!["action.*_duration"]);

    tuning.action.gather_duration = 1.5;
    assert!(tuning.validate().is_empty());
}
