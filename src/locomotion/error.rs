//! Wiring faults surfaced once at setup.

use bevy::prelude::*;
use thiserror::Error;

use crate::locomotion::resources::TuningViolation;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("player {0} has no camera wired into its LocomotionRig")]
    MissingCamera(Entity),
    #[error("player {player} references camera {camera}, which has no Camera component")]
    CameraNotFound { player: Entity, camera: Entity },
    #[error("player {0} has no LocomotionRig")]
    MissingRig(Entity),
    #[error("player {0} is missing its CharacterBody or Collider")]
    MissingBody(Entity),
    #[error("invalid locomotion tuning: {}", format_violations(.0))]
    InvalidTuning(Vec<TuningViolation>),
}

fn format_violations(violations: &[TuningViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
