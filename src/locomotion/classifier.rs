//! Movement state classification, recomputed from scratch every tick.

use bevy::prelude::*;

use crate::locomotion::ground::GroundProbeResult;
use crate::locomotion::math::horizontal;
use crate::locomotion::resources::{InputSnapshot, MovementTuning};
use crate::locomotion::state::{KinematicState, MovementState};

/// Running needs the forward component to dominate; backward never runs.
pub fn can_run(input: &InputSnapshot) -> bool {
    input.movement.y >= input.movement.x.abs()
}

/// Classify this tick's movement state.
///
/// `resolved_velocity` is the body's velocity after last tick's move was
/// resolved, so the state reflects actual motion rather than intent. Consumes
/// `jumped_last_frame` and sets the step-offset override as a side effect.
pub fn classify(
    input: &InputSnapshot,
    kinematics: &mut KinematicState,
    resolved_velocity: Vec3,
    ground_probe: &GroundProbeResult,
    previous_state: MovementState,
    tuning: &MovementTuning,
) -> MovementState {
    let moving_horizontally = horizontal(resolved_velocity).length() > tuning.moving_threshold;
    let has_input = input.has_movement();
    let walking = (moving_horizontally || has_input) && (!can_run(input) || input.walk_toggled);
    let sprinting = input.sprint_toggled && moving_horizontally;

    let horizontal_state = if walking {
        MovementState::Walking
    } else if sprinting {
        MovementState::Sprinting
    } else if moving_horizontally || has_input {
        MovementState::Running
    } else {
        MovementState::Idling
    };

    let airborne = !ground_probe.is_grounded || kinematics.jumped_last_frame;
    let state = if airborne {
        kinematics.jumped_last_frame = false;
        if kinematics.vertical_velocity > 0.0 {
            MovementState::Jumping
        } else {
            MovementState::Falling
        }
    } else {
        horizontal_state
    };

    let override_offset = if state.is_airborne() { Some(0.0) } else { None };
    if override_offset != kinematics.step_offset_override {
        debug!(
            "Step offset {}",
            if override_offset.is_some() { "suspended" } else { "restored" }
        );
        kinematics.step_offset_override = override_offset;
    }

    if state != previous_state {
        debug!("Movement state: {:?} -> {:?}", previous_state, state);
    }

    state
}
