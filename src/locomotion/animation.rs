//! Animation-driving signals derived from the locomotion outputs.
//!
//! Nothing here feeds back into physics; an animation layer reads these
//! values as parameters.

use bevy::prelude::*;

use crate::locomotion::action::ActionInput;
use crate::locomotion::orientation::OrientationOutput;
use crate::locomotion::resources::{AnimationTuning, InputSnapshot};
use crate::locomotion::state::MovementState;

#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct AnimationParams {
    /// Movement input smoothed toward the state's blend maximum.
    pub blend_input: Vec2,
    pub blend_magnitude: f32,
    pub is_grounded: bool,
    pub is_idling: bool,
    pub is_jumping: bool,
    pub is_falling: bool,
    pub rotation_mismatch: f32,
    pub is_rotating_to_target: bool,
    pub is_attacking: bool,
    pub is_gathering: bool,
    pub is_playing_action: bool,
}

/// Blend-space scale for the movement input in each state.
pub fn blend_max(state: MovementState, tuning: &AnimationTuning) -> f32 {
    match state {
        MovementState::Sprinting => tuning.sprint_blend_max,
        MovementState::Running | MovementState::Jumping | MovementState::Falling => {
            tuning.run_blend_max
        }
        MovementState::Walking | MovementState::Idling => tuning.walk_blend_max,
    }
}

impl AnimationParams {
    pub fn update(
        &mut self,
        state: MovementState,
        input: &InputSnapshot,
        orientation: &OrientationOutput,
        actions: &ActionInput,
        tuning: &AnimationTuning,
        dt: f32,
    ) {
        let target = input.movement * blend_max(state, tuning);
        let t = (tuning.blend_speed * dt).clamp(0.0, 1.0);
        self.blend_input = self.blend_input.lerp(target, t);
        self.blend_magnitude = self.blend_input.length();

        self.is_grounded = state.is_grounded();
        self.is_idling = state == MovementState::Idling;
        self.is_jumping = state == MovementState::Jumping;
        self.is_falling = state == MovementState::Falling;
        self.rotation_mismatch = orientation.rotation_mismatch;
        self.is_rotating_to_target = orientation.is_rotating_to_target;
        self.is_attacking = actions.attack_pressed;
        self.is_gathering = actions.gather_pressed;
        self.is_playing_action = actions.is_playing_action();
    }
}
