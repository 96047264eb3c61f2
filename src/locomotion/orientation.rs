//! Camera look and body facing, including the idle snap-to-camera turn.

use bevy::prelude::*;

use crate::locomotion::math::{delta_angle, signed_angle_about_up, yaw_forward};
use crate::locomotion::resources::{InputSnapshot, LookTuning};
use crate::locomotion::state::{MovementState, OrientationState};

/// Read-only results of an orientation update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationOutput {
    pub camera_yaw: f32,
    pub camera_pitch: f32,
    pub body_yaw: f32,
    pub rotation_mismatch: f32,
    pub is_rotating_to_target: bool,
}

impl OrientationState {
    pub fn update(
        &mut self,
        input: &InputSnapshot,
        state: MovementState,
        tuning: &LookTuning,
        dt: f32,
    ) -> OrientationOutput {
        let yaw_delta = -tuning.horizontal_sensitivity * input.look.x;
        self.camera_yaw += yaw_delta;
        self.target_yaw += yaw_delta;
        self.camera_pitch = (self.camera_pitch - tuning.vertical_sensitivity * input.look.y)
            .clamp(-tuning.pitch_limit, tuning.pitch_limit);

        match state {
            MovementState::Idling => self.update_idle_rotation(tuning, dt),
            MovementState::Walking
            | MovementState::Running
            | MovementState::Sprinting
            | MovementState::Jumping
            | MovementState::Falling => {
                self.idle_rotation_timer = 0.0;
                self.rotate_toward_target(tuning, dt);
            }
        }

        self.rotation_mismatch = self.measure_mismatch();
        self.output()
    }

    fn update_idle_rotation(&mut self, tuning: &LookTuning, dt: f32) {
        if !self.is_rotating_to_target() {
            if self.rotation_mismatch.abs() <= tuning.rotation_threshold {
                return;
            }
            self.idle_rotation_timer = tuning.rotate_to_target_time;
            self.idle_rotation_sign = if self.rotation_mismatch > 0.0 { 1.0 } else { -1.0 };
            debug!(
                "Idle rotation started: mismatch {:.1}, sign {}",
                self.rotation_mismatch, self.idle_rotation_sign
            );
        }

        if self.rotation_mismatch * self.idle_rotation_sign <= 0.0 {
            self.idle_rotation_timer = 0.0;
            debug!("Idle rotation finished: mismatch {:.1}", self.rotation_mismatch);
            return;
        }

        self.rotate_toward_target(tuning, dt);
        self.idle_rotation_timer -= dt;

        if self.idle_rotation_timer <= 0.0 {
            self.idle_rotation_timer = 0.0;
            if self.rotation_mismatch.abs() > tuning.continue_rotation_threshold {
                self.idle_rotation_timer = tuning.rotate_to_target_time;
            }
        }
    }

    fn rotate_toward_target(&mut self, tuning: &LookTuning, dt: f32) {
        let t = (tuning.body_rotation_speed * dt).clamp(0.0, 1.0);
        self.body_yaw += delta_angle(self.body_yaw, self.target_yaw) * t;
    }

    /// Signed angle from body forward to camera forward on the horizontal
    /// plane. Camera pitch does not enter, so only the yaws are compared.
    pub fn measure_mismatch(&self) -> f32 {
        signed_angle_about_up(yaw_forward(self.body_yaw), yaw_forward(self.camera_yaw))
    }

    pub fn output(&self) -> OrientationOutput {
        OrientationOutput {
            camera_yaw: self.camera_yaw,
            camera_pitch: self.camera_pitch,
            body_yaw: self.body_yaw,
            rotation_mismatch: self.rotation_mismatch,
            is_rotating_to_target: self.is_rotating_to_target(),
        }
    }
}
