//! Locomotion domain: movement state and the cross-tick accumulators.

use bevy::prelude::*;

/// Exactly one of these is active per character per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum MovementState {
    #[default]
    Idling,
    Walking,
    Running,
    Sprinting,
    Jumping,
    Falling,
}

impl MovementState {
    #[cfg(test)]
    pub const ALL: [MovementState; 6] = [
        MovementState::Idling,
        MovementState::Walking,
        MovementState::Running,
        MovementState::Sprinting,
        MovementState::Jumping,
        MovementState::Falling,
    ];

    /// Membership in the ground-state group.
    pub fn is_grounded(self) -> bool {
        match self {
            MovementState::Idling
            | MovementState::Walking
            | MovementState::Running
            | MovementState::Sprinting => true,
            MovementState::Jumping | MovementState::Falling => false,
        }
    }

    pub fn is_airborne(self) -> bool {
        !self.is_grounded()
    }
}

/// Integration accumulator owned by the velocity integrator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KinematicState {
    /// Last requested horizontal velocity; `y` is always zero.
    pub horizontal_velocity: Vec3,
    pub vertical_velocity: f32,
    /// Set on jump injection, consumed by the next classification.
    pub jumped_last_frame: bool,
    /// `Some(0.0)` while airborne; `None` restores the configured step offset.
    pub step_offset_override: Option<f32>,
}

impl KinematicState {
    /// Full velocity requested from the collision body this tick.
    pub fn velocity(&self) -> Vec3 {
        self.horizontal_velocity + Vec3::Y * self.vertical_velocity
    }
}

/// Camera and body facing accumulators, all angles in degrees.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct OrientationState {
    pub camera_yaw: f32,
    pub camera_pitch: f32,
    /// Yaw the body is steering toward; driven by the same look delta as `camera_yaw`.
    pub target_yaw: f32,
    pub body_yaw: f32,
    /// Signed horizontal angle from body forward to camera forward.
    pub rotation_mismatch: f32,
    pub idle_rotation_timer: f32,
    /// +1 or -1 once a corrective turn latched a direction.
    pub idle_rotation_sign: f32,
}

impl OrientationState {
    /// Start facing `yaw` with the camera aligned behind the body.
    pub fn facing(yaw: f32) -> Self {
        Self {
            camera_yaw: yaw,
            target_yaw: yaw,
            body_yaw: yaw,
            ..default()
        }
    }

    pub fn is_rotating_to_target(&self) -> bool {
        self.idle_rotation_timer > 0.0
    }
}
