//! Velocity integration: gravity, jump and anti-bump on the vertical axis,
//! camera-relative acceleration, drag and speed caps on the horizontal plane.

use bevy::prelude::*;

use crate::locomotion::math::{flatten, horizontal, slope_angle};
use crate::locomotion::resources::{InputSnapshot, MovementTuning, VerticalTuning};
use crate::locomotion::state::{KinematicState, MovementState};

/// Camera basis vectors from the actively rendering viewpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub forward: Vec3,
    pub right: Vec3,
}

impl Default for CameraBasis {
    fn default() -> Self {
        Self {
            forward: Vec3::NEG_Z,
            right: Vec3::X,
        }
    }
}

impl CameraBasis {
    /// Horizontal, unit-length forward and right. Pitch never contributes.
    ///
    /// A camera looking straight up or down has no horizontal forward; it is
    /// then rebuilt from the flattened right vector, and from the defaults if
    /// that is degenerate too.
    pub fn flattened(&self) -> (Vec3, Vec3) {
        let right = flatten(self.right);
        let forward = flatten(self.forward).or_else(|| right.map(|r| Vec3::Y.cross(r)));
        let right = right.or_else(|| forward.map(|f| f.cross(Vec3::Y)));
        (forward.unwrap_or(Vec3::NEG_Z), right.unwrap_or(Vec3::X))
    }

    /// World-plane movement direction for a movement axis.
    pub fn movement_direction(&self, axis: Vec2) -> Vec3 {
        let (forward, right) = self.flattened();
        right * axis.x + forward * axis.y
    }
}

/// Acceleration and speed cap for a state. Airborne states share one set.
pub fn acceleration_and_cap(state: MovementState, tuning: &MovementTuning) -> (f32, f32) {
    match state {
        MovementState::Jumping | MovementState::Falling => {
            (tuning.in_air_acceleration, tuning.sprint_speed)
        }
        MovementState::Walking => (tuning.walk_acceleration, tuning.walk_speed),
        MovementState::Sprinting => (tuning.sprint_acceleration, tuning.sprint_speed),
        MovementState::Running | MovementState::Idling => {
            (tuning.run_acceleration, tuning.run_speed)
        }
    }
}

/// Subtract `drag * dt` from the magnitude, landing on exactly zero instead
/// of reversing direction.
pub fn apply_drag(velocity: Vec3, drag: f32, dt: f32) -> Vec3 {
    let reduction = drag * dt;
    let speed = velocity.length();
    if speed > reduction {
        velocity - velocity / speed * reduction
    } else {
        Vec3::ZERO
    }
}

/// Deflect a falling velocity along a surface too steep to stand on.
pub fn deflect_off_steep_surface(
    velocity: Vec3,
    normal: Vec3,
    slope_limit: f32,
    vertical_velocity: f32,
) -> Vec3 {
    if slope_angle(normal) > slope_limit && vertical_velocity < 0.0 {
        velocity.reject_from_normalized(normal)
    } else {
        velocity
    }
}

impl KinematicState {
    /// Integrate the vertical axis and return the new vertical velocity.
    ///
    /// `grounded` is membership of the current state in the ground-state
    /// group; the leave-ground edge compares against `previous_state`'s
    /// membership so the anti-bump bias is returned exactly once.
    pub fn integrate_vertical(
        &mut self,
        input: &InputSnapshot,
        grounded: bool,
        previous_state: MovementState,
        tuning: &VerticalTuning,
        dt: f32,
    ) -> f32 {
        let mut v = self.vertical_velocity - tuning.gravity * dt;

        if grounded && v < 0.0 {
            v = -tuning.anti_bump;
        }

        if input.jump_pressed && grounded {
            v += tuning.jump_impulse();
            self.jumped_last_frame = true;
            debug!("Jump: vertical velocity {:.2}", v);
        }

        if previous_state.is_grounded() && !grounded {
            v += tuning.anti_bump;
            debug!("Left ground: anti-bump returned, vertical velocity {:.2}", v);
        }

        self.vertical_velocity = v.clamp(-tuning.terminal_velocity, tuning.terminal_velocity);
        self.vertical_velocity
    }

    /// Integrate the horizontal plane and return the full velocity to apply.
    ///
    /// `previous_velocity` is the body's resolved velocity; only its
    /// horizontal part is carried. `steep_normal` is the re-probed surface
    /// normal, consulted only while airborne.
    #[allow(clippy::too_many_arguments)]
    pub fn integrate_horizontal(
        &mut self,
        state: MovementState,
        camera: CameraBasis,
        input: &InputSnapshot,
        previous_velocity: Vec3,
        steep_normal: Option<(Vec3, f32)>,
        tuning: &MovementTuning,
        dt: f32,
    ) -> Vec3 {
        let grounded = state.is_grounded();
        let (acceleration, cap) = acceleration_and_cap(state, tuning);
        let direction = camera.movement_direction(input.movement);

        let mut planar = horizontal(previous_velocity) + direction * acceleration * dt;
        let drag = if grounded {
            tuning.drag
        } else {
            tuning.in_air_drag
        };
        planar = apply_drag(planar, drag, dt).clamp_length_max(cap);
        self.horizontal_velocity = planar;

        let velocity = planar + Vec3::Y * self.vertical_velocity;
        match steep_normal {
            Some((normal, slope_limit)) if !grounded => {
                deflect_off_steep_surface(velocity, normal, slope_limit, self.vertical_velocity)
            }
            _ => velocity,
        }
    }
}
