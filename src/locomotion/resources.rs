//! Locomotion domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every tunable of the controller, loaded from `assets/data/locomotion.ron`.
#[derive(Resource, Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocomotionTuning {
    pub movement: MovementTuning,
    pub vertical: VerticalTuning,
    pub look: LookTuning,
    pub ground: GroundProbeTuning,
    pub animation: AnimationTuning,
    pub action: ActionTuning,
}

/// Horizontal acceleration, speed caps and drag, in units/sec.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub walk_acceleration: f32,
    pub walk_speed: f32,
    pub run_acceleration: f32,
    pub run_speed: f32,
    pub sprint_acceleration: f32,
    pub sprint_speed: f32,
    pub in_air_acceleration: f32,
    pub drag: f32,
    pub in_air_drag: f32,
    /// Horizontal speed below which the character counts as stationary.
    pub moving_threshold: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            walk_acceleration: 25.0,
            walk_speed: 2.0,
            run_acceleration: 35.0,
            run_speed: 4.0,
            sprint_acceleration: 50.0,
            sprint_speed: 7.0,
            in_air_acceleration: 25.0,
            drag: 20.0,
            in_air_drag: 30.0,
            moving_threshold: 0.01,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct VerticalTuning {
    pub gravity: f32,
    /// Jump impulse is `sqrt(jump_height_factor * 3 * gravity)`.
    pub jump_height_factor: f32,
    pub terminal_velocity: f32,
    /// Downward bias held while grounded.
    pub anti_bump: f32,
}

impl Default for VerticalTuning {
    fn default() -> Self {
        Self {
            gravity: 25.0,
            jump_height_factor: 0.8,
            terminal_velocity: 50.0,
            anti_bump: MovementTuning::default().sprint_speed,
        }
    }
}

impl VerticalTuning {
    pub fn jump_impulse(&self) -> f32 {
        (self.jump_height_factor * 3.0 * self.gravity).max(0.0).sqrt()
    }
}

/// Camera look and body facing, angles in degrees.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LookTuning {
    pub horizontal_sensitivity: f32,
    pub vertical_sensitivity: f32,
    pub pitch_limit: f32,
    pub body_rotation_speed: f32,
    /// Seconds an idle corrective turn stays armed.
    pub rotate_to_target_time: f32,
    /// Mismatch that starts an idle corrective turn.
    pub rotation_threshold: f32,
    /// Mismatch that re-arms a running correction once its timer elapses.
    pub continue_rotation_threshold: f32,
}

impl Default for LookTuning {
    fn default() -> Self {
        Self {
            horizontal_sensitivity: 0.1,
            vertical_sensitivity: 0.1,
            pitch_limit: 90.0,
            body_rotation_speed: 10.0,
            rotate_to_target_time: 0.67,
            rotation_threshold: 90.0,
            continue_rotation_threshold: 90.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GroundProbeTuning {
    /// How far the overlap sphere sits below the capsule's bottom hemisphere.
    pub ground_check_offset: f32,
    /// Extra reach of the downward sphere-cast beyond half height + step.
    pub cast_epsilon: f32,
}

impl Default for GroundProbeTuning {
    fn default() -> Self {
        Self {
            ground_check_offset: 0.08,
            cast_epsilon: 0.01,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnimationTuning {
    pub blend_speed: f32,
    pub walk_blend_max: f32,
    pub run_blend_max: f32,
    pub sprint_blend_max: f32,
}

impl Default for AnimationTuning {
    fn default() -> Self {
        Self {
            blend_speed: 4.0,
            walk_blend_max: 0.5,
            run_blend_max: 1.0,
            sprint_blend_max: 1.5,
        }
    }
}

/// How long each action plays before it ends on its own, in seconds.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ActionTuning {
    pub attack_duration: f32,
    pub gather_duration: f32,
}

impl Default for ActionTuning {
    fn default() -> Self {
        Self {
            attack_duration: 0.8,
            gather_duration: 2.0,
        }
    }
}

/// A single violated tuning constraint.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field} {reason}")]
pub struct TuningViolation {
    pub field: &'static str,
    pub reason: &'static str,
}

impl LocomotionTuning {
    /// Check every constraint and return all violations, empty when valid.
    pub fn validate(&self) -> Vec<TuningViolation> {
        let mut violations = Vec::new();

        macro_rules! require {
            ($cond:expr, $field:expr, $reason:expr) => {
                if !$cond {
                    violations.push(TuningViolation {
                        field: $field,
                        reason: $reason,
                    });
                }
            };
        }

        let m = &self.movement;
        require!(m.walk_speed > 0.0, "movement.walk_speed", "must be positive");
        require!(m.run_speed > 0.0, "movement.run_speed", "must be positive");
        require!(m.sprint_speed > 0.0, "movement.sprint_speed", "must be positive");
        require!(
            m.walk_acceleration >= 0.0
                && m.run_acceleration >= 0.0
                && m.sprint_acceleration >= 0.0
                && m.in_air_acceleration >= 0.0,
            "movement.*_acceleration",
            "must not be negative"
        );
        require!(m.drag >= 0.0, "movement.drag", "must not be negative");
        require!(m.in_air_drag >= 0.0, "movement.in_air_drag", "must not be negative");
        require!(
            m.moving_threshold >= 0.0,
            "movement.moving_threshold",
            "must not be negative"
        );

        let v = &self.vertical;
        require!(v.gravity > 0.0, "vertical.gravity", "must be positive");
        require!(
            v.terminal_velocity > 0.0,
            "vertical.terminal_velocity",
            "must be positive"
        );
        require!(v.anti_bump >= 0.0, "vertical.anti_bump", "must not be negative");
        require!(
            v.jump_height_factor >= 0.0,
            "vertical.jump_height_factor",
            "must not be negative"
        );

        let l = &self.look;
        require!(
            l.pitch_limit > 0.0 && l.pitch_limit <= 90.0,
            "look.pitch_limit",
            "must be within (0, 90]"
        );
        require!(
            l.rotation_threshold > 0.0 && l.rotation_threshold < 180.0,
            "look.rotation_threshold",
            "must be within (0, 180)"
        );
        require!(
            l.continue_rotation_threshold <= l.rotation_threshold,
            "look.continue_rotation_threshold",
            "must not exceed rotation_threshold"
        );
        require!(
            l.rotate_to_target_time >= 0.0,
            "look.rotate_to_target_time",
            "must not be negative"
        );

        require!(
            self.ground.ground_check_offset >= 0.0 && self.ground.cast_epsilon >= 0.0,
            "ground.*",
            "must not be negative"
        );

        require!(
            self.action.attack_duration > 0.0 && self.action.gather_duration > 0.0,
            "action.*_duration",
            "must be positive"
        );

        violations
    }
}

/// Per-tick player intent, written by the input collaborator.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct InputSnapshot {
    /// Movement axis, x = strafe right, y = forward. Diagonals are not renormalised.
    pub movement: Vec2,
    /// Look delta for this tick, unbounded.
    pub look: Vec2,
    pub sprint_toggled: bool,
    pub walk_toggled: bool,
    /// Edge-triggered; cleared at the end of every tick.
    pub jump_pressed: bool,
}

impl InputSnapshot {
    pub fn has_movement(&self) -> bool {
        self.movement != Vec2::ZERO
    }
}

/// Whether sprint/walk act while held or flip on each press.
#[derive(Resource, Debug, Clone)]
pub struct InputBindings {
    pub hold_to_sprint: bool,
    pub hold_to_walk: bool,
    pub forward: KeyCode,
    pub back: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub sprint: KeyCode,
    pub walk: KeyCode,
    pub jump: KeyCode,
    pub attack: MouseButton,
    pub gather: KeyCode,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            hold_to_sprint: true,
            hold_to_walk: true,
            forward: KeyCode::KeyW,
            back: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            sprint: KeyCode::ShiftLeft,
            walk: KeyCode::ControlLeft,
            jump: KeyCode::Space,
            attack: MouseButton::Left,
            gather: KeyCode::KeyE,
        }
    }
}
