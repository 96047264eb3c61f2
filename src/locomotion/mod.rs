//! Locomotion domain: third-person character movement, ground sensing and
//! facing, with plugin wiring and public exports.

mod action;
mod animation;
mod classifier;
mod components;
mod controller;
mod error;
mod ground;
mod integrator;
mod math;
mod orientation;
mod resources;
mod state;
mod systems;


pub use action::ActionInput;
pub use animation::{AnimationParams, blend_max};
pub use classifier::{can_run, classify};
pub use components::{CameraRig, CharacterBody, GameLayer, Ground, LocomotionRig, Player};
pub use controller::LocomotionController;
pub use error::SetupError;
pub use ground::{
    CollisionBody, GroundHit, GroundProbeResult, GroundQuery, probe, surface_normal,
};
pub use integrator::{CameraBasis, acceleration_and_cap, apply_drag, deflect_off_steep_surface};
pub use math::{look_rotation, yaw_forward, yaw_rotation};
pub use orientation::OrientationOutput;
pub use resources::{
    ActionTuning, AnimationTuning, GroundProbeTuning, InputBindings, InputSnapshot,
    LocomotionTuning, LookTuning, MovementTuning, TuningViolation, VerticalTuning,
};
pub use state::{KinematicState, MovementState, OrientationState};
pub use systems::update_latch;

use bevy::prelude::*;

use crate::locomotion::systems::{
    clear_jump, read_actions, read_input, run_locomotion, run_orientation, update_actions,
    update_animation_params, validate_rigs,
};

/// Phases of one locomotion tick, run in this order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocomotionSystems {
    Input,
    Move,
    Orient,
    Animate,
}

pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionTuning>()
            .init_resource::<InputSnapshot>()
            .init_resource::<InputBindings>()
            .init_resource::<ActionInput>()
            .register_type::<MovementState>()
            .configure_sets(
                Update,
                (
                    LocomotionSystems::Input,
                    LocomotionSystems::Move,
                    LocomotionSystems::Orient,
                    LocomotionSystems::Animate,
                )
                    .chain(),
            )
            .add_systems(PostStartup, validate_rigs)
            .add_systems(
                Update,
                (read_input, read_actions).in_set(LocomotionSystems::Input),
            )
            .add_systems(Update, run_locomotion.in_set(LocomotionSystems::Move))
            .add_systems(Update, run_orientation.in_set(LocomotionSystems::Orient))
            .add_systems(
                Update,
                (update_actions, update_animation_params)
                    .chain()
                    .in_set(LocomotionSystems::Animate),
            )
            .add_systems(Last, clear_jump);
    }
}
