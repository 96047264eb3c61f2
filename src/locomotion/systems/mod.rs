//! Locomotion domain: system modules for the per-tick pipeline.

pub(crate) mod input;
pub(crate) mod movement;
pub(crate) mod physics;
pub(crate) mod setup;

pub use input::update_latch;
pub(crate) use input::{clear_jump, read_actions, read_input};
pub(crate) use movement::{
    run_locomotion, run_orientation, update_actions, update_animation_params,
};
pub(crate) use setup::validate_rigs;
