//! Per-tick orchestration of ground sensing, classification and integration.

use bevy::prelude::*;

use crate::locomotion::classifier::classify;
use crate::locomotion::ground::{CollisionBody, GroundProbeResult, GroundQuery, probe, surface_normal};
use crate::locomotion::integrator::CameraBasis;
use crate::locomotion::resources::{InputSnapshot, LocomotionTuning};
use crate::locomotion::state::{KinematicState, MovementState};

/// Locomotion memory for one character.
///
/// Beyond the kinematic accumulator the only cross-tick fields are the
/// previous state (anti-bump edge) and the jump latch inside `kinematics`.
#[derive(Component, Debug, Clone, Default)]
pub struct LocomotionController {
    pub state: MovementState,
    pub previous_state: MovementState,
    pub kinematics: KinematicState,
    pub last_probe: GroundProbeResult,
}

impl LocomotionController {
    /// Run one simulation tick: classify, integrate vertical, integrate
    /// horizontal and request the displacement from the body.
    pub fn tick<B, G>(
        &mut self,
        tuning: &LocomotionTuning,
        input: &InputSnapshot,
        camera: CameraBasis,
        body: &mut B,
        ground: &G,
        dt: f32,
    ) -> MovementState
    where
        B: CollisionBody + ?Sized,
        G: GroundQuery + ?Sized,
    {
        // Strategy follows last tick's state group, never the raw probe result.
        let ground_probe = probe(&*body, ground, self.state.is_grounded(), &tuning.ground);
        self.last_probe = ground_probe;

        let resolved_velocity = body.velocity();
        self.previous_state = self.state;
        self.state = classify(
            input,
            &mut self.kinematics,
            resolved_velocity,
            &ground_probe,
            self.previous_state,
            &tuning.movement,
        );

        let step_offset = self
            .kinematics
            .step_offset_override
            .unwrap_or_else(|| body.configured_step_offset());
        body.set_step_offset(step_offset);

        self.kinematics.integrate_vertical(
            input,
            self.state.is_grounded(),
            self.previous_state,
            &tuning.vertical,
            dt,
        );

        let steep_normal = if self.state.is_airborne() {
            Some((surface_normal(&*body, ground, &tuning.ground), body.slope_limit()))
        } else {
            None
        };

        let velocity = self.kinematics.integrate_horizontal(
            self.state,
            camera,
            input,
            resolved_velocity,
            steep_normal,
            &tuning.movement,
            dt,
        );
        body.move_by(velocity * dt);

        self.state
    }
}
