//! Locomotion domain: per-tick movement, orientation and animation systems.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::action::ActionInput;
use crate::locomotion::animation::AnimationParams;
use crate::locomotion::components::{CameraRig, CharacterBody, Ground, GameLayer, LocomotionRig, Player};
use crate::locomotion::controller::LocomotionController;
use crate::locomotion::integrator::CameraBasis;
use crate::locomotion::math::{look_rotation, yaw_rotation};
use crate::locomotion::resources::{InputSnapshot, LocomotionTuning};
use crate::locomotion::state::OrientationState;
use crate::locomotion::systems::physics::{PhysicsBody, SpatialGround};

pub(crate) fn run_locomotion(
    time: Res<Time>,
    tuning: Res<LocomotionTuning>,
    input: Res<InputSnapshot>,
    spatial_query: SpatialQuery,
    sensors: Query<(), With<Sensor>>,
    grounds: Query<(), With<Ground>>,
    cameras: Query<&GlobalTransform, With<Camera>>,
    mut query: Query<
        (
            Entity,
            &Transform,
            &LocomotionRig,
            &mut CharacterBody,
            &mut LinearVelocity,
            &mut LocomotionController,
            Option<&CollidingEntities>,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    for (entity, transform, rig, mut body, mut velocity, mut controller, colliding) in &mut query {
        // Wiring is validated at startup; a character losing its camera later is skipped.
        let Some(camera) = rig.camera.and_then(|camera| cameras.get(camera).ok()) else {
            continue;
        };
        let basis = CameraBasis {
            forward: *camera.forward(),
            right: *camera.right(),
        };

        let ground = SpatialGround {
            spatial_query: &spatial_query,
            filter: SpatialQueryFilter::from_mask(GameLayer::Ground).with_excluded_entities([entity]),
            sensors: &sensors,
        };
        let ground_contact = colliding
            .is_some_and(|colliding| colliding.iter().any(|other| grounds.contains(*other)));
        let mut physics_body = PhysicsBody {
            center: transform.translation,
            body: &mut *body,
            velocity: &mut *velocity,
            ground_contact,
            dt,
        };

        controller.tick(&tuning, &input, basis, &mut physics_body, &ground, dt);
    }
}

pub(crate) fn run_orientation(
    time: Res<Time>,
    tuning: Res<LocomotionTuning>,
    input: Res<InputSnapshot>,
    mut players: Query<
        (&LocomotionController, &LocomotionRig, &mut OrientationState, &mut Transform),
        (With<Player>, Without<CameraRig>),
    >,
    mut rigs: Query<&mut Transform, (With<CameraRig>, Without<Player>)>,
) {
    let dt = time.delta_secs();

    for (controller, rig, mut orientation, mut transform) in &mut players {
        let output = orientation.update(&input, controller.state, &tuning.look, dt);
        transform.rotation = yaw_rotation(output.body_yaw);

        if let Some(mut camera_transform) = rig.camera.and_then(|camera| rigs.get_mut(camera).ok()) {
            camera_transform.rotation = look_rotation(output.camera_yaw, output.camera_pitch);
        }
    }
}

pub(crate) fn update_actions(
    time: Res<Time>,
    tuning: Res<LocomotionTuning>,
    input: Res<InputSnapshot>,
    mut actions: ResMut<ActionInput>,
    players: Query<&LocomotionController, With<Player>>,
) {
    let Ok(controller) = players.single() else {
        return;
    };
    actions.update(&input, controller.state, &tuning.action, time.delta_secs());
}

pub(crate) fn update_animation_params(
    time: Res<Time>,
    tuning: Res<LocomotionTuning>,
    input: Res<InputSnapshot>,
    actions: Res<ActionInput>,
    mut query: Query<(&LocomotionController, &OrientationState, &mut AnimationParams), With<Player>>,
) {
    let dt = time.delta_secs();

    for (controller, orientation, mut params) in &mut query {
        params.update(
            controller.state,
            &input,
            &orientation.output(),
            &actions,
            &tuning.animation,
            dt,
        );
    }
}
