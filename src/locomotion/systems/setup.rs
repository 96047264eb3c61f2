//! Locomotion domain: one-time wiring validation.

use avian3d::prelude::*;
use bevy::ecs::error::BevyError;
use bevy::prelude::*;

use crate::locomotion::components::{CharacterBody, LocomotionRig, Player};
use crate::locomotion::error::SetupError;
use crate::locomotion::resources::LocomotionTuning;

/// Fail fast on missing collaborators instead of polling for them every tick.
pub(crate) fn validate_rigs(
    tuning: Res<LocomotionTuning>,
    players: Query<(Entity, Option<&LocomotionRig>, Has<CharacterBody>, Has<Collider>), With<Player>>,
    cameras: Query<(), With<Camera>>,
) -> Result<(), BevyError> {
    let violations = tuning.validate();
    if !violations.is_empty() {
        return Err(SetupError::InvalidTuning(violations).into());
    }

    for (player, rig, has_body, has_collider) in &players {
        let camera = check_rig(player, rig, has_body && has_collider, |camera| {
            cameras.contains(camera)
        })?;
        info!("Locomotion rig ready: player={}, camera={}", player, camera);
    }

    Ok(())
}

/// Resolve one player's camera, or the first wiring fault found.
pub(crate) fn check_rig(
    player: Entity,
    rig: Option<&LocomotionRig>,
    has_body: bool,
    camera_exists: impl Fn(Entity) -> bool,
) -> Result<Entity, SetupError> {
    let Some(rig) = rig else {
        return Err(SetupError::MissingRig(player));
    };
    if !has_body {
        return Err(SetupError::MissingBody(player));
    }
    let Some(camera) = rig.camera else {
        return Err(SetupError::MissingCamera(player));
    };
    if !camera_exists(camera) {
        return Err(SetupError::CameraNotFound { player, camera });
    }
    Ok(camera)
}
