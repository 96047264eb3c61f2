//! Locomotion domain: components and physics layers for the character rig.

use avian3d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Walkable world geometry (floors, ramps, ledges, walls)
    Ground,
    /// Player character
    Player,
    /// Trigger volumes - never count as ground contact
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for the camera rig entity driven by the orientation phase.
#[derive(Component, Debug)]
pub struct CameraRig;

/// Explicit wiring from a character to the camera whose basis steers it.
#[derive(Component, Debug, Clone, Copy)]
pub struct LocomotionRig {
    pub camera: Option<Entity>,
}

impl LocomotionRig {
    pub fn new(camera: Entity) -> Self {
        Self {
            camera: Some(camera),
        }
    }
}

/// Collision capsule parameters the controller reads and partly mutates.
#[derive(Component, Debug, Clone)]
pub struct CharacterBody {
    pub radius: f32,
    pub height: f32,
    /// Step height restored whenever the character is grounded.
    pub configured_step_offset: f32,
    /// Live step height; zeroed while airborne.
    pub step_offset: f32,
    /// Maximum walkable slope in degrees.
    pub slope_limit: f32,
}

impl Default for CharacterBody {
    fn default() -> Self {
        Self::new(0.35, 1.8, 0.3, 45.0)
    }
}

impl CharacterBody {
    pub fn new(radius: f32, height: f32, step_offset: f32, slope_limit: f32) -> Self {
        Self {
            radius,
            height,
            configured_step_offset: step_offset,
            step_offset,
            slope_limit,
        }
    }

    /// Length of the cylindrical section of the capsule collider.
    pub fn capsule_length(&self) -> f32 {
        (self.height - 2.0 * self.radius).max(0.0)
    }

    pub fn collider(&self) -> Collider {
        Collider::capsule(self.radius, self.capsule_length())
    }
}
