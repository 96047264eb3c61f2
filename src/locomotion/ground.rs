//! Ground sensing: dual-strategy contact probe and surface normal lookup.
//!
//! While last tick's state was a ground state a static overlap sphere at the
//! feet decides contact. While it was airborne a downward sphere-cast from the
//! body centre decides, additionally requiring a walkable slope and the
//! physics contact flag. Switching on last tick's state avoids flicker at the
//! landing transition.

use bevy::prelude::*;

use crate::locomotion::math::slope_angle;
use crate::locomotion::resources::GroundProbeTuning;

/// Hit reported by a downward sphere-cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundHit {
    pub normal: Vec3,
    pub distance: f32,
}

/// World geometry queries, restricted to the ground collision mask.
pub trait GroundQuery {
    /// True when a sphere overlaps solid ground. Trigger volumes never count.
    fn overlap_sphere(&self, center: Vec3, radius: f32) -> bool;

    /// Sweep a sphere straight down from `origin`.
    fn cast_sphere_down(&self, origin: Vec3, radius: f32, max_distance: f32) -> Option<GroundHit>;
}

/// The character's collision body as seen by the controller.
pub trait CollisionBody {
    /// Centre of the capsule in world space.
    fn center(&self) -> Vec3;
    /// Velocity resolved by physics after the previous move request.
    fn velocity(&self) -> Vec3;
    fn radius(&self) -> f32;
    fn height(&self) -> f32;
    /// Live step offset, zero while airborne.
    fn step_offset(&self) -> f32;
    /// Step offset the body was configured with.
    fn configured_step_offset(&self) -> f32;
    fn set_step_offset(&mut self, offset: f32);
    /// Maximum walkable slope in degrees.
    fn slope_limit(&self) -> f32;
    /// Physics-level contact with ground during the last resolved move.
    fn has_ground_contact(&self) -> bool;
    /// Request a displacement; resolution against the world happens downstream.
    fn move_by(&mut self, displacement: Vec3);
}

/// Fresh every tick, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundProbeResult {
    pub is_grounded: bool,
    pub surface_normal: Vec3,
}

impl Default for GroundProbeResult {
    fn default() -> Self {
        Self {
            is_grounded: false,
            surface_normal: Vec3::Y,
        }
    }
}

/// Decide ground contact. `currently_grounded` is ground-group membership of
/// last tick's state and picks the strategy.
pub fn probe<B, G>(
    body: &B,
    ground: &G,
    currently_grounded: bool,
    tuning: &GroundProbeTuning,
) -> GroundProbeResult
where
    B: CollisionBody + ?Sized,
    G: GroundQuery + ?Sized,
{
    if currently_grounded {
        let foot_center = body.center()
            - Vec3::Y * (body.height() * 0.5 - body.radius() + tuning.ground_check_offset);
        GroundProbeResult {
            is_grounded: ground.overlap_sphere(foot_center, body.radius()),
            surface_normal: Vec3::Y,
        }
    } else {
        match cast_down(body, ground, tuning) {
            Some(hit) => {
                let normal = hit.normal.try_normalize().unwrap_or(Vec3::Y);
                GroundProbeResult {
                    is_grounded: slope_angle(normal) <= body.slope_limit()
                        && body.has_ground_contact(),
                    surface_normal: normal,
                }
            }
            None => GroundProbeResult::default(),
        }
    }
}

/// Normal of the surface below the body, world up when nothing is hit.
pub fn surface_normal<B, G>(body: &B, ground: &G, tuning: &GroundProbeTuning) -> Vec3
where
    B: CollisionBody + ?Sized,
    G: GroundQuery + ?Sized,
{
    cast_down(body, ground, tuning)
        .and_then(|hit| hit.normal.try_normalize())
        .unwrap_or(Vec3::Y)
}

fn cast_down<B, G>(body: &B, ground: &G, tuning: &GroundProbeTuning) -> Option<GroundHit>
where
    B: CollisionBody + ?Sized,
    G: GroundQuery + ?Sized,
{
    let distance = body.height() * 0.5 + body.step_offset() + tuning.cast_epsilon;
    ground.cast_sphere_down(body.center(), body.radius(), distance)
}
