//! Locomotion domain: avian-backed ground queries and collision body.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::components::CharacterBody;
use crate::locomotion::ground::{CollisionBody, GroundHit, GroundQuery};

/// Whether any overlapped collider is solid. Trigger volumes never count
/// as ground.
pub(crate) fn touches_solid(
    hits: impl IntoIterator<Item = Entity>,
    is_sensor: impl Fn(Entity) -> bool,
) -> bool {
    hits.into_iter().any(|entity| !is_sensor(entity))
}

/// Ground queries against the spatial query pipeline.
pub(crate) struct SpatialGround<'a, 'w, 's> {
    pub spatial_query: &'a SpatialQuery<'w, 's>,
    pub filter: SpatialQueryFilter,
    pub sensors: &'a Query<'w, 's, (), With<Sensor>>,
}

impl GroundQuery for SpatialGround<'_, '_, '_> {
    fn overlap_sphere(&self, center: Vec3, radius: f32) -> bool {
        let hits = self
            .spatial_query
            .shape_intersections(&Collider::sphere(radius), center, Quat::IDENTITY, &self.filter);
        touches_solid(hits, |entity| self.sensors.contains(entity))
    }

    fn cast_sphere_down(&self, origin: Vec3, radius: f32, max_distance: f32) -> Option<GroundHit> {
        self.spatial_query
            .cast_shape(
                &Collider::sphere(radius),
                origin,
                Quat::IDENTITY,
                Dir3::NEG_Y,
                &ShapeCastConfig::from_max_distance(max_distance),
                &self.filter,
            )
            .map(|hit| GroundHit {
                normal: hit.normal1,
                distance: hit.distance,
            })
    }
}

/// A dynamic rigid body steered through its linear velocity.
///
/// A move request becomes `LinearVelocity = displacement / dt`; the physics
/// step resolves it and the resolved value is read back next tick.
pub(crate) struct PhysicsBody<'a> {
    pub center: Vec3,
    pub body: &'a mut CharacterBody,
    pub velocity: &'a mut LinearVelocity,
    pub ground_contact: bool,
    pub dt: f32,
}

impl CollisionBody for PhysicsBody<'_> {
    fn center(&self) -> Vec3 {
        self.center
    }

    fn velocity(&self) -> Vec3 {
        self.velocity.0
    }

    fn radius(&self) -> f32 {
        self.body.radius
    }

    fn height(&self) -> f32 {
        self.body.height
    }

    fn step_offset(&self) -> f32 {
        self.body.step_offset
    }

    fn configured_step_offset(&self) -> f32 {
        self.body.configured_step_offset
    }

    fn set_step_offset(&mut self, offset: f32) {
        self.body.step_offset = offset;
    }

    fn slope_limit(&self) -> f32 {
        self.body.slope_limit
    }

    fn has_ground_contact(&self) -> bool {
        self.ground_contact
    }

    fn move_by(&mut self, displacement: Vec3) {
        if self.dt > 0.0 {
            self.velocity.0 = displacement / self.dt;
        }
    }
}
