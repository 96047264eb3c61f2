//! Dev tools: a test arena and gizmos for the ground probe and velocity.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::{
    CharacterBody, GameLayer, Ground, LocomotionController, LocomotionSystems, LocomotionTuning,
    Player,
};

pub struct DevToolsPlugin;

impl Plugin for DevToolsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_test_arena)
            .add_systems(Update, draw_locomotion_gizmos.after(LocomotionSystems::Move));
    }
}

/// Floor, a walkable ramp, a ramp too steep to stand on, a raised ledge to
/// walk off, and a trigger volume that must never count as ground.
fn spawn_test_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground_color = materials.add(Color::srgb(0.4, 0.5, 0.4));
    let ramp_color = materials.add(Color::srgb(0.5, 0.4, 0.3));
    let steep_color = materials.add(Color::srgb(0.6, 0.3, 0.3));
    let trigger_color = materials.add(StandardMaterial {
        base_color: Color::srgba(0.3, 0.5, 0.9, 0.3),
        alpha_mode: AlphaMode::Blend,
        ..default()
    });

    // Floor
    spawn_ground(
        &mut commands,
        &mut meshes,
        ground_color,
        Vec3::new(60.0, 1.0, 60.0),
        Transform::from_xyz(0.0, -0.5, 0.0),
    );

    // Walkable ramp, 25 degrees
    spawn_ground(
        &mut commands,
        &mut meshes,
        ramp_color.clone(),
        Vec3::new(4.0, 0.4, 10.0),
        Transform::from_xyz(-8.0, 1.0, -8.0).with_rotation(Quat::from_rotation_x(25f32.to_radians())),
    );

    // Steep ramp, 60 degrees
    spawn_ground(
        &mut commands,
        &mut meshes,
        steep_color,
        Vec3::new(4.0, 0.4, 8.0),
        Transform::from_xyz(0.0, 2.5, -10.0).with_rotation(Quat::from_rotation_x(60f32.to_radians())),
    );

    // Raised ledge
    spawn_ground(
        &mut commands,
        &mut meshes,
        ramp_color,
        Vec3::new(6.0, 2.0, 6.0),
        Transform::from_xyz(8.0, 1.0, -8.0),
    );

    // Trigger volume on the floor
    let trigger_size = Vec3::new(3.0, 2.0, 3.0);
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::from_size(trigger_size))),
        MeshMaterial3d(trigger_color),
        Transform::from_xyz(0.0, 1.0, 6.0),
        RigidBody::Static,
        Collider::cuboid(trigger_size.x, trigger_size.y, trigger_size.z),
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
        Sensor,
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 12000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -0.8, 0.4, 0.0)),
    ));

    info!("Spawned locomotion test arena");
}

fn spawn_ground(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    material: Handle<StandardMaterial>,
    size: Vec3,
    transform: Transform,
) {
    commands.spawn((
        Ground,
        Mesh3d(meshes.add(Cuboid::from_size(size))),
        MeshMaterial3d(material),
        transform,
        RigidBody::Static,
        Collider::cuboid(size.x, size.y, size.z),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
    ));
}

/// Foot overlap sphere (green when grounded) and the requested velocity.
fn draw_locomotion_gizmos(
    mut gizmos: Gizmos,
    tuning: Res<LocomotionTuning>,
    players: Query<(&Transform, &CharacterBody, &LocomotionController), With<Player>>,
) {
    for (transform, body, controller) in &players {
        let center = transform.translation;
        let foot_center = center
            - Vec3::Y * (body.height * 0.5 - body.radius + tuning.ground.ground_check_offset);
        let probe_color = if controller.last_probe.is_grounded {
            Color::srgb(0.2, 0.9, 0.2)
        } else {
            Color::srgb(0.9, 0.2, 0.2)
        };
        gizmos.sphere(Isometry3d::from_translation(foot_center), body.radius, probe_color);

        let normal = controller.last_probe.surface_normal;
        gizmos.arrow(foot_center, foot_center + normal, Color::srgb(0.2, 0.4, 0.9));

        let velocity = controller.kinematics.velocity();
        if velocity.length_squared() > 0.0 {
            gizmos.arrow(center, center + velocity * 0.25, Color::srgb(0.9, 0.8, 0.2));
        }
    }
}
