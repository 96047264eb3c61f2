use avian3d::prelude::*;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions, PrimaryWindow};

use stride::content::ContentPlugin;
use stride::locomotion::{
    AnimationParams, CameraRig, CharacterBody, GameLayer, LocomotionController, LocomotionPlugin,
    LocomotionRig, LocomotionSystems, OrientationState, Player,
};

/// Pivot above the character's centre the camera orbits around.
const CAMERA_PIVOT_HEIGHT: f32 = 0.6;
const CAMERA_DISTANCE: f32 = 4.0;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Stride".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((ContentPlugin, LocomotionPlugin))
    .add_systems(Startup, (spawn_player, grab_cursor))
    .add_systems(Update, toggle_cursor_grab)
    .add_systems(Update, follow_player.after(LocomotionSystems::Orient));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(stride::dev::DevToolsPlugin);

    app.run();
}

fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let camera = commands
        .spawn((
            Camera3d::default(),
            CameraRig,
            Transform::from_xyz(0.0, 2.6, CAMERA_DISTANCE),
        ))
        .id();

    let body = CharacterBody::default();
    commands.spawn((
        // Identity & locomotion
        (
            Player,
            LocomotionRig::new(camera),
            LocomotionController::default(),
            OrientationState::default(),
            AnimationParams::default(),
        ),
        // Rendering
        Mesh3d(meshes.add(Capsule3d::new(body.radius, body.capsule_length()))),
        MeshMaterial3d(materials.add(Color::srgb(0.9, 0.9, 0.9))),
        Transform::from_xyz(0.0, 2.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            body.collider(),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // Gravity is integrated by the controller
            Friction::new(0.0),
            CollidingEntities::default(),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Sensor]),
        ),
        body,
    ));
}

/// Keep each rig's camera orbiting its character at a fixed distance.
fn follow_player(
    players: Query<(&Transform, &LocomotionRig), (With<Player>, Without<CameraRig>)>,
    mut rigs: Query<&mut Transform, (With<CameraRig>, Without<Player>)>,
) {
    for (transform, rig) in &players {
        let Some(mut camera) = rig.camera.and_then(|camera| rigs.get_mut(camera).ok()) else {
            continue;
        };
        let pivot = transform.translation + Vec3::Y * CAMERA_PIVOT_HEIGHT;
        camera.translation = pivot + camera.rotation * Vec3::Z * CAMERA_DISTANCE;
    }
}

fn grab_cursor(mut cursors: Query<&mut CursorOptions, With<PrimaryWindow>>) {
    if let Ok(mut cursor) = cursors.single_mut() {
        cursor.grab_mode = CursorGrabMode::Locked;
        cursor.visible = false;
    }
}

fn toggle_cursor_grab(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut cursors: Query<&mut CursorOptions, With<PrimaryWindow>>,
) {
    let Ok(mut cursor) = cursors.single_mut() else {
        return;
    };

    if keyboard.just_pressed(KeyCode::Escape) {
        cursor.grab_mode = CursorGrabMode::None;
        cursor.visible = true;
    } else if mouse.just_pressed(MouseButton::Left) && cursor.grab_mode == CursorGrabMode::None {
        cursor.grab_mode = CursorGrabMode::Locked;
        cursor.visible = false;
    }
}
