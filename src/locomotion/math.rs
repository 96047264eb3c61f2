//! Small vector helpers shared by the integrator and orientation phases.

use bevy::prelude::*;

/// Project onto the horizontal plane and normalise, `None` when degenerate.
pub fn flatten(v: Vec3) -> Option<Vec3> {
    Vec3::new(v.x, 0.0, v.z).try_normalize()
}

/// Horizontal part of `v` with `y` dropped, not normalised.
pub fn horizontal(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Forward vector of a yaw given in degrees.
pub fn yaw_forward(yaw: f32) -> Vec3 {
    Quat::from_rotation_y(yaw.to_radians()) * Vec3::NEG_Z
}

pub fn yaw_rotation(yaw: f32) -> Quat {
    Quat::from_rotation_y(yaw.to_radians())
}

/// Camera rotation from yaw and pitch, both in degrees.
pub fn look_rotation(yaw: f32, pitch: f32) -> Quat {
    Quat::from_euler(EulerRot::YXZ, yaw.to_radians(), pitch.to_radians(), 0.0)
}

/// Shortest signed difference `to - from`, wrapped to (-180, 180].
pub fn delta_angle(from: f32, to: f32) -> f32 {
    let d = (to - from).rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Signed angle in degrees from `from` to `to` about world up.
/// A zero cross product counts as positive.
pub fn signed_angle_about_up(from: Vec3, to: Vec3) -> f32 {
    let angle = from.angle_between(to).to_degrees();
    if from.cross(to).dot(Vec3::Y) >= 0.0 {
        angle
    } else {
        -angle
    }
}

/// Angle between a surface normal and world up, in degrees.
pub fn slope_angle(normal: Vec3) -> f32 {
    normal.angle_between(Vec3::Y).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_angle_wraps_shortest_way() {
        assert_eq!(delta_angle(10.0, 30.0), 20.0);
        assert_eq!(delta_angle(350.0, 10.0), 20.0);
        assert_eq!(delta_angle(10.0, 350.0), -20.0);
        assert_eq!(delta_angle(0.0, 180.0), 180.0);
    }

    #[test]
    fn test_flatten_rejects_vertical_vectors() {
        assert!(flatten(Vec3::NEG_Y).is_none());
        let flat = flatten(Vec3::new(0.0, -0.9, -0.1)).unwrap();
        assert!((flat - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_signed_angle_sign_follows_handedness() {
        let forward = yaw_forward(0.0);
        let left = yaw_forward(30.0);
        assert!((signed_angle_about_up(forward, left) - 30.0).abs() < 1e-3);
        assert!((signed_angle_about_up(left, forward) + 30.0).abs() < 1e-3);
    }

    #[test]
    fn test_slope_angle() {
        assert!(slope_angle(Vec3::Y).abs() < 1e-4);
        let n = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert!((slope_angle(n) - 45.0).abs() < 1e-3);
    }
}
