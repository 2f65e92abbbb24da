//! Orientation helpers.

use glam::{EulerRot, Mat3, Quat, Vec3};

/// Rotation mapping local +Z onto `forward` and local +Y as close to `up`
/// as possible.
///
/// Returns the identity when `forward` is zero or parallel to `up`.
pub fn look_rotation_safe(forward: Vec3, up: Vec3) -> Quat {
    let forward = forward.normalize_or_zero();
    if forward == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let right = up.cross(forward).normalize_or_zero();
    if right == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, forward))
}

/// Builds a rotation from Euler angles in degrees, applied Z first,
/// then X, then Y.
pub fn euler_degrees_to_quat(degrees: Vec3) -> Quat {
    let r = degrees * (std::f32::consts::PI / 180.0);
    Quat::from_euler(EulerRot::YXZ, r.y, r.x, r.z)
}
