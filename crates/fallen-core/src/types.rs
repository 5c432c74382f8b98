//! Core types used throughout the player system

use glam::{Mat3, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Squared distance below which two vectors are considered equal.
///
/// Matches the tolerance engines use for `Vector3 ==`, so a camera that has
/// eased to within this distance of its rest point counts as "at rest".
pub const VEC3_EQ_EPSILON_SQ: f32 = 9.999_999_4e-11;

/// Approximate vector equality with engine tolerance
pub fn approx_eq_vec3(a: Vec3, b: Vec3) -> bool {
    (a - b).length_squared() < VEC3_EQ_EPSILON_SQ
}

/// Rigid transform: position and rotation.
///
/// Right-handed, +Y up, forward is -Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    /// Create a new transform at the given position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a new transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Rotation for a heading in degrees. Positive yaw turns to the right.
    pub fn yaw_rotation(yaw_degrees: f32) -> Quat {
        Quat::from_rotation_y(-yaw_degrees.to_radians())
    }

    /// Rotation for a pitch in degrees. Negative values look up.
    pub fn pitch_rotation(pitch_degrees: f32) -> Quat {
        Quat::from_rotation_x(-pitch_degrees.to_radians())
    }

    /// Compute the model matrix for this transform
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }

    /// Get the forward direction (negative Z in local space)
    pub fn forward(&self) -> Vec3 {
        self.rotation * -Vec3::Z
    }

    /// Get the up direction (positive Y in local space)
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Look at a target position.
    ///
    /// Leaves the rotation unchanged when the target coincides with the
    /// position.
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        if let Some(rotation) = Self::look_rotation(target - self.position, up) {
            self.rotation = rotation;
        }
    }

    /// Rotation whose forward axis points along `direction`.
    pub fn look_rotation(direction: Vec3, up: Vec3) -> Option<Quat> {
        let forward = direction.try_normalize()?;
        let right = forward
            .cross(up)
            .try_normalize()
            // Looking straight along `up`: any horizontal right axis will do
            .or_else(|| forward.cross(Vec3::Z).try_normalize())?;
        let up = right.cross(forward);

        Some(Quat::from_mat3(&Mat3::from_cols(right, up, -forward)).normalize())
    }
}
