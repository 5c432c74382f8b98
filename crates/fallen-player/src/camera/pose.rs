//! Camera pose threaded through the per-tick pipeline

use fallen_core::Transform;
use glam::{Mat4, Quat, Vec3};

/// Pivot under the body that carries the camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraHolder {
    /// Offset from the body origin; `y` is the eye height
    pub local_position: Vec3,
}

impl CameraHolder {
    pub fn new(local_position: Vec3) -> Self {
        Self { local_position }
    }

    /// Holder forward for a body orientation and camera pitch
    pub fn forward(&self, body: &Transform, pitch: Quat) -> Vec3 {
        body.rotation * pitch * -Vec3::Z
    }
}

impl Default for CameraHolder {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 1.6, 0.0))
    }
}

/// The camera's state for the current tick.
///
/// The rotator writes `pitch`, the bobber writes `local_position` and then
/// `rotation`. Nothing else writes the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Position relative to the camera holder
    pub local_position: Vec3,
    /// Local pitch set by mouse look
    pub pitch: Quat,
    /// World rotation after focus-aim
    pub rotation: Quat,
}

impl CameraPose {
    pub fn new(local_position: Vec3) -> Self {
        Self {
            local_position,
            pitch: Quat::IDENTITY,
            rotation: Quat::IDENTITY,
        }
    }

    /// World-space eye position
    pub fn eye_position(&self, body: &Transform, holder: &CameraHolder) -> Vec3 {
        body.position + body.rotation * (holder.local_position + self.local_position)
    }

    /// World transform of the camera
    pub fn world_transform(&self, body: &Transform, holder: &CameraHolder) -> Transform {
        Transform::from_position_rotation(self.eye_position(body, holder), self.rotation)
    }

    /// View matrix for rendering
    pub fn view_matrix(&self, body: &Transform, holder: &CameraHolder) -> Mat4 {
        self.world_transform(body, holder).matrix().inverse()
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}
