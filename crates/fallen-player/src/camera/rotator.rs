//! Mouse look: yaw on the body, clamped pitch on the camera

use fallen_core::Transform;
use glam::Vec2;

use super::{CameraPose, LookConfig};

/// Applies look input.
///
/// Yaw is accumulated on the body without bounds. Pitch is kept in its own
/// accumulator and written only to the camera, so the two axes never
/// combine into roll.
#[derive(Debug, Clone)]
pub struct CameraRotator {
    pub config: LookConfig,
    /// Pitch in degrees; negative looks up
    vertical_rotation: f32,
}

impl CameraRotator {
    pub fn new(config: LookConfig) -> Self {
        Self {
            config: config.clamped(),
            vertical_rotation: 0.0,
        }
    }

    /// Current pitch in degrees
    pub fn pitch(&self) -> f32 {
        self.vertical_rotation
    }

    pub fn tick(&mut self, look_axis: Vec2, body_yaw_degrees: &mut f32, pose: &mut CameraPose) {
        *body_yaw_degrees += look_axis.x * self.config.mouse_sensitivity;

        let range = self.config.up_down_range;
        self.vertical_rotation -= look_axis.y * self.config.mouse_sensitivity;
        // Must not panic if `config` was edited to a negative or NaN range
        self.vertical_rotation = self.vertical_rotation.max(-range).min(range);
        pose.pitch = Transform::pitch_rotation(self.vertical_rotation);
    }
}

impl Default for CameraRotator {
    fn default() -> Self {
        Self::new(LookConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaw_is_unbounded() {
        let mut rotator = CameraRotator::default();
        let mut pose = CameraPose::default();
        let mut yaw = 0.0;

        for _ in 0..100 {
            rotator.tick(Vec2::new(5.0, 0.0), &mut yaw, &mut pose);
        }
        assert_eq!(yaw, 1000.0);
    }

    #[test]
    fn test_mouse_up_looks_up() {
        let mut rotator = CameraRotator::default();
        let mut pose = CameraPose::default();
        let mut yaw = 0.0;

        rotator.tick(Vec2::new(0.0, 10.0), &mut yaw, &mut pose);
        assert_eq!(rotator.pitch(), -20.0);
        assert!((pose.pitch * -glam::Vec3::Z).y > 0.0);
        assert_eq!(yaw, 0.0);
    }

    #[test]
    fn test_pitch_stays_clamped() {
        let mut rotator = CameraRotator::default();
        let mut pose = CameraPose::default();
        let mut yaw = 0.0;
        let range = rotator.config.up_down_range;

        let inputs = [30.0, 500.0, -7.5, -1000.0, 0.25, f32::MAX / 4.0, -3.0];
        for y in inputs {
            rotator.tick(Vec2::new(0.0, y), &mut yaw, &mut pose);
            assert!(rotator.pitch() >= -range && rotator.pitch() <= range);
        }

        rotator.tick(Vec2::new(0.0, 1000.0), &mut yaw, &mut pose);
        assert_eq!(rotator.pitch(), -range);
        rotator.tick(Vec2::new(0.0, -1000.0), &mut yaw, &mut pose);
        assert_eq!(rotator.pitch(), range);
    }

    #[test]
    fn test_clamp_does_not_accumulate_overshoot() {
        let mut rotator = CameraRotator::default();
        let mut pose = CameraPose::default();
        let mut yaw = 0.0;

        rotator.tick(Vec2::new(0.0, -1000.0), &mut yaw, &mut pose);
        rotator.tick(Vec2::new(0.0, 1.0), &mut yaw, &mut pose);
        assert_eq!(rotator.pitch(), 86.0);
    }

    #[test]
    fn test_negative_range_from_settings() {
        let look: LookConfig = toml::from_str("up_down_range = -10.0").unwrap();
        let mut rotator = CameraRotator::new(look);
        let mut pose = CameraPose::default();
        let mut yaw = 0.0;

        rotator.tick(Vec2::new(0.0, 1.0), &mut yaw, &mut pose);
        assert_eq!(rotator.pitch(), -2.0);
        rotator.tick(Vec2::new(0.0, 100.0), &mut yaw, &mut pose);
        assert_eq!(rotator.pitch(), -10.0);
    }

    #[test]
    fn test_edited_range_never_panics() {
        let mut rotator = CameraRotator::default();
        let mut pose = CameraPose::default();
        let mut yaw = 0.0;

        rotator.config.up_down_range = -5.0;
        rotator.tick(Vec2::new(0.0, 1.0), &mut yaw, &mut pose);
        rotator.config.up_down_range = f32::NAN;
        rotator.tick(Vec2::new(0.0, 1.0), &mut yaw, &mut pose);
        assert!(rotator.pitch().is_finite());
    }
}
