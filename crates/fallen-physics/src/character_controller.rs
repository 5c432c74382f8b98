//! Capsule character built on rapier3d's kinematic character controller

use glam::Vec3;
use rapier3d::control::{CharacterAutostep, CharacterLength, KinematicCharacterController};
use rapier3d::prelude::*;
use tracing::debug;

use crate::PhysicsWorld;

/// Character controller configuration
#[derive(Debug, Clone)]
pub struct CharacterControllerConfig {
    /// Capsule height (default: 1.8m)
    pub height: f32,
    /// Capsule radius (default: 0.4m)
    pub radius: f32,
    /// Maximum slope angle in degrees (default: 45)
    pub max_slope_angle: f32,
    /// Step height for climbing stairs (default: 0.25m)
    pub step_height: f32,
    /// Skin width for collision detection (default: 0.02m)
    pub skin_width: f32,
    /// Whether to snap to ground when walking down slopes
    pub snap_to_ground: bool,
    /// Maximum ground snap distance
    pub ground_snap_distance: f32,
}

impl Default for CharacterControllerConfig {
    fn default() -> Self {
        Self {
            height: 1.8,
            radius: 0.4,
            max_slope_angle: 45.0,
            step_height: 0.25,
            skin_width: 0.02,
            snap_to_ground: true,
            ground_snap_distance: 0.2,
        }
    }
}

/// Capsule that moves through a [`PhysicsWorld`] with collision resolution.
///
/// `position` is the bottom of the capsule (the feet).
pub struct CharacterController {
    /// Configuration
    pub config: CharacterControllerConfig,
    /// Current position
    pub position: Vec3,
    /// Velocity of the last move (applied translation / dt)
    pub velocity: Vec3,
    /// Whether the last move ended on walkable ground
    pub grounded: bool,
    /// The collider handle for this character
    pub collider_handle: Option<ColliderHandle>,
    /// Rapier's kinematic character controller
    controller: KinematicCharacterController,
}

impl CharacterController {
    /// Create a new character controller with default config
    pub fn new() -> Self {
        Self::with_config(CharacterControllerConfig::default())
    }

    /// Create a new character controller with custom config
    pub fn with_config(config: CharacterControllerConfig) -> Self {
        let mut controller = KinematicCharacterController::default();
        controller.max_slope_climb_angle = config.max_slope_angle.to_radians();
        controller.min_slope_slide_angle = config.max_slope_angle.to_radians();
        controller.autostep = Some(CharacterAutostep {
            max_height: CharacterLength::Absolute(config.step_height),
            min_width: CharacterLength::Relative(0.5),
            include_dynamic_bodies: true,
        });
        controller.snap_to_ground = if config.snap_to_ground {
            Some(CharacterLength::Absolute(config.ground_snap_distance))
        } else {
            None
        };
        controller.offset = CharacterLength::Absolute(config.skin_width);

        Self {
            config,
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            grounded: false,
            collider_handle: None,
            controller,
        }
    }

    /// Spawn the character's capsule in the physics world
    pub fn spawn(&mut self, physics: &mut PhysicsWorld, position: Vec3) -> ColliderHandle {
        self.position = position;

        let half_height = (self.config.height - 2.0 * self.config.radius) / 2.0;
        let collider = ColliderBuilder::capsule_y(half_height.max(0.01), self.config.radius)
            .translation(self.capsule_center(position))
            .friction(0.0) // Smooth sliding against walls
            .restitution(0.0)
            .build();

        let handle = physics.add_static_collider(collider);
        self.collider_handle = Some(handle);
        debug!("Spawned character capsule at {:?}", position);
        handle
    }

    fn capsule_center(&self, position: Vec3) -> Vector<Real> {
        vector![position.x, position.y + self.config.height / 2.0, position.z]
    }

    /// Move the character with collision detection.
    ///
    /// Does nothing until the character has been spawned.
    pub fn move_character(&mut self, physics: &mut PhysicsWorld, desired_translation: Vec3, dt: f32) {
        let Some(collider_handle) = self.collider_handle else {
            return;
        };

        let Some(collider) = physics.collider_set.get(collider_handle) else {
            return;
        };

        let shape = collider.shape();
        let center = self.capsule_center(self.position);
        let current_pos = Isometry::translation(center.x, center.y, center.z);

        let movement = self.controller.move_shape(
            dt,
            &physics.rigid_body_set,
            &physics.collider_set,
            &physics.query_pipeline,
            shape,
            &current_pos,
            vector![desired_translation.x, desired_translation.y, desired_translation.z],
            QueryFilter::default().exclude_collider(collider_handle),
            |_| {},
        );

        self.grounded = movement.grounded;

        let effective = Vec3::new(
            movement.translation.x,
            movement.translation.y,
            movement.translation.z,
        );
        self.position += effective;
        self.velocity = if dt > 0.0 { effective / dt } else { Vec3::ZERO };

        let center = self.capsule_center(self.position);
        if let Some(collider) = physics.collider_set.get_mut(collider_handle) {
            collider.set_translation(center);
        }
    }

    /// Set the character's position directly (teleport)
    pub fn set_position(&mut self, physics: &mut PhysicsWorld, position: Vec3) {
        self.position = position;
        self.velocity = Vec3::ZERO;

        let center = self.capsule_center(position);
        if let Some(handle) = self.collider_handle {
            if let Some(collider) = physics.collider_set.get_mut(handle) {
                collider.set_translation(center);
            }
        }
    }

    /// Check if standing on ground
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }
}

impl Default for CharacterController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_controller_config() {
        let config = CharacterControllerConfig::default();
        assert_eq!(config.height, 1.8);
        assert_eq!(config.radius, 0.4);
        assert_eq!(config.max_slope_angle, 45.0);
    }

    #[test]
    fn test_unspawned_character_does_not_move() {
        let mut physics = PhysicsWorld::new();
        let mut controller = CharacterController::new();
        controller.move_character(&mut physics, Vec3::new(1.0, 0.0, 0.0), 1.0 / 60.0);
        assert_eq!(controller.position, Vec3::ZERO);
        assert_eq!(controller.velocity, Vec3::ZERO);
    }

    #[test]
    fn test_free_move_reports_velocity() {
        let mut physics = PhysicsWorld::new();
        let mut controller = CharacterController::new();
        controller.spawn(&mut physics, Vec3::new(0.0, 10.0, 0.0));
        physics.update_queries();

        controller.move_character(&mut physics, Vec3::new(0.5, 0.0, 0.0), 0.5);
        assert!((controller.position.x - 0.5).abs() < 1e-3);
        assert!((controller.velocity.x - 1.0).abs() < 1e-2);
        assert!(!controller.is_grounded());
    }

    #[test]
    fn test_floor_blocks_descent() {
        let mut physics = PhysicsWorld::new();
        physics.create_ground(0.0);
        let mut controller = CharacterController::new();
        controller.spawn(&mut physics, Vec3::new(0.0, 1.0, 0.0));
        physics.update_queries();

        controller.move_character(&mut physics, Vec3::new(0.0, -3.0, 0.0), 1.0 / 60.0);
        assert!(controller.position.y > -0.05);
        assert!(controller.position.y < 1.0);
        assert!(controller.velocity.y < 0.0);
    }
}
