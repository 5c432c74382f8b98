//! Deterministic mover over an infinite horizontal floor

use glam::Vec3;

use crate::PhysicsMover;

/// Body moving over a flat floor at `ground_height` with no other obstacles.
///
/// Any downward displacement that would sink below the floor is clipped,
/// which both grounds the body and removes the clipped part from its velocity.
#[derive(Debug, Clone)]
pub struct FlatGroundMover {
    /// Height of the floor plane
    pub ground_height: f32,
    position: Vec3,
    velocity: Vec3,
    grounded: bool,
}

impl FlatGroundMover {
    /// Create a mover standing at `position`.
    ///
    /// A body placed on (or below) the floor starts grounded.
    pub fn new(position: Vec3, ground_height: f32) -> Self {
        let grounded = position.y <= ground_height;
        Self {
            ground_height,
            position: Vec3::new(position.x, position.y.max(ground_height), position.z),
            velocity: Vec3::ZERO,
            grounded,
        }
    }

    /// Create a mover standing on a floor at height zero
    pub fn on_ground(position: Vec3) -> Self {
        Self::new(Vec3::new(position.x, 0.0, position.z), 0.0)
    }
}

impl PhysicsMover for FlatGroundMover {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn move_character(&mut self, displacement: Vec3, dt: f32) {
        let start = self.position;
        let mut target = start + displacement;

        self.grounded = target.y <= self.ground_height;
        if self.grounded {
            target.y = self.ground_height;
        }

        self.position = target;
        self.velocity = if dt > 0.0 { (target - start) / dt } else { Vec3::ZERO };
    }
}
