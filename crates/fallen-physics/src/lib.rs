//! Fallen Physics - Collision-aware movers for the player
//!
//! The player pipeline only ever talks to a [`PhysicsMover`]. This crate
//! provides the trait and two implementations: a rapier3d kinematic capsule
//! and a deterministic flat-ground mover.

mod character_controller;
mod flat_ground;
mod mover;

pub use character_controller::{CharacterController, CharacterControllerConfig};
pub use flat_ground::FlatGroundMover;
pub use mover::{KinematicMover, PhysicsMover};

use glam::Vec3;
use nalgebra::Unit;
use rapier3d::prelude::*;

/// Static collision geometry the kinematic character moves through.
///
/// Nothing here is simulated: colliders are placed once and the character
/// controller sweeps its capsule against them through the query pipeline.
pub struct PhysicsWorld {
    /// Rigid body storage (only needed by rapier's shape-cast queries)
    pub rigid_body_set: RigidBodySet,
    /// Collider storage
    pub collider_set: ColliderSet,
    /// Query pipeline for shape casts
    query_pipeline: QueryPipeline,
}

impl PhysicsWorld {
    /// Create an empty world
    pub fn new() -> Self {
        Self {
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            query_pipeline: QueryPipeline::new(),
        }
    }

    /// Refresh the query pipeline after colliders were added or moved
    pub fn update_queries(&mut self) {
        self.query_pipeline.update(&self.collider_set);
    }

    /// Add a static collider (ground, walls, etc.)
    pub fn add_static_collider(&mut self, collider: Collider) -> ColliderHandle {
        self.collider_set.insert(collider)
    }

    /// Create a ground plane collider
    pub fn create_ground(&mut self, y: f32) -> ColliderHandle {
        let normal = Unit::new_normalize(vector![0.0, 1.0, 0.0]);
        let ground = ColliderBuilder::halfspace(normal)
            .translation(vector![0.0, y, 0.0])
            .friction(0.7)
            .restitution(0.0)
            .build();
        self.add_static_collider(ground)
    }

    /// Create a static box collider (ledges, walls)
    pub fn create_static_box(&mut self, half_extents: Vec3, position: Vec3) -> ColliderHandle {
        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            .translation(vector![position.x, position.y, position.z])
            .friction(0.7)
            .build();
        self.add_static_collider(collider)
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_is_empty() {
        let world = PhysicsWorld::new();
        assert!(world.collider_set.is_empty());
        assert!(world.rigid_body_set.is_empty());
    }

    #[test]
    fn test_level_geometry_is_static() {
        let mut world = PhysicsWorld::new();
        let ground = world.create_ground(0.0);
        let ledge = world.create_static_box(Vec3::new(2.0, 0.1, 0.5), Vec3::new(0.0, 0.1, -12.0));
        world.update_queries();

        assert_eq!(world.collider_set.len(), 2);
        for handle in [ground, ledge] {
            let collider = &world.collider_set[handle];
            assert!(collider.parent().is_none());
        }
        let ledge_center = world.collider_set[ledge].translation();
        assert_eq!(ledge_center.z, -12.0);
    }
}
