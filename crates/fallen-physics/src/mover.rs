//! The contract between the player pipeline and whatever moves its body

use glam::Vec3;

use crate::{CharacterController, PhysicsWorld};

/// Collision-aware translation of the player's body.
///
/// Implementations report the state produced by their most recent move:
/// `velocity` is the translation actually applied divided by that move's
/// `dt`, and `is_grounded` is whether the move ended on walkable ground.
pub trait PhysicsMover {
    /// Body position (bottom of the collision volume)
    fn position(&self) -> Vec3;

    /// Velocity of the last move
    fn velocity(&self) -> Vec3;

    /// Whether the body rests on a walkable surface
    fn is_grounded(&self) -> bool;

    /// Translate by `displacement`, resolving collisions
    fn move_character(&mut self, displacement: Vec3, dt: f32);
}

impl<M: PhysicsMover + ?Sized> PhysicsMover for Box<M> {
    fn position(&self) -> Vec3 {
        (**self).position()
    }

    fn velocity(&self) -> Vec3 {
        (**self).velocity()
    }

    fn is_grounded(&self) -> bool {
        (**self).is_grounded()
    }

    fn move_character(&mut self, displacement: Vec3, dt: f32) {
        (**self).move_character(displacement, dt);
    }
}

/// A rapier character together with the world it moves through
pub struct KinematicMover {
    pub world: PhysicsWorld,
    pub character: CharacterController,
}

impl KinematicMover {
    /// Spawn `character` into `world` at `position`
    pub fn spawn(mut world: PhysicsWorld, mut character: CharacterController, position: Vec3) -> Self {
        character.spawn(&mut world, position);
        world.update_queries();
        Self { world, character }
    }

    /// Teleport the body
    pub fn teleport(&mut self, position: Vec3) {
        self.character.set_position(&mut self.world, position);
    }
}

impl PhysicsMover for KinematicMover {
    fn position(&self) -> Vec3 {
        self.character.position
    }

    fn velocity(&self) -> Vec3 {
        self.character.velocity
    }

    fn is_grounded(&self) -> bool {
        self.character.is_grounded()
    }

    fn move_character(&mut self, displacement: Vec3, dt: f32) {
        self.character.move_character(&mut self.world, displacement, dt);
    }
}
