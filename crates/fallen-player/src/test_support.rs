//! Deterministic mover for unit tests

use fallen_physics::PhysicsMover;
use glam::Vec3;

/// Mover whose grounded flag is set by the test, recording every move
#[derive(Debug, Default)]
pub(crate) struct ScriptedMover {
    pub position: Vec3,
    pub velocity: Vec3,
    pub grounded: bool,
    pub moves: Vec<Vec3>,
}

impl ScriptedMover {
    pub fn grounded() -> Self {
        Self {
            grounded: true,
            ..Default::default()
        }
    }

    pub fn last_move(&self) -> Vec3 {
        self.moves.last().copied().unwrap_or(Vec3::ZERO)
    }
}

impl PhysicsMover for ScriptedMover {
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
        self.position += displacement;
        self.velocity = if dt > 0.0 { displacement / dt } else { Vec3::ZERO };
        self.moves.push(displacement);
    }
}
