//! Player locomotion module
//!
//! Grounded/airborne motion with gravity and jump impulses, driven by the
//! per-tick input snapshot and applied through a [`fallen_physics::PhysicsMover`].

mod controller;
mod movement;

pub use controller::{LocomotionController, MotionState};
pub use movement::MovementConfig;
