//! Fallen Player - First-person locomotion and camera feedback
//!
//! Provides the locomotion controller, mouse look, head bob and the input
//! snapshot that drives them. [`PlayerRig`] wires the stages together and
//! runs them in a fixed order every tick.

pub mod camera;
pub mod config;
pub mod error;
pub mod input;
pub mod player;
pub mod rig;

#[cfg(test)]
pub(crate) mod test_support;

pub use camera::{
    bob_waveform, BobState, CameraBobber, CameraHolder, CameraPose, CameraRotator, HeadbobConfig,
    LookConfig,
};
pub use config::PlayerConfig;
pub use error::RigError;
pub use input::{InputAction, InputBindings, InputFrame, InputHandler, InputState};
pub use player::{LocomotionController, MotionState, MovementConfig};
pub use rig::{PlayerRig, PlayerRigBuilder};
