//! Camera system module
//!
//! First-person mouse look and procedural head bob. Both stages write into a
//! single [`CameraPose`] threaded through the tick.

mod config;
mod headbob;
mod pose;
mod rotator;

pub use config::{HeadbobConfig, LookConfig};
pub use headbob::{bob_waveform, BobState, CameraBobber};
pub use pose::{CameraHolder, CameraPose};
pub use rotator::CameraRotator;
