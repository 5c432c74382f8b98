//! Movement configuration and constants

use serde::{Deserialize, Serialize};

/// Movement configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Walking speed in meters per second
    pub speed: f32,
    /// Sprint speed multiplier (applied to speed)
    pub sprint_multiplier: f32,
    /// Vertical velocity set on the tick a jump is triggered
    pub jump_force: f32,
    /// Downward acceleration while airborne (m/s²)
    pub gravity: f32,
    /// Vertical velocity while grounded, keeps the body seated on the floor
    pub grounded_bias: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: 3.0,
            sprint_multiplier: 2.0,
            jump_force: 5.0,
            gravity: 9.81,
            grounded_bias: -0.5,
        }
    }
}

impl MovementConfig {
    /// Speed multiplier for the current sprint state
    pub fn speed_multiplier(&self, sprinting: bool) -> f32 {
        if sprinting {
            self.sprint_multiplier
        } else {
            1.0
        }
    }
}
