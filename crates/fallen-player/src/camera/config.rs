//! Camera configuration

use serde::{Deserialize, Serialize};

/// Mouse-look configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookConfig {
    /// Degrees of rotation per unit of look input
    pub mouse_sensitivity: f32,
    /// Maximum pitch above or below the horizon, in degrees
    pub up_down_range: f32,
}

impl Default for LookConfig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 2.0,
            up_down_range: 88.0,
        }
    }
}

impl LookConfig {
    /// Copy with the pitch range made a non-negative magnitude
    pub fn clamped(&self) -> Self {
        let up_down_range = if self.up_down_range.is_nan() {
            0.0
        } else {
            self.up_down_range.abs()
        };
        Self {
            up_down_range,
            ..self.clone()
        }
    }
}

/// Head bob configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadbobConfig {
    /// Master switch; a disabled bobber neither bobs, relaxes nor aims
    pub enabled: bool,
    /// Waveform amplitude (0.0 to 0.1)
    pub amplitude: f32,
    /// Waveform frequency (0.0 to 30.0)
    pub frequency: f32,
    /// Minimum grounded horizontal speed that starts the bob
    pub toggle_speed: f32,
    /// Distance ahead of the camera holder the camera is aimed at
    pub focus_distance: f32,
    /// Lerp rate per second back to the rest position while idle
    pub return_rate: f32,
}

impl Default for HeadbobConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            amplitude: 0.015,
            frequency: 10.0,
            toggle_speed: 3.0,
            focus_distance: 15.0,
            return_rate: 1.0,
        }
    }
}

impl HeadbobConfig {
    /// Copy with amplitude and frequency clamped to their editor ranges
    pub fn clamped(&self) -> Self {
        Self {
            amplitude: self.amplitude.clamp(0.0, 0.1),
            frequency: self.frequency.clamp(0.0, 30.0),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let look = LookConfig::default();
        assert_eq!(look.mouse_sensitivity, 2.0);
        assert_eq!(look.up_down_range, 88.0);

        let bob = HeadbobConfig::default();
        assert!(bob.enabled);
        assert_eq!(bob.amplitude, 0.015);
        assert_eq!(bob.frequency, 10.0);
        assert_eq!(bob.toggle_speed, 3.0);
        assert_eq!(bob.focus_distance, 15.0);
    }

    #[test]
    fn test_clamped_ranges() {
        let bob = HeadbobConfig {
            amplitude: 0.5,
            frequency: -1.0,
            ..Default::default()
        }
        .clamped();
        assert_eq!(bob.amplitude, 0.1);
        assert_eq!(bob.frequency, 0.0);
        assert_eq!(bob.toggle_speed, 3.0);
    }

    #[test]
    fn test_look_range_is_a_magnitude() {
        let look: LookConfig = toml::from_str("up_down_range = -10.0").unwrap();
        assert_eq!(look.clamped().up_down_range, 10.0);

        let look = LookConfig {
            up_down_range: f32::NAN,
            ..Default::default()
        };
        assert_eq!(look.clamped().up_down_range, 0.0);
        assert_eq!(look.clamped().mouse_sensitivity, 2.0);
    }
}
