//! Aggregate player configuration

use serde::{Deserialize, Serialize};

use crate::camera::{HeadbobConfig, LookConfig};
use crate::player::MovementConfig;

/// Every tunable of the player rig, fixed at construction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub movement: MovementConfig,
    pub look: LookConfig,
    pub headbob: HeadbobConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_sections() {
        let config: PlayerConfig = toml::from_str(
            r#"
            [movement]
            sprint_multiplier = 1.5

            [headbob]
            enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(config.movement.sprint_multiplier, 1.5);
        assert_eq!(config.movement.speed, 3.0);
        assert_eq!(config.look, LookConfig::default());
        assert!(!config.headbob.enabled);
    }

    #[test]
    fn test_toml_roundtrip_of_defaults() {
        let text = toml::to_string_pretty(&PlayerConfig::default()).unwrap();
        let parsed: PlayerConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, PlayerConfig::default());
    }
}
