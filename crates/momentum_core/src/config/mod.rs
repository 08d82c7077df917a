//! # Momentum Configuration
//!
//! All tuning knobs for the momentum engine in one serializable bundle.
//!
//! ## Presets
//! - `default()`: balanced
//! - `arcade()`: bigger swings, slower fade
//! - `simulation()`: smaller swings, faster fade
//!
//! ## Usage
//! ```rust
//! use momentum_core::config::MomentumConfig;
//!
//! let config = MomentumConfig::default();
//! let arcade = MomentumConfig::arcade();
//! let from_yaml = MomentumConfig::from_yaml_str("meter:\n  decay_rate: 0.1\n").unwrap();
//! assert!((from_yaml.meter.decay_rate - 0.1).abs() < 1e-6);
//! ```
//!
//! ## Environment Variables
//!
//! - `MOMENTUM_PROFILE`: Select preset (arcade, simulation, default)

mod crowd_config;
mod meter_config;
mod modifier_config;
mod rules_config;

pub use crowd_config::CrowdConfig;
pub use meter_config::MeterConfig;
pub use modifier_config::ModifierConfig;
pub use rules_config::{default_base_points, RuleConfig};

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{MomentumError, Result};

pub const PROFILE_ENV_VAR: &str = "MOMENTUM_PROFILE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MomentumConfig {
    #[serde(default)]
    pub meter: MeterConfig,
    #[serde(default)]
    pub rules: RuleConfig,
    #[serde(default)]
    pub modifiers: ModifierConfig,
    #[serde(default)]
    pub crowd: CrowdConfig,
}

impl MomentumConfig {
    pub fn arcade() -> Self {
        let mut cfg = Self::default();
        cfg.meter.decay_rate = 0.15;
        cfg.rules.late_game_multiplier = 1.75;
        cfg.rules.blowout_multiplier = 0.75;
        cfg.modifiers.accuracy_strength = 0.15;
        cfg.modifiers.penalty_risk_strength = 0.2;
        cfg.crowd.big_play_pulse = 0.35;
        cfg
    }

    pub fn simulation() -> Self {
        let mut cfg = Self::default();
        cfg.meter.decay_rate = 0.35;
        cfg.rules.late_game_multiplier = 1.3;
        cfg.rules.blowout_multiplier = 0.4;
        cfg.modifiers.accuracy_threshold = 70;
        cfg.modifiers.penalty_risk_threshold = -70;
        cfg.modifiers.accuracy_strength = 0.07;
        cfg.modifiers.penalty_risk_strength = 0.1;
        cfg.crowd.big_play_pulse = 0.2;
        cfg
    }

    pub fn from_profile(profile: &str) -> Self {
        match profile.trim().to_lowercase().as_str() {
            "arcade" => Self::arcade(),
            "simulation" => Self::simulation(),
            _ => Self::default(),
        }
    }

    pub fn from_env_or_default() -> Self {
        Self::from_profile(&env::var(PROFILE_ENV_VAR).unwrap_or_default())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let cfg: Self = serde_yaml::from_str(yaml)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        self.meter
            .validate()
            .and_then(|_| self.rules.validate())
            .and_then(|_| {
                self.modifiers
                    .validate(self.meter.min_value, self.meter.max_value)
            })
            .and_then(|_| self.crowd.validate())
            .map_err(MomentumError::InvalidConfig)
    }
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventType;

    #[test]
    fn test_default_config() {
        let cfg = MomentumConfig::default();
        assert_eq!(cfg.meter.min_value, -100);
        assert_eq!(cfg.meter.max_value, 100);
        assert!((cfg.meter.decay_rate - 0.25).abs() < 1e-6);
        assert_eq!(cfg.rules.base_points.get(&EventType::Touchdown), Some(&15));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_presets_are_valid_and_ordered() {
        let default = MomentumConfig::default();
        let arcade = MomentumConfig::arcade();
        let simulation = MomentumConfig::simulation();

        assert!(arcade.validate().is_ok());
        assert!(simulation.validate().is_ok());

        // Arcade holds momentum longer, simulation fades it faster
        assert!(arcade.meter.decay_rate < default.meter.decay_rate);
        assert!(simulation.meter.decay_rate > default.meter.decay_rate);
        assert!(arcade.rules.late_game_multiplier > simulation.rules.late_game_multiplier);
    }

    #[test]
    fn test_profile_selection() {
        assert_eq!(MomentumConfig::from_profile("ARCADE"), MomentumConfig::arcade());
        assert_eq!(MomentumConfig::from_profile(" simulation "), MomentumConfig::simulation());
        assert_eq!(MomentumConfig::from_profile("whatever"), MomentumConfig::default());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = "
rules:
  base_points:
    touchdown: 21
  late_game_multiplier: 2.0
crowd:
  big_play_pulse: 0.4
";
        let cfg = MomentumConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.rules.base_points.get(&EventType::Touchdown), Some(&21));
        // A supplied table replaces the default one
        assert_eq!(cfg.rules.base_points.get(&EventType::Sack), None);
        assert!((cfg.rules.late_game_multiplier - 2.0).abs() < 1e-6);
        assert!((cfg.crowd.big_play_pulse - 0.4).abs() < 1e-6);
        assert_eq!(cfg.meter, MeterConfig::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let cfg = MomentumConfig::arcade();
        let json = serde_json::to_string(&cfg).unwrap();
        let parsed = MomentumConfig::from_json_str(&json).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let err = MomentumConfig::from_json_str(r#"{"meter": {"min_value": 10, "max_value": 5}}"#)
            .unwrap_err();
        assert!(matches!(err, MomentumError::InvalidConfig(_)));
    }

    #[test]
    fn test_negative_decay_rejected() {
        let mut cfg = MomentumConfig::default();
        cfg.meter.decay_rate = -0.1;
        assert!(matches!(cfg.validate(), Err(MomentumError::InvalidConfig(_))));
    }

    #[test]
    fn test_non_positive_multiplier_rejected() {
        let mut cfg = MomentumConfig::default();
        cfg.rules.blowout_multiplier = 0.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_threshold_outside_bounds_rejected() {
        let mut cfg = MomentumConfig::default();
        cfg.modifiers.accuracy_threshold = 150;
        assert!(cfg.validate().is_err());

        let mut cfg = MomentumConfig::default();
        cfg.modifiers.penalty_risk_threshold = 10;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let err = MomentumConfig::from_yaml_str("meter: [1, 2").unwrap_err();
        assert!(matches!(err, MomentumError::ConfigYaml(_)));
    }
}
