//! Crowd noise reaction parameters

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrowdConfig {
    /// Starting intensity and baseline (default: 0.5)
    pub initial_intensity: f32,
    /// Saturation ceiling (default: 1.0)
    pub max_intensity: f32,
    /// Spike added on a big play (default: 0.25)
    pub big_play_pulse: f32,
    /// Baseline raise per home-field advantage call (default: 0.05)
    pub home_field_bonus: f32,
    /// Highest baseline home-field advantage can reach (default: 0.8)
    pub max_baseline: f32,
    /// Fraction of the gap to baseline closed per second (default: 0.5)
    pub relax_rate: f32,
}

impl Default for CrowdConfig {
    fn default() -> Self {
        Self {
            initial_intensity: 0.5,
            max_intensity: 1.0,
            big_play_pulse: 0.25,
            home_field_bonus: 0.05,
            max_baseline: 0.8,
            relax_rate: 0.5,
        }
    }
}

impl CrowdConfig {
    pub(crate) fn validate(&self) -> Result<(), String> {
        let values = [
            ("initial_intensity", self.initial_intensity),
            ("max_intensity", self.max_intensity),
            ("big_play_pulse", self.big_play_pulse),
            ("home_field_bonus", self.home_field_bonus),
            ("max_baseline", self.max_baseline),
            ("relax_rate", self.relax_rate),
        ];
        for (name, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be >= 0, got {}", name, value));
            }
        }
        if self.initial_intensity > self.max_intensity || self.max_baseline > self.max_intensity {
            return Err("initial_intensity and max_baseline must not exceed max_intensity".into());
        }
        Ok(())
    }
}
