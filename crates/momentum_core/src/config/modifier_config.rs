//! Momentum-derived gameplay modifier thresholds

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifierConfig {
    /// Momentum at or above this grants an accuracy boost (default: 60)
    pub accuracy_threshold: i32,
    /// Momentum at or below this raises penalty risk (default: -60)
    pub penalty_risk_threshold: i32,
    /// Full accuracy bonus at the meter ceiling (default: 0.10)
    pub accuracy_strength: f32,
    /// Full penalty risk at the meter floor (default: 0.15)
    pub penalty_risk_strength: f32,
    /// Seconds a derived modifier lasts after its last refresh (default: 5.0)
    pub duration: f32,
    /// Strength scale in online competitive games (default: 0.5)
    pub online_strength_scale: f32,
}

impl Default for ModifierConfig {
    fn default() -> Self {
        Self {
            accuracy_threshold: 60,
            penalty_risk_threshold: -60,
            accuracy_strength: 0.10,
            penalty_risk_strength: 0.15,
            duration: 5.0,
            online_strength_scale: 0.5,
        }
    }
}

impl ModifierConfig {
    pub(crate) fn validate(&self, min_value: i32, max_value: i32) -> Result<(), String> {
        if self.accuracy_threshold <= 0 || self.accuracy_threshold > max_value {
            return Err(format!(
                "accuracy_threshold must be in (0, {}], got {}",
                max_value, self.accuracy_threshold
            ));
        }
        if self.penalty_risk_threshold >= 0 || self.penalty_risk_threshold < min_value {
            return Err(format!(
                "penalty_risk_threshold must be in [{}, 0), got {}",
                min_value, self.penalty_risk_threshold
            ));
        }
        for (name, value) in [
            ("accuracy_strength", self.accuracy_strength),
            ("penalty_risk_strength", self.penalty_risk_strength),
            ("online_strength_scale", self.online_strength_scale),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be >= 0, got {}", name, value));
            }
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(format!("duration must be > 0, got {}", self.duration));
        }
        Ok(())
    }
}
