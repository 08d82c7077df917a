//! Momentum meter bounds and decay

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeterConfig {
    /// Lower bound (default: -100)
    pub min_value: i32,
    /// Upper bound (default: 100)
    pub max_value: i32,
    /// Fraction of current momentum shed per second (default: 0.25)
    pub decay_rate: f32,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            min_value: -100,
            max_value: 100,
            decay_rate: 0.25,
        }
    }
}

impl MeterConfig {
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.min_value > 0 || self.max_value < 0 || self.min_value >= self.max_value {
            return Err(format!(
                "meter bounds [{}, {}] must straddle zero",
                self.min_value, self.max_value
            ));
        }
        if !self.decay_rate.is_finite() || self.decay_rate < 0.0 {
            return Err(format!("decay_rate must be >= 0, got {}", self.decay_rate));
        }
        Ok(())
    }
}
