//! Team Momentum Meter
//!
//! Bounded signed accumulator, one per team:
//! - Events add signed points
//! - Every tick relaxes the value toward 0 (neutral)
//! - The value is clamped into `[min_value, max_value]` after every mutation
//!
//! The value is stored as `f32` so per-tick decay at high frame rates still
//! accumulates; [`MomentumMeter::value`] reports it rounded.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::MeterConfig;

/// Momentum trend direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MomentumTrend {
    /// Last mutation pushed momentum up
    Rising,
    /// Last mutation pushed momentum down
    Falling,
    /// No event since the last decay
    #[default]
    Stable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MomentumMeter {
    value: f32,
    min_value: i32,
    max_value: i32,
    /// Fraction of current magnitude shed per second
    decay_rate: f32,
    trend: MomentumTrend,
}

impl Default for MomentumMeter {
    fn default() -> Self {
        Self::new(-100, 100, 0.25)
    }
}

impl MomentumMeter {
    /// Bounds are reordered if given backwards; a negative or NaN decay
    /// rate is treated as 0. Starts at 0, or the nearest bound when the
    /// range excludes 0.
    pub fn new(min_value: i32, max_value: i32, decay_rate: f32) -> Self {
        let (min_value, max_value) = if min_value <= max_value {
            (min_value, max_value)
        } else {
            (max_value, min_value)
        };
        let decay_rate = if decay_rate.is_finite() && decay_rate > 0.0 {
            decay_rate
        } else {
            0.0
        };
        let mut meter = Self {
            value: 0.0,
            min_value,
            max_value,
            decay_rate,
            trend: MomentumTrend::Stable,
        };
        meter.clamp();
        meter
    }

    pub fn from_config(config: &MeterConfig) -> Self {
        Self::new(config.min_value, config.max_value, config.decay_rate)
    }

    pub fn add(&mut self, points: i32) {
        let before = self.value;
        self.value += points as f32;
        self.clamp();
        self.trend = if self.value > before {
            MomentumTrend::Rising
        } else if self.value < before {
            MomentumTrend::Falling
        } else {
            self.trend
        };
    }

    /// Relax toward 0 by `decay_rate * delta_time` of the current magnitude.
    ///
    /// The fraction is capped at 1 so a long tick lands on 0 instead of
    /// crossing it. Negative or NaN `delta_time` is treated as 0.
    pub fn decay(&mut self, delta_time: f32) {
        let dt = if delta_time.is_finite() && delta_time > 0.0 {
            delta_time
        } else {
            if delta_time != 0.0 {
                warn!(delta_time, "ignoring invalid decay delta_time");
            }
            0.0
        };

        let fraction = (self.decay_rate * dt).min(1.0);
        if fraction > 0.0 {
            self.value -= self.value * fraction;
            self.trend = MomentumTrend::Stable;
        }
        self.clamp();
    }

    pub fn clamp(&mut self) {
        self.value = self.value.clamp(self.min_value as f32, self.max_value as f32);
    }

    /// Current momentum rounded to the nearest point
    pub fn value(&self) -> i32 {
        self.value.round() as i32
    }

    /// Unrounded momentum
    pub fn raw_value(&self) -> f32 {
        self.value
    }

    pub fn min_value(&self) -> i32 {
        self.min_value
    }

    pub fn max_value(&self) -> i32 {
        self.max_value
    }

    pub fn decay_rate(&self) -> f32 {
        self.decay_rate
    }

    pub fn trend(&self) -> MomentumTrend {
        self.trend
    }

    /// Momentum mapped onto [-1, 1] against the bound on its side of zero
    pub fn normalized(&self) -> f32 {
        if self.value > 0.0 && self.max_value > 0 {
            self.value / self.max_value as f32
        } else if self.value < 0.0 && self.min_value < 0 {
            -(self.value / self.min_value as f32)
        } else {
            0.0
        }
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
        self.trend = MomentumTrend::Stable;
        self.clamp();
    }

    /// Create a meter with a specific value (for testing)
    #[doc(hidden)]
    pub fn with_value(value: i32) -> Self {
        let mut meter = Self::default();
        meter.value = value as f32;
        meter.clamp();
        meter
    }
}
