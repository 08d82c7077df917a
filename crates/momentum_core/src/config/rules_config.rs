//! Rule engine tuning: base points per event and situational multipliers

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::EventType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Base points per event type (default: `EventType::default_base_points`)
    pub base_points: BTreeMap<EventType, i32>,
    /// Points for event types missing from `base_points` (default: 0)
    pub fallback_points: i32,
    /// Severity is clamped to [0, max_severity] (default: 10)
    pub max_severity: i32,

    // === Situational ===
    /// Seconds left in Q4 that count as late game (default: 300)
    pub late_game_seconds: i32,
    /// Late-game amplification (default: 1.5)
    pub late_game_multiplier: f32,
    /// Score margin that counts as close (default: 8)
    pub close_game_margin: i32,
    /// Extra amplification for close late games (default: 1.25)
    pub close_game_multiplier: f32,
    /// Score margin that counts as a blowout (default: 21)
    pub blowout_margin: i32,
    /// Blowout dampening (default: 0.5)
    pub blowout_multiplier: f32,

    // === Rivalry ===
    /// Extra hostility per rivalry tier (default: 0.1)
    pub rivalry_tier_bonus: f32,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            base_points: default_base_points(),
            fallback_points: 0,
            max_severity: 10,

            late_game_seconds: 300,
            late_game_multiplier: 1.5,
            close_game_margin: 8,
            close_game_multiplier: 1.25,
            blowout_margin: 21,
            blowout_multiplier: 0.5,

            rivalry_tier_bonus: 0.1,
        }
    }
}

pub fn default_base_points() -> BTreeMap<EventType, i32> {
    [
        EventType::Turnover,
        EventType::Sack,
        EventType::BigPlay,
        EventType::ThirdDownConversion,
        EventType::FourthDownConversion,
        EventType::MissedKick,
        EventType::Touchdown,
        EventType::Interception,
        EventType::Fumble,
        EventType::Stop,
        EventType::Other,
    ]
    .into_iter()
    .map(|ty| (ty, ty.default_base_points()))
    .collect()
}

impl RuleConfig {
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.max_severity < 1 {
            return Err(format!("max_severity must be >= 1, got {}", self.max_severity));
        }
        // Multipliers must stay positive so scaling can never flip a delta's sign.
        for (name, value) in [
            ("late_game_multiplier", self.late_game_multiplier),
            ("close_game_multiplier", self.close_game_multiplier),
            ("blowout_multiplier", self.blowout_multiplier),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{} must be > 0, got {}", name, value));
            }
        }
        if !self.rivalry_tier_bonus.is_finite() || self.rivalry_tier_bonus < 0.0 {
            return Err(format!(
                "rivalry_tier_bonus must be >= 0, got {}",
                self.rivalry_tier_bonus
            ));
        }
        if self.close_game_margin < 0 || self.blowout_margin < 0 || self.late_game_seconds < 0 {
            return Err("margins and late_game_seconds must be >= 0".to_string());
        }
        Ok(())
    }
}
