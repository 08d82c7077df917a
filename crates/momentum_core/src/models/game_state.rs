//! Per-game situational snapshot.
//!
//! Mutated by the surrounding simulation; the momentum engine only reads it.
//! It is also the single owner of the rivalry profile.

use serde::{Deserialize, Serialize};

use super::rivalry::RivalryProfile;

pub const QUARTER_SECONDS: i32 = 15 * 60;
pub const REGULATION_QUARTERS: i32 = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    quarter: i32,
    /// Seconds left in the current quarter
    time_remaining: i32,
    /// Home score minus away score
    score_diff: i32,
    is_online_competitive: bool,
    rivalry_profile: RivalryProfile,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            quarter: 1,
            time_remaining: QUARTER_SECONDS,
            score_diff: 0,
            is_online_competitive: false,
            rivalry_profile: RivalryProfile::default(),
        }
    }

    pub fn quarter(&self) -> i32 {
        self.quarter
    }

    pub fn time_remaining(&self) -> i32 {
        self.time_remaining
    }

    pub fn score_diff(&self) -> i32 {
        self.score_diff
    }

    pub fn is_online_competitive(&self) -> bool {
        self.is_online_competitive
    }

    pub fn rivalry_profile(&self) -> &RivalryProfile {
        &self.rivalry_profile
    }

    pub fn set_rivalry_profile(&mut self, profile: RivalryProfile) {
        self.rivalry_profile = profile;
    }

    pub fn set_quarter(&mut self, quarter: i32) {
        self.quarter = quarter;
    }

    pub fn set_time_remaining(&mut self, seconds: i32) {
        self.time_remaining = seconds.max(0);
    }

    pub fn set_score_diff(&mut self, diff: i32) {
        self.score_diff = diff;
    }

    pub fn set_online_competitive(&mut self, is_online: bool) {
        self.is_online_competitive = is_online;
    }

    /// Fourth quarter inside the final `late_seconds`, or any overtime period.
    pub fn is_late_game(&self, late_seconds: i32) -> bool {
        self.quarter > REGULATION_QUARTERS
            || (self.quarter == REGULATION_QUARTERS && self.time_remaining <= late_seconds)
    }

    pub fn is_close(&self, margin: i32) -> bool {
        self.score_diff.abs() <= margin
    }

    pub fn is_blowout(&self, margin: i32) -> bool {
        self.score_diff.abs() >= margin
    }
}
