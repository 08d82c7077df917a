//! Momentum Rule Engine
//!
//! Turns a [`MomentumEvent`] into a signed point delta for its source team.
//!
//! ```text
//! delta = base_points[type] × clamp(severity, 0, max_severity)
//!       × situational factor (late game, close game, blowout)
//!       × rivalry factor (hostility × (1 + tier × tier_bonus), rivalry games only)
//! ```
//!
//! Every factor is positive and each rounding step keeps a non-zero delta
//! at least one point, so scaling never changes the sign of a delta.

use tracing::warn;

use crate::config::RuleConfig;
use crate::models::{EventType, GameState, MomentumEvent, RivalryProfile};

#[derive(Debug, Clone, Default)]
pub struct MomentumRuleEngine {
    config: RuleConfig,
}

impl MomentumRuleEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RuleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Full delta for `event`, rivalry scaling included.
    ///
    /// The rivalry profile is read from `game_state`.
    pub fn calculate_delta(&self, event: &MomentumEvent, game_state: &GameState) -> i32 {
        let situational = self.situational_delta(event, game_state);
        self.apply_rivalry_multiplier(situational, game_state.rivalry_profile())
    }

    /// Delta before rivalry scaling.
    pub fn situational_delta(&self, event: &MomentumEvent, game_state: &GameState) -> i32 {
        let base = self.base_points(event.event_type());

        let mut severity = event.severity();
        if severity < 0 {
            warn!(severity, event_type = ?event.event_type(), "negative severity treated as 0");
            severity = 0;
        }
        let severity = severity.min(self.config.max_severity);

        let raw = base as i64 * severity as i64;
        scale_preserving_sign(raw, self.situational_factor(game_state))
    }

    /// Product of the late-game, close-game and blowout multipliers.
    pub fn situational_factor(&self, game_state: &GameState) -> f64 {
        let cfg = &self.config;
        let mut factor = 1.0f64;

        let late = game_state.is_late_game(cfg.late_game_seconds);
        if late {
            factor *= cfg.late_game_multiplier as f64;
            if game_state.is_close(cfg.close_game_margin) {
                factor *= cfg.close_game_multiplier as f64;
            }
        }
        if game_state.is_blowout(cfg.blowout_margin) {
            factor *= cfg.blowout_multiplier as f64;
        }
        factor
    }

    pub fn apply_rivalry_multiplier(&self, delta: i32, rivalry: &RivalryProfile) -> i32 {
        if !rivalry.is_rivalry_game() {
            return delta;
        }

        let mut hostility = rivalry.hostility_factor();
        if !hostility.is_finite() || hostility <= 0.0 {
            warn!(
                hostility,
                rivalry = rivalry.name(),
                "non-positive hostility factor treated as 1.0"
            );
            hostility = 1.0;
        }
        let tier_factor = 1.0 + rivalry.tier() as f64 * self.config.rivalry_tier_bonus as f64;

        scale_preserving_sign(delta as i64, hostility as f64 * tier_factor)
    }

    pub fn set_base_points(&mut self, event_type: EventType, points: i32) {
        self.config.base_points.insert(event_type, points);
    }

    /// Configured points for `event_type`, or the fallback when unmapped.
    pub fn base_points(&self, event_type: EventType) -> i32 {
        self.config
            .base_points
            .get(&event_type)
            .copied()
            .unwrap_or(self.config.fallback_points)
    }
}

/// Scale `delta` by `factor`, rounding to the nearest integer.
///
/// A non-zero delta never rounds to zero and the result saturates at the
/// `i32` range. Non-positive or non-finite factors leave the delta unscaled.
fn scale_preserving_sign(delta: i64, factor: f64) -> i32 {
    if delta == 0 {
        return 0;
    }
    let factor = if factor.is_finite() && factor > 0.0 { factor } else { 1.0 };

    let scaled = (delta as f64 * factor).round();
    let scaled = if scaled == 0.0 { delta.signum() as f64 } else { scaled };
    scaled.clamp(i32::MIN as f64, i32::MAX as f64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamId;
    use strum::IntoEnumIterator;

    fn event(ty: EventType, severity: i32) -> MomentumEvent {
        MomentumEvent::new(ty, Some(TeamId(0)), severity, 0.0)
    }

    fn late_close_state() -> GameState {
        let mut state = GameState::new();
        state.set_quarter(4);
        state.set_time_remaining(120);
        state.set_score_diff(3);
        state
    }

    #[test]
    fn test_touchdown_with_custom_points() {
        let mut engine = MomentumRuleEngine::new();
        engine.set_base_points(EventType::Touchdown, 21);
        let delta = engine.calculate_delta(&event(EventType::Touchdown, 1), &GameState::new());
        assert_eq!(delta, 21);
    }

    #[test]
    fn test_severity_scales_linearly_in_neutral_context() {
        let mut engine = MomentumRuleEngine::new();
        engine.set_base_points(EventType::Touchdown, 21);
        let delta = engine.calculate_delta(&event(EventType::Touchdown, 3), &GameState::new());
        assert_eq!(delta, 63);
    }

    #[test]
    fn test_negative_severity_contributes_nothing() {
        let engine = MomentumRuleEngine::new();
        assert_eq!(engine.calculate_delta(&event(EventType::BigPlay, -4), &GameState::new()), 0);
    }

    #[test]
    fn test_severity_capped() {
        let engine = MomentumRuleEngine::new();
        let capped = engine.calculate_delta(&event(EventType::BigPlay, 10), &GameState::new());
        let over = engine.calculate_delta(&event(EventType::BigPlay, 5000), &GameState::new());
        assert_eq!(capped, over);
    }

    #[test]
    fn test_unmapped_event_uses_fallback() {
        let mut config = RuleConfig::default();
        config.base_points.remove(&EventType::Stop);
        config.fallback_points = 2;
        let engine = MomentumRuleEngine::with_config(config);
        assert_eq!(engine.base_points(EventType::Stop), 2);
        assert_eq!(engine.calculate_delta(&event(EventType::Stop, 1), &GameState::new()), 2);
    }

    #[test]
    fn test_late_close_game_amplifies() {
        let engine = MomentumRuleEngine::new();
        // 10 × 1.5 × 1.25 = 18.75
        let delta = engine.calculate_delta(&event(EventType::BigPlay, 1), &late_close_state());
        assert_eq!(delta, 19);
    }

    #[test]
    fn test_blowout_dampens() {
        let engine = MomentumRuleEngine::new();
        let mut state = GameState::new();
        state.set_score_diff(-28);
        assert_eq!(engine.calculate_delta(&event(EventType::Turnover, 1), &state), -6);
    }

    #[test]
    fn test_situational_scaling_preserves_sign() {
        let config = RuleConfig {
            blowout_multiplier: 0.3,
            ..RuleConfig::default()
        };
        let mut engine = MomentumRuleEngine::with_config(config);
        engine.set_base_points(EventType::ThirdDownConversion, 1);
        let mut state = GameState::new();
        state.set_score_diff(35);
        // 1 × 0.3 rounds to 0; must stay positive
        assert_eq!(engine.calculate_delta(&event(EventType::ThirdDownConversion, 1), &state), 1);
    }

    #[test]
    fn test_rivalry_multiplier_scales() {
        let engine = MomentumRuleEngine::new();
        let rivalry = RivalryProfile::rivalry("Iron Bowl", 0, 1.5);
        assert_eq!(engine.apply_rivalry_multiplier(10, &rivalry), 15);
        assert_eq!(engine.apply_rivalry_multiplier(-10, &rivalry), -15);
    }

    #[test]
    fn test_rivalry_tier_adds_hostility() {
        let engine = MomentumRuleEngine::new();
        let rivalry = RivalryProfile::rivalry("Red River", 2, 1.5);
        // 10 × 1.5 × 1.2
        assert_eq!(engine.apply_rivalry_multiplier(10, &rivalry), 18);
    }

    #[test]
    fn test_non_rivalry_game_unchanged() {
        let engine = MomentumRuleEngine::new();
        let profile = RivalryProfile::new("Exhibition", 3, 2.0, false);
        assert_eq!(engine.apply_rivalry_multiplier(10, &profile), 10);
    }

    #[test]
    fn test_bad_hostility_treated_as_neutral() {
        let engine = MomentumRuleEngine::new();
        let rivalry = RivalryProfile::rivalry("Broken", 0, -2.0);
        assert_eq!(engine.apply_rivalry_multiplier(10, &rivalry), 10);
    }

    #[test]
    fn test_calculate_delta_applies_state_rivalry() {
        let engine = MomentumRuleEngine::new();
        let mut state = GameState::new();
        state.set_rivalry_profile(RivalryProfile::rivalry("Egg Bowl", 0, 2.0));
        assert_eq!(engine.calculate_delta(&event(EventType::BigPlay, 1), &state), 20);
    }

    #[test]
    fn test_every_event_type_has_a_value() {
        let engine = MomentumRuleEngine::new();
        for ty in EventType::iter() {
            assert_eq!(engine.base_points(ty), ty.default_base_points());
        }
    }

    #[test]
    fn test_saturates_instead_of_overflowing() {
        let engine = MomentumRuleEngine::new();
        let rivalry = RivalryProfile::rivalry("Huge", 0, 1000.0);
        assert_eq!(engine.apply_rivalry_multiplier(i32::MAX, &rivalry), i32::MAX);
        assert_eq!(engine.apply_rivalry_multiplier(i32::MIN, &rivalry), i32::MIN);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn game_state() -> impl Strategy<Value = GameState> {
            (1i32..=5, 0i32..=900, -50i32..=50).prop_map(|(q, t, diff)| {
                let mut state = GameState::new();
                state.set_quarter(q);
                state.set_time_remaining(t);
                state.set_score_diff(diff);
                state
            })
        }

        proptest! {
            /// Property: rivalry scaling never changes the sign of a delta
            #[test]
            fn prop_rivalry_preserves_sign(
                delta in any::<i32>(),
                tier in 0u32..10,
                hostility in 0.01f32..5.0,
                is_rivalry in any::<bool>()
            ) {
                let engine = MomentumRuleEngine::new();
                let profile = RivalryProfile::new("P", tier, hostility, is_rivalry);
                let scaled = engine.apply_rivalry_multiplier(delta, &profile);
                prop_assert_eq!(scaled.signum(), delta.signum());
            }

            /// Property: magnitude is non-decreasing in severity, sign fixed by base points
            #[test]
            fn prop_monotonic_in_severity(
                base in -50i32..=50,
                severity in 0i32..20,
                state in game_state()
            ) {
                let mut engine = MomentumRuleEngine::new();
                engine.set_base_points(EventType::BigPlay, base);
                let lo = engine.calculate_delta(&event(EventType::BigPlay, severity), &state);
                let hi = engine.calculate_delta(&event(EventType::BigPlay, severity + 1), &state);
                prop_assert!(hi.abs() >= lo.abs());
                prop_assert!(lo.signum() == base.signum() || lo == 0);
                prop_assert!(hi.signum() == base.signum() || hi == 0);
            }
        }
    }
}
