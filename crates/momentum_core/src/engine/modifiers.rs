//! Momentum-driven gameplay modifiers.
//!
//! A [`Modifier`] is a time-limited effect written onto a team's
//! [`TeamGameplayModifiers`](crate::models::TeamGameplayModifiers) while it
//! is active. [`GameplayModifierService`] owns every active modifier, derives
//! new ones from momentum, re-applies them each tick, and evicts them once
//! their duration runs out.

use std::fmt;

use tracing::{debug, warn};

use crate::config::{MeterConfig, ModifierConfig};
use crate::models::{GameState, Team, TeamId};

pub const ACCURACY_MODIFIER_ID: &str = "momentum.accuracy";
pub const PENALTY_RISK_MODIFIER_ID: &str = "momentum.penalty_risk";

/// State shared by every modifier variant.
///
/// Elapsed time is accumulated in `f64`, so summing many `f32` ticks only
/// carries the representation error of the tick values themselves (at most
/// 2^-24 of the total). Expiry allows for exactly that, relative to the
/// lifetime, and never fires earlier.
#[derive(Debug, Clone, PartialEq)]
pub struct ModifierCore {
    pub id: String,
    pub strength: f32,
    /// Seconds granted at creation or last refresh
    pub lifetime: f32,
    /// Seconds elapsed since creation or last refresh
    pub elapsed: f64,
}

impl ModifierCore {
    pub fn new(id: impl Into<String>, strength: f32, duration: f32) -> Self {
        Self {
            id: id.into(),
            strength,
            lifetime: duration,
            elapsed: 0.0,
        }
    }

    /// Seconds remaining, never negative
    pub fn remaining(&self) -> f32 {
        (self.lifetime as f64 - self.elapsed).max(0.0) as f32
    }

    pub fn is_expired(&self) -> bool {
        let lifetime = self.lifetime as f64;
        self.elapsed >= lifetime - lifetime.abs() * f32::EPSILON as f64
    }
}

pub trait Modifier: fmt::Debug {
    fn core(&self) -> &ModifierCore;
    fn core_mut(&mut self) -> &mut ModifierCore;

    /// Write this modifier's effect onto `team`.
    fn apply(&self, team: &mut Team);

    /// Called once right before the modifier is evicted.
    fn expire(&mut self) {}

    fn id(&self) -> &str {
        &self.core().id
    }

    fn strength(&self) -> f32 {
        self.core().strength
    }

    /// Seconds remaining
    fn duration(&self) -> f32 {
        self.core().remaining()
    }

    fn advance(&mut self, delta_time: f32) {
        self.core_mut().elapsed += delta_time as f64;
    }

    fn refresh(&mut self, strength: f32, duration: f32) {
        let core = self.core_mut();
        core.strength = strength;
        core.lifetime = duration;
        core.elapsed = 0.0;
    }

    fn is_expired(&self) -> bool {
        self.core().is_expired()
    }
}

/// Raises a team's accuracy while active.
#[derive(Debug, Clone, PartialEq)]
pub struct AccuracyModifier {
    core: ModifierCore,
}

impl AccuracyModifier {
    pub fn new(strength: f32, duration: f32) -> Self {
        Self::with_id(ACCURACY_MODIFIER_ID, strength, duration)
    }

    pub fn with_id(id: impl Into<String>, strength: f32, duration: f32) -> Self {
        Self {
            core: ModifierCore::new(id, strength, duration),
        }
    }
}

impl Modifier for AccuracyModifier {
    fn core(&self) -> &ModifierCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ModifierCore {
        &mut self.core
    }

    fn apply(&self, team: &mut Team) {
        team.gameplay.accuracy_bonus += self.core.strength;
    }
}

/// Raises a team's chance of drawing a penalty while active.
#[derive(Debug, Clone, PartialEq)]
pub struct PenaltyRiskModifier {
    core: ModifierCore,
}

impl PenaltyRiskModifier {
    pub fn new(strength: f32, duration: f32) -> Self {
        Self::with_id(PENALTY_RISK_MODIFIER_ID, strength, duration)
    }

    pub fn with_id(id: impl Into<String>, strength: f32, duration: f32) -> Self {
        Self {
            core: ModifierCore::new(id, strength, duration),
        }
    }
}

impl Modifier for PenaltyRiskModifier {
    fn core(&self) -> &ModifierCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ModifierCore {
        &mut self.core
    }

    fn apply(&self, team: &mut Team) {
        team.gameplay.penalty_risk += self.core.strength;
    }
}

#[derive(Debug)]
struct ActiveModifier {
    target: TeamId,
    modifier: Box<dyn Modifier>,
}

/// Owner of all active modifiers, kept in insertion order.
#[derive(Debug)]
pub struct GameplayModifierService {
    config: ModifierConfig,
    min_value: i32,
    max_value: i32,
    active: Vec<ActiveModifier>,
}

impl Default for GameplayModifierService {
    fn default() -> Self {
        Self::new()
    }
}

impl GameplayModifierService {
    pub fn new() -> Self {
        Self::with_config(ModifierConfig::default(), &MeterConfig::default())
    }

    /// The meter bounds set where derived strength reaches its maximum.
    pub fn with_config(config: ModifierConfig, meter: &MeterConfig) -> Self {
        Self {
            config,
            min_value: meter.min_value,
            max_value: meter.max_value,
            active: Vec::new(),
        }
    }

    pub fn config(&self) -> &ModifierConfig {
        &self.config
    }

    /// Derive or refresh momentum modifiers for `team_id`, then rebuild the
    /// team's gameplay parameters from every modifier targeting it.
    ///
    /// Safe to call every tick: the team's parameters are reset before the
    /// active modifiers are applied in insertion order.
    pub fn apply(&mut self, team_id: TeamId, team: &mut Team, momentum: i32, game_state: &GameState) {
        self.derive(team_id, momentum, game_state);

        team.gameplay.reset();
        for entry in self.active.iter().filter(|e| e.target == team_id) {
            entry.modifier.apply(team);
        }
    }

    /// Advance every modifier by `delta_time` and evict the ones that ran out.
    pub fn remove_expired(&mut self, delta_time: f32) {
        let dt = if delta_time.is_finite() && delta_time >= 0.0 {
            delta_time
        } else {
            warn!(delta_time, "ignoring invalid modifier delta_time");
            0.0
        };

        for entry in &mut self.active {
            entry.modifier.advance(dt);
        }

        self.active.retain_mut(|entry| {
            if entry.modifier.is_expired() {
                entry.modifier.expire();
                debug!(team = %entry.target, id = entry.modifier.id(), "modifier expired");
                false
            } else {
                true
            }
        });
    }

    /// Add a modifier for `target`. Ids are not deduplicated.
    pub fn add_modifier<M: Modifier + 'static>(&mut self, target: TeamId, modifier: M) {
        self.active.push(ActiveModifier {
            target,
            modifier: Box::new(modifier),
        });
    }

    /// Drop every active modifier without calling `expire`.
    pub fn clear_modifiers(&mut self) {
        self.active.clear();
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn has_modifier(&self, team_id: TeamId, id: &str) -> bool {
        self.active
            .iter()
            .any(|e| e.target == team_id && e.modifier.id() == id)
    }

    pub fn active_ids(&self, team_id: TeamId) -> Vec<&str> {
        self.active
            .iter()
            .filter(|e| e.target == team_id)
            .map(|e| e.modifier.id())
            .collect()
    }

    pub fn find(&self, team_id: TeamId, id: &str) -> Option<&dyn Modifier> {
        self.active
            .iter()
            .find(|e| e.target == team_id && e.modifier.id() == id)
            .map(|e| e.modifier.as_ref())
    }

    fn derive(&mut self, team_id: TeamId, momentum: i32, game_state: &GameState) {
        let online_scale = if game_state.is_online_competitive() {
            self.config.online_strength_scale
        } else {
            1.0
        };
        let duration = self.config.duration;

        if momentum >= self.config.accuracy_threshold {
            let strength = self.config.accuracy_strength
                * depth_scale(momentum, self.config.accuracy_threshold, self.max_value)
                * online_scale;
            self.upsert(team_id, ACCURACY_MODIFIER_ID, strength, duration, || {
                Box::new(AccuracyModifier::new(strength, duration)) as Box<dyn Modifier>
            });
        }

        if momentum <= self.config.penalty_risk_threshold {
            let strength = self.config.penalty_risk_strength
                * depth_scale(momentum, self.config.penalty_risk_threshold, self.min_value)
                * online_scale;
            self.upsert(team_id, PENALTY_RISK_MODIFIER_ID, strength, duration, || {
                Box::new(PenaltyRiskModifier::new(strength, duration)) as Box<dyn Modifier>
            });
        }
    }

    fn upsert<F>(&mut self, team_id: TeamId, id: &str, strength: f32, duration: f32, make: F)
    where
        F: FnOnce() -> Box<dyn Modifier>,
    {
        match self
            .active
            .iter_mut()
            .find(|e| e.target == team_id && e.modifier.id() == id)
        {
            Some(entry) => entry.modifier.refresh(strength, duration),
            None => {
                debug!(team = %team_id, id, strength, duration, "momentum modifier granted");
                self.active.push(ActiveModifier {
                    target: team_id,
                    modifier: make(),
                });
            }
        }
    }
}

/// 0.5 at the threshold rising linearly to 1.0 at the meter bound.
fn depth_scale(momentum: i32, threshold: i32, bound: i32) -> f32 {
    let span = (bound - threshold).abs();
    let t = if span == 0 {
        1.0
    } else {
        ((momentum - threshold).abs() as f32 / span as f32).clamp(0.0, 1.0)
    };
    0.5 + 0.5 * t
}
