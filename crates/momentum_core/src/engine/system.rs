//! Momentum System
//!
//! Thin orchestrator over the rule engine, the two team meters, the
//! modifier service, and the crowd controller.
//!
//! Two entry points drive all mutation:
//! - [`MomentumSystem::on_event`] for each play outcome
//! - [`MomentumSystem::update`] once per simulation tick
//!
//! The system keeps one [`GameState`] snapshot, replaced on every `update`.
//! It is the only place the rivalry profile lives.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::crowd::CrowdNoiseController;
use super::meter::{MomentumMeter, MomentumTrend};
use super::modifiers::GameplayModifierService;
use super::rules::MomentumRuleEngine;
use crate::config::MomentumConfig;
use crate::error::{MomentumError, Result};
use crate::models::{EventType, GameState, MomentumEvent, RivalryProfile, TeamId, TeamRegistry};

/// Why an event left momentum untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    MissingSourceTeam,
    TeamsNotSet,
    UnregisteredTeam(TeamId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Applied {
        team: TeamId,
        delta: i32,
        momentum: i32,
    },
    Ignored(IgnoreReason),
}

impl EventOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, EventOutcome::Applied { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMomentumSnapshot {
    pub team: TeamId,
    pub momentum: i32,
    pub normalized: f32,
    pub trend: MomentumTrend,
    pub active_modifiers: Vec<String>,
}

/// Read-only view for presentation layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MomentumSnapshot {
    pub home: Option<TeamMomentumSnapshot>,
    pub away: Option<TeamMomentumSnapshot>,
    pub crowd_intensity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Home,
    Away,
}

#[derive(Debug)]
pub struct MomentumSystem {
    config: MomentumConfig,
    rules: MomentumRuleEngine,
    home_meter: MomentumMeter,
    away_meter: MomentumMeter,
    modifier_service: GameplayModifierService,
    crowd: CrowdNoiseController,
    home_team: Option<TeamId>,
    away_team: Option<TeamId>,
    game_state: GameState,
}

impl Default for MomentumSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MomentumSystem {
    pub fn new() -> Self {
        Self::build(MomentumConfig::default())
    }

    pub fn with_config(config: MomentumConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: MomentumConfig) -> Self {
        Self {
            rules: MomentumRuleEngine::with_config(config.rules.clone()),
            home_meter: MomentumMeter::from_config(&config.meter),
            away_meter: MomentumMeter::from_config(&config.meter),
            modifier_service: GameplayModifierService::with_config(
                config.modifiers.clone(),
                &config.meter,
            ),
            crowd: CrowdNoiseController::with_config(config.crowd.clone()),
            home_team: None,
            away_team: None,
            game_state: GameState::new(),
            config,
        }
    }

    pub fn config(&self) -> &MomentumConfig {
        &self.config
    }

    pub fn set_teams(&mut self, home: TeamId, away: TeamId) -> Result<()> {
        if home == away {
            return Err(MomentumError::DuplicateTeam { team: home });
        }
        self.home_team = Some(home);
        self.away_team = Some(away);
        Ok(())
    }

    pub fn home_team(&self) -> Option<TeamId> {
        self.home_team
    }

    pub fn away_team(&self) -> Option<TeamId> {
        self.away_team
    }

    /// Overwrites the rivalry on the held snapshot.
    ///
    /// The next `update` or `sync_game_state` replaces the whole snapshot,
    /// rivalry included, so a rivalry meant to last the game must also be set
    /// on the `GameState` passed to `update`.
    pub fn set_rivalry_profile(&mut self, profile: RivalryProfile) {
        self.game_state.set_rivalry_profile(profile);
    }

    pub fn rivalry_profile(&self) -> &RivalryProfile {
        self.game_state.rivalry_profile()
    }

    /// Refresh the context `on_event` scores against without ticking.
    pub fn sync_game_state(&mut self, game_state: &GameState) {
        self.game_state = game_state.clone();
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn rules(&self) -> &MomentumRuleEngine {
        &self.rules
    }

    pub fn set_base_points(&mut self, event_type: EventType, points: i32) {
        self.rules.set_base_points(event_type, points);
    }

    pub fn on_event(&mut self, event: &MomentumEvent) -> EventOutcome {
        let Some(source) = event.source_team() else {
            warn!(event_type = ?event.event_type(), "event without source team ignored");
            return EventOutcome::Ignored(IgnoreReason::MissingSourceTeam);
        };
        let side = match self.side_of(source) {
            Ok(side) => side,
            Err(MomentumError::TeamsNotSet) => {
                warn!(team = %source, "event received before teams were set");
                return EventOutcome::Ignored(IgnoreReason::TeamsNotSet);
            }
            Err(_) => {
                warn!(team = %source, event_type = ?event.event_type(), "event for unregistered team ignored");
                return EventOutcome::Ignored(IgnoreReason::UnregisteredTeam(source));
            }
        };

        let delta = self.rules.calculate_delta(event, &self.game_state);
        let meter = self.meter_mut(side);
        meter.add(delta);
        let momentum = meter.value();

        if event.event_type().is_big_moment() {
            self.crowd.pulse_on_big_play();
        }
        if side == Side::Home && delta > 0 {
            self.crowd.apply_home_field_advantage();
        }

        debug!(
            team = %source,
            event_type = ?event.event_type(),
            delta,
            momentum,
            "momentum event applied"
        );
        EventOutcome::Applied {
            team: source,
            delta,
            momentum,
        }
    }

    /// Advance one tick: decay both meters, relax the crowd, re-derive and
    /// apply modifiers for each team, then purge expired modifiers.
    pub fn update(&mut self, teams: &mut TeamRegistry, game_state: &GameState, delta_time: f32) {
        let dt = if delta_time.is_finite() && delta_time >= 0.0 {
            delta_time
        } else {
            warn!(delta_time, "negative or invalid delta_time treated as 0");
            0.0
        };
        if self.game_state.rivalry_profile() != game_state.rivalry_profile() {
            debug!(
                previous = self.game_state.rivalry_profile().name(),
                current = game_state.rivalry_profile().name(),
                "rivalry profile replaced by game state"
            );
        }
        self.game_state = game_state.clone();

        self.home_meter.decay(dt);
        self.away_meter.decay(dt);
        self.crowd.relax(dt);

        let sides = [
            (self.home_team, self.home_meter.value()),
            (self.away_team, self.away_meter.value()),
        ];
        for (team_id, momentum) in sides {
            let Some(team_id) = team_id else { continue };
            match teams.get_mut(team_id) {
                Some(team) => {
                    self.modifier_service
                        .apply(team_id, team, momentum, &self.game_state)
                }
                None => warn!(team = %team_id, "team missing from registry, modifiers skipped"),
            }
        }
        self.modifier_service.remove_expired(dt);

        trace!(
            home = self.home_meter.value(),
            away = self.away_meter.value(),
            crowd = self.crowd.intensity(),
            "momentum tick"
        );
    }

    pub fn get_momentum(&self, team: TeamId) -> Result<i32> {
        self.meter(team).map(MomentumMeter::value)
    }

    pub fn meter(&self, team: TeamId) -> Result<&MomentumMeter> {
        Ok(match self.side_of(team)? {
            Side::Home => &self.home_meter,
            Side::Away => &self.away_meter,
        })
    }

    pub fn trend(&self, team: TeamId) -> Result<MomentumTrend> {
        self.meter(team).map(MomentumMeter::trend)
    }

    pub fn crowd(&self) -> &CrowdNoiseController {
        &self.crowd
    }

    pub fn crowd_mut(&mut self) -> &mut CrowdNoiseController {
        &mut self.crowd
    }

    pub fn crowd_intensity(&self) -> f32 {
        self.crowd.intensity()
    }

    pub fn modifiers(&self) -> &GameplayModifierService {
        &self.modifier_service
    }

    pub fn modifiers_mut(&mut self) -> &mut GameplayModifierService {
        &mut self.modifier_service
    }

    pub fn snapshot(&self) -> MomentumSnapshot {
        MomentumSnapshot {
            home: self.home_team.map(|id| self.team_snapshot(id, &self.home_meter)),
            away: self.away_team.map(|id| self.team_snapshot(id, &self.away_meter)),
            crowd_intensity: self.crowd.intensity(),
        }
    }

    /// Back to neutral: meters, crowd, and modifiers. Teams and game state stay.
    pub fn reset(&mut self) {
        self.home_meter.reset();
        self.away_meter.reset();
        self.crowd.reset();
        self.modifier_service.clear_modifiers();
    }

    fn team_snapshot(&self, team: TeamId, meter: &MomentumMeter) -> TeamMomentumSnapshot {
        TeamMomentumSnapshot {
            team,
            momentum: meter.value(),
            normalized: meter.normalized(),
            trend: meter.trend(),
            active_modifiers: self
                .modifier_service
                .active_ids(team)
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }

    fn side_of(&self, team: TeamId) -> Result<Side> {
        match (self.home_team, self.away_team) {
            (Some(home), _) if home == team => Ok(Side::Home),
            (_, Some(away)) if away == team => Ok(Side::Away),
            (None, None) => Err(MomentumError::TeamsNotSet),
            _ => Err(MomentumError::UnknownTeam { team }),
        }
    }

    fn meter_mut(&mut self, side: Side) -> &mut MomentumMeter {
        match side {
            Side::Home => &mut self.home_meter,
            Side::Away => &mut self.away_meter,
        }
    }
}
