//! # momentum_core - Event-Driven Team Momentum
//!
//! Turns discrete play outcomes into a bounded, decaying momentum score for
//! the home and away teams, and turns momentum into short-lived gameplay
//! modifiers and crowd noise.
//!
//! ## Features
//! - Rule engine scoring events by type, severity, game situation and rivalry
//! - Per-team meters with clamping and exponential decay toward neutral
//! - Time-limited accuracy / penalty-risk modifiers derived from momentum
//! - Crowd intensity reacting to big plays and home-field advantage
//!
//! ## Usage
//! ```rust
//! use momentum_core::{EventType, GameState, MomentumEvent, MomentumSystem, Team, TeamRegistry};
//!
//! let mut teams = TeamRegistry::new();
//! let home = teams.insert(Team::new("Hawks", true));
//! let away = teams.insert(Team::new("Bears", false));
//!
//! let mut system = MomentumSystem::new();
//! system.set_teams(home, away).unwrap();
//!
//! system.on_event(&MomentumEvent::for_team(EventType::Touchdown, home, 412.0));
//! system.update(&mut teams, &GameState::new(), 1.0 / 60.0);
//!
//! assert!(system.get_momentum(home).unwrap() > 0);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod models;

pub use config::MomentumConfig;
pub use engine::{
    AccuracyModifier, CrowdNoiseController, EventOutcome, GameplayModifierService, IgnoreReason,
    Modifier, ModifierCore, MomentumMeter, MomentumRuleEngine, MomentumSnapshot, MomentumSystem,
    MomentumTrend, PenaltyRiskModifier, TeamMomentumSnapshot,
};
pub use error::{MomentumError, Result};
pub use models::{
    EventType, GameState, MomentumEvent, RivalryProfile, Team, TeamGameplayModifiers, TeamId,
    TeamRegistry,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
