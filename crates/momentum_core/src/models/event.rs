//! Momentum events fed into the engine by the play simulation.

use serde::{Deserialize, Serialize};

use super::team::TeamId;

/// Play outcomes that move momentum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Turnover,
    Sack,
    BigPlay,
    ThirdDownConversion,
    FourthDownConversion,
    MissedKick,
    Touchdown,
    Interception,
    Fumble,
    Stop,
    Other,
}

impl EventType {
    /// Points credited to the source team before any scaling.
    ///
    /// Negative values drain the source team (it lost the ball, got sacked,
    /// missed the kick).
    pub fn default_base_points(self) -> i32 {
        match self {
            EventType::Turnover => -12,
            EventType::Sack => -6,
            EventType::BigPlay => 10,
            EventType::ThirdDownConversion => 4,
            EventType::FourthDownConversion => 8,
            EventType::MissedKick => -8,
            EventType::Touchdown => 15,
            EventType::Interception => -14,
            EventType::Fumble => -12,
            EventType::Stop => 6,
            EventType::Other => 0,
        }
    }

    /// Plays loud enough to spike the crowd.
    pub fn is_big_moment(self) -> bool {
        matches!(
            self,
            EventType::BigPlay
                | EventType::Touchdown
                | EventType::Interception
                | EventType::Sack
                | EventType::Fumble
                | EventType::FourthDownConversion
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentumEvent {
    event_type: EventType,
    source_team: Option<TeamId>,
    severity: i32,
    /// Game clock timestamp in seconds
    timestamp: f32,
}

impl MomentumEvent {
    pub fn new(event_type: EventType, source_team: Option<TeamId>, severity: i32, timestamp: f32) -> Self {
        Self {
            event_type,
            source_team,
            severity,
            timestamp,
        }
    }

    /// Event credited to `team` with severity 1.
    pub fn for_team(event_type: EventType, team: TeamId, timestamp: f32) -> Self {
        Self::new(event_type, Some(team), 1, timestamp)
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn source_team(&self) -> Option<TeamId> {
        self.source_team
    }

    pub fn severity(&self) -> i32 {
        self.severity
    }

    pub fn timestamp(&self) -> f32 {
        self.timestamp
    }
}
