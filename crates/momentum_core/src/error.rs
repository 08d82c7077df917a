use thiserror::Error;

use crate::models::TeamId;

#[derive(Error, Debug)]
pub enum MomentumError {
    #[error("Team {team} is not registered as home or away")]
    UnknownTeam { team: TeamId },

    #[error("Teams have not been set on the momentum system")]
    TeamsNotSet,

    #[error("Team {team} cannot be both home and away")]
    DuplicateTeam { team: TeamId },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config JSON error: {0}")]
    ConfigJson(#[from] serde_json::Error),

    #[error("Config YAML error: {0}")]
    ConfigYaml(#[from] serde_yaml::Error),
}

impl MomentumError {
    /// True when the error points at how the caller wired the system
    /// rather than at a bad configuration value.
    pub fn is_wiring_error(&self) -> bool {
        match self {
            MomentumError::UnknownTeam { .. } => true,
            MomentumError::TeamsNotSet => true,
            MomentumError::DuplicateTeam { .. } => true,
            MomentumError::InvalidConfig(_) => false,
            MomentumError::ConfigJson(_) | MomentumError::ConfigYaml(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, MomentumError>;
