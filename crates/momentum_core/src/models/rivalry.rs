use serde::{Deserialize, Serialize};

/// Matchup flavour used to scale momentum swings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RivalryProfile {
    name: String,
    tier: u32,
    hostility_factor: f32,
    is_rivalry_game: bool,
}

impl Default for RivalryProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            tier: 0,
            hostility_factor: 1.0,
            is_rivalry_game: false,
        }
    }
}

impl RivalryProfile {
    pub fn new(name: impl Into<String>, tier: u32, hostility_factor: f32, is_rivalry_game: bool) -> Self {
        Self {
            name: name.into(),
            tier,
            hostility_factor,
            is_rivalry_game,
        }
    }

    /// Shorthand for a flagged rivalry game.
    pub fn rivalry(name: impl Into<String>, tier: u32, hostility_factor: f32) -> Self {
        Self::new(name, tier, hostility_factor, true)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tier(&self) -> u32 {
        self.tier
    }

    pub fn hostility_factor(&self) -> f32 {
        self.hostility_factor
    }

    pub fn is_rivalry_game(&self) -> bool {
        self.is_rivalry_game
    }
}
