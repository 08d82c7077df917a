//! Teams and the arena that owns them.
//!
//! The momentum engine never holds a `Team` directly. Callers keep their
//! teams in a [`TeamRegistry`] and hand the engine [`TeamId`] handles.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const RATING_MIN: i32 = 0;
pub const RATING_MAX: i32 = 100;
pub const DEFAULT_RATING: i32 = 50;

/// Index handle into a [`TeamRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub usize);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Gameplay parameters that momentum modifiers write into.
///
/// Rebuilt from scratch on every modifier pass, so the values always
/// reflect the modifiers active on the latest tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamGameplayModifiers {
    /// Additive accuracy bonus (0.10 = +10%)
    pub accuracy_bonus: f32,
    /// Additive penalty risk (0.15 = +15% chance of a flag)
    pub penalty_risk: f32,
}

impl TeamGameplayModifiers {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_neutral(&self) -> bool {
        self.accuracy_bonus == 0.0 && self.penalty_risk == 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    name: String,
    is_home: bool,
    discipline_rating: i32,
    composure_rating: i32,
    /// Live modifier output, owned by the modifier pass
    pub gameplay: TeamGameplayModifiers,
}

impl Default for Team {
    fn default() -> Self {
        Self::new("", false)
    }
}

impl Team {
    pub fn new(name: impl Into<String>, is_home: bool) -> Self {
        Self::with_ratings(name, is_home, DEFAULT_RATING, DEFAULT_RATING)
    }

    pub fn with_ratings(
        name: impl Into<String>,
        is_home: bool,
        discipline_rating: i32,
        composure_rating: i32,
    ) -> Self {
        Self {
            name: name.into(),
            is_home,
            discipline_rating: clamp_rating(discipline_rating),
            composure_rating: clamp_rating(composure_rating),
            gameplay: TeamGameplayModifiers::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_home(&self) -> bool {
        self.is_home
    }

    pub fn discipline_rating(&self) -> i32 {
        self.discipline_rating
    }

    pub fn composure_rating(&self) -> i32 {
        self.composure_rating
    }

    pub fn set_discipline_rating(&mut self, value: i32) {
        self.discipline_rating = clamp_rating(value);
    }

    pub fn set_composure_rating(&mut self, value: i32) {
        self.composure_rating = clamp_rating(value);
    }
}

fn clamp_rating(value: i32) -> i32 {
    value.clamp(RATING_MIN, RATING_MAX)
}

/// Caller-owned arena of teams.
#[derive(Debug, Clone, Default)]
pub struct TeamRegistry {
    teams: Vec<Team>,
}

impl TeamRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, team: Team) -> TeamId {
        self.teams.push(team);
        TeamId(self.teams.len() - 1)
    }

    pub fn get(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(id.0)
    }

    pub fn get_mut(&mut self, id: TeamId) -> Option<&mut Team> {
        self.teams.get_mut(id.0)
    }

    pub fn contains(&self, id: TeamId) -> bool {
        id.0 < self.teams.len()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TeamId, &Team)> {
        self.teams.iter().enumerate().map(|(i, t)| (TeamId(i), t))
    }
}
