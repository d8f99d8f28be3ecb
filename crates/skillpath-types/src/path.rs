//! Career path output types.

use serde::{Deserialize, Serialize};

use crate::skill::Skill;

/// Market direction for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemandTrend {
    Up,
    Stable,
    Down,
}

/// A fully hydrated career path for one role.
///
/// Constructed fresh per resolution call; never persisted by the engine.
/// `id` is the identifier the caller asked for, which may differ from the
/// template that actually backed the path when a fallback was used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerPath {
    pub id: String,
    pub title: String,
    pub description: String,
    pub salary_range: String,
    pub demand_trend: DemandTrend,
    /// 0-100 match confidence for the requesting learner.
    pub match_score: u8,
    /// Ordered so that every prerequisite precedes its dependents.
    pub skills: Vec<Skill>,
}
