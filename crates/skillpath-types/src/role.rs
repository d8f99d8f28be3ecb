//! Role and domain classification types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse career domain, used as a fallback skill-set source when no
/// explicit role template exists for a requested role.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Science,
    Engineering,
    Commerce,
    Management,
    Arts,
    Law,
    Humanities,
}

impl Domain {
    /// Parse the lowercase wire spelling used by knowledge documents.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "science" => Some(Self::Science),
            "engineering" => Some(Self::Engineering),
            "commerce" => Some(Self::Commerce),
            "management" => Some(Self::Management),
            "arts" => Some(Self::Arts),
            "law" => Some(Self::Law),
            "humanities" => Some(Self::Humanities),
            _ => None,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Science => write!(f, "Science"),
            Self::Engineering => write!(f, "Engineering"),
            Self::Commerce => write!(f, "Commerce"),
            Self::Management => write!(f, "Management"),
            Self::Arts => write!(f, "Arts"),
            Self::Law => write!(f, "Law"),
            Self::Humanities => write!(f, "Humanities"),
        }
    }
}

/// The skill requirements bound to a named career role.
///
/// The registry key is the role id; the template body does not repeat it.
/// `required_skills` are the entry points into the dependency graph, in
/// presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RoleTemplate {
    pub title: String,
    pub description: String,
    pub required_skills: Vec<String>,
}

/// Caller-supplied context for a path resolution.
///
/// Ignored by the default status policy; reserved for pluggable status and
/// effort policies backed by real learner records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerProfile {
    pub name: String,
    pub email: String,
    pub college: String,
    /// Degree course, e.g. "B.Tech", "BCA".
    pub course: String,
    pub year: String,
    pub target_role_id: String,
    /// Current occupation, e.g. "Student".
    pub current_role: String,
}
