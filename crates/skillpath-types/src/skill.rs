//! Skill graph domain types.
//!
//! Defines the static skill node records that make up the knowledge graph
//! and the hydrated `Skill` records the engine hands back to callers.
//! Node types use kebab-case serde names because they are TOML-facing;
//! hydrated output types keep the default snake_case.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Node types (static knowledge data)
// ---------------------------------------------------------------------------

/// Coarse classification of a skill node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCategory {
    Language,
    Framework,
    Tool,
    Concept,
    Core,
    #[serde(rename = "Soft Skill")]
    SoftSkill,
    Domain,
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Language => write!(f, "Language"),
            Self::Framework => write!(f, "Framework"),
            Self::Tool => write!(f, "Tool"),
            Self::Concept => write!(f, "Concept"),
            Self::Core => write!(f, "Core"),
            Self::SoftSkill => write!(f, "Soft Skill"),
            Self::Domain => write!(f, "Domain"),
        }
    }
}

/// The medium of a learning resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    Video,
    Article,
    Course,
    Documentation,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Video => write!(f, "Video"),
            Self::Article => write!(f, "Article"),
            Self::Course => write!(f, "Course"),
            Self::Documentation => write!(f, "Documentation"),
        }
    }
}

/// A learning resource attached to a skill node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LearningResource {
    pub title: String,
    pub url: String,
    pub kind: ResourceKind,
    /// Whether the resource sits behind a paywall.
    #[serde(default)]
    pub premium: bool,
}

/// A unit of learnable competency in the knowledge graph.
///
/// Nodes are immutable static data, loaded once at startup. Prerequisite
/// edges are stored as id references into the same registry, never as
/// object links, so the graph is trivially shareable across concurrent
/// readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SkillNode {
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
    /// 1 = easy, 5 = hard. Validated at load time.
    pub difficulty: u8,
    /// 0-100 market demand score. Validated at load time.
    pub market_value: u8,
    /// Ids of skills that must be learned first. Every entry must reference
    /// an existing node; the relation must be acyclic.
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub resources: Vec<LearningResource>,
}

// ---------------------------------------------------------------------------
// Hydrated output types
// ---------------------------------------------------------------------------

/// Progress state of a skill within a resolved path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillStatus {
    Completed,
    InProgress,
    Locked,
}

impl fmt::Display for SkillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => write!(f, "completed"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Locked => write!(f, "locked"),
        }
    }
}

/// A fully hydrated skill record within a career path.
///
/// Constructed fresh per resolution call and owned solely by the caller.
/// `status` is deliberately a plain public field: progress transitions
/// belong to the session layer, which mutates it directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: SkillStatus,
    pub estimated_hours: u32,
    /// 0-100, copied from the source node's market value.
    pub market_demand: u8,
    pub category: SkillCategory,
    /// Human-readable resource descriptors, in declaration order.
    pub resources: Vec<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
