//! Path hydration: ordered skill ids into fully described records.
//!
//! Status assignment is a strategy seam: the engine injects a
//! [`StatusPolicy`] so hosts with real learner records can replace the
//! simulated default without touching resolution or hydration.

use std::collections::HashSet;

use skillpath_types::skill::{Skill, SkillNode, SkillStatus};

use crate::knowledge::KnowledgeBase;

/// Assigns a progress status to each skill of a freshly hydrated path.
pub trait StatusPolicy {
    /// Status for the skill at `position` (0-based) within the path.
    fn assign(&self, position: usize, node: &SkillNode) -> SkillStatus;
}

/// Default simulated-progress policy: the first two skills count as
/// completed, the third is in flight, everything later is locked.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedProgress;

impl StatusPolicy for SimulatedProgress {
    fn assign(&self, position: usize, _node: &SkillNode) -> SkillStatus {
        match position {
            0 | 1 => SkillStatus::Completed,
            2 => SkillStatus::InProgress,
            _ => SkillStatus::Locked,
        }
    }
}

/// Policy backed by recorded completions.
///
/// A skill is completed when recorded, in progress once every prerequisite
/// is recorded, and locked otherwise.
#[derive(Debug, Clone, Default)]
pub struct RecordedProgress {
    completed: HashSet<String>,
}

impl RecordedProgress {
    pub fn new(completed: impl IntoIterator<Item = String>) -> Self {
        Self {
            completed: completed.into_iter().collect(),
        }
    }
}

impl StatusPolicy for RecordedProgress {
    fn assign(&self, _position: usize, node: &SkillNode) -> SkillStatus {
        if self.completed.contains(&node.id) {
            SkillStatus::Completed
        } else if node
            .prerequisites
            .iter()
            .all(|p| self.completed.contains(p))
        {
            SkillStatus::InProgress
        } else {
            SkillStatus::Locked
        }
    }
}

/// Hydrate ordered skill ids into full records.
///
/// Ids without a node are dropped silently; the resolver already warned
/// about them, and positions are counted over emitted skills so a dropped
/// id cannot shift the progress window. Estimated hours follow the fixed
/// linear heuristic `difficulty * 10 + 10`.
pub fn hydrate(
    knowledge: &KnowledgeBase,
    ordered_ids: &[String],
    policy: &dyn StatusPolicy,
) -> Vec<Skill> {
    let mut skills: Vec<Skill> = Vec::with_capacity(ordered_ids.len());

    for id in ordered_ids {
        let Some(node) = knowledge.skill(id) else {
            continue;
        };
        let position = skills.len();
        skills.push(Skill {
            id: node.id.clone(),
            name: node.name.clone(),
            description: format!("Master {} to advance your career.", node.name),
            status: policy.assign(position, node),
            estimated_hours: u32::from(node.difficulty) * 10 + 10,
            market_demand: node.market_value,
            category: node.category,
            resources: node
                .resources
                .iter()
                .map(|r| format!("{}: {} ({})", r.kind, r.title, r.url))
                .collect(),
        });
    }

    skills
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
