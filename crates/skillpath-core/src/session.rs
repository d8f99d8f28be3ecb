//! In-memory progress overlay for a single career path.
//!
//! Status transitions belong here, in the session layer, not in the
//! resolver: the engine only assigns initial statuses. Nothing is
//! persisted; dropping the session drops the progress.

use skillpath_types::path::CareerPath;
use skillpath_types::skill::{Skill, SkillStatus};

/// Tracks a learner's progress through one resolved path.
pub struct PathSession {
    path: CareerPath,
}

impl PathSession {
    pub fn new(path: CareerPath) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &CareerPath {
        &self.path
    }

    /// Consume the session, returning the path with its current statuses.
    pub fn into_path(self) -> CareerPath {
        self.path
    }

    /// The first in-progress skill, if any.
    pub fn active_skill(&self) -> Option<&Skill> {
        self.path
            .skills
            .iter()
            .find(|s| s.status == SkillStatus::InProgress)
    }

    pub fn completed_count(&self) -> usize {
        self.path
            .skills
            .iter()
            .filter(|s| s.status == SkillStatus::Completed)
            .count()
    }

    /// Completed share of the path, 0-100. An empty path counts as 0.
    pub fn progress_percent(&self) -> u8 {
        if self.path.skills.is_empty() {
            return 0;
        }
        (self.completed_count() * 100 / self.path.skills.len()) as u8
    }

    /// Mark `skill_id` completed and promote the immediately following
    /// skill to in-progress if it was locked.
    ///
    /// Returns false when the id is not part of this path.
    pub fn mark_completed(&mut self, skill_id: &str) -> bool {
        let Some(index) = self.path.skills.iter().position(|s| s.id == skill_id) else {
            return false;
        };

        self.path.skills[index].status = SkillStatus::Completed;

        if let Some(next) = self.path.skills.get_mut(index + 1) {
            if next.status == SkillStatus::Locked {
                next.status = SkillStatus::InProgress;
            }
        }

        true
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::engine::PathEngine;
    use crate::knowledge::KnowledgeBase;

    fn session() -> PathSession {
        let engine = PathEngine::new(Arc::new(KnowledgeBase::load_builtin().unwrap()));
        PathSession::new(engine.generate("frontend-dev", None))
    }

    #[test]
    fn test_initial_state_reflects_simulated_progress() {
        let session = session();
        assert_eq!(session.completed_count(), 2);
        assert_eq!(session.active_skill().unwrap().id, "git");
        // 2 of 6 completed.
        assert_eq!(session.progress_percent(), 33);
    }

    #[test]
    fn test_completing_active_skill_unlocks_the_next() {
        let mut session = session();

        assert!(session.mark_completed("git"));
        assert_eq!(session.completed_count(), 3);
        assert_eq!(session.active_skill().unwrap().id, "js-basics");
    }

    #[test]
    fn test_completing_does_not_demote_a_completed_successor() {
        let mut session = session();

        // css (position 1) is already completed; completing html must not
        // flip it back to in-progress.
        assert!(session.mark_completed("html"));
        assert_eq!(
            session.path().skills[1].status,
            SkillStatus::Completed
        );
    }

    #[test]
    fn test_completing_the_last_skill_has_no_successor_to_promote() {
        let mut session = session();
        assert!(session.mark_completed("typescript"));
        assert_eq!(session.path().skills[5].status, SkillStatus::Completed);
    }

    #[test]
    fn test_unknown_skill_is_reported_not_applied() {
        let mut session = session();
        assert!(!session.mark_completed("no-such-skill"));
        assert_eq!(session.completed_count(), 2);
    }

    #[test]
    fn test_full_walkthrough_reaches_one_hundred_percent() {
        let mut session = session();
        let ids: Vec<String> = session.path().skills.iter().map(|s| s.id.clone()).collect();

        for id in ids {
            session.mark_completed(&id);
        }

        assert_eq!(session.progress_percent(), 100);
        assert!(session.active_skill().is_none());
    }
}
