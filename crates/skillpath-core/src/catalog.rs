//! Role catalog: summary paths for every role the knowledge base can
//! answer for.

use std::collections::HashSet;

use skillpath_types::path::{CareerPath, DemandTrend};

use crate::knowledge::{KnowledgeBase, normalize_role_id};
use crate::valuation::SalaryFormat;

/// Match confidence reported for generic catalog entries, lower than for
/// paths generated on demand.
const CATALOG_MATCH_SCORE: u8 = 85;

/// Summary entries for browsing: explicit templates first, then every
/// classified role title under its normalized id.
///
/// Skills are left empty -- consumers call the engine when a full path is
/// needed. When two titles normalize to the same id, the first entry wins.
pub fn role_catalog(knowledge: &KnowledgeBase, salary: &SalaryFormat) -> Vec<CareerPath> {
    let mut seen = HashSet::new();
    let mut paths = Vec::new();

    for (id, template) in &knowledge.templates {
        seen.insert(id.clone());
        paths.push(CareerPath {
            id: id.clone(),
            title: template.title.clone(),
            description: template.description.clone(),
            salary_range: salary.fallback_range(),
            demand_trend: DemandTrend::Up,
            match_score: CATALOG_MATCH_SCORE,
            skills: vec![],
        });
    }

    for title in knowledge.role_domains.keys() {
        let id = normalize_role_id(title);
        if !seen.insert(id.clone()) {
            continue;
        }
        paths.push(CareerPath {
            id,
            title: title.clone(),
            description: format!("Career path for {title}."),
            salary_range: salary.fallback_range(),
            demand_trend: DemandTrend::Up,
            match_score: CATALOG_MATCH_SCORE,
            skills: vec![],
        });
    }

    paths
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lists_templates_before_classified_roles() {
        let kb = KnowledgeBase::load_builtin().unwrap();
        let catalog = role_catalog(&kb, &SalaryFormat::default());

        assert_eq!(catalog[0].id, "data-scientist");
        assert_eq!(catalog[1].id, "frontend-dev");
        assert!(catalog.iter().any(|p| p.id == "software-engineer"));
    }

    #[test]
    fn test_catalog_entries_are_summaries() {
        let kb = KnowledgeBase::load_builtin().unwrap();
        let catalog = role_catalog(&kb, &SalaryFormat::default());

        let advocate = catalog.iter().find(|p| p.id == "advocate").unwrap();
        assert_eq!(advocate.title, "Advocate");
        assert_eq!(advocate.description, "Career path for Advocate.");
        assert_eq!(advocate.salary_range, "₹6L - ₹18L");
        assert_eq!(advocate.match_score, 85);
        assert!(advocate.skills.is_empty());
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let kb = KnowledgeBase::load_builtin().unwrap();
        let catalog = role_catalog(&kb, &SalaryFormat::default());

        let mut ids = HashSet::new();
        for path in &catalog {
            assert!(ids.insert(path.id.clone()), "duplicate catalog id {}", path.id);
        }
    }

    #[test]
    fn test_classified_title_colliding_with_template_keeps_template() {
        let kb = KnowledgeBase::load_builtin().unwrap();
        let catalog = role_catalog(&kb, &SalaryFormat::default());

        // "Data Scientist" is both an explicit template and a classified
        // title; the template entry wins.
        let entry = catalog.iter().find(|p| p.id == "data-scientist").unwrap();
        assert_eq!(
            entry.description,
            "Extracts insights from data using statistical methods and machine learning."
        );
    }
}
