//! Dependency resolution: prerequisite-ordered expansion of requested
//! skills.
//!
//! The output order is contractual, not just "some" topological order:
//! targets are expanded in their given order, prerequisites in declared
//! order before the dependent, shared prerequisites deduplicated at the
//! first branch that reaches them. That is why this is a hand-rolled DFS
//! rather than `petgraph::algo::toposort` (which owns the load-time
//! acyclicity check instead).

use std::collections::HashSet;

use tracing::warn;

use crate::knowledge::KnowledgeBase;

/// Order `targets` so that every prerequisite precedes its dependents and
/// every id appears exactly once.
///
/// Ids without a node in the knowledge base are excluded with a warning;
/// a partial path is more useful than no path. An empty target list yields
/// an empty result.
pub fn resolve_order(knowledge: &KnowledgeBase, targets: &[String]) -> Vec<String> {
    let mut visited = HashSet::new();
    let mut ordered = Vec::new();

    for id in targets {
        visit(knowledge, id, &mut visited, &mut ordered);
    }

    ordered
}

fn visit(
    knowledge: &KnowledgeBase,
    id: &str,
    visited: &mut HashSet<String>,
    ordered: &mut Vec<String>,
) {
    if visited.contains(id) {
        return;
    }

    let Some(node) = knowledge.skill(id) else {
        warn!(skill = %id, "skipping unknown skill id during resolution");
        return;
    };

    // Marked before descending, so a node already on the recursion path
    // counts as visited and traversal stays bounded even on cyclic data.
    visited.insert(id.to_string());

    for prereq in &node.prerequisites {
        visit(knowledge, prereq, visited, ordered);
    }

    ordered.push(id.to_string());
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
