//! Load-time validation of a knowledge document.
//!
//! Everything here is a hard failure: a knowledge base that passes
//! validation can be resolved against without any error path. Acyclicity is
//! checked with `petgraph`'s topological sort over the prerequisite edges.

use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::graph::DiGraph;

use skillpath_types::error::KnowledgeError;

use super::{DEFAULT_ROLE_ID, FALLBACK_DOMAIN, KnowledgeBase};

pub(super) fn validate(kb: &KnowledgeBase) -> Result<(), KnowledgeError> {
    // Per-node field checks and prerequisite reference integrity.
    for (key, node) in &kb.skills {
        if node.id != *key {
            return Err(KnowledgeError::IdMismatch {
                key: key.clone(),
                id: node.id.clone(),
            });
        }
        if !(1..=5).contains(&node.difficulty) {
            return Err(KnowledgeError::DifficultyOutOfRange {
                skill: key.clone(),
                value: node.difficulty,
            });
        }
        if node.market_value > 100 {
            return Err(KnowledgeError::MarketValueOutOfRange {
                skill: key.clone(),
                value: node.market_value,
            });
        }
        for prereq in &node.prerequisites {
            if !kb.skills.contains_key(prereq) {
                return Err(KnowledgeError::DanglingPrerequisite {
                    skill: prereq.clone(),
                    of: key.clone(),
                });
            }
        }
    }

    // Acyclicity. Edge direction is prerequisite -> dependent; toposort
    // reports the offending node on a cycle.
    let mut graph = DiGraph::<&str, ()>::new();
    let mut indices = HashMap::new();
    for key in kb.skills.keys() {
        indices.insert(key.as_str(), graph.add_node(key.as_str()));
    }
    for (key, node) in &kb.skills {
        for prereq in &node.prerequisites {
            graph.add_edge(indices[prereq.as_str()], indices[key.as_str()], ());
        }
    }
    toposort(&graph, None)
        .map_err(|cycle| KnowledgeError::PrerequisiteCycle(graph[cycle.node_id()].to_string()))?;

    // The lookup fallbacks must exist for lookup_template to be total.
    if !kb.templates.contains_key(DEFAULT_ROLE_ID) {
        return Err(KnowledgeError::MissingDefaultRole(DEFAULT_ROLE_ID.to_string()));
    }
    if !kb.domain_defaults.contains_key(&FALLBACK_DOMAIN) {
        return Err(KnowledgeError::MissingFallbackDomain(
            FALLBACK_DOMAIN.to_string(),
        ));
    }

    Ok(())
}
