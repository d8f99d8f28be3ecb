//! Static knowledge registry: skill nodes, role templates, and the
//! role-title domain classification.
//!
//! The registry is declarative TOML validated at load time. Hosts load it
//! once at startup (usually via [`KnowledgeBase::load_builtin`]), wrap it in
//! an `Arc`, and share it read-only; every lookup afterwards is a pure
//! function over immutable data, so concurrent resolutions need no
//! coordination.

mod validate;

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use skillpath_types::error::KnowledgeError;
use skillpath_types::role::{Domain, RoleTemplate};
use skillpath_types::skill::SkillNode;

/// Role id guaranteed to exist in every valid knowledge base; the last
/// resort of the template lookup.
pub const DEFAULT_ROLE_ID: &str = "frontend-dev";

/// Domain whose default skill set backs classified titles whose own domain
/// has no entry.
pub const FALLBACK_DOMAIN: Domain = Domain::Science;

const BUILTIN: &str = include_str!("builtin.toml");

/// Raw shape of a knowledge document before validation. Domain-default
/// keys stay strings here; they are converted to typed [`Domain`]s during
/// construction so an unknown domain fails the load, not a lookup.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct KnowledgeFile {
    skills: BTreeMap<String, SkillNode>,
    templates: BTreeMap<String, RoleTemplate>,
    role_domains: BTreeMap<String, Domain>,
    domain_defaults: BTreeMap<String, Vec<String>>,
}

/// The read-only registry the engine resolves against.
#[derive(Debug)]
pub struct KnowledgeBase {
    pub(crate) skills: BTreeMap<String, SkillNode>,
    pub(crate) templates: BTreeMap<String, RoleTemplate>,
    pub(crate) role_domains: BTreeMap<String, Domain>,
    pub(crate) domain_defaults: BTreeMap<Domain, Vec<String>>,
}

impl KnowledgeBase {
    /// Parse and validate a knowledge document.
    ///
    /// Runs the full load-time validation: per-node field ranges, key/id
    /// agreement, dangling prerequisite references, prerequisite
    /// acyclicity, and presence of the lookup fallbacks. The returned
    /// registry is guaranteed structurally sound, which is what lets
    /// resolution treat every remaining irregularity as a warning instead
    /// of an error.
    pub fn from_toml(document: &str) -> Result<Self, KnowledgeError> {
        let file: KnowledgeFile =
            toml::from_str(document).map_err(|e| KnowledgeError::Parse(e.to_string()))?;

        let mut domain_defaults = BTreeMap::new();
        for (key, skill_ids) in file.domain_defaults {
            let domain = Domain::from_key(&key).ok_or_else(|| {
                KnowledgeError::Parse(format!("unknown domain '{key}' in domain-defaults"))
            })?;
            domain_defaults.insert(domain, skill_ids);
        }

        let kb = Self {
            skills: file.skills,
            templates: file.templates,
            role_domains: file.role_domains,
            domain_defaults,
        };
        validate::validate(&kb)?;

        Ok(kb)
    }

    /// Load the built-in knowledge graph shipped with the crate.
    pub fn load_builtin() -> Result<Self, KnowledgeError> {
        Self::from_toml(BUILTIN)
    }

    /// Look up a skill node by id.
    pub fn skill(&self, id: &str) -> Option<&SkillNode> {
        self.skills.get(id)
    }

    /// Resolve a role id to a template. Total function: always produces a
    /// template, never fails.
    ///
    /// Resolution order:
    /// 1. Exact match in the template registry.
    /// 2. A classified role title whose normalized form equals the id; the
    ///    template is synthesized from that domain's default skill set
    ///    (falling back to the [`FALLBACK_DOMAIN`] set when the domain has
    ///    none).
    /// 3. The [`DEFAULT_ROLE_ID`] template.
    pub fn lookup_template(&self, role_id: &str) -> RoleTemplate {
        if let Some(template) = self.templates.get(role_id) {
            return template.clone();
        }

        if let Some((title, domain)) = self
            .role_domains
            .iter()
            .find(|(title, _)| normalize_role_id(title) == role_id)
        {
            let required_skills = self
                .domain_defaults
                .get(domain)
                .or_else(|| self.domain_defaults.get(&FALLBACK_DOMAIN))
                .cloned()
                .unwrap_or_default();

            debug!(title = %title, domain = %domain, "inferred role template from domain classification");

            return RoleTemplate {
                title: title.clone(),
                description: format!("Career path for {title} in the {domain} field."),
                required_skills,
            };
        }

        debug!(role = %role_id, fallback = DEFAULT_ROLE_ID, "unknown role, using default template");

        // Present in every valid knowledge base, checked at load time.
        self.templates[DEFAULT_ROLE_ID].clone()
    }
}

/// Derive a role id from a free-text title: lowercase, with every run of
/// non-alphanumeric characters collapsed to a single `-`.
///
/// The mapping is lossy -- distinct titles can normalize to the same id
/// ("C++ Developer" and "C# Developer" both become "c-developer"). The
/// registry resolves collisions by scan order; see DESIGN.md.
pub fn normalize_role_id(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut id = String::with_capacity(lowered.len());
    let mut pending_separator = false;

    for c in lowered.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator {
                id.push('-');
                pending_separator = false;
            }
            id.push(c);
        } else {
            pending_separator = true;
        }
    }
    if pending_separator {
        id.push('-');
    }

    id
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
