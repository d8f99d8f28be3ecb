//! Career path resolution engine.
//!
//! Deterministic graph traversal over a static skill knowledge base: role
//! lookup with domain-classified fallbacks, prerequisite-ordered dependency
//! resolution, path hydration with pluggable progress policies, and a
//! salary heuristic. Every call is a pure function over immutable data
//! loaded once at startup -- no persistence, no I/O, no model.

pub mod catalog;
pub mod engine;
pub mod hydrate;
pub mod knowledge;
pub mod resolver;
pub mod session;
pub mod valuation;
