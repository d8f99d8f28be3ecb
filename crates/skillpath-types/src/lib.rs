//! Shared domain types for skillpath.
//!
//! This crate contains the core domain types used across the skillpath
//! engine: skill nodes, role templates, career paths, and their associated
//! error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod error;
pub mod path;
pub mod role;
pub mod skill;
