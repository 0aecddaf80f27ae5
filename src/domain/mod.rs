//! Core domain models for depmerge
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency types and update types named by rules
//! - Auto-merge rules as loaded from the rule file
//! - Version change classification
//! - Parsed commit information
//! - Auto-merge decisions
//! - Ecosystems with manifests to consult

mod commit;
mod decision;
mod dependency_type;
mod language;
mod rule;
mod update_type;
mod version_change;

pub use commit::ParsedCommit;
pub use decision::MergeDecision;
pub use dependency_type::DependencyType;
pub use language::Language;
pub use rule::{Rule, RuleEntry};
pub use update_type::{Severity, UpdateType};
pub use version_change::VersionChange;
