//! depmerge - Auto-merge gate for dependency update commits
//!
//! This library decides whether an automated dependency update commit
//! (e.g., from Dependabot) may be merged automatically:
//! - Parses the commit title (dependency, versions, security and dev markers)
//! - Classifies the version change (major/minor/patch and pre-releases)
//! - Matches it against auto-merge rules loaded from `.github/auto-merge.yml`

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod matcher;
pub mod orchestrator;
pub mod output;
pub mod parser;

pub use matcher::{matches, RuleMatcher};
