//! Auto-merge rule definitions

use super::{DependencyType, UpdateType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single auto-merge rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rule {
    /// Which dependencies the rule covers
    pub dependency_type: DependencyType,
    /// Which updates the rule approves
    pub update_type: UpdateType,
    /// Optional regular expression the dependency name must match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency_name: Option<String>,
}

impl Rule {
    /// Creates a new rule covering every dependency name
    pub fn new(dependency_type: DependencyType, update_type: UpdateType) -> Self {
        Self {
            dependency_type,
            update_type,
            dependency_name: None,
        }
    }

    /// Restricts the rule to dependency names matching `pattern` (builder pattern)
    pub fn with_dependency_name(mut self, pattern: impl Into<String>) -> Self {
        self.dependency_name = Some(pattern.into());
        self
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.dependency_type, self.update_type)?;
        if let Some(ref pattern) = self.dependency_name {
            write!(f, " /{}/", pattern)?;
        }
        Ok(())
    }
}

/// One entry of the rule file: `- match: { ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleEntry {
    #[serde(rename = "match")]
    pub rule: Rule,
}
