//! Structured view of a dependency update commit

use super::{DependencyType, VersionChange};
use semver::Version;
use std::fmt;

/// Fields extracted from a dependency update commit title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommit {
    /// Name of the bumped dependency
    pub dependency: String,
    /// Whether the update is flagged as a security fix
    pub is_security: bool,
    /// Whether the dependency is a development dependency
    pub is_dev: bool,
    /// Version before the update
    pub from: Version,
    /// Version after the update
    pub to: Version,
}

impl ParsedCommit {
    /// Classified change between `from` and `to`
    pub fn change(&self) -> Option<VersionChange> {
        VersionChange::between(&self.from, &self.to)
    }

    pub fn dependency_type(&self) -> DependencyType {
        DependencyType::of_commit(self.is_dev)
    }

    /// Marks the commit as security-motivated (builder pattern)
    pub fn with_security(mut self, is_security: bool) -> Self {
        self.is_security = is_security;
        self
    }

    /// Overrides the development flag (builder pattern)
    pub fn with_dev(mut self, is_dev: bool) -> Self {
        self.is_dev = is_dev;
        self
    }
}

impl fmt::Display for ParsedCommit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let security_marker = if self.is_security { " [security]" } else { "" };
        write!(
            f,
            "{} {} -> {} ({}){}",
            self.dependency,
            self.from,
            self.to,
            self.dependency_type(),
            security_marker
        )
    }
}
