//! Dependency classification used by auto-merge rules

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which dependencies a rule applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyType {
    /// Any dependency
    All,
    /// Runtime dependencies only
    Production,
    /// Development-only dependencies (e.g., devDependencies, dev-dependencies)
    Development,
}

impl DependencyType {
    /// Returns true if a commit with the given development flag falls under this type
    pub fn accepts(&self, is_dev: bool) -> bool {
        match self {
            DependencyType::All => true,
            DependencyType::Production => !is_dev,
            DependencyType::Development => is_dev,
        }
    }

    /// Returns the configuration keyword for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyType::All => "all",
            DependencyType::Production => "production",
            DependencyType::Development => "development",
        }
    }

    /// Classify a commit by its development flag
    pub fn of_commit(is_dev: bool) -> Self {
        if is_dev {
            DependencyType::Development
        } else {
            DependencyType::Production
        }
    }
}

impl fmt::Display for DependencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_accepts_everything() {
        assert!(DependencyType::All.accepts(true));
        assert!(DependencyType::All.accepts(false));
    }

    #[test]
    fn test_production_rejects_dev() {
        assert!(DependencyType::Production.accepts(false));
        assert!(!DependencyType::Production.accepts(true));
    }

    #[test]
    fn test_development_rejects_production() {
        assert!(DependencyType::Development.accepts(true));
        assert!(!DependencyType::Development.accepts(false));
    }

    #[test]
    fn test_of_commit() {
        assert_eq!(DependencyType::of_commit(true), DependencyType::Development);
        assert_eq!(DependencyType::of_commit(false), DependencyType::Production);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", DependencyType::Production), "production");
    }

    #[test]
    fn test_serde_dependency_type() {
        let parsed: DependencyType = serde_json::from_str("\"development\"").unwrap();
        assert_eq!(parsed, DependencyType::Development);

        assert!(serde_json::from_str::<DependencyType>("\"optional\"").is_err());
    }
}
