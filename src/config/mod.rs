//! Auto-merge rule file loading
//!
//! The rule file is a YAML sequence of `match` entries:
//!
//! ```yaml
//! - match:
//!     dependency_type: all
//!     update_type: "semver:patch"
//! - match:
//!     dependency_type: development
//!     update_type: "security:all"
//! ```
//!
//! When no rule file exists, a single `all` rule for the fallback target
//! severity is used instead.

use crate::domain::{DependencyType, Rule, RuleEntry, Severity, UpdateType};
use crate::error::ConfigError;
use log::{debug, info};
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Rule file location, relative to the repository root
pub const DEFAULT_CONFIG_PATH: &str = ".github/auto-merge.yml";

/// Where a rule list came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSource {
    /// Loaded from a rule file
    File(PathBuf),
    /// Built from the fallback target severity
    Target(Severity),
}

impl fmt::Display for RuleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleSource::File(path) => write!(f, "{}", path.display()),
            RuleSource::Target(severity) => write!(f, "target {}", severity),
        }
    }
}

/// A rule list together with its source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedRules {
    pub rules: Vec<Rule>,
    pub source: RuleSource,
}

/// Parse rule file content
pub fn parse_rules(content: &str, path: &Path) -> Result<Vec<Rule>, ConfigError> {
    let value: serde_yaml::Value = serde_yaml::from_str(content)
        .map_err(|e| ConfigError::yaml_parse_error(path, e.to_string()))?;

    // An empty or comment-only file has no rules
    if value.is_null() {
        return Ok(Vec::new());
    }

    let entries: Vec<RuleEntry> = serde_yaml::from_value(value)
        .map_err(|e| ConfigError::yaml_parse_error(path, e.to_string()))?;

    Ok(entries.into_iter().map(|entry| entry.rule).collect())
}

/// Read and parse a rule file
pub fn load_rules(path: &Path) -> Result<Vec<Rule>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::not_found(path),
        _ => ConfigError::read_error(path, e),
    })?;

    let rules = parse_rules(&content, path)?;
    debug!("loaded {} rule(s) from {}", rules.len(), path.display());
    Ok(rules)
}

/// Rule list used when no rule file exists
pub fn default_rules(target: Severity) -> Vec<Rule> {
    vec![Rule::new(DependencyType::All, UpdateType::Semver(target))]
}

/// Resolve the rule list for a run.
///
/// An explicit `config` path must exist. Without one, the default rule
/// file under `root` is used when present, otherwise the `target` fallback.
pub fn resolve_rules(
    config: Option<&Path>,
    root: &Path,
    target: Severity,
) -> Result<LoadedRules, ConfigError> {
    if let Some(path) = config {
        return Ok(LoadedRules {
            rules: load_rules(path)?,
            source: RuleSource::File(path.to_path_buf()),
        });
    }

    let path = root.join(DEFAULT_CONFIG_PATH);
    match load_rules(&path) {
        Ok(rules) => Ok(LoadedRules {
            rules,
            source: RuleSource::File(path),
        }),
        Err(ConfigError::NotFound { .. }) => {
            info!(
                "{} not found, using fallback rule: all semver:{}",
                path.display(),
                target
            );
            Ok(LoadedRules {
                rules: default_rules(target),
                source: RuleSource::Target(target),
            })
        }
        Err(e) => Err(e),
    }
}
