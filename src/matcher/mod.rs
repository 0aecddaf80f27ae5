//! Auto-merge rule matching
//!
//! This module provides:
//! - Rule validation (unsupported update types, dependency name patterns)
//! - The judgment engine that decides whether a commit may be auto-merged
//! - `matches`, the title-in, boolean-out entry point

use crate::domain::{MergeDecision, ParsedCommit, Rule, UpdateType, VersionChange};
use crate::error::{AppError, ConfigError};
use crate::parser::parse_title;
use log::debug;
use regex::Regex;
use std::fmt;

/// Why a single rule did not approve a commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleMismatch {
    /// Rule covers production or development dependencies only
    DependencyType,
    /// Rule's dependency name pattern did not match
    DependencyName,
    /// Security rule, but the commit is not a security update
    NotSecurity,
    /// Semver rule, but the commit is a security update
    SecurityUpdate,
    /// Version change exceeds the rule's severity
    ExceedsSeverity,
    /// Both versions have the same precedence
    NoChange,
}

impl fmt::Display for RuleMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RuleMismatch::DependencyType => "dependency type differs",
            RuleMismatch::DependencyName => "dependency name does not match",
            RuleMismatch::NotSecurity => "not a security update",
            RuleMismatch::SecurityUpdate => "security update needs a security rule",
            RuleMismatch::ExceedsSeverity => "change exceeds rule severity",
            RuleMismatch::NoChange => "versions do not differ",
        };
        write!(f, "{}", text)
    }
}

/// A validated rule with its compiled name pattern
#[derive(Debug)]
struct CompiledRule {
    rule: Rule,
    name_pattern: Option<Regex>,
}

impl CompiledRule {
    fn compile(rule: &Rule) -> Result<Self, ConfigError> {
        if rule.update_type == UpdateType::InRange {
            return Err(ConfigError::UnsupportedUpdateType {
                value: rule.update_type.to_string(),
            });
        }

        let name_pattern = rule
            .dependency_name
            .as_deref()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| ConfigError::InvalidDependencyPattern {
                    pattern: pattern.to_string(),
                    message: e.to_string(),
                })
            })
            .transpose()?;

        Ok(Self {
            rule: rule.clone(),
            name_pattern,
        })
    }

    fn check(
        &self,
        commit: &ParsedCommit,
        change: Option<VersionChange>,
    ) -> Result<(), RuleMismatch> {
        if !self.rule.dependency_type.accepts(commit.is_dev) {
            return Err(RuleMismatch::DependencyType);
        }

        if let Some(ref pattern) = self.name_pattern {
            if !pattern.is_match(&commit.dependency) {
                return Err(RuleMismatch::DependencyName);
            }
        }

        match (self.rule.update_type.is_security(), commit.is_security) {
            (true, false) => return Err(RuleMismatch::NotSecurity),
            (false, true) => return Err(RuleMismatch::SecurityUpdate),
            _ => {}
        }

        let Some(change) = change else {
            return Err(RuleMismatch::NoChange);
        };

        // Severity is a ceiling: anything up to and including it passes
        match self.rule.update_type.ceiling() {
            Some(ceiling) if ceiling >= change.weight() => Ok(()),
            _ => Err(RuleMismatch::ExceedsSeverity),
        }
    }
}

/// Judgment engine that decides whether a commit may be auto-merged
#[derive(Debug)]
pub struct RuleMatcher {
    rules: Vec<CompiledRule>,
}

impl RuleMatcher {
    /// Validate and compile the rule list.
    ///
    /// Fails on the first `in_range` rule or invalid dependency name
    /// pattern, whatever commit is judged afterwards.
    pub fn new(rules: &[Rule]) -> Result<Self, ConfigError> {
        let rules = rules
            .iter()
            .map(CompiledRule::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Judge a commit; the first approving rule wins
    pub fn judge(&self, commit: &ParsedCommit) -> MergeDecision {
        let change = commit.change();

        for compiled in &self.rules {
            match compiled.check(commit, change) {
                Ok(()) => {
                    debug!("rule '{}' approves {}", compiled.rule, commit);
                    return MergeDecision::approve(commit.clone(), change, compiled.rule.clone());
                }
                Err(mismatch) => debug!("rule '{}' skipped: {}", compiled.rule, mismatch),
            }
        }

        MergeDecision::manual(commit.clone(), change)
    }
}

/// Decide whether the commit titled `title` may be auto-merged under `rules`.
///
/// Rules are validated before the title is parsed, so an unsupported
/// rule is reported even for titles that would not parse.
pub fn matches(title: &str, rules: &[Rule]) -> Result<bool, AppError> {
    let matcher = RuleMatcher::new(rules)?;
    let commit = parse_title(title)?;
    Ok(matcher.judge(&commit).should_merge())
}
