//! Orchestrator for coordinating the auto-merge decision
//!
//! This module provides:
//! - Workflow coordination: load rules → parse title → classify dependency → judge
//! - Security label handling
//! - Manifest-based dependency type lookup with title fallback

use crate::cli::CliArgs;
use crate::config::{resolve_rules, RuleSource};
use crate::domain::{Language, MergeDecision, ParsedCommit};
use crate::error::AppError;
use crate::manifest::find_dev_dependency;
use crate::matcher::RuleMatcher;
use crate::parser::parse_title;
use log::info;
use std::fmt;
use std::path::Path;

/// How the dependency type of a commit was decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyTypeSource {
    /// Listed as a development dependency in a manifest
    Manifest(Language),
    /// `deps-dev` scope in the commit title
    Title,
    /// Neither; production assumed
    Default,
}

impl fmt::Display for DependencyTypeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependencyTypeSource::Manifest(language) => {
                write!(f, "{}", language.manifest_filename())
            }
            DependencyTypeSource::Title => write!(f, "title"),
            DependencyTypeSource::Default => write!(f, "default"),
        }
    }
}

/// Result of running the orchestrator
#[derive(Debug, Clone)]
pub struct OrchestratorResult {
    /// The auto-merge decision
    pub decision: MergeDecision,
    /// Where the rules came from
    pub rule_source: RuleSource,
    /// How the dependency type was decided
    pub dependency_type_source: DependencyTypeSource,
}

/// Orchestrator for coordinating the decision workflow
pub struct Orchestrator {
    /// CLI arguments for configuration
    args: CliArgs,
}

impl Orchestrator {
    /// Create a new orchestrator with the given CLI arguments
    pub fn new(args: CliArgs) -> Self {
        Self { args }
    }

    /// Run the decision workflow
    pub fn run(&self) -> Result<OrchestratorResult, AppError> {
        let loaded = resolve_rules(
            self.args.config.as_deref(),
            &self.args.root,
            self.args.target,
        )?;
        info!("rules: {} from {}", loaded.rules.len(), loaded.source);

        // Validate before parsing so rule errors surface for any title
        let matcher = RuleMatcher::new(&loaded.rules)?;

        info!("title: \"{}\"", self.args.title);
        let commit = parse_title(&self.args.title)?;
        let is_security = commit.is_security || self.args.has_security_label();
        let commit = commit.with_security(is_security);
        let (commit, dependency_type_source) =
            classify_dependency(commit, self.args.manifest_dir())?;

        info!("dependency: {}", commit.dependency);
        info!("from: {}", commit.from);
        info!("to: {}", commit.to);
        info!(
            "dependency type: {} ({})",
            commit.dependency_type(),
            dependency_type_source
        );
        info!("security critical: {}", commit.is_security);

        let decision = matcher.judge(&commit);
        info!("{}", decision);

        Ok(OrchestratorResult {
            decision,
            rule_source: loaded.source,
            dependency_type_source,
        })
    }
}

/// Decide the dependency type: manifests first, then the title scope
fn classify_dependency(
    commit: ParsedCommit,
    manifest_dir: &Path,
) -> Result<(ParsedCommit, DependencyTypeSource), AppError> {
    if let Some(language) = find_dev_dependency(manifest_dir, &commit.dependency)? {
        return Ok((commit.with_dev(true), DependencyTypeSource::Manifest(language)));
    }

    let source = if commit.is_dev {
        DependencyTypeSource::Title
    } else {
        DependencyTypeSource::Default
    };
    Ok((commit, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DependencyType, Severity};
    use crate::error::ConfigError;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn args(dir: &Path, title: &str, extra: &[&str]) -> CliArgs {
        let mut argv = vec![
            "depmerge".to_string(),
            "--title".to_string(),
            title.to_string(),
            "--root".to_string(),
            dir.display().to_string(),
        ];
        argv.extend(extra.iter().map(|s| s.to_string()));
        CliArgs::parse_from(argv)
    }

    fn write_rules(dir: &Path, content: &str) {
        fs::create_dir_all(dir.join(".github")).unwrap();
        fs::write(dir.join(".github/auto-merge.yml"), content).unwrap();
    }

    #[test]
    fn test_run_with_fallback_target() {
        let dir = TempDir::new().unwrap();
        let result = Orchestrator::new(args(
            dir.path(),
            "chore(deps): bump lodash from 4.17.20 to 4.17.21",
            &[],
        ))
        .run()
        .unwrap();

        assert!(result.decision.should_merge());
        assert_eq!(result.rule_source, RuleSource::Target(Severity::Patch));
        assert_eq!(result.dependency_type_source, DependencyTypeSource::Default);
    }

    #[test]
    fn test_run_with_rule_file() {
        let dir = TempDir::new().unwrap();
        write_rules(
            dir.path(),
            "- match:\n    dependency_type: development\n    update_type: semver:major\n",
        );

        let result = Orchestrator::new(args(
            dir.path(),
            "chore(deps-dev): bump jest from 28.0.0 to 29.0.0",
            &[],
        ))
        .run()
        .unwrap();

        assert!(result.decision.should_merge());
        assert_eq!(result.dependency_type_source, DependencyTypeSource::Title);
    }

    #[test]
    fn test_manifest_overrides_title_scope() {
        let dir = TempDir::new().unwrap();
        write_rules(
            dir.path(),
            "- match:\n    dependency_type: development\n    update_type: semver:minor\n",
        );
        fs::write(
            dir.path().join("package.json"),
            r#"{"devDependencies": {"eslint": "^8.0.0"}}"#,
        )
        .unwrap();

        let result = Orchestrator::new(args(
            dir.path(),
            "chore(deps): bump eslint from 8.0.0 to 8.1.0",
            &[],
        ))
        .run()
        .unwrap();

        assert!(result.decision.should_merge());
        assert_eq!(
            result.decision.commit.dependency_type(),
            DependencyType::Development
        );
        assert_eq!(
            result.dependency_type_source,
            DependencyTypeSource::Manifest(Language::Node)
        );
    }

    #[test]
    fn test_security_label() {
        let dir = TempDir::new().unwrap();
        write_rules(
            dir.path(),
            "- match:\n    dependency_type: all\n    update_type: security:minor\n",
        );

        let title = "chore(deps): bump lodash from 4.16.0 to 4.17.21";
        let result = Orchestrator::new(args(dir.path(), title, &[]))
            .run()
            .unwrap();
        assert!(!result.decision.should_merge());

        let result = Orchestrator::new(args(dir.path(), title, &["--label", "security"]))
            .run()
            .unwrap();
        assert!(result.decision.commit.is_security);
        assert!(result.decision.should_merge());
    }

    #[test]
    fn test_in_range_rule_fails() {
        let dir = TempDir::new().unwrap();
        write_rules(
            dir.path(),
            "- match:\n    dependency_type: all\n    update_type: in_range\n",
        );

        let err = Orchestrator::new(args(dir.path(), "not a bump", &[]))
            .run()
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::UnsupportedUpdateType { .. })
        ));
    }

    #[test]
    fn test_dependency_type_source_display() {
        assert_eq!(
            DependencyTypeSource::Manifest(Language::Rust).to_string(),
            "Cargo.toml"
        );
        assert_eq!(DependencyTypeSource::Title.to_string(), "title");
    }
}
