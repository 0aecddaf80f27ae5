//! Text output formatter for human-readable display
//!
//! This module provides:
//! - The decision line, colored by outcome
//! - The bumped dependency with its version change
//! - Rule and dependency type sources in verbose mode

use crate::domain::{MergeDecision, VersionChange};
use crate::orchestrator::OrchestratorResult;
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn change_label(&self, change: Option<VersionChange>) -> String {
        let label = change.map(|c| c.label()).unwrap_or("none");
        if !self.color {
            return label.to_string();
        }
        match change {
            Some(VersionChange::Major | VersionChange::PreMajor) => label.red().bold().to_string(),
            Some(VersionChange::Minor | VersionChange::PreMinor) => label.yellow().to_string(),
            Some(_) => label.green().to_string(),
            None => label.dimmed().to_string(),
        }
    }

    fn decision_line(&self, decision: &MergeDecision) -> String {
        let line = decision.to_string();
        if !self.color {
            return line;
        }
        if decision.should_merge() {
            line.green().bold().to_string()
        } else {
            line.yellow().to_string()
        }
    }

    fn commit_line(&self, decision: &MergeDecision) -> String {
        let commit = &decision.commit;
        let security = if commit.is_security {
            if self.color {
                format!(", {}", "security".red())
            } else {
                ", security".to_string()
            }
        } else {
            String::new()
        };

        format!(
            "{} {} -> {} ({}, {}{})",
            commit.dependency,
            commit.from,
            commit.to,
            self.change_label(decision.change),
            commit.dependency_type(),
            security
        )
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let decision = &result.decision;

        if self.verbosity == Verbosity::Quiet {
            return writeln!(writer, "{}", decision.should_merge());
        }

        writeln!(writer, "{}", self.commit_line(decision))?;

        if self.verbosity == Verbosity::Verbose {
            writeln!(writer, "  rules: {}", result.rule_source)?;
            writeln!(
                writer,
                "  dependency type from: {}",
                result.dependency_type_source
            )?;
        }

        writeln!(writer, "{}", self.decision_line(decision))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleSource;
    use crate::domain::{DependencyType, ParsedCommit, Rule, Severity, UpdateType};
    use crate::orchestrator::DependencyTypeSource;
    use semver::Version;

    fn result(approved: bool, is_security: bool) -> OrchestratorResult {
        let commit = ParsedCommit {
            dependency: "lodash".to_string(),
            is_security,
            is_dev: false,
            from: Version::new(4, 17, 20),
            to: Version::new(4, 17, 21),
        };
        let decision = if approved {
            MergeDecision::approve(
                commit,
                Some(VersionChange::Patch),
                Rule::new(DependencyType::All, UpdateType::Semver(Severity::Patch)),
            )
        } else {
            MergeDecision::manual(commit, Some(VersionChange::Patch))
        };
        OrchestratorResult {
            decision,
            rule_source: RuleSource::Target(Severity::Patch),
            dependency_type_source: DependencyTypeSource::Default,
        }
    }

    fn render(formatter: &TextFormatter, result: &OrchestratorResult) -> String {
        let mut out = Vec::new();
        formatter.format(result, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_format_approved() {
        let formatter = TextFormatter::with_color(Verbosity::Normal, false);
        let output = render(&formatter, &result(true, false));
        assert_eq!(
            output,
            "lodash 4.17.20 -> 4.17.21 (patch, production)\nauto-merge approved: all semver:patch\n"
        );
    }

    #[test]
    fn test_format_manual() {
        let formatter = TextFormatter::with_color(Verbosity::Normal, false);
        let output = render(&formatter, &result(false, true));
        assert!(output.contains("(patch, production, security)"));
        assert!(output.ends_with("manual merging required\n"));
    }

    #[test]
    fn test_format_quiet() {
        let formatter = TextFormatter::with_color(Verbosity::Quiet, false);
        assert_eq!(render(&formatter, &result(true, false)), "true\n");
        assert_eq!(render(&formatter, &result(false, false)), "false\n");
    }

    #[test]
    fn test_format_verbose() {
        let formatter = TextFormatter::with_color(Verbosity::Verbose, false);
        let output = render(&formatter, &result(true, false));
        assert!(output.contains("rules: target patch"));
        assert!(output.contains("dependency type from: default"));
    }

    #[test]
    fn test_change_label_plain() {
        let formatter = TextFormatter::with_color(Verbosity::Normal, false);
        assert_eq!(formatter.change_label(Some(VersionChange::PreMajor)), "premajor");
        assert_eq!(formatter.change_label(None), "none");
    }
}
