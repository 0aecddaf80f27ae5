//! CLI argument parsing module for depmerge

use crate::domain::Severity;
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};

/// Label that flags a pull request as a security update
const SECURITY_LABEL: &str = "security";

/// Parse a fallback target severity: major, minor or patch
fn parse_severity(s: &str) -> Result<Severity, String> {
    s.trim()
        .to_lowercase()
        .parse()
        .map_err(|e: crate::error::ConfigError| e.to_string())
}

/// Auto-merge gate for dependency update commits
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depmerge",
    version,
    about = "Decide whether a dependency update commit may be auto-merged"
)]
pub struct CliArgs {
    /// Commit or pull request title, e.g. "chore(deps): bump lodash from 4.17.20 to 4.17.21"
    #[arg(short, long)]
    pub title: String,

    /// Rule file (default: <root>/.github/auto-merge.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Repository root
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Highest semver update merged when no rule file exists (major, minor, patch)
    #[arg(long, default_value = "patch", value_parser = parse_severity)]
    pub target: Severity,

    /// Directory with package.json / Cargo.toml for the dependency type lookup (default: root)
    #[arg(long)]
    pub manifest_dir: Option<PathBuf>,

    /// Pull request label (can be specified multiple times)
    #[arg(short, long = "label", action = ArgAction::Append)]
    pub labels: Vec<String>,

    // Output options
    /// Output the decision in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CliArgs {
    /// Check if the labels flag the update as security-motivated
    pub fn has_security_label(&self) -> bool {
        self.labels
            .iter()
            .any(|label| label.trim().eq_ignore_ascii_case(SECURITY_LABEL))
    }

    /// Directory whose manifests are consulted
    pub fn manifest_dir(&self) -> &Path {
        self.manifest_dir.as_deref().unwrap_or(&self.root)
    }
}
