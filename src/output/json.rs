//! JSON output formatter for machine processing

use crate::orchestrator::OrchestratorResult;
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of a decision
#[derive(Serialize)]
struct JsonOutput {
    /// Whether the commit may be auto-merged
    merge: bool,
    /// Bumped dependency name
    dependency: String,
    /// Version before the update
    from: String,
    /// Version after the update
    to: String,
    /// Version change label (major, preminor, ..., none)
    change: &'static str,
    /// Whether the update is security-motivated
    security: bool,
    /// production or development
    dependency_type: &'static str,
    /// Approving rule, absent for manual merges
    #[serde(skip_serializing_if = "Option::is_none")]
    rule: Option<JsonRule>,
    /// Where the rules came from (verbose only)
    #[serde(skip_serializing_if = "Option::is_none")]
    rule_source: Option<String>,
    /// How the dependency type was decided (verbose only)
    #[serde(skip_serializing_if = "Option::is_none")]
    dependency_type_source: Option<String>,
}

/// JSON representation of the approving rule
#[derive(Serialize)]
struct JsonRule {
    dependency_type: &'static str,
    update_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    dependency_name: Option<String>,
}

impl JsonFormatter {
    fn build_output(&self, result: &OrchestratorResult) -> JsonOutput {
        let decision = &result.decision;
        let commit = &decision.commit;
        let verbose = self.verbosity == Verbosity::Verbose;

        JsonOutput {
            merge: decision.should_merge(),
            dependency: commit.dependency.clone(),
            from: commit.from.to_string(),
            to: commit.to.to_string(),
            change: decision.change_label(),
            security: commit.is_security,
            dependency_type: commit.dependency_type().as_str(),
            rule: decision.matched.as_ref().map(|rule| JsonRule {
                dependency_type: rule.dependency_type.as_str(),
                update_type: rule.update_type.to_string(),
                dependency_name: rule.dependency_name.clone(),
            }),
            rule_source: verbose.then(|| result.rule_source.to_string()),
            dependency_type_source: verbose.then(|| result.dependency_type_source.to_string()),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = self.build_output(result);
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
