//! Auto-merge decision for a single commit

use super::{ParsedCommit, Rule, VersionChange};
use std::fmt;

/// Result of judging a commit against the rule list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeDecision {
    /// The judged commit
    pub commit: ParsedCommit,
    /// Classified version change, `None` when both versions are equal
    pub change: Option<VersionChange>,
    /// First rule that approved the commit
    pub matched: Option<Rule>,
}

impl MergeDecision {
    /// Creates an approving decision
    pub fn approve(commit: ParsedCommit, change: Option<VersionChange>, rule: Rule) -> Self {
        Self {
            commit,
            change,
            matched: Some(rule),
        }
    }

    /// Creates a decision requiring a manual merge
    pub fn manual(commit: ParsedCommit, change: Option<VersionChange>) -> Self {
        Self {
            commit,
            change,
            matched: None,
        }
    }

    /// Returns true if the commit may be merged automatically
    pub fn should_merge(&self) -> bool {
        self.matched.is_some()
    }

    /// Change label for display, `none` when versions are equal
    pub fn change_label(&self) -> &'static str {
        self.change.map(|c| c.label()).unwrap_or("none")
    }
}

impl fmt::Display for MergeDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.matched {
            Some(ref rule) => write!(f, "auto-merge approved: {}", rule),
            None => write!(f, "manual merging required"),
        }
    }
}
