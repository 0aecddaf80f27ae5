//! Classification of the change between two semantic versions
//!
//! A change is one of major/minor/patch, each with a pre-release flavour
//! (`premajor`, `preminor`, `prepatch`) when the newer version is a
//! pre-release, plus `prerelease` when only pre-release identifiers differ.

use semver::Version;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Kind of version change between two versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionChange {
    Major,
    PreMajor,
    Minor,
    PreMinor,
    Patch,
    PrePatch,
    PreRelease,
}

impl VersionChange {
    /// Classify the change between `from` and `to`.
    ///
    /// Returns `None` when both versions have the same precedence
    /// (build metadata is ignored). The classification is symmetric, so a
    /// downgrade is classified like the matching upgrade.
    pub fn between(from: &Version, to: &Version) -> Option<Self> {
        let (low, high) = match precedence(from, to) {
            Ordering::Equal => return None,
            Ordering::Less => (from, to),
            Ordering::Greater => (to, from),
        };

        let low_is_pre = !low.pre.is_empty();
        let high_is_pre = !high.pre.is_empty();

        // Leaving a pre-release for its own release
        if low_is_pre && !high_is_pre {
            if low.minor == 0 && low.patch == 0 {
                return Some(VersionChange::Major);
            }
            if same_release(low, high) {
                if low.minor != 0 && low.patch == 0 {
                    return Some(VersionChange::Minor);
                }
                return Some(VersionChange::Patch);
            }
        }

        let change = if low.major != high.major {
            VersionChange::Major
        } else if low.minor != high.minor {
            VersionChange::Minor
        } else if low.patch != high.patch {
            VersionChange::Patch
        } else {
            return Some(VersionChange::PreRelease);
        };

        Some(if high_is_pre { change.pre() } else { change })
    }

    /// Pre-release flavour of a plain change
    fn pre(self) -> Self {
        match self {
            VersionChange::Major => VersionChange::PreMajor,
            VersionChange::Minor => VersionChange::PreMinor,
            VersionChange::Patch => VersionChange::PrePatch,
            other => other,
        }
    }

    /// Weight compared against a rule ceiling
    pub fn weight(&self) -> u32 {
        match self {
            VersionChange::PreMajor => 6,
            VersionChange::Major => 5,
            VersionChange::PreMinor => 4,
            VersionChange::Minor => 3,
            VersionChange::PrePatch | VersionChange::PreRelease => 2,
            VersionChange::Patch => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VersionChange::Major => "major",
            VersionChange::PreMajor => "premajor",
            VersionChange::Minor => "minor",
            VersionChange::PreMinor => "preminor",
            VersionChange::Patch => "patch",
            VersionChange::PrePatch => "prepatch",
            VersionChange::PreRelease => "prerelease",
        }
    }
}

impl fmt::Display for VersionChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Compare two versions by semver precedence, ignoring build metadata
fn precedence(a: &Version, b: &Version) -> Ordering {
    (a.major, a.minor, a.patch, &a.pre).cmp(&(b.major, b.minor, b.patch, &b.pre))
}

fn same_release(a: &Version, b: &Version) -> bool {
    a.major == b.major && a.minor == b.minor && a.patch == b.patch
}
