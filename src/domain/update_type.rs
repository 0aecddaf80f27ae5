//! Update types accepted by auto-merge rules
//!
//! Rules name an update type as `<kind>:<severity>`:
//! - `semver:major`, `semver:minor`, `semver:patch` for regular updates
//! - `security:major`, `security:minor`, `security:patch`, `security:all` for security updates
//! - `in_range`, which loads but is rejected by the matcher

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Weight of the `security:all` target, above every version change
const ALL_WEIGHT: u32 = 1000;

/// Maximum severity a rule accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Major,
    Minor,
    Patch,
}

impl Severity {
    /// Weight compared against a version change weight
    pub fn weight(&self) -> u32 {
        match self {
            Severity::Major => 5,
            Severity::Minor => 3,
            Severity::Patch => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Major => "major",
            Severity::Minor => "minor",
            Severity::Patch => "patch",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(Severity::Major),
            "minor" => Ok(Severity::Minor),
            "patch" => Ok(Severity::Patch),
            _ => Err(ConfigError::InvalidTarget {
                value: s.to_string(),
            }),
        }
    }
}

/// Update type of an auto-merge rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum UpdateType {
    /// Regular (non-security) update up to the given severity
    Semver(Severity),
    /// Security update up to the given severity
    Security(Severity),
    /// Any security update
    SecurityAll,
    /// Range-constrained updates; recognised but not supported
    InRange,
}

impl UpdateType {
    /// Returns true for `security:*` update types
    pub fn is_security(&self) -> bool {
        matches!(self, UpdateType::Security(_) | UpdateType::SecurityAll)
    }

    /// Highest version change weight this update type accepts.
    ///
    /// Returns `None` for `in_range`, which has no ceiling.
    pub fn ceiling(&self) -> Option<u32> {
        match self {
            UpdateType::Semver(severity) | UpdateType::Security(severity) => {
                Some(severity.weight())
            }
            UpdateType::SecurityAll => Some(ALL_WEIGHT),
            UpdateType::InRange => None,
        }
    }
}

impl fmt::Display for UpdateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateType::Semver(severity) => write!(f, "semver:{}", severity),
            UpdateType::Security(severity) => write!(f, "security:{}", severity),
            UpdateType::SecurityAll => write!(f, "security:all"),
            UpdateType::InRange => write!(f, "in_range"),
        }
    }
}

impl FromStr for UpdateType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsupported = || ConfigError::UnsupportedUpdateType {
            value: s.to_string(),
        };

        if s == "in_range" {
            return Ok(UpdateType::InRange);
        }

        let (kind, target) = s.split_once(':').ok_or_else(unsupported)?;
        match (kind, target) {
            ("security", "all") => Ok(UpdateType::SecurityAll),
            ("security", target) => target
                .parse()
                .map(UpdateType::Security)
                .map_err(|_| unsupported()),
            ("semver", target) => target
                .parse()
                .map(UpdateType::Semver)
                .map_err(|_| unsupported()),
            _ => Err(unsupported()),
        }
    }
}

impl TryFrom<String> for UpdateType {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<UpdateType> for String {
    fn from(value: UpdateType) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_semver_types() {
        assert_eq!(
            "semver:major".parse::<UpdateType>().unwrap(),
            UpdateType::Semver(Severity::Major)
        );
        assert_eq!(
            "semver:minor".parse::<UpdateType>().unwrap(),
            UpdateType::Semver(Severity::Minor)
        );
        assert_eq!(
            "semver:patch".parse::<UpdateType>().unwrap(),
            UpdateType::Semver(Severity::Patch)
        );
    }

    #[test]
    fn test_parse_security_types() {
        assert_eq!(
            "security:minor".parse::<UpdateType>().unwrap(),
            UpdateType::Security(Severity::Minor)
        );
        assert_eq!(
            "security:all".parse::<UpdateType>().unwrap(),
            UpdateType::SecurityAll
        );
    }

    #[test]
    fn test_parse_in_range() {
        assert_eq!(
            "in_range".parse::<UpdateType>().unwrap(),
            UpdateType::InRange
        );
    }

    #[test]
    fn test_parse_unsupported() {
        for value in ["semver:all", "semver", "major", "security:", "all", "semver:huge"] {
            let err = value.parse::<UpdateType>().unwrap_err();
            assert!(
                matches!(err, ConfigError::UnsupportedUpdateType { .. }),
                "{} should be unsupported",
                value
            );
        }
    }

    #[test]
    fn test_display_roundtrips_config_keyword() {
        assert_eq!(UpdateType::Security(Severity::Patch).to_string(), "security:patch");
        assert_eq!(UpdateType::SecurityAll.to_string(), "security:all");
        assert_eq!(UpdateType::InRange.to_string(), "in_range");
    }

    #[test]
    fn test_is_security() {
        assert!(UpdateType::SecurityAll.is_security());
        assert!(UpdateType::Security(Severity::Major).is_security());
        assert!(!UpdateType::Semver(Severity::Major).is_security());
        assert!(!UpdateType::InRange.is_security());
    }

    #[test]
    fn test_ceiling() {
        assert_eq!(UpdateType::Semver(Severity::Patch).ceiling(), Some(1));
        assert_eq!(UpdateType::Security(Severity::Minor).ceiling(), Some(3));
        assert_eq!(UpdateType::Semver(Severity::Major).ceiling(), Some(5));
        assert_eq!(UpdateType::SecurityAll.ceiling(), Some(ALL_WEIGHT));
        assert_eq!(UpdateType::InRange.ceiling(), None);
    }

    #[test]
    fn test_severity_from_str() {
        assert_eq!("minor".parse::<Severity>().unwrap(), Severity::Minor);
        assert!(matches!(
            "MINOR".parse::<Severity>(),
            Err(ConfigError::InvalidTarget { .. })
        ));
    }

    #[test]
    fn test_serde_update_type() {
        let parsed: UpdateType = serde_json::from_str("\"security:major\"").unwrap();
        assert_eq!(parsed, UpdateType::Security(Severity::Major));

        let json = serde_json::to_string(&UpdateType::Semver(Severity::Minor)).unwrap();
        assert_eq!(json, "\"semver:minor\"");

        let err = serde_json::from_str::<UpdateType>("\"semver:any\"").unwrap_err();
        assert!(err.to_string().contains("semver:any"));
    }
}
