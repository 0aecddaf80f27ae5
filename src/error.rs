//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ConfigError: Issues with the rule file or rule values
//! - TitleError: Commit titles that do not follow the expected grammar
//! - ManifestError: Issues reading manifests for the dependency type lookup

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Rule configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Commit title related errors
    #[error(transparent)]
    Title(#[from] TitleError),

    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

/// Errors related to the auto-merge rule configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Update type that cannot be evaluated
    #[error("unsupported update type '{value}'")]
    UnsupportedUpdateType { value: String },

    /// Invalid dependency name pattern in a rule
    #[error("invalid dependency name pattern '{pattern}': {message}")]
    InvalidDependencyPattern { pattern: String, message: String },

    /// Invalid fallback target severity
    #[error("invalid target '{value}': expected 'major', 'minor', or 'patch'")]
    InvalidTarget { value: String },

    /// Rule file not found
    #[error("config file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read rule file
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("failed to parse YAML in {path}: {message}")]
    YamlParseError { path: PathBuf, message: String },
}

/// Errors related to commit title parsing
#[derive(Error, Debug)]
pub enum TitleError {
    /// No `bump <name>` or `update <name>` in the title
    #[error("failed to parse title '{title}': could not detect dependency name")]
    MissingDependencyName { title: String },

    /// No `from <version> to <version>` in the title
    #[error("failed to parse title '{title}': no recognizable versions")]
    MissingVersions { title: String },

    /// A version that is not valid semver
    #[error("failed to parse title: invalid version '{version}': {message}")]
    InvalidVersion { version: String, message: String },
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error (for package.json)
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },

    /// TOML parsing error (for Cargo.toml)
    #[error("failed to parse TOML in {path}: {message}")]
    TomlParseError { path: PathBuf, message: String },
}

impl ConfigError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ConfigError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new YamlParseError
    pub fn yaml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::YamlParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl TitleError {
    /// Creates a new InvalidVersion error
    pub fn invalid_version(version: impl Into<String>, message: impl Into<String>) -> Self {
        TitleError::InvalidVersion {
            version: version.into(),
            message: message.into(),
        }
    }
}

impl ManifestError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new TomlParseError
    pub fn toml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::TomlParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_unsupported_update_type() {
        let err = ConfigError::UnsupportedUpdateType {
            value: "in_range".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("unsupported update type"));
        assert!(msg.contains("in_range"));
    }

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::not_found(".github/auto-merge.yml");
        let msg = format!("{}", err);
        assert!(msg.contains("config file not found"));
        assert!(msg.contains("auto-merge.yml"));
    }

    #[test]
    fn test_config_error_yaml_parse() {
        let err = ConfigError::yaml_parse_error("auto-merge.yml", "expected a sequence");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse YAML"));
        assert!(msg.contains("expected a sequence"));
    }

    #[test]
    fn test_title_error_missing_versions() {
        let err = TitleError::MissingVersions {
            title: "chore: bump lodash".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("no recognizable versions"));
        assert!(msg.contains("bump lodash"));
    }

    #[test]
    fn test_title_error_invalid_version() {
        let err = TitleError::invalid_version("01.2.3", "invalid leading zero");
        let msg = format!("{}", err);
        assert!(msg.contains("invalid version '01.2.3'"));
    }

    #[test]
    fn test_manifest_error_json_parse() {
        let err = ManifestError::json_parse_error("/path/to/package.json", "unexpected token");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse JSON"));
        assert!(msg.contains("unexpected token"));
    }

    #[test]
    fn test_manifest_error_toml_parse() {
        let err = ManifestError::toml_parse_error("/path/to/Cargo.toml", "invalid key");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse TOML"));
        assert!(msg.contains("invalid key"));
    }

    #[test]
    fn test_app_error_from_config_error() {
        let app_err: AppError = ConfigError::InvalidTarget {
            value: "huge".to_string(),
        }
        .into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("invalid target 'huge'"));
    }

    #[test]
    fn test_app_error_from_title_error() {
        let app_err: AppError = TitleError::MissingDependencyName {
            title: "chore: release".to_string(),
        }
        .into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("could not detect dependency name"));
    }

    #[test]
    fn test_app_error_from_manifest_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let app_err: AppError = ManifestError::read_error("/path/package.json", io_err).into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("failed to read manifest file"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = ConfigError::not_found("/test");
        let debug = format!("{:?}", err);
        assert!(debug.contains("NotFound"));
    }
}
