//! Manifest lookup for the dependency type
//!
//! This module provides functionality to:
//! - Read development dependency names from package.json and Cargo.toml
//! - Decide whether a bumped package is a development dependency

mod cargo_toml;
mod package_json;

pub use cargo_toml::CargoTomlParser;
pub use package_json::PackageJsonParser;

use crate::domain::Language;
use crate::error::ManifestError;
use log::debug;
use std::io::ErrorKind;
use std::path::Path;

/// Trait for parsing manifest files
pub trait ManifestParser {
    /// Names of the development dependencies declared in the manifest
    fn dev_dependencies(&self, content: &str) -> Result<Vec<String>, ManifestError>;
}

/// Get a manifest parser for the specified language
pub fn get_parser(language: Language) -> Box<dyn ManifestParser> {
    match language {
        Language::Node => Box::new(PackageJsonParser),
        Language::Rust => Box::new(CargoTomlParser),
    }
}

/// Find the manifest in `dir` declaring `name` as a development dependency.
///
/// Missing manifests are skipped; unreadable or malformed ones are errors.
/// Returns the language of the first manifest that lists the package.
pub fn find_dev_dependency(dir: &Path, name: &str) -> Result<Option<Language>, ManifestError> {
    for language in Language::all() {
        let path = dir.join(language.manifest_filename());
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => return Err(ManifestError::read_error(path, e)),
        };

        let dev_dependencies = get_parser(*language)
            .dev_dependencies(&content)
            .map_err(|e| with_path(e, &path))?;

        if dev_dependencies.iter().any(|dep| dep == name) {
            debug!(
                "{} manifest {} lists {} as a development dependency",
                language,
                path.display(),
                name
            );
            return Ok(Some(*language));
        }
    }

    Ok(None)
}

// Parsers only know the manifest file name; report the full path
fn with_path(err: ManifestError, path: &Path) -> ManifestError {
    match err {
        ManifestError::JsonParseError { message, .. } => {
            ManifestError::json_parse_error(path, message)
        }
        ManifestError::TomlParseError { message, .. } => {
            ManifestError::toml_parse_error(path, message)
        }
        other => other,
    }
}
