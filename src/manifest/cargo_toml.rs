//! Cargo.toml parser for Rust projects
//!
//! Handles:
//! - dev-dependencies
//! - build-dependencies (treated as dev dependencies)
//! - Target-specific dev/build dependencies
//! - Renamed dependencies (`alias = { package = "real-name", ... }`)

use crate::error::ManifestError;
use crate::manifest::ManifestParser;
use std::path::PathBuf;
use toml::Table;

/// Sections whose entries are development dependencies
const DEV_SECTIONS: &[&str] = &["dev-dependencies", "build-dependencies"];

/// Parser for Cargo.toml files
pub struct CargoTomlParser;

impl ManifestParser for CargoTomlParser {
    fn dev_dependencies(&self, content: &str) -> Result<Vec<String>, ManifestError> {
        let toml: Table = toml::from_str(content).map_err(|e| {
            ManifestError::toml_parse_error(PathBuf::from("Cargo.toml"), e.to_string())
        })?;

        let mut names = Vec::new();

        for section in DEV_SECTIONS {
            if let Some(deps) = toml.get(*section).and_then(|d| d.as_table()) {
                collect_names(deps, &mut names);
            }
        }

        if let Some(target) = toml.get("target").and_then(|t| t.as_table()) {
            for target_config in target.values() {
                for section in DEV_SECTIONS {
                    if let Some(deps) = target_config.get(*section).and_then(|d| d.as_table()) {
                        collect_names(deps, &mut names);
                    }
                }
            }
        }

        Ok(names)
    }
}

fn collect_names(deps: &Table, output: &mut Vec<String>) {
    for (name, value) in deps {
        output.push(name.clone());

        // Renamed dependency; updates name the real package
        if let Some(package) = value.get("package").and_then(|p| p.as_str()) {
            output.push(package.to_string());
        }
    }
}
