//! package.json parser for Node.js projects
//!
//! Only `devDependencies` marks a package as a development dependency;
//! `dependencies`, `peerDependencies` and `optionalDependencies` are
//! production dependencies.

use crate::error::ManifestError;
use crate::manifest::ManifestParser;
use serde_json::Value;
use std::path::PathBuf;

/// Parser for package.json files
pub struct PackageJsonParser;

impl ManifestParser for PackageJsonParser {
    fn dev_dependencies(&self, content: &str) -> Result<Vec<String>, ManifestError> {
        let json: Value = serde_json::from_str(content).map_err(|e| {
            ManifestError::json_parse_error(PathBuf::from("package.json"), e.to_string())
        })?;

        let names = json
            .get("devDependencies")
            .and_then(|v| v.as_object())
            .map(|deps| deps.keys().cloned().collect())
            .unwrap_or_default();

        Ok(names)
    }
}
