//! Ecosystems whose manifests are consulted for development dependencies

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported package ecosystems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Node.js ecosystem (package.json)
    Node,
    /// Rust ecosystem (Cargo.toml)
    Rust,
}

impl Language {
    /// Returns the manifest filename for this language
    pub fn manifest_filename(&self) -> &'static str {
        match self {
            Language::Node => "package.json",
            Language::Rust => "Cargo.toml",
        }
    }

    /// Returns all supported languages
    pub fn all() -> &'static [Language] {
        &[Language::Node, Language::Rust]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::Node => "Node.js",
            Language::Rust => "Rust",
        };
        write!(f, "{}", name)
    }
}
