//! Commit title parser
//!
//! Supports titles like:
//! - `chore(deps): bump api-problem from 6.1.2 to 6.1.4`
//! - `chore(deps-dev): [security] bump @types/node from 18.0.0 to 18.1.0`
//! - `Bump serde requirement from ~> 1.0.100 to ~> 1.0.200 in /backend`

use crate::domain::ParsedCommit;
use crate::error::TitleError;
use regex::Regex;
use semver::Version;
use std::sync::LazyLock;

// Dependency name after "bump" or "update", optionally npm-scoped
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:bump|update)\s+(?P<name>(?:@[^\s/]+/)?[^\s]+)").unwrap()
});

// "from <v1> to <v2>", each version may carry a prefix such as v, ^, ~> or >=
static VERSIONS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\bfrom\s+\D*?(?P<from>\d+\.\d+\.\d+(?:-[0-9A-Za-z.-]+)?(?:\+[0-9A-Za-z.-]+)?)\s+to\s+\D*?(?P<to>\d+\.\d+\.\d+(?:-[0-9A-Za-z.-]+)?(?:\+[0-9A-Za-z.-]+)?)",
    )
    .unwrap()
});

// "[security]" at the start of the title or after the conventional-commit separator
static SECURITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:^|: )\[security\]").unwrap());

// Development dependency scope
static DEV_SCOPE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(deps-dev\):").unwrap());

/// Parse a dependency update commit title
pub fn parse_title(title: &str) -> Result<ParsedCommit, TitleError> {
    let dependency = NAME_RE
        .captures(title)
        .and_then(|caps| caps.name("name"))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| TitleError::MissingDependencyName {
            title: title.to_string(),
        })?;

    let caps = VERSIONS_RE
        .captures(title)
        .ok_or_else(|| TitleError::MissingVersions {
            title: title.to_string(),
        })?;

    let from = parse_version(&caps["from"])?;
    let to = parse_version(&caps["to"])?;

    Ok(ParsedCommit {
        dependency,
        is_security: SECURITY_RE.is_match(title),
        is_dev: DEV_SCOPE_RE.is_match(title),
        from,
        to,
    })
}

fn parse_version(raw: &str) -> Result<Version, TitleError> {
    // Sentence punctuation can trail a pre-release or build identifier
    let raw = raw.trim_end_matches('.');
    Version::parse(raw).map_err(|e| TitleError::invalid_version(raw, e.to_string()))
}
