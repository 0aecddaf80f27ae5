//! Commit title parsing
//!
//! Turns a dependency update commit title into a [`ParsedCommit`]:
//! - dependency name
//! - `from` and `to` versions
//! - security marker
//! - development dependency scope
//!
//! [`ParsedCommit`]: crate::domain::ParsedCommit

mod title;

pub use title::parse_title;
