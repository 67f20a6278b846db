//! Release gate for semantic-version tags
//!
//! Checks that a proposed release version is a valid semantic version and is
//! strictly newer than every release tag already in the repository.

pub mod commands;
pub mod core;
pub mod version;
