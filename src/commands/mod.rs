//! CLI commands for tag-gate
//!
//! - **check**: gate a release version against existing release tags

pub mod check;

pub use check::{CheckOptions, run_check};
