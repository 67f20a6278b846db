//! Core building blocks for tag-gate
//!
//! - **config**: optional tag-gate.toml parsing and validation
//! - **error**: error types with exit codes and help messages
//! - **vcs**: tag listing abstraction (SystemGit)

pub mod config;
pub mod error;
pub mod vcs;
