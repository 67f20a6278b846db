pub mod system_git;

pub use system_git::SystemGit;

use crate::core::error::GateResult;

/// Anything that can list release tags by glob
///
/// Implementations return raw tag names in any order. Callers parse, filter
/// and sort them.
pub trait TagSource {
  fn list_tags(&self, pattern: &str) -> GateResult<Vec<String>>;
}
