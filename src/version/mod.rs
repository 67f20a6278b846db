//! Semantic version values used by the release gate
//!
//! - **parser**: grammar for `[v]MAJOR.MINOR.PATCH[-PRERELEASE]`
//! - **precedence**: release ordering, including prerelease rules
//!
//! Build metadata (`+build`) is not part of the grammar; such strings are
//! rejected as malformed.

mod parser;
mod precedence;

pub use precedence::compare_identifier;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A non-negative decimal number of any width
///
/// Stored as its digits with leading zeros stripped (`"0"` for zero), so
/// structural equality is numeric equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CoreNumber(String);

impl CoreNumber {
  /// Build from a non-empty run of ASCII digits
  pub(crate) fn from_digits(digits: &str) -> Self {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
      CoreNumber("0".to_string())
    } else {
      CoreNumber(trimmed.to_string())
    }
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// The value as `u64`, if it fits
  pub fn to_u64(&self) -> Option<u64> {
    self.0.parse().ok()
  }
}

impl Ord for CoreNumber {
  fn cmp(&self, other: &Self) -> Ordering {
    // Canonical digits: longer is larger, equal lengths compare lexically
    self.0.len().cmp(&other.0.len()).then_with(|| self.0.cmp(&other.0))
  }
}

impl PartialOrd for CoreNumber {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl fmt::Display for CoreNumber {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// A parsed `MAJOR.MINOR.PATCH[-PRERELEASE]` version
///
/// Equality is structural: prereleases are compared as literal strings.
/// Use [`ParsedVersion::precedence`] for ordering, which decomposes the
/// prerelease into identifiers and may consider structurally different
/// values equal (`1.0.0-rc.01` and `1.0.0-rc.1`). For that reason this type
/// does not implement `Ord`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedVersion {
  major: CoreNumber,
  minor: CoreNumber,
  patch: CoreNumber,
  prerelease: Option<String>,
}

impl ParsedVersion {
  /// Parse a version string, returning `None` when it does not match the grammar
  ///
  /// Surrounding whitespace is ignored and a leading `v` is accepted.
  pub fn parse(input: &str) -> Option<Self> {
    parser::parse(input)
  }

  pub fn major(&self) -> &CoreNumber {
    &self.major
  }

  pub fn minor(&self) -> &CoreNumber {
    &self.minor
  }

  pub fn patch(&self) -> &CoreNumber {
    &self.patch
  }

  /// Prerelease component without the leading `-`, if any
  pub fn prerelease(&self) -> Option<&str> {
    self.prerelease.as_deref()
  }

  /// A final release has no prerelease component
  pub fn is_final(&self) -> bool {
    self.prerelease.is_none()
  }
}

impl fmt::Display for ParsedVersion {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
    if let Some(pre) = &self.prerelease {
      write!(f, "-{}", pre)?;
    }
    Ok(())
  }
}

/// Returned by `str::parse::<ParsedVersion>()` for malformed input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVersionError {
  input: String,
}

impl ParseVersionError {
  pub fn input(&self) -> &str {
    &self.input
  }
}

impl fmt::Display for ParseVersionError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "'{}' is not a semantic version", self.input)
  }
}

impl std::error::Error for ParseVersionError {}

impl FromStr for ParsedVersion {
  type Err = ParseVersionError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s).ok_or_else(|| ParseVersionError { input: s.to_string() })
  }
}
