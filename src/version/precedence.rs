//! Release precedence
//!
//! Core numbers are compared first. With equal cores a final release outranks
//! any prerelease, and two prereleases are compared identifier by identifier.

use super::ParsedVersion;
use std::cmp::Ordering;

impl ParsedVersion {
  /// Compare two versions by release precedence
  pub fn precedence(&self, other: &Self) -> Ordering {
    let core = (&self.major, &self.minor, &self.patch).cmp(&(&other.major, &other.minor, &other.patch));
    if core != Ordering::Equal {
      return core;
    }

    match (&self.prerelease, &other.prerelease) {
      (None, None) => Ordering::Equal,
      (None, Some(_)) => Ordering::Greater,
      (Some(_), None) => Ordering::Less,
      (Some(left), Some(right)) => compare_prerelease(left, right),
    }
  }

  /// True when `self` is strictly greater than `other`
  pub fn is_newer_than(&self, other: &Self) -> bool {
    self.precedence(other) == Ordering::Greater
  }
}

fn compare_prerelease(left: &str, right: &str) -> Ordering {
  let mut left_ids = left.split('.');
  let mut right_ids = right.split('.');

  loop {
    match (left_ids.next(), right_ids.next()) {
      (Some(l), Some(r)) => match compare_identifier(l, r) {
        Ordering::Equal => continue,
        other => return other,
      },
      // Shared identifiers equal: the longer list wins
      (Some(_), None) => return Ordering::Greater,
      (None, Some(_)) => return Ordering::Less,
      (None, None) => return Ordering::Equal,
    }
  }
}

/// Compare two prerelease identifiers
///
/// All-digit identifiers are numeric and compare by value, with no width
/// limit. A numeric identifier is always less than an alphanumeric one.
/// Two alphanumeric identifiers compare as plain strings.
pub fn compare_identifier(left: &str, right: &str) -> Ordering {
  match (is_numeric(left), is_numeric(right)) {
    (true, true) => compare_numeric(left, right),
    (true, false) => Ordering::Less,
    (false, true) => Ordering::Greater,
    (false, false) => left.cmp(right),
  }
}

fn is_numeric(id: &str) -> bool {
  !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())
}

/// Compare digit strings by value without converting to a fixed-width integer
fn compare_numeric(left: &str, right: &str) -> Ordering {
  let left = left.trim_start_matches('0');
  let right = right.trim_start_matches('0');
  left.len().cmp(&right.len()).then_with(|| left.cmp(right))
}
