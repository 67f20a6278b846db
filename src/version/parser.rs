//! Version grammar

use super::{CoreNumber, ParsedVersion};
use regex::Regex;
use std::sync::LazyLock;

// Digits are spelled [0-9]: `\d` would also accept non-ASCII digits.
static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^v?([0-9]+)\.([0-9]+)\.([0-9]+)(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$")
    .expect("version pattern is a valid regex")
});

pub(super) fn parse(input: &str) -> Option<ParsedVersion> {
  let caps = VERSION_PATTERN.captures(input.trim())?;

  let major = CoreNumber::from_digits(&caps[1]);
  let minor = CoreNumber::from_digits(&caps[2]);
  let patch = CoreNumber::from_digits(&caps[3]);
  let prerelease = caps.get(4).map(|m| m.as_str().to_string());

  Some(ParsedVersion {
    major,
    minor,
    patch,
    prerelease,
  })
}
