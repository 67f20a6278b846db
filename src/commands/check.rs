//! `tag-gate --version <VERSION>` - Gate a release version against existing tags
//!
//! The target must parse as a semantic version and be strictly greater than
//! the highest release tag. Tags that are not semantic versions are skipped.
//! With no valid tags at all, any valid target passes.

use crate::core::config::GateConfig;
use crate::core::error::{GateError, GateResult};
use crate::core::vcs::{SystemGit, TagSource};
use crate::version::ParsedVersion;
use std::path::PathBuf;

/// Options collected from the command line
#[derive(Debug, Clone)]
pub struct CheckOptions {
  pub version: String,
  pub pattern: Option<String>,
  pub repo: PathBuf,
  pub quiet: bool,
  pub verbose: bool,
}

/// How the target passed the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
  /// No release tags to compare against
  FirstRelease,
  /// Strictly greater than the latest release tag
  Newer { latest_tag: String, latest: ParsedVersion },
}

/// Tags split into release versions and everything else
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagScan {
  /// Valid tags, in the order the source returned them
  pub releases: Vec<(String, ParsedVersion)>,
  /// Tags that are not semantic versions
  pub skipped: Vec<String>,
}

impl TagScan {
  pub fn from_tags(tags: impl IntoIterator<Item = String>) -> Self {
    let mut scan = Self::default();
    for tag in tags {
      match ParsedVersion::parse(&tag) {
        Some(version) => scan.releases.push((tag, version)),
        None => scan.skipped.push(tag),
      }
    }
    scan
  }

  /// Highest release by precedence; on ties the later tag wins
  pub fn latest(&self) -> Option<&(String, ParsedVersion)> {
    self.releases.iter().max_by(|a, b| a.1.precedence(&b.1))
  }
}

/// Outcome of a passing gate
#[derive(Debug, Clone)]
pub struct CheckReport {
  pub target: ParsedVersion,
  pub verdict: Verdict,
  pub skipped: Vec<String>,
}

/// Parse the release target, mapping failure to the user-facing error
pub fn parse_target(input: &str) -> GateResult<ParsedVersion> {
  ParsedVersion::parse(input).ok_or_else(|| GateError::InvalidVersion {
    input: input.to_string(),
  })
}

/// Decide whether `input` may be released given the tags `source` knows about
///
/// A malformed target fails before `source` is consulted.
pub fn check_version(input: &str, source: &dyn TagSource, pattern: &str) -> GateResult<CheckReport> {
  let target = parse_target(input)?;
  check_target(input, target, source, pattern)
}

/// Gate an already parsed target; `input` is the text reported on rejection
pub fn check_target(
  input: &str,
  target: ParsedVersion,
  source: &dyn TagSource,
  pattern: &str,
) -> GateResult<CheckReport> {
  let scan = TagScan::from_tags(source.list_tags(pattern)?);

  let verdict = match scan.latest() {
    None => Verdict::FirstRelease,
    Some((latest_tag, latest)) => {
      if !target.is_newer_than(latest) {
        return Err(GateError::NotNewer {
          target: input.to_string(),
          latest_tag: latest_tag.clone(),
        });
      }
      Verdict::Newer {
        latest_tag: latest_tag.clone(),
        latest: latest.clone(),
      }
    }
  };

  Ok(CheckReport {
    target,
    verdict,
    skipped: scan.skipped,
  })
}

/// Run the gate against the git repository at `opts.repo`
pub fn run_check(opts: CheckOptions) -> GateResult<()> {
  // Reject a malformed target before touching git
  let target = parse_target(&opts.version)?;

  let git = SystemGit::open(&opts.repo)?;
  let pattern = match opts.pattern {
    Some(pattern) => pattern,
    None => GateConfig::load(git.work_tree())?.tags.pattern,
  };

  let report = check_target(&opts.version, target, &git, &pattern)?;

  if opts.verbose {
    for tag in &report.skipped {
      eprintln!("   skipped non-semver tag: {}", tag);
    }
    if let Verdict::Newer { latest_tag, .. } = &report.verdict {
      eprintln!("   latest release tag: {}", latest_tag);
    }
  }

  if !opts.quiet {
    match &report.verdict {
      Verdict::FirstRelease => {
        println!("✅ {} accepted: no release tags match '{}'", report.target, pattern);
      }
      Verdict::Newer { latest_tag, .. } => {
        println!("✅ {} is newer than latest release tag {}", report.target, latest_tag);
      }
    }
  }

  Ok(())
}
