//! System git backend
//!
//! Every call is a plain `git` subprocess with an isolated environment.

use super::TagSource;
use crate::core::error::{GateError, GateResult, GitError};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Git backend using system git (zero crate dependencies)
pub struct SystemGit {
  /// Repository working directory
  pub(crate) repo_path: PathBuf,

  /// Working tree root
  pub(crate) work_tree: PathBuf,
}

impl SystemGit {
  /// Open a git repository
  ///
  /// This performs ONE subprocess call to get the repository metadata.
  pub fn open(path: &Path) -> GateResult<Self> {
    let output = run(
      Command::new("git")
        .arg("-C")
        .arg(path)
        .args(["rev-parse", "--show-toplevel"]),
      "git rev-parse --show-toplevel",
    )?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      if stderr.contains("not a git repository") {
        return Err(GateError::Git(GitError::RepoNotFound {
          path: path.to_path_buf(),
        }));
      }
      return Err(GateError::Git(GitError::CommandFailed {
        command: "git rev-parse --show-toplevel".to_string(),
        stderr: stderr.to_string(),
      }));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let work_tree = stdout.trim();

    Ok(Self {
      repo_path: path.to_path_buf(),
      work_tree: PathBuf::from(work_tree),
    })
  }

  /// Working tree root (where config files are looked up)
  pub fn work_tree(&self) -> &Path {
    &self.work_tree
  }

  /// Create a safe git command with isolated environment
  ///
  /// - Sets working directory to repo path
  /// - Clears environment variables
  /// - Whitelists only PATH and HOME
  /// - Adds safe configuration overrides
  pub(crate) fn git_cmd(&self) -> Command {
    let mut cmd = Command::new("git");

    cmd.arg("-C").arg(&self.repo_path);

    // Isolated environment (don't trust global config)
    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
      cmd.env("PATH", path);
    }
    if let Ok(home) = std::env::var("HOME") {
      cmd.env("HOME", home);
    }

    cmd.arg("-c").arg("core.quotePath=false"); // Don't escape non-ASCII
    cmd.arg("-c").arg("column.ui=never");

    cmd
  }
}

impl TagSource for SystemGit {
  /// `git tag --list -- <pattern>`, one tag per line
  fn list_tags(&self, pattern: &str) -> GateResult<Vec<String>> {
    let command = format!("git tag --list -- {}", pattern);
    // `--` keeps a pattern starting with `-` from being read as an option
    let output = run(self.git_cmd().args(["tag", "--list", "--", pattern]), &command)?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(GateError::Git(GitError::CommandFailed {
        command,
        stderr: stderr.to_string(),
      }));
    }

    Ok(parse_tag_lines(&String::from_utf8_lossy(&output.stdout)))
  }
}

/// Spawn failures (git not installed, bad cwd) are git failures, not I/O noise
fn run(cmd: &mut Command, display: &str) -> GateResult<Output> {
  cmd.output().map_err(|e| {
    GateError::Git(GitError::CommandFailed {
      command: display.to_string(),
      stderr: e.to_string(),
    })
  })
}

fn parse_tag_lines(stdout: &str) -> Vec<String> {
  stdout
    .lines()
    .map(|s| s.trim().to_string())
    .filter(|s| !s.is_empty())
    .collect()
}
