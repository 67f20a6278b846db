//! Error types for tag-gate with contextual messages and exit codes
//!
//! Version failures (malformed target, target not newer) are user errors and
//! exit with 1. Anything that goes wrong while talking to git is an
//! environment failure and exits with 2.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for tag-gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// Gate rejected the version, or bad config
  User = 1,
  /// System error (git, I/O)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for tag-gate
#[derive(Debug)]
pub enum GateError {
  /// Target does not match the version grammar
  InvalidVersion { input: String },

  /// Target is not strictly greater than the latest release tag
  NotNewer { target: String, latest_tag: String },

  /// Configuration errors
  Config(ConfigError),

  /// Git operation errors
  Git(GitError),

  /// I/O errors on a file we had to read
  Io { path: PathBuf, source: io::Error },
}

impl GateError {
  pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
    GateError::Io {
      path: path.into(),
      source,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      GateError::InvalidVersion { .. } => ExitCode::User,
      GateError::NotNewer { .. } => ExitCode::User,
      GateError::Config(_) => ExitCode::User,
      GateError::Git(_) => ExitCode::System,
      GateError::Io { .. } => ExitCode::System,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      GateError::Config(e) => e.help_message(),
      GateError::Git(e) => e.help_message(),
      _ => None,
    }
  }
}

impl fmt::Display for GateError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GateError::InvalidVersion { input } => write!(
        f,
        "version '{}' is not a semantic version (expected e.g. 1.2.3 or 1.2.3-beta.1)",
        input
      ),
      GateError::NotNewer { target, latest_tag } => write!(
        f,
        "version {} is not newer than the latest release tag {}; pick a version greater than {}",
        target, latest_tag, latest_tag
      ),
      GateError::Config(e) => write!(f, "{}", e),
      GateError::Git(e) => write!(f, "{}", e),
      GateError::Io { path, source } => write!(f, "Failed to read {}: {}", path.display(), source),
    }
  }
}

impl std::error::Error for GateError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      GateError::Io { source, .. } => Some(source),
      _ => None,
    }
  }
}

impl From<toml_edit::de::Error> for GateError {
  fn from(err: toml_edit::de::Error) -> Self {
    GateError::Config(ConfigError::Parse {
      reason: err.to_string(),
    })
  }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// File exists but is not valid TOML for our schema
  Parse { reason: String },

  /// Field present but unusable
  InvalidField { field: String, reason: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::Parse { .. } => Some("Expected an optional [tags] table with a `pattern` string.".to_string()),
      ConfigError::InvalidField { field, .. } => Some(format!("Fix or remove `{}` in tag-gate.toml.", field)),
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::Parse { reason } => write!(f, "Invalid tag-gate config: {}", reason.trim()),
      ConfigError::InvalidField { field, reason } => {
        write!(f, "Invalid value for `{}` in config: {}", field, reason)
      }
    }
  }
}

/// Git operation errors
#[derive(Debug)]
pub enum GitError {
  /// Git command failed
  CommandFailed { command: String, stderr: String },

  /// Repository not found
  RepoNotFound { path: PathBuf },
}

impl GitError {
  fn help_message(&self) -> Option<String> {
    match self {
      GitError::RepoNotFound { path } => Some(format!(
        "Run tag-gate inside a git checkout or pass it with -C (tried: {})",
        path.display()
      )),
      GitError::CommandFailed { stderr, .. } => {
        if stderr.contains("dubious ownership") {
          Some("Mark the checkout as safe: git config --global --add safe.directory <path>".to_string())
        } else {
          None
        }
      }
    }
  }
}

impl fmt::Display for GitError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GitError::CommandFailed { command, stderr } => {
        write!(f, "Git command failed: {}: {}", command, stderr.trim())
      }
      GitError::RepoNotFound { path } => {
        write!(f, "Git repository not found at: {}", path.display())
      }
    }
  }
}

/// Result type alias for tag-gate
pub type GateResult<T> = Result<T, GateError>;

/// Print an error to stderr: one diagnostic line, plus help when there is any
pub fn print_error(error: &GateError) {
  eprintln!("❌ {}", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}", help);
  }
}
