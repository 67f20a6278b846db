use crate::core::error::{ConfigError, GateError, GateResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for tag-gate
/// Searched in order: tag-gate.toml, .tag-gate.toml, .config/tag-gate.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GateConfig {
  #[serde(default)]
  pub tags: TagsConfig,
}

/// Which tags count as releases
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TagsConfig {
  /// Glob passed to `git tag --list` (default: "v*")
  #[serde(default = "default_tag_pattern")]
  pub pattern: String,
}

pub const DEFAULT_TAG_PATTERN: &str = "v*";

fn default_tag_pattern() -> String {
  DEFAULT_TAG_PATTERN.to_string()
}

impl Default for TagsConfig {
  fn default() -> Self {
    Self {
      pattern: default_tag_pattern(),
    }
  }
}

impl TagsConfig {
  pub fn validate(&self) -> GateResult<()> {
    if self.pattern.trim().is_empty() {
      return Err(GateError::Config(ConfigError::InvalidField {
        field: "tags.pattern".to_string(),
        reason: "pattern must not be empty".to_string(),
      }));
    }
    Ok(())
  }
}

impl GateConfig {
  /// Find config file in search order: tag-gate.toml, .tag-gate.toml, .config/tag-gate.toml
  pub fn find_config_path(path: &Path) -> Option<PathBuf> {
    let candidates = [
      path.join("tag-gate.toml"),
      path.join(".tag-gate.toml"),
      path.join(".config").join("tag-gate.toml"),
    ];

    candidates.into_iter().find(|p| p.exists())
  }

  /// Load config from the first file found, or defaults when there is none
  pub fn load(path: &Path) -> GateResult<Self> {
    let Some(config_path) = Self::find_config_path(path) else {
      return Ok(Self::default());
    };

    let content = fs::read_to_string(&config_path).map_err(|e| GateError::io(&config_path, e))?;
    let config = Self::from_toml(&content)?;

    Ok(config)
  }

  pub fn from_toml(content: &str) -> GateResult<Self> {
    let config: GateConfig = toml_edit::de::from_str(content)?;
    config.tags.validate()?;
    Ok(config)
  }
}
