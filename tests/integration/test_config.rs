//! Integration tests for tag-gate.toml and --pattern

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_pattern_flag_selects_tags() -> Result<()> {
  let repo = TestRepo::with_tags(&["v1.0.0", "release-v4.0.0"])?;

  let default = run_tag_gate(&repo.path, &["--version", "2.0.0"])?;
  assert_eq!(default.status.code(), Some(0), "stderr: {}", stderr(&default));

  // `release-v4.0.0` is listed but is not itself a version, so it is skipped
  let output = run_tag_gate(&repo.path, &["--version", "2.0.0", "--pattern", "release-*"])?;
  assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
  Ok(())
}

#[test]
fn test_pattern_from_config() -> Result<()> {
  let repo = TestRepo::with_tags(&["v1.0.0", "3.0.0"])?;
  repo.write_file("tag-gate.toml", "[tags]\npattern = \"[0-9]*\"\n")?;

  let output = run_tag_gate(&repo.path, &["--version", "2.0.0"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("3.0.0"));

  // The flag wins over the file
  let output = run_tag_gate(&repo.path, &["--version", "2.0.0", "--pattern", "v*"])?;
  assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
  Ok(())
}

#[test]
fn test_config_in_dot_config_dir() -> Result<()> {
  let repo = TestRepo::with_tags(&["v1.0.0", "3.0.0"])?;
  repo.write_file(".config/tag-gate.toml", "[tags]\npattern = \"3.*\"\n")?;

  let output = run_tag_gate(&repo.path, &["--version", "2.0.0"])?;
  assert_eq!(output.status.code(), Some(1));
  Ok(())
}

#[test]
fn test_invalid_config_is_user_error() -> Result<()> {
  let repo = TestRepo::with_tags(&["v1.0.0"])?;
  repo.write_file("tag-gate.toml", "[tags]\npattern = 7\n")?;

  let output = run_tag_gate(&repo.path, &["--version", "2.0.0"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("config"));
  Ok(())
}

#[test]
fn test_dash_pattern_is_not_a_git_option() -> Result<()> {
  let repo = TestRepo::with_tags(&["v1.0.0"])?;

  // Treated as a glob that matches nothing, not as `git tag -z`
  let output = run_tag_gate(&repo.path, &["--version", "0.5.0", "--pattern=-z"])?;

  assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
  assert!(stdout(&output).contains("no release tags match '-z'"));
  Ok(())
}

#[test]
fn test_unreadable_config_is_system_error() -> Result<()> {
  let repo = TestRepo::with_tags(&["v1.0.0"])?;
  std::fs::create_dir_all(repo.path.join("tag-gate.toml"))?;

  let output = run_tag_gate(&repo.path, &["--version", "2.0.0"])?;

  assert_eq!(output.status.code(), Some(2));
  assert!(stderr(&output).contains("tag-gate.toml"));
  Ok(())
}
