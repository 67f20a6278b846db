use clap::Parser;
use std::path::PathBuf;
use tag_gate::commands;
use tag_gate::core::error::{GateError, print_error};

/// Fail a release unless the version is valid semver and newer than every release tag
#[derive(Parser)]
#[command(name = "tag-gate")]
#[command(about, long_about = None)]
#[command(styles = get_styles())]
struct GateCli {
  /// Target version (e.g. 1.2.3 or 1.2.3-beta.1)
  #[arg(long, value_name = "VERSION")]
  version: String,

  /// Glob for release tags (default: tags.pattern from tag-gate.toml, else "v*")
  #[arg(long, value_name = "GLOB")]
  pattern: Option<String>,

  /// Repository to inspect
  #[arg(short = 'C', long, value_name = "PATH", default_value = ".")]
  repo: PathBuf,

  /// Only report failures
  #[arg(short, long, conflicts_with = "verbose")]
  quiet: bool,

  /// Also list skipped tags and the latest release tag
  #[arg(long)]
  verbose: bool,
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = GateCli::parse();

  let result = commands::run_check(commands::CheckOptions {
    version: cli.version,
    pattern: cli.pattern,
    repo: cli.repo,
    quiet: cli.quiet,
    verbose: cli.verbose,
  });

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: GateError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
