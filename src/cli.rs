use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::github::api::resolve_api_url;

#[derive(Parser, Debug)]
#[command(
    name = "docs-preview-notice",
    version,
    about = "Append a one-time documentation preview notice to a GitHub pull request description",
    long_about = None
)]
pub struct Cli {
  /// Read the Docs version slug for this PR's build, e.g. "2077" or "latest"
  #[arg(long)]
  pub version_slug: Option<String>,

  /// Repository as OWNER/NAME (default: $GITHUB_REPOSITORY, then the git origin remote)
  #[arg(long)]
  pub repo: Option<String>,

  /// Pull request number (default: read from $GITHUB_EVENT_PATH)
  #[arg(long)]
  pub pr: Option<u64>,

  /// Local clone used to discover the origin remote
  #[arg(long, default_value = ".")]
  pub git_dir: PathBuf,

  /// GitHub REST base URL (default: $GITHUB_API_URL, then https://api.github.com)
  #[arg(long)]
  pub api_url: Option<String>,

  /// Compute the new description and print it without writing
  #[arg(long)]
  pub dry_run: bool,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,
}

#[derive(Debug)]
pub struct EffectiveConfig {
  pub version_slug: String,
  pub repo: Option<String>,
  pub pr: Option<u64>,
  pub git_dir: String,
  pub api_url: String,
  pub dry_run: bool,
}

pub fn normalize(cli: Cli) -> Result<EffectiveConfig> {
  let Some(version_slug) = cli.version_slug else {
    bail!("Provide --version-slug");
  };

  Ok(EffectiveConfig {
    version_slug,
    repo: cli.repo,
    pr: cli.pr,
    git_dir: cli.git_dir.to_string_lossy().to_string(),
    api_url: resolve_api_url(cli.api_url.as_deref()),
    dry_run: cli.dry_run,
  })
}
