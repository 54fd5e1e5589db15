use anyhow::Result;
use clap::Parser;
use tracing::warn;

mod cli;
mod github;
mod message;
mod model;
mod updater;
mod util;

use crate::cli::{normalize, Cli};
use crate::github::api::{get_github_token, GithubHttpApi};

fn main() -> Result<()> {
  let cli = Cli::parse();

  if cli.gen_man {
    let page = util::render_man_page::<Cli>()?;
    print!("{}", page);
    return Ok(());
  }

  util::init_logging();

  // Phase 1: normalize CLI
  let cfg = normalize(cli)?;

  // Phase 2: resolve which pull request to touch
  let pull = github::context::resolve_pull_identity(cfg.repo.as_deref(), cfg.pr, &cfg.git_dir)?;

  // Phase 3: build the API client
  let token = get_github_token();

  if token.is_none() {
    warn!("no GitHub token found (GITHUB_TOKEN, GH_TOKEN, gh auth token); requests are unauthenticated");
  }

  let api = GithubHttpApi::new(cfg.api_url.clone(), token);

  // Phase 4: update and report
  let outcome = updater::update_pr_description(&api, &pull, &cfg.version_slug, cfg.dry_run)?;
  println!("{}", serde_json::to_string(&outcome)?);

  Ok(())
}
