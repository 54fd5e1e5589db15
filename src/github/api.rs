// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: GitHub REST access for pull request descriptions (read body, replace body) and token discovery
// role: github/api
// inputs: API base URL; env GITHUB_TOKEN / GH_TOKEN; optional `gh` CLI for token fallback; env GITHUB_API_URL
// outputs: PullRequest payloads; unit on successful update
// side_effects: Network calls to the API base; spawns `gh` subprocess when needed
// invariants:
// - Token discovery prefers GITHUB_TOKEN, then GH_TOKEN, then `gh auth token`; blank values are ignored
// - Non-2xx responses are errors
// errors: Propagated with context naming the request; never swallowed
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::{Context, Result};
use tracing::debug;

use crate::model::{PullRequest, PullRequestUpdate};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

// --- Trait seam for GitHub API ---
pub trait PullRequestApi {
  fn get_pull_request(&self, owner: &str, repo: &str, number: u64) -> Result<PullRequest>;
  fn update_pull_request(&self, owner: &str, repo: &str, number: u64, body: &str) -> Result<()>;
}

/// Discover a GitHub token: env vars first, then `gh auth token` if available.
pub fn get_github_token() -> Option<String> {
  for key in ["GITHUB_TOKEN", "GH_TOKEN"] {
    if let Ok(t) = std::env::var(key) {
      if !t.trim().is_empty() {
        return Some(t.trim().to_string());
      }
    }
  }

  if let Ok(output) = std::process::Command::new("gh").args(["auth", "token"]).output() {
    if output.status.success() {
      let t = String::from_utf8_lossy(&output.stdout).trim().to_string();

      if !t.is_empty() {
        return Some(t);
      }
    }
  }

  None
}

/// API base: explicit flag, then `GITHUB_API_URL` (set on Actions runners and GHES), then public GitHub.
pub fn resolve_api_url(flag: Option<&str>) -> String {
  let from_env = std::env::var("GITHUB_API_URL").ok();
  let raw = flag
    .map(str::to_string)
    .or(from_env)
    .filter(|s| !s.trim().is_empty())
    .unwrap_or_else(|| DEFAULT_API_URL.to_string());

  raw.trim().trim_end_matches('/').to_string()
}

pub struct GithubHttpApi {
  agent: ureq::Agent,
  base_url: String,
  token: Option<String>,
}

impl GithubHttpApi {
  pub fn new(base_url: String, token: Option<String>) -> Self {
    let agent: ureq::Agent = ureq::Agent::config_builder().build().into();
    Self { agent, base_url, token }
  }

  fn pull_url(&self, owner: &str, repo: &str, number: u64) -> String {
    format!("{}/repos/{}/{}/pulls/{}", self.base_url, owner, repo, number)
  }

  fn bearer(&self) -> Option<String> {
    self.token.as_ref().map(|t| format!("Bearer {}", t))
  }
}

impl PullRequestApi for GithubHttpApi {
  fn get_pull_request(&self, owner: &str, repo: &str, number: u64) -> Result<PullRequest> {
    let url = self.pull_url(owner, repo, number);
    debug!(%url, "fetching pull request");

    let mut req = self
      .agent
      .get(url.as_str())
      .header("Accept", "application/vnd.github+json")
      .header("User-Agent", "docs-preview-notice")
      .header("X-GitHub-Api-Version", "2022-11-28");

    if let Some(auth) = self.bearer() {
      req = req.header("Authorization", &auth);
    }

    let mut resp = req.call().with_context(|| format!("GET {}", url))?;

    resp
      .body_mut()
      .read_json::<PullRequest>()
      .with_context(|| format!("decoding pull request from {}", url))
  }

  fn update_pull_request(&self, owner: &str, repo: &str, number: u64, body: &str) -> Result<()> {
    let url = self.pull_url(owner, repo, number);
    debug!(%url, bytes = body.len(), "updating pull request body");

    let mut req = self
      .agent
      .patch(url.as_str())
      .header("Accept", "application/vnd.github+json")
      .header("User-Agent", "docs-preview-notice")
      .header("X-GitHub-Api-Version", "2022-11-28");

    if let Some(auth) = self.bearer() {
      req = req.header("Authorization", &auth);
    }

    req
      .send_json(&PullRequestUpdate { body })
      .with_context(|| format!("PATCH {}", url))?;

    Ok(())
  }
}
