// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Resolve which pull request to update from flags, the GitHub Actions environment, or the git origin remote
// role: github/context
// inputs: --repo / --pr flags; env GITHUB_REPOSITORY, GITHUB_EVENT_PATH; `git config remote.origin.url` in --git-dir
// outputs: PullIdentity
// side_effects: Reads the event payload file; spawns `git`
// invariants:
// - Precedence per field: flag > Actions env > git origin (owner/repo only)
// - Origin parser only recognizes GitHub remotes (https or ssh)
// errors: Missing or malformed pieces are errors naming the source that was tried
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::debug;

use crate::model::PullIdentity;
use crate::util::run_git;

/// Split `owner/name` into its halves.
pub fn parse_repo_slug(s: &str) -> Result<(String, String)> {
  let s = s.trim();
  match s.split_once('/') {
    Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
      Ok((owner.to_string(), name.to_string()))
    }
    _ => bail!("expected OWNER/NAME, got {:?}", s),
  }
}

/// Parse `remote.origin.url` to extract (owner, repo) when hosted on GitHub.
pub fn parse_origin_github(git_dir: &str) -> Option<(String, String)> {
  static RE_ORIGIN: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"^(?:git@github\.com:|ssh://git@github\.com/|https?://github\.com/)([^/]+)/([^/]+?)(?:\.git)?/?$")
      .expect("origin regex")
  });

  let url = run_git(git_dir, &["config".into(), "--get".into(), "remote.origin.url".into()]).ok()?;
  let c = RE_ORIGIN.captures(url.trim())?;

  Some((c.get(1)?.as_str().to_string(), c.get(2)?.as_str().to_string()))
}

#[derive(Debug, Deserialize, Default)]
struct NumberRef {
  number: Option<u64>,
}

/// The parts of an Actions event payload that carry a pull request number.
#[derive(Debug, Deserialize, Default)]
struct EventPayload {
  #[serde(default)]
  pull_request: Option<NumberRef>,
  #[serde(default)]
  issue: Option<NumberRef>,
  #[serde(default)]
  number: Option<u64>,
}

/// Read the pull request number from the event payload at `path`.
///
/// Checks `issue.number`, then `pull_request.number`, then `number`, like `context.issue` in actions/github.
pub fn number_from_event_file(path: &str) -> Result<Option<u64>> {
  let raw = std::fs::read_to_string(path).with_context(|| format!("reading event payload {}", path))?;
  let ev: EventPayload = serde_json::from_str(&raw).with_context(|| format!("parsing event payload {}", path))?;

  Ok(
    ev.issue
      .and_then(|i| i.number)
      .or(ev.pull_request.and_then(|p| p.number))
      .or(ev.number),
  )
}

fn env_nonempty(key: &str) -> Option<String> {
  std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

pub fn resolve_pull_identity(repo_flag: Option<&str>, pr_flag: Option<u64>, git_dir: &str) -> Result<PullIdentity> {
  let (owner, repo) = if let Some(slug) = repo_flag {
    parse_repo_slug(slug).context("--repo")?
  } else if let Some(slug) = env_nonempty("GITHUB_REPOSITORY") {
    parse_repo_slug(&slug).context("GITHUB_REPOSITORY")?
  } else if let Some(pair) = parse_origin_github(git_dir) {
    debug!(git_dir, "repository taken from origin remote");
    pair
  } else {
    bail!("cannot determine repository: pass --repo OWNER/NAME, set GITHUB_REPOSITORY, or run inside a clone with a GitHub origin")
  };

  let number = match pr_flag {
    Some(n) => n,
    None => {
      let from_event = match env_nonempty("GITHUB_EVENT_PATH") {
        Some(path) => number_from_event_file(&path)?,
        None => None,
      };

      match from_event {
        Some(n) => n,
        None => bail!("cannot determine pull request number: pass --pr N or run from a pull_request/issue_comment workflow"),
      }
    }
  };

  Ok(PullIdentity { owner, repo, number })
}
