// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Define the pull request identity, remote payload shapes, and the update outcome report
// role: model/types
// outputs: Serializable structs with stable field names used by the updater and the CLI report
// invariants: Unknown remote fields are ignored; outcome JSON field names are stable
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which pull request to touch: `owner/repo#number`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PullIdentity {
  pub owner: String,
  pub repo: String,
  pub number: u64,
}

impl fmt::Display for PullIdentity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
  }
}

/// The subset of the REST pull request object we read.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct PullRequest {
  #[serde(default)]
  pub body: Option<String>,
}

/// PATCH payload for `pulls/{number}`.
#[derive(Debug, Serialize)]
pub struct PullRequestUpdate<'a> {
  pub body: &'a str,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
  Created,
  Appended,
  Skipped,
}

/// What one invocation did (or, under dry-run, would have done).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
  pub pull: PullIdentity,
  pub action: ActionKind,
  pub dry_run: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub body: Option<String>,
}
