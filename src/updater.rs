// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Append the docs preview notice to a pull request description exactly once
// role: core/orchestration
// inputs: PullRequestApi implementation; PullIdentity; version slug; dry-run flag
// outputs: UpdateOutcome describing the action taken
// side_effects: One read and at most one write through the injected API
// invariants:
// - Zero or one write per call; never a write when MESSAGE_START is already present
// - Existing description text is always a prefix of the written body
// errors: API failures propagate with context; nothing is retried or swallowed
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::{Context, Result};
use tracing::info;

use crate::github::api::PullRequestApi;
use crate::message::{decide, render_block, BodyAction};
use crate::model::{ActionKind, PullIdentity, UpdateOutcome};

pub fn update_pr_description(
  api: &dyn PullRequestApi,
  pull: &PullIdentity,
  version_slug: &str,
  dry_run: bool,
) -> Result<UpdateOutcome> {
  // Phase 1: read current body
  let current = api
    .get_pull_request(&pull.owner, &pull.repo, pull.number)
    .with_context(|| format!("fetching {}", pull))?;

  // Phase 2: decide
  let block = render_block(version_slug);
  let action = decide(current.body.as_deref(), &block);

  let kind = match action {
    BodyAction::Create(_) => ActionKind::Created,
    BodyAction::Append(_) => ActionKind::Appended,
    BodyAction::Skip => {
      info!(%pull, "docs preview notice already present; leaving description untouched");
      return Ok(UpdateOutcome {
        pull: pull.clone(),
        action: ActionKind::Skipped,
        dry_run,
        body: None,
      });
    }
  };

  let new_body = action.new_body().unwrap_or_default().to_string();

  // Phase 3: write (unless dry-run)
  if dry_run {
    info!(%pull, ?kind, "dry run; not updating description");
  } else {
    api
      .update_pull_request(&pull.owner, &pull.repo, pull.number, &new_body)
      .with_context(|| format!("updating description of {}", pull))?;
    info!(%pull, ?kind, version_slug, "docs preview notice added");
  }

  Ok(UpdateOutcome {
    pull: pull.clone(),
    action: kind,
    dry_run,
    body: Some(new_body),
  })
}
