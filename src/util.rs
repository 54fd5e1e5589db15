// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Subprocess and packaging helpers (git invocation, man page rendering, logging setup)
// role: utilities/helpers
// inputs: Repo directory and git args; clap CommandFactory; RUST_LOG
// outputs: git stdout; man page text; a configured global tracing subscriber
// side_effects: run_git invokes subprocesses; init_logging installs a global subscriber
// invariants: Logs go to stderr so stdout stays machine-readable
// errors: run_git surfaces command + stderr
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::process::Command;

use anyhow::{Context, Result};
use clap::CommandFactory;
use tracing_subscriber::{fmt, EnvFilter};

pub fn run_git(repo: &str, args: &[String]) -> Result<String> {
  let out = Command::new("git")
    .args(args)
    .current_dir(repo)
    .output()
    .with_context(|| format!("spawning git {:?}", args))?;

  if out.status.success() {
    Ok(String::from_utf8_lossy(&out.stdout).to_string())
  } else {
    let stderr = String::from_utf8_lossy(&out.stderr);
    anyhow::bail!("git {:?} failed: {}", args, stderr)
  }
}

/// Install the stderr subscriber, honoring `RUST_LOG`.
pub fn init_logging() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,docs_preview_notice=info"));
  let _ = fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .try_init();
}

/// Render a section-1 man page for a clap `CommandFactory` implementor.
/// Returns the troff content as a UTF-8 string.
pub fn render_man_page<T: CommandFactory>() -> anyhow::Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}
