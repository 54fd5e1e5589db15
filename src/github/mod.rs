// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Namespace for GitHub integration (REST client, token discovery, Actions context)
// role: github/namespace
// outputs: Public submodules isolating every call into GitHub or its runner environment
// invariants: Network and environment access stay inside this namespace
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

pub mod api;
pub mod context;
