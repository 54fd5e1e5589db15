// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Render the docs preview block and decide how a pull request body should change
// role: core/message
// inputs: version slug; current pull request body (optional)
// outputs: Rendered block text; BodyAction describing the new body or a skip
// invariants:
// - Block text is byte-for-byte stable (CRLF separators, LF inside the template)
// - Presence of MESSAGE_START anywhere in the body means skip
// - The slug is interpolated verbatim (no URL encoding)
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

pub const MESSAGE_START: &str = "<!-- docs-preview-start -->";
pub const MESSAGE_END: &str = "<!-- docs-preview-end -->";

const DOCS_HOST: &str = "https://awkward-array.readthedocs.io/en";

/// Read the Docs URL for a build variant.
pub fn docs_url(version_slug: &str) -> String {
  format!("{}/{}/", DOCS_HOST, version_slug)
}

/// The notice body placed between the markers.
pub fn render_message_body(version_slug: &str) -> String {
  format!(
    "----\n:books: The documentation for this PR will be available at <{}> once Read the Docs has finished building :hammer:",
    docs_url(version_slug)
  )
}

/// Full block as inserted into a description, including its leading blank line.
pub fn render_block(version_slug: &str) -> String {
  format!(
    "\r\n\r\n{}\r\n{}\r\n{}",
    MESSAGE_START,
    render_message_body(version_slug),
    MESSAGE_END
  )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyAction {
  /// Body was absent or empty; the block becomes the whole description.
  Create(String),
  /// Existing text kept as a prefix, block appended.
  Append(String),
  /// Marker already present.
  Skip,
}

impl BodyAction {
  pub fn new_body(&self) -> Option<&str> {
    match self {
      BodyAction::Create(b) | BodyAction::Append(b) => Some(b),
      BodyAction::Skip => None,
    }
  }
}

pub fn decide(current_body: Option<&str>, block: &str) -> BodyAction {
  match current_body {
    None | Some("") => BodyAction::Create(block.to_string()),
    Some(body) if body.contains(MESSAGE_START) => BodyAction::Skip,
    Some(body) => {
      let mut out = String::with_capacity(body.len() + block.len());
      out.push_str(body);
      out.push_str(block);
      BodyAction::Append(out)
    }
  }
}
