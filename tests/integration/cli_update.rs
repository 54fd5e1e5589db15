use predicates::prelude::*;
use test_support::{cmd_bin, StubResponse, StubServer};

const BIN: &str = "docs-preview-notice";

fn block(slug: &str) -> String {
  format!(
    "\r\n\r\n<!-- docs-preview-start -->\r\n----\n:books: The documentation for this PR will be available at <https://awkward-array.readthedocs.io/en/{}/> once Read the Docs has finished building :hammer:\r\n<!-- docs-preview-end -->",
    slug
  )
}

#[test]
fn null_body_is_replaced_by_block() {
  let server = StubServer::start(vec![
    StubResponse::json(200, r#"{"number": 2077, "body": null}"#),
    StubResponse::json(200, r#"{"number": 2077}"#),
  ]);

  let out = cmd_bin(BIN)
    .args(["--version-slug", "latest", "--repo", "scikit-hep/awkward", "--pr", "2077", "--api-url"])
    .arg(server.url())
    .env("GITHUB_TOKEN", "ghs_test")
    .output()
    .unwrap();
  assert!(out.status.success(), "cli run failed: {}", String::from_utf8_lossy(&out.stderr));

  let reqs = server.finish();
  assert_eq!(reqs.len(), 2);
  assert_eq!(reqs[0].method, "GET");
  assert_eq!(reqs[0].path, "/repos/scikit-hep/awkward/pulls/2077");
  assert_eq!(reqs[1].method, "PATCH");
  assert_eq!(reqs[1].path, "/repos/scikit-hep/awkward/pulls/2077");
  assert_eq!(reqs[1].header("authorization").as_deref(), Some("Bearer ghs_test"));

  let sent: serde_json::Value = serde_json::from_slice(&reqs[1].body).unwrap();
  assert_eq!(sent["body"].as_str(), Some(block("latest").as_str()));

  let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
  assert_eq!(report["action"], "created");
  assert_eq!(report["pull"]["number"], 2077);
  assert_eq!(report["dry_run"], false);
}

#[test]
fn existing_body_gets_block_appended() {
  let server = StubServer::start(vec![
    StubResponse::json(200, r#"{"number": 99, "body": "Fixes #42"}"#),
    StubResponse::json(200, r#"{"number": 99}"#),
  ]);

  cmd_bin(BIN)
    .args(["--version-slug", "pr-99", "--repo", "scikit-hep/awkward", "--pr", "99", "--api-url"])
    .arg(server.url())
    .assert()
    .success()
    .stdout(predicate::str::contains(r#""action":"appended""#));

  let reqs = server.finish();
  assert_eq!(reqs.len(), 2);
  let sent: serde_json::Value = serde_json::from_slice(&reqs[1].body).unwrap();
  assert_eq!(sent["body"].as_str().unwrap(), format!("Fixes #42{}", block("pr-99")));
}

#[test]
fn marker_present_issues_no_write() {
  // Only one response is served: a PATCH would hit a closed listener and fail the run.
  let body = serde_json::json!({ "body": format!("Fixes #42{}", block("pr-99")) }).to_string();
  let server = StubServer::start(vec![StubResponse::json(200, &body)]);

  cmd_bin(BIN)
    .args(["--version-slug", "pr-99", "--repo", "scikit-hep/awkward", "--pr", "99", "--api-url"])
    .arg(server.url())
    .assert()
    .success()
    .stdout(predicate::str::contains(r#""action":"skipped""#));

  let reqs = server.finish();
  assert_eq!(reqs.len(), 1);
  assert_eq!(reqs[0].method, "GET");
}

#[test]
fn dry_run_only_reads() {
  let server = StubServer::start(vec![StubResponse::json(200, r#"{"body": ""}"#)]);

  let out = cmd_bin(BIN)
    .args(["--version-slug", "v1.2.3", "--repo", "o/r", "--pr", "1", "--dry-run", "--api-url"])
    .arg(server.url())
    .output()
    .unwrap();
  assert!(out.status.success(), "cli run failed: {}", String::from_utf8_lossy(&out.stderr));

  let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
  assert_eq!(report["dry_run"], true);
  assert_eq!(report["action"], "created");
  assert!(report["body"]
    .as_str()
    .unwrap()
    .contains("<https://awkward-array.readthedocs.io/en/v1.2.3/>"));

  assert_eq!(server.finish().len(), 1);
}

#[test]
fn api_error_fails_the_run() {
  let server = StubServer::start(vec![StubResponse::json(404, r#"{"message": "Not Found"}"#)]);

  cmd_bin(BIN)
    .args(["--version-slug", "latest", "--repo", "o/r", "--pr", "404", "--api-url"])
    .arg(server.url())
    .assert()
    .failure()
    .stderr(predicate::str::contains("fetching o/r#404"));

  server.finish();
}

#[test]
fn write_rejection_fails_the_run() {
  let server = StubServer::start(vec![
    StubResponse::json(200, r#"{"body": "text"}"#),
    StubResponse::json(403, r#"{"message": "Resource not accessible by integration"}"#),
  ]);

  cmd_bin(BIN)
    .args(["--version-slug", "latest", "--repo", "o/r", "--pr", "5", "--api-url"])
    .arg(server.url())
    .assert()
    .failure()
    .stderr(predicate::str::contains("updating description of o/r#5"));

  assert_eq!(server.finish().len(), 2);
}

#[test]
fn identity_from_actions_environment() {
  let td = tempfile::TempDir::new().unwrap();
  let event = td.path().join("event.json");
  std::fs::write(&event, r#"{"action": "opened", "pull_request": {"number": 31}}"#).unwrap();

  let server = StubServer::start(vec![
    StubResponse::json(200, r#"{"body": null}"#),
    StubResponse::json(200, r#"{}"#),
  ]);

  cmd_bin(BIN)
    .args(["--version-slug", "31"])
    .env("GITHUB_REPOSITORY", "scikit-hep/awkward")
    .env("GITHUB_EVENT_PATH", &event)
    .env("GITHUB_API_URL", server.url())
    .assert()
    .success();

  let reqs = server.finish();
  assert_eq!(reqs[0].path, "/repos/scikit-hep/awkward/pulls/31");
  assert_eq!(reqs[1].path, "/repos/scikit-hep/awkward/pulls/31");
}

#[test]
fn missing_pull_number_is_reported() {
  let td = tempfile::TempDir::new().unwrap();

  cmd_bin(BIN)
    .args(["--version-slug", "latest", "--repo", "o/r", "--api-url", "http://127.0.0.1:9"])
    .current_dir(td.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("pull request number"));
}

#[test]
fn missing_version_slug_is_reported() {
  cmd_bin(BIN)
    .args(["--repo", "o/r", "--pr", "1"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("--version-slug"));
}
