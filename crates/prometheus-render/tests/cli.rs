// File: crates/prometheus-render/tests/cli.rs
// Purpose: Binary-level checks: exit codes, stderr messages, env configuration.

use assert_cmd::Command;
use mockito::Matcher;
use predicates::prelude::*;

fn bin() -> Command {
    let mut cmd = Command::cargo_bin("prometheus-render").expect("binary built");
    cmd.env_remove("RUST_LOG").env_remove("PROMETHEUS_RENDER_URL").env_remove("PROMETHEUS_RENDER_VERSION");
    cmd
}

#[test]
fn version_flag_prints_name() {
    bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("prometheus-render "));
}

#[test]
fn missing_required_flags_fail() {
    bin().args(["--output", "x.png"]).assert().failure().stderr(predicate::str::contains("--query"));
}

#[test]
fn bad_range_is_rejected_before_any_request() {
    bin()
        .args(["--query", "up", "--output", "x.png", "--range", "7x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid range format: 7x (expected e.g. 1h, 24h, 7d)"));
}

#[test]
fn renders_with_url_from_env() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/api/v1/query_range")
        .match_query(Matcher::Any)
        .with_body(r#"{"status":"success","data":{"resultType":"matrix","result":[{"metric":{},"values":[[1,"1"],[2,"2"]]}]}}"#)
        .create();
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("env.png");

    bin()
        .env("PROMETHEUS_RENDER_URL", server.url())
        .args(["--query", "up", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert!(out.exists());
}

#[test]
fn empty_result_exits_non_zero_with_message() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/api/v1/query_range")
        .match_query(Matcher::Any)
        .with_body(r#"{"status":"success","data":{"resultType":"matrix","result":[]}}"#)
        .create();
    let dir = tempfile::tempdir().expect("tempdir");

    bin()
        .args(["--url", &server.url(), "--query", "absent_metric", "--output"])
        .arg(dir.path().join("none.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No data returned for query: absent_metric"));
}

#[test]
fn unreachable_server_exits_non_zero() {
    let dir = tempfile::tempdir().expect("tempdir");
    bin()
        .args(["--url", "http://127.0.0.1:9", "--query", "up", "--output"])
        .arg(dir.path().join("none.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("error querying Prometheus"));
}

#[test]
fn version_is_read_from_environment_at_runtime() {
    bin()
        .env("PROMETHEUS_RENDER_VERSION", "2024.06.1")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("prometheus-render 2024.06.1"));
}
