// File: crates/prometheus-render/tests/pipeline.rs
// Purpose: Run the whole pipeline against a mock Prometheus and inspect the PNG.

use std::path::Path;

use clap::Parser;
use mockito::{Matcher, Mock, ServerGuard};
use prometheus_render::{run, Args};

const TWO_SERIES: &str = r#"{"status":"success","data":{"resultType":"matrix","result":[
    {"metric":{"__name__":"node_load1","instance":"a","job":"node"},"values":[[1700000000,"0.5"],[1700000060,"0.7"],[1700000120,"NaN"],[1700000180,"0.9"]]},
    {"metric":{"__name__":"node_load1","instance":"b","job":"node","rack":"r2"},"values":[[1700000000,"1.5"],[1700000060,"1.2"]]}
]}}"#;

const EMPTY: &str = r#"{"status":"success","data":{"resultType":"matrix","result":[]}}"#;

const EVENTS: &str = r#"{"status":"success","data":{"resultType":"matrix","result":[
    {"metric":{"__name__":"nixos_system_version","version":"24.05"},"values":[[1700000090,"1"],[1700000150,"1"]]},
    {"metric":{"__name__":"nixos_system_version","version":"23.11"},"values":[[1700000030,"1"]]}
]}}"#;

fn mock_query(server: &mut ServerGuard, query: &str, status: usize, body: &str) -> Mock {
    server
        .mock("GET", "/api/v1/query_range")
        .match_query(Matcher::UrlEncoded("query".into(), query.into()))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create()
}

fn args(server: &ServerGuard, output: &Path, extra: &[&str]) -> Args {
    let out = output.to_string_lossy().into_owned();
    let url = server.url();
    let mut argv = vec!["prometheus-render", "--url", url.as_str(), "--query", "node_load1", "--output", out.as_str()];
    argv.extend_from_slice(extra);
    Args::try_parse_from(argv).expect("parse args")
}

#[test]
fn well_formed_response_produces_png_of_requested_size() {
    let mut server = mockito::Server::new();
    let mock = mock_query(&mut server, "node_load1", 200, TWO_SERIES);
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("load.png");

    let summary = run(&args(&server, &out, &["--width", "640", "--height", "240", "--title", "Load"])).expect("run");
    mock.assert();
    assert_eq!(summary.series, 2);
    assert_eq!(summary.markers, 0);
    assert_eq!(summary.output, out);

    let img = image::open(&out).expect("decode output png");
    assert_eq!((img.width(), img.height()), (640, 240));
}

#[test]
fn default_size_and_step_are_sent() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/v1/query_range")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "node_load1".into()),
            Matcher::UrlEncoded("step".into(), "12".into()),
            Matcher::Regex("start=[0-9]+\\.[0-9]{3}".into()),
        ]))
        .with_body(TWO_SERIES)
        .create();
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("nested/dir/load.png");

    run(&args(&server, &out, &["--range", "1h"])).expect("run");
    mock.assert();
    let img = image::open(&out).expect("decode output png");
    assert_eq!((img.width(), img.height()), (800, 300));
}

#[test]
fn explicit_step_is_passed_verbatim() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/v1/query_range")
        .match_query(Matcher::UrlEncoded("step".into(), "5m".into()))
        .with_body(TWO_SERIES)
        .create();
    let dir = tempfile::tempdir().expect("tempdir");

    run(&args(&server, &dir.path().join("o.png"), &["--step", "5m"])).expect("run");
    mock.assert();
}

#[test]
fn empty_result_is_an_error_and_writes_nothing() {
    let mut server = mockito::Server::new();
    let _mock = mock_query(&mut server, "node_load1", 200, EMPTY);
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("empty.png");

    let err = run(&args(&server, &out, &[])).unwrap_err();
    assert_eq!(err.to_string(), "No data returned for query: node_load1");
    assert!(!out.exists());
}

#[test]
fn malformed_json_fails_cleanly() {
    let mut server = mockito::Server::new();
    let _mock = mock_query(&mut server, "node_load1", 200, "{\"status\": \"succ");
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("bad.png");

    let err = run(&args(&server, &out, &[])).unwrap_err();
    assert!(err.to_string().starts_with("malformed response from Prometheus"), "got: {err}");
    assert!(!out.exists());
}

#[test]
fn prometheus_error_is_reported() {
    let mut server = mockito::Server::new();
    let _mock = mock_query(
        &mut server,
        "node_load1",
        422,
        r#"{"status":"error","errorType":"execution","error":"query timed out"}"#,
    );
    let dir = tempfile::tempdir().expect("tempdir");

    let err = run(&args(&server, &dir.path().join("o.png"), &[])).unwrap_err();
    assert_eq!(err.to_string(), "Prometheus error: query timed out");
}

#[test]
fn vlines_query_adds_markers() {
    let mut server = mockito::Server::new();
    let main = mock_query(&mut server, "node_load1", 200, TWO_SERIES);
    let vlines = mock_query(&mut server, "nixos_system_version", 200, EVENTS);
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("events.png");

    let summary = run(&args(&server, &out, &["--vlines-query", "nixos_system_version"])).expect("run");
    main.assert();
    vlines.assert();
    assert_eq!(summary.markers, 2);
    assert!(out.exists());
}

#[test]
fn failing_vlines_query_still_renders() {
    let mut server = mockito::Server::new();
    let _main = mock_query(&mut server, "node_load1", 200, TWO_SERIES);
    let _vlines = mock_query(&mut server, "broken{", 500, "internal error");
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("no-events.png");

    let summary = run(&args(&server, &out, &["--vlines-query", "broken{"])).expect("run");
    assert_eq!(summary.markers, 0);
    assert!(out.exists());
}

#[test]
fn unknown_style_still_renders() {
    let mut server = mockito::Server::new();
    let _mock = mock_query(&mut server, "node_load1", 200, TWO_SERIES);
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("styled.png");

    run(&args(&server, &out, &["--style", "seaborn-v0_8"])).expect("run");
    assert!(out.exists());
}

#[test]
fn unwritable_output_reports_path_and_cause() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/api/v1/query_range")
        .match_query(Matcher::Any)
        .with_body(TWO_SERIES)
        .create();
    let dir = tempfile::tempdir().expect("tempdir");

    // The output path is an existing directory.
    let err = run(&args(&server, dir.path(), &[])).unwrap_err();
    assert_eq!(err.to_string(), format!("Error writing PNG to {}", dir.path().display()));
    assert!(
        matches!(err.root_cause().downcast_ref::<render_core::RenderError>(), Some(render_core::RenderError::Io(_))),
        "unexpected cause: {err:#}"
    );

    // The output's parent is a regular file.
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"x").expect("write blocker file");
    let out = blocker.join("chart.png");
    let err = run(&args(&server, &out, &[])).unwrap_err();
    assert_eq!(err.to_string(), format!("Error writing PNG to {}", out.display()));
    assert!(err.chain().count() >= 2, "missing cause: {err:#}");
    assert!(!out.exists());
}
