use std::{net::SocketAddr, path::PathBuf, process::Output};

use axum::{Router, routing::get};
use tokio::{net::TcpListener, process::Command};

const WEBLOG: &str = include_str!("fixtures/weblog.csv");

const EXPECTED: &str = "Found 2 images out of 3 total.\n\
                        Image request account for 66.67% of all requests in data.\n\
                        Most used browser was Firefox.\n";

async fn serve_weblog() -> String {
    let port = portpicker::pick_unused_port().expect("No free ports available");
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr).await.expect("Failed to bind");
    let app = Router::new().route("/weblog.csv", get(|| async { WEBLOG }));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://127.0.0.1:{port}")
}

async fn run_analyzer(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_weblog-analyzer"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .await
        .expect("Failed to run weblog-analyzer")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn analyzes_log_served_over_http() {
    let base = serve_weblog().await;
    let output = run_analyzer(&["--url", &format!("{base}/weblog.csv")]).await;

    assert!(output.status.success(), "exit status {}", output.status);
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn missing_remote_log_aborts_run() {
    let base = serve_weblog().await;
    let output = run_analyzer(&["--url", &format!("{base}/nope.csv")]).await;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "no report on failed download");
    assert!(String::from_utf8_lossy(&output.stderr).contains("error downloading data"));
}

#[tokio::test]
async fn analyzes_local_file_as_json() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/weblog.csv");
    let output = run_analyzer(&["--url", path.to_str().unwrap(), "--format", "json"]).await;

    assert!(output.status.success(), "exit status {}", output.status);
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_requests"], 3);
    assert_eq!(report["image_count"], 2);
    assert_eq!(report["most_used_browser"], "Firefox");
    assert_eq!(report["browser_tally"]["Firefox"], 2);
    assert_eq!(report["browser_tally"]["Chrome"], 1);
}

async fn failed_attempts_on_missing_file(retries: &str) -> usize {
    let missing = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/missing.csv");
    let output = run_analyzer(&["--url", missing.to_str().unwrap(), "--retries", retries]).await;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "no report on failed download");
    String::from_utf8_lossy(&output.stderr)
        .matches("fetch attempt failed")
        .count()
}

#[tokio::test]
async fn retries_zero_tries_once() {
    assert_eq!(failed_attempts_on_missing_file("0").await, 1);
}

#[tokio::test]
async fn retries_add_attempts_after_first_failure() {
    assert_eq!(failed_attempts_on_missing_file("2").await, 3);
}
