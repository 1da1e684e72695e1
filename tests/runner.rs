//! Tests for the sample runner (library entry point and CLI binary).

use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

use aws_cli_sample::{run_sample, Environment, LogFormat, LogLevel, Opt, ReadyState};
use tempfile::NamedTempFile;

fn site_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("site/index.html")
}

fn opt(page: PathBuf, url: &str) -> Opt {
    Opt {
        page,
        url: url.to_string(),
        ready_state: ReadyState::Loading,
        hover_buttons: false,
        clicks: Vec::new(),
        log_level: LogLevel::Info,
        log_format: LogFormat::Plain,
    }
}

#[test]
fn test_run_sample_replays_interactions() {
    let mut options = opt(site_path(), "https://d111111abcdef8.cloudfront.net/index.html");
    options.hover_buttons = true;
    options.clicks = vec!["#features".to_string(), "#nowhere".to_string()];

    let report = run_sample(&options).expect("run should succeed");

    assert_eq!(report.environment, Environment::CloudFront);
    assert_eq!(report.sample.version, "1.0.0");
    assert_eq!(report.scroll_requests.len(), 1);
    assert!(report.navigations.is_empty());
    assert!(report.body_classes.contains(&"js-loaded".to_string()));
    assert!(report
        .console
        .contains(&"Button hovered: Invalidate".to_string()));
    assert_eq!(
        report.console.last().map(String::as_str),
        Some("Deployment Environment: CloudFront")
    );
}

#[test]
fn test_run_sample_with_inline_page() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "<html><body><p>No links here</p></body></html>").unwrap();

    let mut options = opt(file.path().to_path_buf(), "http://127.0.0.1:8080/");
    options.ready_state = ReadyState::Complete;
    let report = run_sample(&options).unwrap();

    assert_eq!(report.environment, Environment::LocalDevelopment);
    assert!(report.scroll_requests.is_empty());
    assert_eq!(report.body_classes, vec!["js-loaded"]);
}

#[test]
fn test_run_sample_missing_page_fails() {
    let options = opt(PathBuf::from("/nonexistent/index.html"), "http://localhost/");
    let err = run_sample(&options).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to load page"));
}

#[test]
fn test_run_sample_page_opened_from_disk_is_unknown() {
    let options = opt(site_path(), "file:///srv/www/index.html");
    let report = run_sample(&options).expect("file pages should load");

    assert_eq!(report.environment, Environment::Unknown);
    assert!(report
        .console
        .contains(&"Deployment Environment: Unknown".to_string()));
    assert!(report.body_classes.contains(&"js-loaded".to_string()));
}

#[test]
fn test_binary_prints_report_json() {
    let output = Command::new(env!("CARGO_BIN_EXE_aws_cli_sample"))
        .arg(site_path())
        .args(["--url", "https://bucket.s3.amazonaws.com/index.html"])
        .args(["--click", "#caching"])
        .args(["--log-level", "error"])
        .output()
        .expect("failed to run binary");

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["environment"], "S3 Static Website");
    assert_eq!(report["sample"]["variant"], "OIDC");
    assert_eq!(report["scroll_requests"][0]["options"]["behavior"], "smooth");
}

#[test]
fn test_binary_exits_nonzero_on_missing_page() {
    let output = Command::new(env!("CARGO_BIN_EXE_aws_cli_sample"))
        .arg("/nonexistent/index.html")
        .args(["--log-level", "error"])
        .output()
        .expect("failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("aws_cli_sample error"));
}

#[test]
fn test_binary_plain_logs_print_page_lines_bare() {
    let output = Command::new(env!("CARGO_BIN_EXE_aws_cli_sample"))
        .arg(site_path())
        .args(["--url", "http://localhost:8000/"])
        .args(["--log-level", "info"])
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run binary");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr
        .lines()
        .any(|line| line == "Deployment Environment: Local Development"));
    assert!(stderr
        .lines()
        .any(|line| line.starts_with('[') && line.contains("] Loaded ")));
    assert!(!stderr.contains('✔'));
}
