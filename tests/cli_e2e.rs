//! End-to-end CLI tests for the signword binary.
//!
//! Static tests exercise argument handling; the mock-backed tests run the
//! whole binary against a local stand-in for the CSV export endpoint.

use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod support;
use support::socket_guard::start_mock_server_or_skip;

const SHEET_ID: &str = "1TestSheetId";

const WORDS_CSV: &str = r#""word_id","word","word_type","meaning","tags","level","notes"
"W1","사과","명사","apple","과일, 음식","초급",""
"W2","나무","명사","tree","자연","중급",""
"#;

const VIDEOS_CSV: &str = r#""video_id","type","word_id","sentence_text","video_url","description","signer","tags","created_at"
"V1","word","W1","","https://drive.google.com/file/d/AAA/view","정면","김철수","","2024-01-05"
"V2","sentence","W1","사과를 먹어요","https://drive.google.com/open?id=BBB","","이영희","",""
"#;

/// A command with the environment scrubbed so host configuration cannot
/// leak into the test. Width is pinned so row truncation stays predictable.
fn bare_command() -> Command {
    let mut cmd = Command::cargo_bin("signword").expect("binary should build");
    cmd.env_remove("SIGNWORD_SHEET_ID")
        .env_remove("SIGNWORD_SCRIPT_URL")
        .env_remove("SIGNWORD_BASE_URL")
        .env_remove("RUST_LOG")
        .env("COLUMNS", "200");
    cmd
}

/// A command pointed at the mock export endpoint.
fn signword_command(server: &MockServer, args: &[&str]) -> Command {
    let mut cmd = bare_command();
    cmd.arg("--sheet")
        .arg(SHEET_ID)
        .arg("--base-url")
        .arg(server.uri())
        .args(args);
    cmd
}

async fn mount_tabs(server: &MockServer) {
    for (tab, body) in [("words", WORDS_CSV), ("videos", VIDEOS_CSV)] {
        Mock::given(method("GET"))
            .and(path(format!("/spreadsheets/d/{SHEET_ID}/gviz/tq")))
            .and(query_param("tqx", "out:csv"))
            .and(query_param("sheet", tab))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(server)
            .await;
    }
}

/// Test that --help displays usage information and exits with code 0.
#[test]
fn test_binary_help_displays_usage() {
    bare_command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("vocabulary catalog"));
}

/// Test that --version displays the binary name and exits with code 0.
#[test]
fn test_binary_version_displays_version() {
    bare_command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("signword"));
}

/// Test that a bare invocation asks for a subcommand.
#[test]
fn test_binary_requires_subcommand() {
    bare_command()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

/// Test that invalid flags cause non-zero exit.
#[test]
fn test_binary_invalid_flag_returns_error() {
    bare_command()
        .arg("list")
        .arg("--invalid-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// Test that a missing sheet id produces an actionable error.
#[test]
fn test_binary_missing_sheet_id_names_the_env_var() {
    bare_command()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("SIGNWORD_SHEET_ID"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_list_renders_catalog_rows() {
    let Some(mock_server) = start_mock_server_or_skip().await else {
        return;
    };
    mount_tabs(&mock_server).await;

    signword_command(&mock_server, &["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("W2 | 나무 | 중급 | tree | 0 videos"))
        .stdout(predicate::str::contains("W1 | 사과 | 초급 | apple | 2 videos"))
        .stdout(predicate::str::contains("2 entries"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_search_filters_by_term() {
    let Some(mock_server) = start_mock_server_or_skip().await else {
        return;
    };
    mount_tabs(&mock_server).await;

    signword_command(&mock_server, &["search", "apple"])
        .assert()
        .success()
        .stdout(predicate::str::contains("사과"))
        .stdout(predicate::str::contains("나무").not())
        .stdout(predicate::str::contains("1 of 2 entries matched"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_search_reports_empty_result() {
    let Some(mock_server) = start_mock_server_or_skip().await else {
        return;
    };
    mount_tabs(&mock_server).await;

    signword_command(&mock_server, &["search", "바다"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries matched."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_show_prints_entry_detail() {
    let Some(mock_server) = start_mock_server_or_skip().await else {
        return;
    };
    mount_tabs(&mock_server).await;

    signword_command(
        &mock_server,
        &["--script-url", "https://script.example/exec", "show", "W1"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("사과 (W1)"))
    .stdout(predicate::str::contains("meaning: apple"))
    .stdout(predicate::str::contains(
        "playback: https://script.example/exec?action=streamVideo&fileId=AAA",
    ))
    .stdout(predicate::str::contains(
        "preview: https://drive.google.com/file/d/AAA/preview",
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_show_unknown_id_fails() {
    let Some(mock_server) = start_mock_server_or_skip().await else {
        return;
    };
    mount_tabs(&mock_server).await;

    signword_command(&mock_server, &["show", "W999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("W999"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_export_writes_json_file() {
    let Some(mock_server) = start_mock_server_or_skip().await else {
        return;
    };
    mount_tabs(&mock_server).await;

    let dir = tempfile::tempdir().expect("temp dir should be creatable");
    let out_path = dir.path().join("catalog.json");

    signword_command(&mock_server, &["export", "-o"])
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 entries"));

    let written = std::fs::read_to_string(&out_path).expect("export file should exist");
    let json: serde_json::Value =
        serde_json::from_str(&written).expect("export file should be valid JSON");
    let entries = json.as_array().expect("export should be a JSON array");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["word"], "나무", "entries should be exported in sorted order");
    assert_eq!(entries[1]["wordId"], "W1");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_export_stdout_is_bare_json() {
    let Some(mock_server) = start_mock_server_or_skip().await else {
        return;
    };
    mount_tabs(&mock_server).await;

    let assert = signword_command(&mock_server, &["export"]).assert().success();
    let stdout = &assert.get_output().stdout;
    let json: serde_json::Value =
        serde_json::from_slice(stdout).expect("stdout should carry nothing but JSON");
    assert_eq!(json.as_array().map(Vec::len), Some(2));
}
