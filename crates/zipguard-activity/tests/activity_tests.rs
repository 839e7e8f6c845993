//! End-to-end tests driving the activity through JSON input.

#![allow(clippy::unwrap_used)]

use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use zipguard_activity::Activity;
use zipguard_activity::ActivityError;
use zipguard_activity::ActivityOutput;
use zipguard_core::ExtractOptions;
use zipguard_core::test_utils::ZipTestBuilder;

fn write_archive(dir: &Path, name: &str, data: &[u8]) -> String {
    let path = dir.join(name);
    fs::write(&path, data).unwrap();
    path.to_string_lossy().into_owned()
}

fn request(action: &str, source: &str, target: &Path) -> serde_json::Value {
    json!({
        "action": action,
        "sourceFile": source,
        "targetDirectory": target.to_string_lossy(),
    })
}

#[test]
fn test_unzip_request_extracts_tree() {
    let temp = TempDir::new().unwrap();
    let zip = ZipTestBuilder::new()
        .add_directory("docs/")
        .add_file("docs/readme.md", b"# hi")
        .add_deflated_file("data.bin", &[7u8; 4096])
        .build();
    let source = write_archive(temp.path(), "bundle.zip", &zip);
    let out = temp.path().join("out");

    let outcome = Activity::default().eval_json(request("unzip", &source, &out));
    let output = ActivityOutput::from_outcome(&outcome);

    assert_eq!(output.result, "OK");
    assert_eq!(fs::read(out.join("docs/readme.md")).unwrap(), b"# hi");
    assert_eq!(fs::read(out.join("data.bin")).unwrap(), vec![7u8; 4096]);
}

#[test]
fn test_unknown_action_returns_nok() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");

    let output = Activity::default()
        .eval_json(request("untar", "bundle.tar", &out))
        .unwrap();

    assert_eq!(output.result, "NOK");
    assert!(!out.exists());
}

#[test]
fn test_missing_archive_reports_open_failure() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing.zip");
    let out = temp.path().join("out");

    let outcome =
        Activity::default().eval_json(request("unzip", &missing.to_string_lossy(), &out));

    let err = outcome.as_ref().unwrap_err();
    assert_eq!(err.code(), "OPEN_FAILED");
    let output = ActivityOutput::from_outcome(&outcome);
    assert!(output.result.starts_with("failed to open archive"));
    assert!(!out.exists());
}

#[test]
fn test_zip_slip_reports_illegal_path() {
    let temp = TempDir::new().unwrap();
    let zip = ZipTestBuilder::new()
        .add_file("ok.txt", b"fine")
        .add_file("../../escape.txt", b"pwned")
        .build();
    let source = write_archive(temp.path(), "evil.zip", &zip);
    let out = temp.path().join("out");

    let outcome = Activity::default().eval_json(request("unzip", &source, &out));

    assert!(matches!(outcome, Err(ActivityError::Extraction(_))));
    let output = ActivityOutput::from_outcome(&outcome);
    assert!(output.result.ends_with("illegal file path"));
    assert!(out.join("ok.txt").exists());
    assert!(!temp.path().join("escape.txt").exists());
}

#[test]
fn test_malformed_request_is_config_error() {
    let outcome = Activity::default().eval_json(json!({ "action": "unzip" }));
    assert_eq!(outcome.unwrap_err().code(), "INVALID_INPUT");
}

#[test]
fn test_strict_options_require_existing_target() {
    let temp = TempDir::new().unwrap();
    let zip = ZipTestBuilder::new().add_file("a.txt", b"a").build();
    let source = write_archive(temp.path(), "a.zip", &zip);
    let out = temp.path().join("absent");

    let activity = Activity::new(ExtractOptions::strict());
    let err = activity
        .eval_json(request("unzip", &source, &out))
        .unwrap_err();

    assert_eq!(err.code(), "WRITE_FAILED");
    assert!(!out.exists());
}
