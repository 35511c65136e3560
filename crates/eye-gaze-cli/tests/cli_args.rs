//! CLI argument validation tests.
//!
//! Tests command-line argument parsing, validation, and error handling.

#![allow(clippy::unwrap_used)]
#![allow(deprecated)] // cargo_bin deprecation

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("eye-gaze-adapters/tests/fixtures")
}

/// Command isolated from any user or project config.
fn eye_gaze(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("eye-gaze").unwrap();
    cmd.current_dir(home.path())
        .env("XDG_CONFIG_HOME", home.path());
    cmd
}

// === Missing/Invalid Path Tests ===

#[test]
fn test_missing_path_shows_error() {
    let home = tempfile::tempdir().unwrap();
    eye_gaze(&home).assert().code(2).stderr(
        predicate::str::contains("No paths specified")
            .or(predicate::str::contains("required"))
            .or(predicate::str::contains("PATHS")),
    );
}

#[test]
fn test_nonexistent_path_warns_but_continues() {
    let home = tempfile::tempdir().unwrap();
    eye_gaze(&home)
        .arg("/nonexistent/path/to/session.jsonl")
        .assert()
        .code(0)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_empty_directory() {
    let home = tempfile::tempdir().unwrap();
    let empty = tempfile::tempdir().unwrap();

    eye_gaze(&home)
        .arg(empty.path())
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());
}

// === Threshold Validation Tests ===

#[test]
fn test_threshold_rejects_non_number() {
    let home = tempfile::tempdir().unwrap();
    eye_gaze(&home)
        .arg("--threshold")
        .arg("high")
        .arg(fixtures_dir().join("session.jsonl"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid number"));
}

#[test]
fn test_threshold_rejects_infinite() {
    let home = tempfile::tempdir().unwrap();
    eye_gaze(&home)
        .arg("--threshold")
        .arg("inf")
        .arg(fixtures_dir().join("session.jsonl"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be finite"));
}

#[test]
fn test_threshold_accepts_negative() {
    let home = tempfile::tempdir().unwrap();
    eye_gaze(&home)
        .arg("--threshold=-0.5")
        .arg(fixtures_dir().join("session.jsonl"))
        .assert()
        .code(1) // the fixture has one malformed frame
        .stdout(predicate::str::contains("\"direction\":\"left\""));
}

// === Format Validation Tests ===

#[test]
fn test_invalid_format_rejected() {
    let home = tempfile::tempdir().unwrap();
    eye_gaze(&home)
        .arg("--format")
        .arg("xml")
        .arg(fixtures_dir().join("session.jsonl"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("json").or(predicate::str::contains("jsonl")));
}

// === Subcommand Tests ===

#[test]
fn test_classify_subcommand_matches_default() {
    let home = tempfile::tempdir().unwrap();
    let session = fixtures_dir().join("session.jsonl");

    let default_out = eye_gaze(&home).arg(&session).output().unwrap();
    let sub_out = eye_gaze(&home)
        .arg("classify")
        .arg(&session)
        .output()
        .unwrap();

    assert_eq!(default_out.status.code(), sub_out.status.code());
    assert_eq!(
        String::from_utf8_lossy(&default_out.stdout).lines().count(),
        String::from_utf8_lossy(&sub_out.stdout).lines().count()
    );
}

#[test]
fn test_help_lists_subcommands() {
    let home = tempfile::tempdir().unwrap();
    eye_gaze(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("classify").and(predicate::str::contains("stream")));
}

#[test]
fn test_quiet_suppresses_skip_warnings() {
    let home = tempfile::tempdir().unwrap();
    eye_gaze(&home)
        .arg("--quiet")
        .arg(fixtures_dir().join("session.jsonl"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Skipping").not());
}

#[test]
fn test_skipped_frame_reported_once() {
    let home = tempfile::tempdir().unwrap();
    let output = eye_gaze(&home)
        .arg(fixtures_dir().join("session.jsonl"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Skipping").count(), 1);
    assert!(stderr.contains("frame 2: missing blend-shape coefficient: eyeLookUpRight"));
}

#[test]
fn test_unreadable_line_skip_names_recording() {
    let home = tempfile::tempdir().unwrap();
    let output = eye_gaze(&home)
        .arg(fixtures_dir().join("nested/corrupt.ndjson"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("WARN: Skipping unreadable frame"));
    assert!(stderr.contains("corrupt.ndjson: invalid frame on line 2"));
    assert!(!stderr.contains("item "));
}
