//! Output format validation tests.
//!
//! Tests JSON/JSONL output format correctness and required field presence.

#![allow(clippy::unwrap_used)]
#![allow(deprecated)] // cargo_bin deprecation

use std::path::PathBuf;

use assert_cmd::Command;
use serde_json::Value;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("eye-gaze-adapters/tests/fixtures")
}

fn run(args: &[&str]) -> (Option<i32>, String) {
    let home = tempfile::tempdir().unwrap();
    let output = Command::cargo_bin("eye-gaze")
        .unwrap()
        .current_dir(home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .args(args)
        .arg(fixtures_dir().join("session.jsonl"))
        .output()
        .unwrap();
    (
        output.status.code(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
    )
}

// === JSONL Format Tests ===

#[test]
fn test_jsonl_one_record_per_classified_frame() {
    let (code, stdout) = run(&["--format", "jsonl"]);

    assert_eq!(code, Some(1));
    let records: Vec<Value> = stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    // Frame 2 is missing eyeLookUpRight and is skipped
    assert_eq!(records.len(), 3);
    assert_eq!(
        records.iter().map(|r| r["frame"].as_u64().unwrap()).collect::<Vec<_>>(),
        vec![0, 1, 3]
    );
}

#[test]
fn test_jsonl_required_fields() {
    let (_, stdout) = run(&[]);
    let first: Value = serde_json::from_str(stdout.lines().next().unwrap()).unwrap();

    assert!(first["source"].as_str().unwrap().ends_with("session.jsonl"));
    assert!(first["timestamp"].is_string());
    assert_eq!(first["direction"], "down");
    assert_eq!(first["label"], "Looking DOWN");

    let scores = &first["scores"];
    for field in ["up", "down", "inner_turn", "outer_turn"] {
        assert!(scores[field].is_number(), "missing score {field}");
    }
    assert!((scores["down"].as_f64().unwrap() - 0.4).abs() < 1e-6);
}

#[test]
fn test_none_direction_has_empty_label() {
    let (_, stdout) = run(&[]);
    let second: Value = serde_json::from_str(stdout.lines().nth(1).unwrap()).unwrap();

    assert_eq!(second["direction"], "none");
    assert_eq!(second["label"], "");
}

#[test]
fn test_right_direction_has_mirrored_label() {
    let (_, stdout) = run(&[]);
    let third: Value = serde_json::from_str(stdout.lines().nth(2).unwrap()).unwrap();

    assert_eq!(third["direction"], "right");
    assert_eq!(third["label"], "Looking LEFT");
}

// === JSON Format Tests ===

#[test]
fn test_json_format_single_array() {
    let (code, stdout) = run(&["--format", "json"]);

    assert_eq!(code, Some(1));
    let parsed: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 3);
}

#[test]
fn test_json_pretty_is_multiline() {
    let (_, stdout) = run(&["--format", "json", "--pretty"]);

    assert!(stdout.trim().lines().count() > 3);
    let parsed: Value = serde_json::from_str(&stdout).unwrap();
    assert!(parsed.is_array());
}
