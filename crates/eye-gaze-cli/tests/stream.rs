//! Stream command tests.
//!
//! Feeds recordings through stdin and checks the labels presented on stdout.

#![allow(clippy::unwrap_used)]
#![allow(deprecated)] // cargo_bin deprecation

use assert_cmd::Command;
use eye_gaze_core::{BlendShapeKey, GazeDirection};
use eye_gaze_test_support::{recording, SnapshotBuilder};
use predicates::prelude::*;

fn stream(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("eye-gaze").unwrap();
    cmd.current_dir(home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .arg("stream");
    cmd
}

fn labels(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_stream_presents_label_changes() {
    let home = tempfile::tempdir().unwrap();
    let input = recording(&[
        SnapshotBuilder::centered(),
        SnapshotBuilder::looking(GazeDirection::Down),
        SnapshotBuilder::looking(GazeDirection::Down),
        SnapshotBuilder::looking(GazeDirection::Right),
        SnapshotBuilder::centered(),
    ]);

    let output = stream(&home).write_stdin(input).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        labels(&output.stdout),
        vec!["", "Looking DOWN", "Looking LEFT", ""]
    );
}

#[test]
fn test_stream_every_frame() {
    let home = tempfile::tempdir().unwrap();
    let input = recording(&[
        SnapshotBuilder::looking(GazeDirection::Up),
        SnapshotBuilder::looking(GazeDirection::Up),
        SnapshotBuilder::looking(GazeDirection::Left),
    ]);

    let output = stream(&home)
        .arg("--every-frame")
        .write_stdin(input)
        .output()
        .unwrap();

    assert_eq!(
        labels(&output.stdout),
        vec!["Looking UP", "Looking UP", "Looking RIGHT"]
    );
}

#[test]
fn test_stream_malformed_frame_keeps_previous_label() {
    let home = tempfile::tempdir().unwrap();
    let mut input = recording(&[SnapshotBuilder::looking(GazeDirection::Up)]);
    input.push_str(
        &SnapshotBuilder::looking(GazeDirection::Down)
            .without(BlendShapeKey::EyeLookDownRight)
            .to_json_line(Some(1)),
    );
    input.push('\n');
    input.push_str("{\"frame\": 2, \"blendShapes\": {\n");

    stream(&home)
        .write_stdin(input)
        .assert()
        .code(1)
        .stdout("Looking UP\n")
        .stderr(predicate::str::contains("eyeLookDownRight"));
}

#[test]
fn test_stream_threshold_flag() {
    let home = tempfile::tempdir().unwrap();
    let input = recording(&[SnapshotBuilder::centered().score(GazeDirection::Up, 0.3)]);

    stream(&home)
        .arg("--threshold")
        .arg("0.5")
        .write_stdin(input.clone())
        .assert()
        .code(0)
        .stdout("\n");

    stream(&home)
        .write_stdin(input)
        .assert()
        .code(0)
        .stdout("Looking UP\n");
}

#[test]
fn test_stream_from_input_file() {
    let home = tempfile::tempdir().unwrap();
    let path = home.path().join("live.jsonl");
    std::fs::write(
        &path,
        recording(&[SnapshotBuilder::looking(GazeDirection::Left)]),
    )
    .unwrap();

    stream(&home)
        .arg("--input")
        .arg(&path)
        .assert()
        .code(0)
        .stdout("Looking RIGHT\n");
}

#[test]
fn test_stream_missing_input_file() {
    let home = tempfile::tempdir().unwrap();
    stream(&home)
        .arg("--input")
        .arg(home.path().join("absent.jsonl"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to open recording"));
}

#[test]
fn test_stream_directory_input_rejected() {
    let home = tempfile::tempdir().unwrap();
    stream(&home)
        .arg("--input")
        .arg(home.path())
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("is not a file"));
}

#[test]
fn test_stream_empty_input() {
    let home = tempfile::tempdir().unwrap();
    stream(&home)
        .write_stdin("")
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());
}
