//! CLI tests for the `habits` binary.
//!
//! Spawns the binary and checks exit codes and output for init, list, and
//! validate.

use std::fs;
use std::process::Command;

use habits::exit_codes;
use habits::io::{CsvStore, HabitStore};
use habits::test_support::habit;

fn habits_cmd(data: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_habits"));
    cmd.env_remove("HABITS_DATA").arg("--data").arg(data);
    cmd
}

#[test]
fn init_creates_header_only_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    let data = temp.path().join("nested").join("habits.csv");

    let status = habits_cmd(&data).arg("init").status().expect("habits init");

    assert_eq!(status.code(), Some(exit_codes::OK));
    let contents = fs::read_to_string(&data).expect("read");
    assert!(contents.starts_with("id,title,description,frequency,streak"));
}

#[test]
fn list_prints_json_array() {
    let temp = tempfile::tempdir().expect("tempdir");
    let data = temp.path().join("habits.csv");
    CsvStore::new(&data)
        .write_all(&[habit("a", "Read", "2024-01-01T00:00:00.000Z")])
        .expect("seed");

    let output = habits_cmd(&data).arg("list").output().expect("habits list");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(parsed[0]["id"], "a");
    assert_eq!(parsed[0]["lastCompleted"], "");
}

#[test]
fn validate_reports_duplicate_ids() {
    let temp = tempfile::tempdir().expect("tempdir");
    let data = temp.path().join("habits.csv");
    CsvStore::new(&data)
        .write_all(&[
            habit("a", "Read", "2024-01-01T00:00:00.000Z"),
            habit("a", "Walk", "2024-01-01T00:00:00.000Z"),
        ])
        .expect("seed");

    let output = habits_cmd(&data)
        .arg("validate")
        .output()
        .expect("habits validate");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("duplicate id 'a'"));
}

#[test]
fn validate_clean_file_succeeds() {
    let temp = tempfile::tempdir().expect("tempdir");
    let data = temp.path().join("habits.csv");
    CsvStore::new(&data)
        .write_all(&[habit("a", "Read", "2024-01-01T00:00:00.000Z")])
        .expect("seed");

    let status = habits_cmd(&data)
        .arg("validate")
        .status()
        .expect("habits validate");

    assert_eq!(status.code(), Some(exit_codes::OK));
}
