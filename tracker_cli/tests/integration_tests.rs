//! Integration tests for the tracker binary.
//!
//! These tests verify end-to-end behavior including:
//! - Sample summaries and single-package reports
//! - Error reporting and exit codes
//! - Batch processing of JSON Lines files
//! - Locale and JSON output selection

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to create a test directory holding an empty config file
fn setup_test_dir() -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "").expect("Failed to write config");
    (temp_dir, config_path)
}

/// Helper to get the CLI binary, pinned to the given config file
fn cli(config_path: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tracker"));
    cmd.arg("--config").arg(config_path);
    cmd
}

const RUN_LINE: &str = "Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; \
                        Avg speed: 9.750 km/h; Calories burned: 797.805.";
const SWIM_LINE: &str = "Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
                         Avg speed: 1.000 km/h; Calories burned: 336.000.";
const WALK_LINE: &str = "Workout type: WalkingWithPoles; Duration: 1.000 h; Distance: 5.850 km; \
                         Avg speed: 5.850 km/h; Calories burned: 349.252.";

#[test]
fn test_cli_help() {
    let (_dir, config) = setup_test_dir();
    cli(&config)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fitness tracker workout summaries"));
}

#[test]
fn test_default_command_prints_samples_in_order() {
    let (_dir, config) = setup_test_dir();
    let expected = format!("{}\n{}\n{}\n", SWIM_LINE, RUN_LINE, WALK_LINE);

    cli(&config).assert().success().stdout(expected.clone());
    cli(&config).arg("demo").assert().success().stdout(expected);
}

#[test]
fn test_report_single_package() {
    let (_dir, config) = setup_test_dir();
    cli(&config)
        .args(["report", "RUN", "15000", "1", "75"])
        .assert()
        .success()
        .stdout(format!("{}\n", RUN_LINE));
}

#[test]
fn test_unknown_code_fails() {
    let (_dir, config) = setup_test_dir();
    cli(&config)
        .args(["report", "XYZ", "1", "2", "3"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unknown workout type"));
}

#[test]
fn test_missing_value_fails() {
    let (_dir, config) = setup_test_dir();
    cli(&config)
        .args(["report", "RUN", "15000", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expects 3 sensor values, got 2"));
}

#[test]
fn test_zero_duration_fails() {
    let (_dir, config) = setup_test_dir();
    cli(&config)
        .args(["report", "RUN", "15000", "0", "75"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Arithmetic fault"));
}

#[test]
fn test_russian_locale_flag() {
    let (_dir, config) = setup_test_dir();
    cli(&config)
        .args(["--locale", "ru", "report", "SWM", "720", "1", "80", "25", "40"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Тип тренировки: Swimming;"))
        .stdout(predicate::str::contains("Потрачено ккал: 336.000."));
}

#[test]
fn test_locale_from_config_file() {
    let (_dir, config) = setup_test_dir();
    fs::write(&config, "[report]\nlocale = \"russian\"\n").unwrap();

    cli(&config)
        .args(["report", "RUN", "15000", "1", "75"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Тип тренировки: Running;"));

    // Flag wins over config
    cli(&config)
        .args(["--locale", "en", "report", "RUN", "15000", "1", "75"])
        .assert()
        .success()
        .stdout(format!("{}\n", RUN_LINE));
}

#[test]
fn test_json_output() {
    let (_dir, config) = setup_test_dir();
    let output = cli(&config)
        .args(["--json", "report", "SWM", "720", "1", "80", "25", "40"])
        .output()
        .expect("Failed to run tracker");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    assert_eq!(value["kind"], "Swimming");
    assert_eq!(value["mean_speed_kmh"], 1.0);
    assert_eq!(value["calories"], 336.0);
}

#[test]
fn test_batch_file() {
    let (dir, config) = setup_test_dir();
    let input = dir.path().join("packages.jsonl");
    fs::write(
        &input,
        "{\"code\": \"RUN\", \"data\": [15000, 1, 75]}\n\
         \n\
         {\"code\": \"WLK\", \"data\": [9000, 1, 75, 180]}\n",
    )
    .unwrap();

    cli(&config)
        .arg("batch")
        .arg(&input)
        .assert()
        .success()
        .stdout(format!("{}\n{}\n", RUN_LINE, WALK_LINE));
}

#[test]
fn test_batch_reports_bad_lines_and_continues() {
    let (dir, config) = setup_test_dir();
    let input = dir.path().join("packages.jsonl");
    fs::write(
        &input,
        "{\"code\": \"XYZ\", \"data\": [1, 2, 3]}\n\
         not json\n\
         {\"code\": \"SWM\", \"data\": [720, 1, 80, 25, 40]}\n",
    )
    .unwrap();

    cli(&config)
        .arg("batch")
        .arg(&input)
        .assert()
        .failure()
        .stdout(format!("{}\n", SWIM_LINE))
        .stderr(predicate::str::contains("line 1: Unknown workout type"))
        .stderr(predicate::str::contains("line 2: JSON error"))
        .stderr(predicate::str::contains("2 package(s) failed"));
}

#[test]
fn test_batch_missing_file() {
    let (dir, config) = setup_test_dir();
    cli(&config)
        .arg("batch")
        .arg(dir.path().join("absent.jsonl"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_batch_invalid_utf8_line_is_skipped() {
    let (dir, config) = setup_test_dir();
    let input = dir.path().join("packages.jsonl");
    let mut bytes = b"{\"code\": \"RUN\", \"data\": [15000, 1, 75]}\n".to_vec();
    bytes.extend_from_slice(b"\xff\xfe garbage\n");
    bytes.extend_from_slice(b"{\"code\": \"SWM\", \"data\": [720, 1, 80, 25, 40]}\n");
    fs::write(&input, bytes).unwrap();

    cli(&config)
        .arg("batch")
        .arg(&input)
        .assert()
        .failure()
        .stdout(format!("{}\n{}\n", RUN_LINE, SWIM_LINE))
        .stderr(predicate::str::contains("line 2: Invalid UTF-8"))
        .stderr(predicate::str::contains("1 package(s) failed"));
}

#[test]
fn test_batch_bad_line_reported_once() {
    let (dir, config) = setup_test_dir();
    let input = dir.path().join("packages.jsonl");
    fs::write(&input, "{\"code\": \"XYZ\", \"data\": [1, 2, 3]}\n").unwrap();

    let output = cli(&config)
        .arg("batch")
        .arg(&input)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run tracker");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Unknown workout type").count(), 1, "{}", stderr);
    assert!(!stderr.contains("WARN"), "{}", stderr);
}
