//! Integration tests running the actual crate binary: the full E2E path including the progress log.

use std::process::Command;

use crate::support::{read_answer, read_tokens};

#[test]
fn writes_into_the_working_directory_and_prints_the_summary() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_det-fixture-gen"))
        .current_dir(dir.path())
        .env("FIXTURE_SEED", "7")
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to execute binary");

    assert!(
        output.status.success(),
        "binary exited with non-zero status.\nstderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).expect("binary output was not valid UTF-8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[1], "  Generating Matrix E2E Tests (Square Matrices Only)");
    assert_eq!(lines[3], " 001: 2x2 (classic), det=-2");
    assert_eq!(lines[9], " 007: 4x4 diagonal, det=4");
    assert!(lines.contains(&"Generated 36 test pairs!"));

    assert_eq!(read_tokens(dir.path(), 1), vec![2, 1, 2, 3, 4]);
    assert_eq!(read_answer(dir.path(), 36), "1\n");
}

#[test]
fn output_directory_argument_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("nested").join("fixtures");

    let output = Command::new(env!("CARGO_BIN_EXE_det-fixture-gen"))
        .arg(&target)
        .env("FIXTURE_SEED", "7")
        .output()
        .expect("failed to execute binary");

    assert!(output.status.success());
    assert_eq!(read_answer(&target, 1), "-2\n");
}

#[test]
fn invalid_seed_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_det-fixture-gen"))
        .current_dir(dir.path())
        .env("FIXTURE_SEED", "not-a-number")
        .output()
        .expect("failed to execute binary");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("FIXTURE_SEED"));
    assert!(!dir.path().join("001.dat").exists());
}
