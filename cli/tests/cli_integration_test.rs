use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use dialsift_core::synth;

fn fixture_path(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR"));
    fs::create_dir_all(&dir).ok();
    dir.join(name)
}

fn write_fixture(name: &str, samples: &[i8]) -> PathBuf {
    let path = fixture_path(name);
    fs::write(&path, synth::to_bytes(samples)).expect("failed to write fixture");
    path
}

fn run_dialsift(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dialsift"))
        .args(args)
        .output()
        .expect("failed to execute dialsift")
}

fn number_sequence(keys: &str) -> Vec<i8> {
    let mut samples = synth::dial_string(keys, 100, 50).unwrap();
    samples.extend_from_slice(&synth::silence(11_000));
    samples
}

#[test]
fn test_extracts_number_from_file() {
    let path = write_fixture("happy_path.s8", &number_sequence("2025550123"));

    let output = run_dialsift(&["-2", path.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec!["2025550123.", "", "2025550123"],
        "unexpected report: {stdout}"
    );
}

#[test]
fn test_leading_one_stripped_in_output() {
    let path = write_fixture("leading_one.s8", &number_sequence("12025550123"));

    let output = run_dialsift(&["-2", path.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("12025550123."), "symbol stream missing: {stdout}");
    assert!(stdout.lines().any(|l| l == "2025550123"));
}

#[test]
fn test_reads_stdin_when_no_path_given() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_dialsift"))
        .arg("-2")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn dialsift");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(&synth::to_bytes(&number_sequence("3035550199")))
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().any(|l| l == "3035550199"), "got: {stdout}");
}

#[test]
fn test_unopenable_input_fails_nonzero() {
    let output = run_dialsift(&["/no/such/file.s8"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("cannot open"),
        "expected a diagnostic line, got: {stderr}"
    );
}

#[test]
fn test_stderr_flag_separates_diagnostics_from_results() {
    let path = write_fixture("separated.s8", &number_sequence("2025550123"));

    let output = run_dialsift(&["-v", "-2", path.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    // stdout carries exactly the report; diagnostics land on stderr.
    assert_eq!(stdout.lines().count(), 3, "stdout polluted: {stdout}");
    assert!(stderr.contains("frame"), "expected per-frame logs: {stderr}");
}

#[test]
fn test_rejecting_input_still_exits_zero() {
    let path = write_fixture("rejected.s8", &number_sequence("0005551234"));

    let output = run_dialsift(&["-2", path.to_str().unwrap()]);
    assert!(output.status.success(), "empty-result completion is success");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["0005551234.", ""]);
}

#[test]
fn test_help_exits_zero() {
    let output = run_dialsift(&["-h"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"));
}
