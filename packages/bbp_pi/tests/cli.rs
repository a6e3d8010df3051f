//! Integration tests that run the `bbp_pi` binary and inspect its output.

#![cfg(not(miri))]

use std::f64::consts::PI;
use std::process::{Command, Output};

fn run_tool(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bbp_pi"))
        .args(args)
        .output()
        .expect("failed to launch bbp_pi binary")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(ToString::to_string)
        .collect()
}

fn assert_whole_number(line: &str) {
    assert!(
        !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit()),
        "'{line}' is not a non-negative whole number"
    );
}

#[test]
fn default_run_prints_pi_and_elapsed_seconds() {
    let output = run_tool(&[]);

    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2, "unexpected output: {lines:?}");

    let approximation: f64 = lines[0].parse().unwrap();
    assert!((approximation - PI).abs() <= f64::EPSILON);
    assert!(lines[0].starts_with("3.14159265358979"));

    assert_whole_number(&lines[1]);
}

#[test]
fn single_term_prints_first_term() {
    let output = run_tool(&["--terms", "1"]);

    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2, "unexpected output: {lines:?}");
    assert_eq!(lines[0], "3.1333333333333333");
    assert_whole_number(&lines[1]);
}

#[test]
fn zero_terms_is_rejected() {
    let output = run_tool(&["--terms", "0"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid term count"), "stderr: {stderr}");
}

#[test]
fn non_integer_terms_are_rejected() {
    for value in ["1.5", "abc", "1e5"] {
        let output = run_tool(&["--terms", value]);

        assert!(!output.status.success(), "'{value}' was accepted");

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("invalid term count"), "stderr: {stderr}");
    }
}

#[test]
fn verbose_diagnostics_go_to_stderr() {
    let output = run_tool(&["--terms", "20", "--verbose"]);

    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2, "unexpected output: {lines:?}");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("summation completed"), "stderr: {stderr}");
}

#[test]
fn quiet_by_default() {
    let output = run_tool(&["--terms", "20"]);

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn help_describes_terms_option() {
    let output = run_tool(&["--help"]);

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--terms"), "stdout: {stdout}");
}
