//! Integration tests for the numeral CLI
//!
//! These drive the compiled binary the way a shell user would: arguments,
//! piped stdin, JSON output and exit codes.

use assert_cmd::cargo;
use predicates::prelude::*;

/// Helper function to create a numeral command
fn numeral() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("numeral"))
}

// =============================================================================
// Basic Tests
// =============================================================================

#[test]
fn test_version() {
    numeral()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("numeral"));
}

#[test]
fn test_help() {
    numeral()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Convert between Arabic and Roman numerals"));
}

// =============================================================================
// Argument Input
// =============================================================================

#[test]
fn test_arabic_argument() {
    numeral().arg("454").assert().success().stdout("454\tCDLIV\n");
}

#[test]
fn test_roman_argument() {
    numeral().arg("MMMCMXCIX").assert().success().stdout("3999\tMMMCMXCIX\n");
}

#[test]
fn test_padded_argument() {
    numeral().args(["--to", "roman", " 1 "]).assert().success().stdout("I\n");
}

#[test]
fn test_to_arabic() {
    numeral().args(["-t", "arabic", "CCXLIX"]).assert().success().stdout("249\n");
}

#[test]
fn test_several_arguments() {
    numeral()
        .args(["--to", "roman", "1", "4", "9"])
        .assert()
        .success()
        .stdout("I\nIV\nIX\n");
}

#[test]
fn test_negative_arabic_argument() {
    numeral().args(["--to", "arabic", "--", "-1"]).assert().success().stdout("-1\n");
}

#[test]
fn test_invalid_target() {
    numeral().args(["--to", "hex", "1"]).assert().failure();
}

// =============================================================================
// Stdin Input
// =============================================================================

#[test]
fn test_stdin_lines() {
    numeral()
        .args(["--to", "arabic"])
        .write_stdin("XCIX\n  XIV  \n7\n")
        .assert()
        .success()
        .stdout("99\n14\n7\n");
}

// =============================================================================
// Failures and Exit Codes
// =============================================================================

#[test]
fn test_malformed_exit_code() {
    numeral()
        .arg("IIII")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("too many 'I's in a row"));
}

#[test]
fn test_out_of_bounds_exit_code() {
    numeral()
        .args(["--to", "roman", "4000"])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("between 1 and 3999"));
}

#[test]
fn test_out_of_bounds_fine_for_arabic_target() {
    numeral().args(["--to", "arabic", "124121"]).assert().success().stdout("124121\n");
}

#[test]
fn test_malformed_outranks_out_of_bounds() {
    numeral().args(["0", "garbage", "X"]).assert().code(2).stdout("0\n10\tX\n");
}

#[test]
fn test_both_prints_arabic_before_bounds_error() {
    numeral()
        .arg("4000")
        .assert()
        .code(3)
        .stdout("4000\n")
        .stderr(predicate::str::contains("between 1 and 3999"));
}

#[test]
fn test_blank_stdin_line_is_malformed() {
    numeral()
        .write_stdin("   \n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("value must not be empty"));
}

// =============================================================================
// JSON Output
// =============================================================================

#[test]
fn test_json_success() {
    let output = numeral().args(["--json", "XCIX"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["arabic"], 99);
    assert_eq!(value["roman"], "XCIX");
    assert_eq!(value["source"], "roman");
}

#[test]
fn test_json_one_object_per_input() {
    let output = numeral().args(["--json", "1", "iv"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<serde_json::Value> =
        stdout.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["roman"], "I");
    assert_eq!(lines[1]["error"]["code"], "MALFORMED_NUMBER");
}
