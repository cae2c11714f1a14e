//! # moodrs CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//!
//! ## Overview
//!
//! Verifies the top-level behavior of the `moodrs` binary: standard flags,
//! the startup banner, and a clean exit when there is no input at all.
//!

mod common;

use common::*;
use predicates::prelude::*;

#[test]
fn test_help_flag() {
    moodrs_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tell moodrs how you feel"));
}

#[test]
fn test_version_flag() {
    moodrs_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_argument_rejected() {
    moodrs_cmd().arg("--mood-file").assert().failure();
}

#[test]
fn test_banner_then_goodbye_on_empty_stdin() {
    moodrs_cmd()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Emoji Mood Responder — tell me how you're feeling! (type 'exit' to quit)\n\n",
        ))
        .stdout(predicate::str::ends_with(format!("{}\n{}\n", PROMPT, GOODBYE)));
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    moodrs_cmd()
        .arg("-vv")
        .write_stdin("happy\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Detected mood").not())
        .stderr(predicate::str::contains("Detected mood 'happy'"));
}
