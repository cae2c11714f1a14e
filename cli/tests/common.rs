//! # moodrs Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! is compiled as its own crate and runs the built `moodrs` binary with piped
//! standard input, so the conversation goes through the plain stream reader.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;

pub const PROMPT: &str = "How are you feeling? ";
pub const FAREWELL: &str = "Bye! Stay lovely. 😊";
pub const GOODBYE: &str = "Goodbye! Take care.";
pub const EMPTY_INPUT_HINT: &str =
    "You didn't type anything — try describing how you feel (or 'exit').";
pub const NO_MOOD_HINT: &str = "I couldn't quite detect your mood from that.";

/// # Get moodrs Command (`moodrs_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `moodrs` binary with
/// `RUST_LOG` cleared so log output cannot leak into assertions.
///
/// ## Panics
/// Panics if the `moodrs` binary cannot be found via `Command::cargo_bin`.
pub fn moodrs_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodrs").expect("Failed to find moodrs binary for testing");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Runs a whole conversation from `input` and returns its stdout.
pub fn converse(input: &str) -> String {
    let output = moodrs_cmd().write_stdin(input).assert().success();
    String::from_utf8(output.get_output().stdout.clone()).expect("stdout is UTF-8")
}
