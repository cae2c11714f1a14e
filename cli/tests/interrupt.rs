//! # moodrs Interrupt Integration Tests
//!
//! File: cli/tests/interrupt.rs
//!
//! ## Overview
//!
//! Sends SIGINT to a running `moodrs` whose stdin is a pipe that stays open,
//! as with `cat | moodrs`, and checks that the session says goodbye and
//! exits successfully instead of being killed.
//!
#![cfg(unix)]

mod common;

use common::*;
use std::io::{BufRead, BufReader, Read, Write};
use std::process::{Command as StdCommand, Stdio};

#[test]
fn test_ctrl_c_on_piped_stdin_says_goodbye() {
    let mut child = StdCommand::new(assert_cmd::cargo::cargo_bin("moodrs"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to start moodrs");

    let mut stdin = child.stdin.take().expect("stdin is piped");
    let mut stdout = BufReader::new(child.stdout.take().expect("stdout is piped"));

    // Wait for a reply so the session is known to be running.
    stdin.write_all(b"happy\n").unwrap();
    stdin.flush().unwrap();
    let mut seen = String::new();
    while !seen.contains("Keep smiling!") {
        let mut line = String::new();
        assert!(stdout.read_line(&mut line).unwrap() > 0, "moodrs exited early: {seen:?}");
        seen.push_str(&line);
    }

    let status = StdCommand::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .expect("Failed to run kill");
    assert!(status.success());

    let mut rest = String::new();
    stdout.read_to_string(&mut rest).unwrap();
    let exit = child.wait().unwrap();
    drop(stdin);

    assert!(exit.success(), "exit status: {exit:?}");
    assert!(rest.ends_with(&format!("{}\n{}\n", PROMPT, GOODBYE)), "output: {rest:?}");
}
