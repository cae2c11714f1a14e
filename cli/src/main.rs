//! # moodrs Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the moodrs CLI application.
//! It handles:
//! - Command-line argument parsing using Clap (`--help`, `--version`, `-v`)
//! - Setting up the logging system based on verbosity flags
//! - Loading the mood table and compiling the matcher once
//! - Choosing an input source and running the conversation
//!
//! ## Examples
//!
//! ```bash
//! # Start a conversation
//! moodrs
//!
//! # Same, with debug logging on stderr
//! moodrs -vv
//!
//! # Non-interactive use
//! printf 'I feel great today\nexit\n' | moodrs
//! ```
//!
//! Processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Build the mood table and matcher
//! 4. Run the session on the terminal editor, or on plain stdin when piped
//!    (with a Ctrl-C handler that ends the session like end-of-input does)
//! 5. Format and display any errors that occur
//!
use anyhow::Context;
use clap::Parser;
use std::io::{self, BufReader, IsTerminal};
use tracing_subscriber::{fmt, EnvFilter};

mod core; // Core infrastructure (errors, mood table config)
mod mood; // Mood table and matcher
mod session; // Interaction loop and input sources

use crate::core::config;
use crate::core::error::Result;
use crate::mood::matcher::Matcher;
use crate::session::input::{StreamSource, TerminalSource};
use crate::session::Session;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "moodrs",
    about = "😊 moodrs: Emoji Mood Responder",
    long_about = "Tell moodrs how you feel and it answers with an emoji and a few kind words.\n\
                  Type 'exit' or 'quit' (or press Ctrl-D) to leave.",
    version
)]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run() {
        tracing::error!("moodrs failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run() -> Result<()> {
    let table = config::load_builtin_table()?;
    let matcher = Matcher::new(&table)?;

    let reason = if io::stdin().is_terminal() {
        tracing::debug!("stdin is a terminal, using line editor");
        Session::new(&matcher, TerminalSource::new()?, io::stdout()).run()?
    } else {
        tracing::debug!("stdin is not a terminal, reading lines from stream");
        let source = StreamSource::spawn(BufReader::new(io::stdin()), io::stdout())?;
        let interrupter = source.interrupter();
        ctrlc::set_handler(move || interrupter.interrupt())
            .context("Failed to set Ctrl-C handler")?;
        Session::new(&matcher, source, io::stdout()).run()?
    };
    tracing::debug!("Exiting after {:?}", reason);
    Ok(())
}
