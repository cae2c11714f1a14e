//! # moodrs Interaction Loop
//!
//! File: cli/src/session/mod.rs
//!
//! ## Overview
//!
//! Drives the line-based conversation: prompt, read, classify, respond, and
//! repeat until the user leaves.
//!
//! ## Architecture
//!
//! The loop is a two-state machine:
//!
//! ```text
//! Running --(line)--------------------------> Running   (reply printed)
//! Running --("exit"/"quit")-----------------> Exited(ExitCommand)
//! Running --(end-of-input / Ctrl-C)---------> Exited(EndOfInput / Interrupted)
//! ```
//!
//! Deciding what to say (`Reply::classify`) is kept apart from saying it
//! (`Session::respond`), so the decision logic is a pure function of the
//! matcher and the input line.
//!
//! - `input.rs`: where lines come from (`LineSource`, terminal and stream readers)
//!
use crate::core::error::Result;
use crate::mood::matcher::Matcher;
use crate::mood::table::MoodEntry;
use anyhow::Context;
use std::io::Write;
use tracing::{debug, info};

pub mod input;

use input::{LineSource, ReadEvent};

/// Printed once when the session starts.
pub const BANNER: &str =
    "Emoji Mood Responder — tell me how you're feeling! (type 'exit' to quit)";
/// Shown every time the session waits for input.
pub const PROMPT: &str = "How are you feeling? ";
/// Reply to an empty or whitespace-only line.
pub const EMPTY_INPUT_HINT: &str =
    "You didn't type anything — try describing how you feel (or 'exit').";
/// Reply when no mood keyword was found.
pub const NO_MOOD_HINT: &str = "I couldn't quite detect your mood from that. \
Could you use words like 'happy', 'sad', 'tired', 'angry', or 'excited'? \
Or describe how you feel in one word.";
/// Said when the user types an exit word.
pub const FAREWELL: &str = "Bye! Stay lovely. 😊";
/// Said when input ends or the user interrupts at the prompt.
pub const GOODBYE: &str = "Goodbye! Take care.";

const EXIT_WORDS: [&str; 2] = ["exit", "quit"];

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The user typed "exit" or "quit".
    ExitCommand,
    /// The input stream ended (Ctrl-D or closed pipe).
    EndOfInput,
    /// The user pressed Ctrl-C at the prompt.
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Exited(ExitReason),
}

/// What the session should answer to one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<'a> {
    Empty,
    Exit,
    Mood(&'a MoodEntry),
    Unrecognized,
}

impl<'a> Reply<'a> {
    /// # Classify a Line (`classify`)
    ///
    /// Trims `line`, then decides in this order: empty, exit word
    /// (case-insensitive), detected mood, nothing recognised.
    pub fn classify(matcher: &'a Matcher, line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Reply::Empty;
        }
        let lower = trimmed.to_lowercase();
        if EXIT_WORDS.contains(&lower.as_str()) {
            return Reply::Exit;
        }
        match matcher.detect(trimmed) {
            Some(entry) => Reply::Mood(entry),
            None => Reply::Unrecognized,
        }
    }
}

/// One conversation over a line source and an output writer.
pub struct Session<'m, S, W> {
    matcher: &'m Matcher,
    source: S,
    out: W,
    state: SessionState,
}

impl<'m, S: LineSource, W: Write> Session<'m, S, W> {
    pub fn new(matcher: &'m Matcher, source: S, out: W) -> Self {
        Self {
            matcher,
            source,
            out,
            state: SessionState::Running,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// # Run the Conversation (`run`)
    ///
    /// Prints the banner and steps until the session exits.
    ///
    /// ## Returns
    ///
    /// * `Result<ExitReason>`: how the session ended. Errors only come from
    ///   failing to read input or write output.
    pub fn run(&mut self) -> Result<ExitReason> {
        writeln!(self.out, "{}\n", BANNER).context("Failed to write banner")?;
        loop {
            if let SessionState::Exited(reason) = self.step()? {
                info!("Session ended: {:?}", reason);
                return Ok(reason);
            }
        }
    }

    /// Performs one read-classify-respond cycle and returns the new state.
    pub fn step(&mut self) -> Result<SessionState> {
        if let SessionState::Exited(_) = self.state() {
            return Ok(self.state());
        }

        let line = match self.source.read_line(PROMPT)? {
            ReadEvent::Line(line) => line,
            ReadEvent::EndOfInput => return self.leave(ExitReason::EndOfInput),
            ReadEvent::Interrupted => return self.leave(ExitReason::Interrupted),
        };

        let matcher = self.matcher;
        let reply = Reply::classify(matcher, &line);
        if let Reply::Mood(entry) = &reply {
            let candidates = matcher.matching_moods(line.trim());
            if candidates.len() > 1 {
                debug!(
                    "Mood '{}' chosen over lower-priority matches {:?}",
                    entry.name,
                    &candidates[1..]
                );
            }
        }
        self.respond(&reply)?;
        Ok(self.state)
    }

    fn respond(&mut self, reply: &Reply<'_>) -> Result<()> {
        let written = match reply {
            Reply::Empty => {
                debug!("Empty input, prompting again");
                writeln!(self.out, "{}\n", EMPTY_INPUT_HINT)
            }
            Reply::Exit => {
                self.state = SessionState::Exited(ExitReason::ExitCommand);
                writeln!(self.out, "{}", FAREWELL)
            }
            Reply::Mood(entry) => {
                debug!("Detected mood '{}'", entry.name);
                writeln!(self.out, "{}  {}\n", entry.emoji, entry.response)
            }
            Reply::Unrecognized => {
                debug!("No mood keyword found");
                writeln!(self.out, "{}\n", NO_MOOD_HINT)
            }
        };
        written.context("Failed to write reply")?;
        self.out.flush().context("Failed to flush output")?;
        Ok(())
    }

    fn leave(&mut self, reason: ExitReason) -> Result<SessionState> {
        self.state = SessionState::Exited(reason);
        writeln!(self.out, "\n{}", GOODBYE).context("Failed to write goodbye")?;
        self.out.flush().context("Failed to flush output")?;
        Ok(self.state)
    }
}
