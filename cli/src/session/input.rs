//! # Session Input Sources
//!
//! File: cli/src/session/input.rs
//!
//! ## Overview
//!
//! The interaction loop reads lines through the `LineSource` trait, so the
//! same loop works against an interactive terminal, piped standard input, or
//! a scripted source in tests. Every read ends in one of three events:
//!
//! - `ReadEvent::Line`: the user entered a line (trailing newline removed)
//! - `ReadEvent::EndOfInput`: the input stream is exhausted (Ctrl-D, closed pipe)
//! - `ReadEvent::Interrupted`: the user pressed Ctrl-C at the prompt
//!
//! End-of-input and interrupt are ordinary events, not errors. Only failures
//! outside that protocol (an unreadable stream, a broken terminal) are errors.
//!
//! ## Implementations
//!
//! - `TerminalSource`: `rustyline` editor, used when stdin is a terminal.
//!   Keeps an in-memory history for the running session only.
//! - `StreamSource`: any `BufRead`, used when stdin is piped. Writes the
//!   prompt itself and flushes before waiting. Lines are read on a helper
//!   thread so an `Interrupter` (wired to Ctrl-C) can end the wait. Invalid
//!   UTF-8 is replaced rather than treated as an error.
//!
use crate::core::error::{MoodError, Result};
use anyhow::Context;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use tracing::{debug, warn};

/// Outcome of waiting for one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadEvent {
    Line(String),
    EndOfInput,
    Interrupted,
}

/// Something the interaction loop can read lines from.
pub trait LineSource {
    /// Shows `prompt` and blocks until a line, end-of-input or an interrupt.
    fn read_line(&mut self, prompt: &str) -> Result<ReadEvent>;
}

/// Interactive terminal input backed by `rustyline`.
pub struct TerminalSource {
    editor: DefaultEditor,
}

impl TerminalSource {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()
            .map_err(MoodError::from)
            .context("Failed to create line editor")?;
        Ok(Self { editor })
    }
}

impl LineSource for TerminalSource {
    fn read_line(&mut self, prompt: &str) -> Result<ReadEvent> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        warn!("Could not record history entry: {}", e);
                    }
                }
                Ok(ReadEvent::Line(line))
            }
            Err(ReadlineError::Interrupted) => {
                debug!("Ctrl-C at prompt");
                Ok(ReadEvent::Interrupted)
            }
            Err(ReadlineError::Eof) => {
                debug!("Ctrl-D at prompt");
                Ok(ReadEvent::EndOfInput)
            }
            Err(e) => Err(MoodError::from(e).into()),
        }
    }
}

/// Line input from any buffered reader, with the prompt written to `out`.
///
/// A background thread reads lines and forwards them as events. The same
/// channel carries interrupts from an `Interrupter`, so Ctrl-C reaches the
/// session even while the reader thread is blocked on input.
pub struct StreamSource<W> {
    events: Receiver<io::Result<ReadEvent>>,
    sender: Sender<io::Result<ReadEvent>>,
    out: W,
}

impl<W: Write> StreamSource<W> {
    pub fn spawn<R: BufRead + Send + 'static>(reader: R, out: W) -> Result<Self> {
        let (sender, events) = mpsc::channel();
        let lines = sender.clone();
        thread::Builder::new()
            .name("stdin-reader".to_string())
            .spawn(move || forward_lines(reader, lines))
            .context("Failed to start the input reader thread")?;
        Ok(Self {
            events,
            sender,
            out,
        })
    }

    /// Handle that turns a signal into `ReadEvent::Interrupted`.
    pub fn interrupter(&self) -> Interrupter {
        Interrupter {
            sender: self.sender.clone(),
        }
    }
}

impl<W: Write> LineSource for StreamSource<W> {
    fn read_line(&mut self, prompt: &str) -> Result<ReadEvent> {
        write!(self.out, "{}", prompt).context("Failed to write prompt")?;
        self.out.flush().context("Failed to flush prompt")?;

        match self.events.recv() {
            Ok(event) => event.context("Failed to read a line from standard input"),
            // Unreachable while `self.sender` is alive.
            Err(_) => Ok(ReadEvent::EndOfInput),
        }
    }
}

/// Delivers an interrupt to a waiting `StreamSource`.
#[derive(Clone)]
pub struct Interrupter {
    sender: Sender<io::Result<ReadEvent>>,
}

impl Interrupter {
    pub fn interrupt(&self) {
        debug!("Interrupt received while reading stream input");
        // The session may already have ended and dropped the receiver.
        let _ = self.sender.send(Ok(ReadEvent::Interrupted));
    }
}

fn forward_lines<R: BufRead>(mut reader: R, lines: Sender<io::Result<ReadEvent>>) {
    loop {
        let mut buf = Vec::new();
        let event = match reader.read_until(b'\n', &mut buf) {
            Ok(0) => {
                debug!("Input stream exhausted");
                Ok(ReadEvent::EndOfInput)
            }
            Ok(_) => Ok(ReadEvent::Line(decode_line(&buf))),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => Err(e),
        };
        let more = matches!(event, Ok(ReadEvent::Line(_)));
        if lines.send(event).is_err() || !more {
            return;
        }
    }
}

/// Strips the line ending and replaces invalid UTF-8 with U+FFFD.
fn decode_line(raw: &[u8]) -> String {
    let text = String::from_utf8_lossy(raw);
    if let Cow::Owned(_) = text {
        warn!("Input line was not valid UTF-8, replacing invalid bytes");
    }
    text.trim_end_matches(['\n', '\r']).to_string()
}
