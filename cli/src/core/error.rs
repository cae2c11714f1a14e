//! # moodrs Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout moodrs. Very little can
//! go wrong in a mood conversation: empty input and end-of-input are handled by
//! the session itself and never become errors. What remains are startup
//! failures (a malformed mood table, a pattern that will not compile) and
//! terminal failures outside the conversation protocol.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `MoodError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! if entry.keywords.is_empty() {
//!     return Err(MoodError::EmptyKeywords { name: entry.name.clone() })?;
//! }
//!
//! let line = reader
//!     .read_line(&mut buf)
//!     .context("Failed to read a line from standard input")?;
//! ```
//!
use thiserror::Error;

/// Custom error type for moodrs.
#[derive(Error, Debug)]
pub enum MoodError {
    #[error("Mood table error: {0}")]
    Table(String),

    #[error("Failed to parse the mood table: {source}")]
    TableParse {
        #[from]
        source: toml::de::Error,
    },

    #[error("Mood '{name}' is listed more than once.")]
    DuplicateMood { name: String },

    #[error("Mood '{name}' has no keywords.")]
    EmptyKeywords { name: String },

    #[error("Mood '{name}' is invalid: {reason}")]
    InvalidEntry { name: String, reason: String },

    #[error("Keyword pattern failed to compile: {source}")]
    Pattern {
        #[from]
        source: regex::Error,
    },

    #[error("Terminal input failed: {source}")]
    Terminal {
        #[from]
        source: rustyline::error::ReadlineError,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let table_err = MoodError::Table("no moods defined".to_string());
        assert_eq!(table_err.to_string(), "Mood table error: no moods defined");

        let duplicate = MoodError::DuplicateMood {
            name: "happy".into(),
        };
        assert_eq!(duplicate.to_string(), "Mood 'happy' is listed more than once.");

        let empty = MoodError::EmptyKeywords { name: "sad".into() };
        assert_eq!(empty.to_string(), "Mood 'sad' has no keywords.");

        let invalid = MoodError::InvalidEntry {
            name: "tired".into(),
            reason: "emoji is empty".into(),
        };
        assert_eq!(invalid.to_string(), "Mood 'tired' is invalid: emoji is empty");
    }

    #[test]
    fn test_regex_error_converts() {
        let err: MoodError = regex::Regex::new("(").unwrap_err().into();
        assert!(matches!(err, MoodError::Pattern { .. }));
        assert!(err.to_string().starts_with("Keyword pattern failed to compile"));
    }

    #[test]
    fn test_readline_error_keeps_source() {
        use std::error::Error as _;

        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "tty went away");
        let err = MoodError::from(rustyline::error::ReadlineError::Io(io_err));
        assert!(matches!(err, MoodError::Terminal { .. }));
        assert_eq!(err.to_string(), "Terminal input failed: tty went away");
        assert!(err.source().is_some());
    }
}
