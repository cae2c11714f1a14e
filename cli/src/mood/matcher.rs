//! # Mood Matcher
//!
//! File: cli/src/mood/matcher.rs
//!
//! ## Overview
//!
//! Finds the first mood whose keywords occur in a piece of text as whole
//! words, ignoring case. "Sad!" matches `sad`, "sadly" does not.
//!
//! ## Architecture
//!
//! One regular expression is compiled per mood when the `Matcher` is built:
//!
//! ```text
//! \b(?:happy|joy|glad|...)\b
//! ```
//!
//! Keywords are escaped, so they match literally (multi-word keywords such as
//! "worn out" included). `\b` follows Unicode word rules and matching is
//! Unicode case-insensitive. The compiled patterns are reused for every input.
//!
//! Detection walks the moods in table order and stops at the first hit, so
//! the earliest-listed mood wins when several are present.
//!
use crate::core::error::{MoodError, Result};
use crate::mood::table::{MoodEntry, MoodTable};
use regex::{Regex, RegexBuilder};
use tracing::trace;

/// A mood paired with its compiled keyword pattern.
#[derive(Debug)]
struct CompiledMood {
    entry: MoodEntry,
    pattern: Regex,
}

/// Whole-word, case-insensitive mood detector built from a `MoodTable`.
#[derive(Debug)]
pub struct Matcher {
    moods: Vec<CompiledMood>,
}

impl Matcher {
    /// # Build a Matcher (`new`)
    ///
    /// Compiles one pattern per mood in `table`, keeping table order.
    ///
    /// ## Errors
    ///
    /// Returns `MoodError::Pattern` if a pattern fails to compile (for example
    /// when a keyword list makes it exceed the regex size limit).
    pub fn new(table: &MoodTable) -> Result<Self> {
        let moods = table
            .iter()
            .map(|entry| {
                let pattern = keyword_pattern(&entry.keywords)?;
                trace!("Compiled pattern for mood '{}': {}", entry.name, pattern);
                Ok(CompiledMood {
                    entry: entry.clone(),
                    pattern,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { moods })
    }

    /// Returns the highest-priority mood with a keyword in `text`, if any.
    pub fn detect(&self, text: &str) -> Option<&MoodEntry> {
        self.moods
            .iter()
            .find(|mood| mood.pattern.is_match(text))
            .map(|mood| &mood.entry)
    }

    /// Names of every mood with a keyword in `text`, in priority order.
    ///
    /// Only the first one is ever answered; the rest are useful for logging.
    pub fn matching_moods(&self, text: &str) -> Vec<&str> {
        self.moods
            .iter()
            .filter(|mood| mood.pattern.is_match(text))
            .map(|mood| mood.entry.name.as_str())
            .collect()
    }
}

fn keyword_pattern(keywords: &[String]) -> Result<Regex> {
    let alternatives = keywords
        .iter()
        .map(|kw| regex::escape(kw))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = RegexBuilder::new(&format!(r"\b(?:{})\b", alternatives))
        .case_insensitive(true)
        .build()
        .map_err(MoodError::from)?;
    Ok(pattern)
}
