//! # Mood Table
//!
//! File: cli/src/mood/table.rs
//!
//! ## Overview
//!
//! Defines `MoodEntry`, one named mood with its keywords, emoji and canned
//! response, and `MoodTable`, the ordered, validated list of entries the
//! matcher is built from. Table order is match priority: when several moods
//! are present in the same input, the entry listed first wins.
//!
//! A `MoodTable` can only be obtained through `MoodTable::new`, which enforces
//! the table invariants, and it exposes no way to mutate its entries afterwards.
//!
use crate::core::error::{MoodError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use tracing::debug;

/// A single mood: detection keywords plus what to answer when one is seen.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MoodEntry {
    /// Unique key of the mood (e.g. "happy").
    pub name: String,
    /// Words or phrases that indicate this mood, matched as whole words.
    pub keywords: Vec<String>,
    /// Emoji printed in front of the response.
    pub emoji: String,
    /// Canned response text.
    pub response: String,
}

/// Ordered, immutable collection of moods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodTable {
    entries: Vec<MoodEntry>,
}

impl MoodTable {
    /// # Build a Mood Table (`new`)
    ///
    /// Validates `entries` and wraps them, keeping their order.
    ///
    /// ## Errors
    ///
    /// Returns a `MoodError` if the list is empty, a name is blank or repeated
    /// (compared case-insensitively), an entry has no keywords, a keyword is
    /// blank, or an emoji is blank.
    pub fn new(entries: Vec<MoodEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(MoodError::Table("no moods defined".to_string()).into());
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            validate_entry(entry)?;
            if !seen.insert(entry.name.to_lowercase()) {
                return Err(MoodError::DuplicateMood {
                    name: entry.name.clone(),
                }
                .into());
            }
        }

        debug!("Mood table accepted with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Entries in priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, MoodEntry> {
        self.entries.iter()
    }
}

fn validate_entry(entry: &MoodEntry) -> Result<()> {
    if entry.name.trim().is_empty() {
        return Err(MoodError::Table("a mood has an empty name".to_string()).into());
    }
    if entry.keywords.is_empty() {
        return Err(MoodError::EmptyKeywords {
            name: entry.name.clone(),
        }
        .into());
    }
    if entry.keywords.iter().any(|kw| kw.trim().is_empty()) {
        return Err(MoodError::InvalidEntry {
            name: entry.name.clone(),
            reason: "keywords must not be blank".to_string(),
        }
        .into());
    }
    if entry.emoji.trim().is_empty() {
        return Err(MoodError::InvalidEntry {
            name: entry.name.clone(),
            reason: "emoji is empty".to_string(),
        }
        .into());
    }
    Ok(())
}
