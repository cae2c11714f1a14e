//! # moodrs Configuration
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! moodrs has exactly one piece of configuration: the mood table. It is kept
//! as a TOML document (`cli/assets/moods.toml`) embedded into the binary at
//! compile time, deserialized with `serde` + `toml`, and validated into a
//! `MoodTable` once at startup. There is no user configuration file.
//!
//! ## Format
//!
//! ```toml
//! [[moods]]
//! name = "happy"
//! keywords = ["happy", "glad"]
//! emoji = "😊"
//! response = "That's great to hear! Keep smiling!"
//! ```
//!
//! The `[[moods]]` array keeps its order, which is the match priority.
//!
use crate::core::error::{MoodError, Result};
use crate::mood::table::{MoodEntry, MoodTable};
use anyhow::Context;
use serde::Deserialize;
use tracing::{debug, info};

/// The built-in mood table, embedded at compile time.
const BUILTIN_MOODS: &str = include_str!("../../assets/moods.toml");

/// On-disk shape of the mood table document.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct MoodTableFile {
    moods: Vec<MoodEntry>,
}

/// # Load the Built-in Mood Table (`load_builtin_table`)
///
/// Parses and validates the embedded table. Called once from `main`.
pub fn load_builtin_table() -> Result<MoodTable> {
    let table = parse_table(BUILTIN_MOODS).context("Built-in mood table is invalid")?;
    info!("Loaded built-in mood table with {} moods", table.iter().len());
    Ok(table)
}

/// Parses a TOML mood table document and validates the result.
pub fn parse_table(content: &str) -> Result<MoodTable> {
    let file: MoodTableFile = toml::from_str(content).map_err(MoodError::from)?;
    debug!(
        "Parsed mood table: {:?}",
        file.moods.iter().map(|m| m.name.as_str()).collect::<Vec<_>>()
    );
    MoodTable::new(file.moods)
}
