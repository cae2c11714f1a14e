//! # moodrs Mood Detection
//!
//! File: cli/src/mood/mod.rs
//!
//! ## Overview
//!
//! Everything needed to turn a line of text into a mood:
//! - `table`: `MoodEntry` and the ordered, validated `MoodTable`
//! - `matcher`: `Matcher`, whole-word case-insensitive detection over a table
//!
//! ## Usage
//!
//! ```rust
//! let table = config::load_builtin_table()?;
//! let matcher = Matcher::new(&table)?;
//! if let Some(mood) = matcher.detect("I feel great today") {
//!     println!("{}  {}", mood.emoji, mood.response);
//! }
//! ```
//!
pub mod matcher;
pub mod table;
