//! # moodrs Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components:
//! - `config`: Loading and validating the built-in mood table
//! - `error`: Error types and the application-wide `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading the mood table
//! use crate::core::error::{MoodError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
