//! # WaterWise Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Shared infrastructure used by the command modules. Currently this is the
//! error layer only; command-specific configuration lives next to the command
//! that uses it (see `commands::serve::config`).
//!
//! ```rust,ignore
//! use crate::core::error::{Result, WaterwiseError};
//! ```
//!
pub mod error;
