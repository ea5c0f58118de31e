//! # WaterWise Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the WaterWise CLI. Each
//! command defines its own arguments structure and an async handler that
//! `main.rs` calls after parsing.
//!
//! ## Commands
//!
//! - `chat`: interactive session on stdin/stdout
//! - `ask`: one message in, one reply out
//! - `serve`: HTTP API for the web frontend
//!
//! All three are thin layers over `crate::bot`, which does the actual routing.
//!

/// Single-message command (`waterwise ask <MESSAGE>`).
pub mod ask;
/// Interactive chat loop (`waterwise chat`).
pub mod chat;
/// HTTP service (`waterwise serve`). Includes configuration and server logic.
pub mod serve;
