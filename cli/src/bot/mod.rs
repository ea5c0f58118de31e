//! # WaterWise Routing Core
//!
//! File: cli/src/bot/mod.rs
//!
//! ## Overview
//!
//! This module holds everything that decides what the bot says. It is a pure,
//! synchronous layer: no I/O, no shared mutable state. The `chat`, `ask` and
//! `serve` commands all call into it with a single string and get a single
//! string back.
//!
//! ## Architecture
//!
//! - `router`: classifies a message into a [`Topic`] using ordered trigger sets
//! - `responders`: one keyword table per topic, plus the default reply
//! - `dispatcher`: glues the two together (`classify` then `respond`)
//! - `message`: `Message` / `Conversation` types for the append-only chat log
//!
//! Control flow is always a single hop:
//!
//! ```text
//! message ──► router::classify ──► responders::respond(topic) ──► reply
//! ```
//!
//! ## Examples
//!
//! ```rust,ignore
//! use crate::bot::{dispatch, Conversation};
//!
//! let reply = dispatch("How can I save water in my garden?");
//! assert_eq!(reply, "Use drip irrigation and water during cooler hours.");
//!
//! let mut session = Conversation::new();
//! let reply = session.exchange("xyz123");
//! assert_eq!(session.len(), 2);
//! ```
//!

/// Glues the router and the responders into one call.
pub mod dispatcher;
/// Chat log types (`Role`, `Message`, `Conversation`).
pub mod message;
/// Per-topic keyword tables and the responder functions.
pub mod responders;
/// Topic classification.
pub mod router;

pub use dispatcher::dispatch;
pub use message::Conversation;
pub use router::classify;
