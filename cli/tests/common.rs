//! # WaterWise CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`chat.rs`, `ask.rs`, etc.).
//! Each `.rs` file in `cli/tests/` is compiled as its own test crate and runs
//! the compiled `waterwise` binary.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;

/// Fixed reply for messages that match no topic.
pub const DEFAULT_REPLY: &str = "I'm a water conservation and sanitation bot. I can help you \
with questions about saving water, keeping water clean, and proper sanitation practices. \
Could you ask me something specific about water conservation, clean water, or sanitation?";

/// # Get WaterWise Command (`waterwise_cmd`)
///
/// Creates an `assert_cmd::Command` for the `waterwise` binary built for this
/// test run. Logging is pinned to `warn` so stray `RUST_LOG` settings in the
/// environment do not leak into assertions.
///
/// ## Panics
/// Panics if the `waterwise` binary cannot be found via `Command::cargo_bin`.
pub fn waterwise_cmd() -> Command {
    let mut cmd =
        Command::cargo_bin("waterwise").expect("Failed to find waterwise binary for testing");
    cmd.env("RUST_LOG", "warn");
    cmd
}
