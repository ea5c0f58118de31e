//! # WaterWise Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! Error types for the outer layers of WaterWise (configuration, terminal I/O,
//! the HTTP server). The routing core in `bot` has no error path and never
//! returns these.
//!
//! ## Architecture
//!
//! The error system consists of two parts:
//! - `WaterwiseError`: a `thiserror` enum for the specific failures we name
//! - `Result<T>`: an alias for `anyhow::Result<T>` so callers can attach context
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Return a specific error type
//! if !path.is_file() {
//!     return Err(WaterwiseError::Config(format!("Config file not found: {}", path.display())))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read config file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the WaterWise application.
#[derive(Error, Debug)]
pub enum WaterwiseError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid CORS origin '{origin}'.")]
    InvalidOrigin { origin: String },

    #[error("Terminal I/O failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
