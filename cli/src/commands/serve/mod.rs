//! # WaterWise HTTP Service
//!
//! File: cli/src/commands/serve/mod.rs
//!
//! ## Overview
//!
//! `waterwise serve` exposes the bot over HTTP for the web frontend. It offers:
//! - `POST /chat` for questions, `GET /chat` as a usage hint, `GET /` as a health check
//! - CORS for the browser frontend (defaults to `http://localhost:3000`)
//! - Host/port binding from flags, `WATERWISE_HOST` / `WATERWISE_PORT`, or `waterwise.toml`
//! - Graceful shutdown on Ctrl+C / SIGTERM
//!
//! ## Architecture
//!
//! - `config.rs`: Configuration loading and merging
//! - `server_logic.rs`: Axum router, handlers and server loop
//!
//! ## Examples
//!
//! ```bash
//! # Listen on 0.0.0.0:8000 with the default CORS origin
//! waterwise serve
//!
//! # Local only, custom port, allow a deployed frontend
//! waterwise serve --host 127.0.0.1 --port 9000 --allow-origin https://waterwise.example
//!
//! # No CORS headers at all
//! waterwise serve --no-cors
//! ```
//!
use crate::core::error::Result;
use tracing::info;

pub use config::ServeArgs;

/// Handles configuration loading and merging for the HTTP service.
pub mod config;

/// Contains the Axum-based HTTP server implementation.
pub mod server_logic;

/// # Handle Serve Command (`handle_serve`)
///
/// Loads and merges the server configuration, then runs the server until it
/// is asked to shut down.
pub async fn handle_serve(args: ServeArgs) -> Result<()> {
    info!("Handling serve command with args: {:?}", args);

    let config = config::load_and_merge_config(args)?;
    info!("Effective server config: {:?}", config);

    server_logic::run_server(config).await?;

    Ok(())
}
