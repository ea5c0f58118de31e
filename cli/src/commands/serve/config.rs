//! # WaterWise HTTP Server Configuration
//!
//! File: cli/src/commands/serve/config.rs
//!
//! ## Overview
//!
//! This module handles configuration loading, merging, and validation for
//! `waterwise serve`. It combines settings from:
//! 1. Command-line arguments and `WATERWISE_*` environment variables (highest priority)
//! 2. A TOML configuration file, `--config <PATH>` or `./waterwise.toml` (if present)
//! 3. Default values (lowest priority)
//!
//! ## Architecture
//!
//! The configuration system follows these steps:
//! 1. Parse command-line arguments (clap also reads `WATERWISE_HOST` / `WATERWISE_PORT`)
//! 2. Load configuration from file (if present)
//! 3. Merge settings (CLI values override file settings when they differ from the defaults)
//! 4. Validate the result (CORS origins)
//! 5. Create a unified `ServerConfig` structure
//!
//! ## Examples
//!
//! Configuration file format:
//!
//! ```toml
//! # Server configuration
//! host = "127.0.0.1"
//! port = 9000
//! enable_cors = true
//! cors_origins = ["http://localhost:3000", "https://waterwise.example"]
//! ```
//!
//! Loading and merging configuration:
//!
//! ```rust,ignore
//! let args = ServeArgs::parse();
//! let config = load_and_merge_config(args)?;
//! println!("Listening on: {}:{}", config.host, config.port);
//! ```
//!
use crate::core::error::{Result, WaterwiseError};
use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Name of the configuration file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "waterwise.toml";

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8000;
/// Origin of the React frontend during development.
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// # Server Command Arguments (`ServeArgs`)
///
/// Defines the command-line arguments accepted by `waterwise serve`. These
/// override settings from a configuration file or the defaults.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Path to a TOML configuration file. When omitted, `waterwise.toml` in the
    /// current directory is used if it exists.
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Network IP address to bind to. `0.0.0.0` (the default) listens on all
    /// interfaces; `127.0.0.1` only accepts local connections.
    #[arg(long, env = "WATERWISE_HOST", default_value_t = DEFAULT_HOST)]
    pub host: IpAddr,

    /// Network port to listen on.
    #[arg(long, short, env = "WATERWISE_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Disables Cross-Origin Resource Sharing (CORS) headers.
    #[arg(long)]
    pub no_cors: bool,

    /// Origin allowed to call the API from a browser. Repeat the flag to allow
    /// several origins; `*` allows any origin (without credentials).
    /// Replaces the configured origin list when given.
    #[arg(long = "allow-origin", value_name = "ORIGIN")]
    pub allow_origins: Vec<String>,
}

/// # Effective Server Configuration (`ServerConfig`)
///
/// The final, consolidated settings after merging defaults, the configuration
/// file and command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// The network IP address the server binds to.
    pub host: IpAddr,

    /// The network port the server listens on.
    pub port: u16,

    /// Whether CORS headers are sent at all.
    pub enable_cors: bool,

    /// Origins allowed by the CORS layer.
    pub cors_origins: Vec<String>,
}

/// # Configuration from File (`FileConfig`)
///
/// Helper struct used only for deserializing the TOML file. Every field is
/// optional so users only write what they want to change.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    host: Option<String>, // Read as string so a bad value can fall back with a warning
    port: Option<u16>,
    enable_cors: Option<bool>,
    cors_origins: Option<Vec<String>>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            enable_cors: true,
            cors_origins: vec![DEFAULT_CORS_ORIGIN.to_string()],
        }
    }
}

/// # Load and Merge Server Configuration (`load_and_merge_config`)
///
/// Determines the final server configuration.
///
/// ## Process:
/// 1. Start from `ServerConfig::default()`.
/// 2. If a configuration file is found, apply its settings.
/// 3. Apply command-line arguments. Host and port override the file only when
///    they differ from the built-in defaults (i.e. the user set them, directly
///    or through `WATERWISE_HOST` / `WATERWISE_PORT`). `--no-cors` always wins.
///    `--allow-origin` replaces the origin list when present.
/// 4. Validate the result.
///
/// ## Errors
///
/// Returns an error if:
/// - `--config` names a file that does not exist.
/// - The configuration file cannot be read or parsed (invalid TOML, unknown keys).
/// - CORS is enabled but no origins remain.
pub fn load_and_merge_config(args: ServeArgs) -> Result<ServerConfig> {
    let mut effective = ServerConfig::default();

    let config_path = match &args.config {
        Some(path) => {
            if !path.is_file() {
                return Err(WaterwiseError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                ))
                .into());
            }
            Some(path.clone())
        }
        None => {
            let candidate = env::current_dir()
                .context("Failed to get current working directory")?
                .join(CONFIG_FILE_NAME);
            candidate.is_file().then_some(candidate)
        }
    };

    if let Some(path) = config_path {
        let file_config = load_config_from_path(&path)?;
        info!("Loaded settings from {}", path.display());
        effective.apply_file(file_config);
    } else {
        debug!("No config file found. Using defaults and arguments.");
    }

    effective.apply_args(&args);
    effective.validate()?;
    Ok(effective)
}

/// Reads and parses a TOML configuration file.
fn load_config_from_path(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

impl ServerConfig {
    /// Overlays the values present in `file` onto this configuration.
    fn apply_file(&mut self, file: FileConfig) {
        if let Some(host_str) = file.host {
            match host_str.parse() {
                Ok(host) => self.host = host,
                Err(e) => warn!(
                    "Invalid host IP '{}' in config file ({}), using {}",
                    host_str, e, self.host
                ),
            }
        }
        if let Some(port) = file.port {
            self.port = port;
        }
        if let Some(enable_cors) = file.enable_cors {
            self.enable_cors = enable_cors;
        }
        if let Some(origins) = file.cors_origins {
            self.cors_origins = origins;
        }
    }

    /// Overlays explicitly set command-line values onto this configuration.
    fn apply_args(&mut self, args: &ServeArgs) {
        if args.host != DEFAULT_HOST {
            self.host = args.host;
        }
        if args.port != DEFAULT_PORT {
            self.port = args.port;
        }
        if args.no_cors {
            self.enable_cors = false;
        }
        if !args.allow_origins.is_empty() {
            self.cors_origins = args.allow_origins.clone();
        }
    }

    fn validate(&self) -> Result<()> {
        if self.enable_cors && self.cors_origins.is_empty() {
            return Err(WaterwiseError::Config(
                "CORS is enabled but no origins are configured (use --allow-origin or --no-cors)"
                    .to_string(),
            )
            .into());
        }
        Ok(())
    }
}

// --- Unit Tests ---
