//! # WaterWise Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the WaterWise bot, a
//! keyword-routed assistant for water conservation, clean water and
//! sanitation questions. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the appropriate command handler
//!
//! ## Architecture
//!
//! - `bot`: the routing core (router, responders, dispatcher, chat log)
//! - `commands`: the `chat`, `ask` and `serve` front ends
//! - `core`: shared infrastructure (errors)
//!
//! ## Examples
//!
//! ```bash
//! # Talk to the bot in the terminal
//! waterwise chat
//!
//! # Ask a single question
//! waterwise ask "How can I save water in my garden?"
//!
//! # Run the HTTP API with request logging
//! waterwise -v serve --port 8000
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod bot; // Topic routing and canned replies
mod commands; // chat, ask, serve
mod core; // Core infrastructure (errors)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "waterwise",
    about = "💧 WaterWise: water conservation & sanitation chatbot",
    long_about = "Answers questions about saving water, keeping water clean and sanitation.\n\
                  Use it interactively (`chat`), for one question (`ask`), or as an HTTP API (`serve`).",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Start an interactive chat session.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Send one message and print the reply.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// Run the HTTP API.
    #[command(alias = "s")]
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Chat(args) => commands::chat::handle_chat(args).await,
        Commands::Ask(args) => commands::ask::handle_ask(args).await,
        Commands::Serve(args) => commands::serve::handle_serve(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_cmd::Command;
    use clap::CommandFactory;
    use predicates::prelude::*;

    fn waterwise_cmd() -> Command {
        Command::cargo_bin("waterwise").expect("Failed to find waterwise binary for testing")
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::parse_from(["waterwise", "-vv", "ask", "hi"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Ask(_)));
    }

    #[test]
    fn test_main_help_flag() {
        waterwise_cmd().arg("--help").assert().success();
    }

    #[test]
    fn test_main_version_flag() {
        waterwise_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
