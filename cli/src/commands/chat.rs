//! # WaterWise Interactive Chat
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! Implements `waterwise chat`, a read-eval-print loop over stdin/stdout:
//!
//! ```text
//! Welcome to the Water Conservation & Sanitation Chatbot! (Type 'exit' to quit)
//! You: shower tips
//! Chatbot: Take shorter showers and install low-flow showerheads.
//! You: exit
//! Chatbot: Goodbye!
//! ```
//!
//! Typing `exit` (any case, nothing else on the line) ends the session
//! without consulting the bot. Only the line terminator is stripped, so
//! `exit ` is an ordinary message.
//! Closing stdin (Ctrl+D) ends it the same way.
//!
//! The loop itself is written against `BufRead` / `Write` so it can be driven
//! from in-memory buffers in tests.
//!
use crate::bot::Conversation;
use crate::core::error::{Result, WaterwiseError};
use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, trace};

pub const WELCOME: &str =
    "Welcome to the Water Conservation & Sanitation Chatbot! (Type 'exit' to quit)";
pub const FAREWELL: &str = "Goodbye!";
const PROMPT: &str = "You: ";
const EXIT_COMMAND: &str = "exit";

/// # Chat Command Arguments (`ChatArgs`)
///
/// `waterwise chat` takes no options; the struct exists so the command is
/// wired the same way as the others.
#[derive(Parser, Debug)]
pub struct ChatArgs {}

/// # Handle Chat Command (`handle_chat`)
///
/// Runs an interactive session on the process's stdin and stdout.
///
/// Terminal reads block, so the session runs on tokio's blocking pool.
pub async fn handle_chat(args: ChatArgs) -> Result<()> {
    info!("Handling chat command with args: {:?}", args);

    let turns = tokio::task::spawn_blocking(|| {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        run_session(stdin.lock(), &mut stdout)
    })
    .await
    .context("Chat session task failed")??;

    info!("Chat session ended after {} turn(s)", turns);
    Ok(())
}

/// # Run Chat Session (`run_session`)
///
/// Prints the welcome line, then repeatedly prompts, reads one line and prints
/// the bot's reply until `exit` or end of input.
///
/// ## Returns
///
/// * `Result<usize>`: the number of messages that were dispatched to the bot.
///
/// ## Errors
///
/// Returns an error if reading from `input` or writing to `output` fails.
pub fn run_session<R: BufRead, W: Write>(mut input: R, output: &mut W) -> Result<usize> {
    let mut conversation = Conversation::new();
    writeln!(output, "{}", WELCOME).map_err(WaterwiseError::from)?;

    loop {
        write!(output, "{}", PROMPT).map_err(WaterwiseError::from)?;
        output.flush().map_err(WaterwiseError::from)?;

        let mut line = String::new();
        let read = input.read_line(&mut line).map_err(WaterwiseError::from)?;
        if read == 0 {
            debug!("End of input reached, closing chat session");
            writeln!(output).map_err(WaterwiseError::from)?;
            break;
        }

        let text = line.trim_end_matches(['\r', '\n']);
        if text.eq_ignore_ascii_case(EXIT_COMMAND) {
            debug!("Exit command received");
            break;
        }

        let reply = conversation.exchange(text);
        writeln!(output, "Chatbot: {}", reply).map_err(WaterwiseError::from)?;
    }

    writeln!(output, "Chatbot: {}", FAREWELL).map_err(WaterwiseError::from)?;
    trace!("Session transcript: {:?}", conversation.messages());

    // Each exchange logs a user and a bot message.
    Ok(conversation.len() / 2)
}
