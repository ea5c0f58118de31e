//! # WaterWise One-Shot Question
//!
//! File: cli/src/commands/ask.rs
//!
//! `waterwise ask "<message>"` dispatches a single message and prints the
//! reply in the same `Chatbot: <reply>` form the interactive loop uses.
//! Handy for scripting and for checking routing from a shell.
//!
use crate::bot;
use crate::core::error::Result;
use clap::Parser;
use tracing::info;

/// # Ask Command Arguments (`AskArgs`)
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The message to send to the bot. Multiple words are joined with spaces,
    /// so quoting is optional.
    #[arg(required = true, num_args = 1..)]
    pub message: Vec<String>,

    /// Print the routing decision (topic label) on its own line before the reply.
    #[arg(long)]
    pub show_topic: bool,
}

/// # Handle Ask Command (`handle_ask`)
///
/// Nothing here awaits; the handler is async only so `main` can drive every
/// command the same way.
pub async fn handle_ask(args: AskArgs) -> Result<()> {
    info!("Handling ask command with args: {:?}", args);

    let message = args.message.join(" ");
    if args.show_topic {
        println!("Topic: {}", bot::classify(&message));
    }
    println!("Chatbot: {}", bot::dispatch(&message));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_joined_into_one_message() {
        let args = AskArgs::parse_from(["ask", "save", "water", "in", "the", "garden"]);
        assert_eq!(args.message.join(" "), "save water in the garden");
        assert!(!args.show_topic);
    }

    #[test]
    fn message_is_required() {
        assert!(AskArgs::try_parse_from(["ask"]).is_err());
    }

    #[test]
    fn show_topic_flag_parses() {
        let args = AskArgs::parse_from(["ask", "--show-topic", "hygiene"]);
        assert!(args.show_topic);
        assert_eq!(args.message, ["hygiene"]);
    }
}
