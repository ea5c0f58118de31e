//! # WaterWise Chat Log
//!
//! File: cli/src/bot/message.rs
//!
//! ## Overview
//!
//! `Message` and `Conversation` model the exchange between the user and the
//! bot. A conversation is append-only. Only its most recent user message is
//! ever handed to the dispatcher; earlier turns are kept for logging and never
//! influence routing.
//!
use super::dispatcher;
use serde::Serialize;
use tracing::debug;

/// Who produced a [`Message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

/// A single chat line. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// # Conversation (`Conversation`)
///
/// Ordered, append-only sequence of [`Message`]s.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Most recent message with [`Role::User`], if any.
    pub fn last_user_message(&self) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.role() == Role::User)
    }

    /// # Exchange One Turn (`exchange`)
    ///
    /// Appends `text` as a user message, dispatches on it, appends the reply as
    /// a bot message and returns the reply. Prior turns are not consulted.
    pub fn exchange(&mut self, text: &str) -> String {
        self.push(Message::user(text));
        let latest = self.last_user_message().map_or("", Message::content);
        let reply = dispatcher::dispatch(latest);
        self.push(Message::bot(reply.clone()));
        debug!("Conversation now holds {} messages", self.len());
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::responders::DEFAULT_REPLY;

    #[test]
    fn exchange_appends_user_then_bot() {
        let mut convo = Conversation::new();
        assert!(convo.is_empty());

        let reply = convo.exchange("shower tips");

        assert_eq!(convo.len(), 2);
        assert_eq!(convo.messages()[0], Message::user("shower tips"));
        assert_eq!(convo.messages()[1], Message::bot(reply));
    }

    #[test]
    fn history_does_not_influence_routing() {
        let mut convo = Conversation::new();
        convo.exchange("How can I save water in my garden?");

        // Follow-up with no keywords gets the default reply, not a garden tip.
        let reply = convo.exchange("and what else?");
        assert_eq!(reply, DEFAULT_REPLY);
        assert_eq!(convo.len(), 4);

        // A fresh conversation gives the same answer for the same message.
        assert_eq!(Conversation::new().exchange("and what else?"), reply);
    }

    #[test]
    fn last_user_message_skips_bot_replies() {
        let mut convo = Conversation::new();
        convo.exchange("first");
        convo.exchange("second");

        let last = convo.last_user_message().expect("a user message");
        assert_eq!(last.content(), "second");
        assert_eq!(last.role(), Role::User);
        assert!(Conversation::new().last_user_message().is_none());
    }

    #[test]
    fn messages_serialize_with_lowercase_roles() {
        let mut convo = Conversation::new();
        convo.push(Message::user("hi"));
        convo.push(Message::bot("hello"));

        let json = serde_json::to_value(&convo).expect("serialize conversation");
        assert_eq!(
            json,
            serde_json::json!({
                "messages": [
                    {"role": "user", "content": "hi"},
                    {"role": "bot", "content": "hello"}
                ]
            })
        );
    }
}
