//! Conversation entities

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }

    /// Label shown in front of the message text
    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => "User",
            Sender::Bot => "Bot",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A message in the chat (Entity)
///
/// Immutable once created: there are no setters, and the log only hands out
/// shared references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    sender: Sender,
    text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.sender, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_sender() {
        assert_eq!(Message::user("hi").sender(), Sender::User);
        assert_eq!(Message::bot("hi").sender(), Sender::Bot);
        assert!(Message::user("hi").is_user());
    }

    #[test]
    fn test_display_prefixes_sender() {
        assert_eq!(Message::user("hello").to_string(), "User: hello");
        assert_eq!(Message::bot("hi there").to_string(), "Bot: hi there");
    }

    #[test]
    fn test_sender_serializes_lowercase() {
        let json = serde_json::to_string(&Sender::Bot).unwrap();
        assert_eq!(json, "\"bot\"");
    }
}
