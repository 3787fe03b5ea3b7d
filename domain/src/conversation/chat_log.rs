//! Append-only chat log

use super::message::{Message, Sender};

/// Ordered record of every message shown in a session.
///
/// Messages are kept in arrival order. There is no removal or edit API.
#[derive(Debug, Clone, Default)]
pub struct ChatLog {
    messages: Vec<Message>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: Message) -> &Message {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
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

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Number of messages from `sender`
    pub fn count_from(&self, sender: Sender) -> usize {
        self.messages.iter().filter(|m| m.sender() == sender).count()
    }
}
