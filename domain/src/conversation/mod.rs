//! Conversation domain.
//!
//! - [`message::Message`]: a single line of the chat, from the user or the bot
//! - [`chat_log::ChatLog`]: the append-only, arrival-ordered message log

pub mod chat_log;
pub mod message;
