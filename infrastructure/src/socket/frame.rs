//! Event frames carried over the socket

use parley_domain::{BotReply, DomainError, parse_reply};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Client → server: a user message
pub const SEND_MESSAGE_EVENT: &str = "send_message";
/// Server → client: a bot turn
pub const RECEIVE_REPLY_EVENT: &str = "receive_reply";

/// One named event with its JSON data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocketFrame {
    pub event: String,
    #[serde(default)]
    pub data: Value,
}

impl SocketFrame {
    pub fn send_message(text: &str) -> Self {
        Self {
            event: SEND_MESSAGE_EVENT.to_string(),
            data: serde_json::json!({ "message": text }),
        }
    }

    pub fn parse(text: &str) -> Result<Self, DomainError> {
        serde_json::from_str(text).map_err(|e| DomainError::MalformedPayload(e.to_string()))
    }

    pub fn encode(&self) -> String {
        // A frame is a string and a JSON value, which always serialize
        serde_json::to_string(self).unwrap_or_default()
    }

    /// The bot turn carried by a `receive_reply` frame; `None` for any
    /// other event.
    pub fn reply(&self) -> Option<Result<BotReply, DomainError>> {
        (self.event == RECEIVE_REPLY_EVENT).then(|| parse_reply(&self.data))
    }
}
