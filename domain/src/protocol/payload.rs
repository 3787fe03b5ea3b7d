//! Wire payloads

use crate::quick_reply::set::QuickReplySet;
use serde::{Deserialize, Serialize};

/// Body sent for a user message (`{"message": ...}`), as JSON, form field
/// or socket event data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub message: String,
}

impl OutgoingMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A bot turn: reply text plus the quick replies attached to it.
///
/// Backends name the text either `reply` or `response`; both are accepted.
/// A missing or `null` `quick_replies` is an empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotReply {
    #[serde(default, alias = "response")]
    pub reply: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub quick_replies: QuickReplySet,
}

impl BotReply {
    pub fn new(reply: impl Into<String>, quick_replies: QuickReplySet) -> Self {
        Self {
            reply: Some(reply.into()),
            quick_replies,
        }
    }

    /// Reply text, if present and not blank.
    pub fn text(&self) -> Option<&str> {
        self.reply
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<QuickReplySet, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<QuickReplySet>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Result of submitting a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend answered in the same response.
    Immediate(BotReply),
    /// The backend deferred; poll with this id.
    Deferred { user_id: String },
}

/// Result of one status check for a deferred reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollResult {
    Completed(BotReply),
    Error(String),
    Pending,
}
