//! Transport kind value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How replies are obtained from the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransportKind {
    /// `POST /send_message` with a form field; the reply comes back inline.
    Form,
    /// `POST /chatbot` with JSON; the reply is inline or deferred and polled
    /// via `GET /check_response` (default).
    #[default]
    JsonPoll,
    /// WebSocket event channel: `send_message` out, `receive_reply` in.
    Socket,
    /// In-process responder, no network.
    Offline,
}

impl TransportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportKind::Form => "form",
            TransportKind::JsonPoll => "json-poll",
            TransportKind::Socket => "socket",
            TransportKind::Offline => "offline",
        }
    }

    /// Whether replies may be deferred and need polling.
    pub fn may_defer(&self) -> bool {
        matches!(self, TransportKind::JsonPoll | TransportKind::Offline)
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "form" => Ok(TransportKind::Form),
            "json-poll" | "json" | "poll" => Ok(TransportKind::JsonPoll),
            "socket" | "ws" | "websocket" => Ok(TransportKind::Socket),
            "offline" => Ok(TransportKind::Offline),
            other => Err(DomainError::UnknownTransport(other.to_string())),
        }
    }
}
