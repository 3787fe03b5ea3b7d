//! Chat transport port
//!
//! Defines how the application layer reaches the chatbot backend.

use async_trait::async_trait;
use parley_domain::{PollResult, SubmitOutcome, TransportKind};
use thiserror::Error;

/// Errors that can occur while talking to the backend
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Transport closed")]
    TransportClosed,

    #[error("{0} transport does not support status checks")]
    PollingUnsupported(TransportKind),
}

/// Transport to the chatbot backend
///
/// One implementation per backend flavor (form POST, JSON POST with
/// polling, socket push). Implementations (adapters) live in the
/// infrastructure layer.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Which flavor this is
    fn kind(&self) -> TransportKind;

    /// Send a user message.
    ///
    /// Returns the reply when the backend answers inline, or the user id to
    /// poll with when it defers.
    async fn submit(&self, message: &str) -> Result<SubmitOutcome, TransportError>;

    /// Check on a deferred reply.
    ///
    /// Only transports that can defer support this; the default rejects it.
    async fn check_status(&self, _user_id: &str) -> Result<PollResult, TransportError> {
        Err(TransportError::PollingUnsupported(self.kind()))
    }
}
