//! Port for structured transcript logging.
//!
//! Defines the [`ConversationLogger`] trait for recording chat events
//! (user messages, bot replies, rendered quick replies, status checks,
//! failed exchanges) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures the transcript in a
//! machine-readable format (JSONL).

use parley_domain::PendingStatus;
use serde_json::{Value, json};

/// A structured transcript event.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "user_message", "bot_message", "poll").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    pub fn user_message(text: &str) -> Self {
        Self::new("user_message", json!({ "text": text }))
    }

    pub fn bot_message(text: &str) -> Self {
        Self::new("bot_message", json!({ "text": text }))
    }

    pub fn quick_replies(labels: &[String]) -> Self {
        Self::new("quick_replies", json!({ "labels": labels }))
    }

    /// One status check for a deferred reply.
    pub fn poll(user_id: &str, attempt: u32, status: PendingStatus) -> Self {
        Self::new(
            "poll",
            json!({ "user_id": user_id, "attempt": attempt, "status": status }),
        )
    }

    pub fn exchange_failed(reason: &str) -> Self {
        Self::new("exchange_failed", json!({ "reason": reason }))
    }
}

/// Port for logging transcript events.
///
/// `log` is synchronous and infallible; a logger that cannot write drops
/// the event.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when transcripts are disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
