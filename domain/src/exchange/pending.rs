//! Deferred reply tracking

use serde::{Deserialize, Serialize};

/// Server-side processing status of a deferred reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PendingStatus {
    Pending,
    Completed,
    Error,
}

impl PendingStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PendingStatus::Pending)
    }
}

/// A reply the backend deferred; polled by `user_id` until terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    user_id: String,
    status: PendingStatus,
    polls: u32,
}

impl PendingRequest {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            status: PendingStatus::Pending,
            polls: 0,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn status(&self) -> PendingStatus {
        self.status
    }

    /// Number of status checks made so far.
    pub fn polls(&self) -> u32 {
        self.polls
    }

    /// Record one status check and its result.
    pub fn record_poll(&mut self, status: PendingStatus) {
        self.polls += 1;
        self.status = status;
    }

    pub fn is_resolved(&self) -> bool {
        self.status.is_terminal()
    }
}
