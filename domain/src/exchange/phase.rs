//! Exchange state machine
//!
//! ```text
//! Idle -> AwaitingReply -> Rendered
//!                       -> Failed
//!                       -> Cancelled
//!                       -> Polling -> Rendered | Failed | Cancelled
//! Rendered | Failed | Cancelled -> Idle
//! ```

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Phase of the exchange for the most recently submitted message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExchangePhase {
    #[default]
    Idle,
    AwaitingReply,
    Polling,
    Rendered,
    Failed,
    Cancelled,
}

impl ExchangePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExchangePhase::Idle => "idle",
            ExchangePhase::AwaitingReply => "awaiting_reply",
            ExchangePhase::Polling => "polling",
            ExchangePhase::Rendered => "rendered",
            ExchangePhase::Failed => "failed",
            ExchangePhase::Cancelled => "cancelled",
        }
    }

    /// A reply is still outstanding.
    pub fn is_waiting(&self) -> bool {
        matches!(self, ExchangePhase::AwaitingReply | ExchangePhase::Polling)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ExchangePhase::Rendered | ExchangePhase::Failed | ExchangePhase::Cancelled
        )
    }

    pub fn can_transition_to(&self, next: ExchangePhase) -> bool {
        use ExchangePhase::*;
        matches!(
            (self, next),
            (Idle, AwaitingReply)
                | (AwaitingReply, Rendered | Failed | Cancelled | Polling)
                | (Polling, Rendered | Failed | Cancelled)
                | (Rendered | Failed | Cancelled, Idle)
        )
    }
}

impl fmt::Display for ExchangePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks the phase of the current exchange and rejects illegal moves.
#[derive(Debug, Clone, Default)]
pub struct ExchangeMachine {
    phase: ExchangePhase,
}

impl ExchangeMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ExchangePhase {
        self.phase
    }

    pub fn transition(&mut self, next: ExchangePhase) -> Result<(), DomainError> {
        if !self.phase.can_transition_to(next) {
            return Err(DomainError::InvalidTransition {
                from: self.phase,
                to: next,
            });
        }
        self.phase = next;
        Ok(())
    }

    /// Move from a terminal phase back to `Idle`. No-op when already idle.
    pub fn settle(&mut self) {
        if self.phase.is_terminal() {
            self.phase = ExchangePhase::Idle;
        }
    }
}
