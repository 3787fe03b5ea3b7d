//! Domain error types

use thiserror::Error;

use crate::exchange::phase::ExchangePhase;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Message text is empty")]
    EmptyMessage,

    #[error("Invalid transition from {from} to {to}")]
    InvalidTransition {
        from: ExchangePhase,
        to: ExchangePhase,
    },

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Unknown transport: {0}")]
    UnknownTransport(String),

    #[error("Unknown quick reply policy: {0}")]
    UnknownPolicy(String),

    #[error("Operation cancelled")]
    Cancelled,
}

impl DomainError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DomainError::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_error_display() {
        let error = DomainError::Cancelled;
        assert_eq!(error.to_string(), "Operation cancelled");
    }

    #[test]
    fn test_invalid_transition_display() {
        let error = DomainError::InvalidTransition {
            from: ExchangePhase::Idle,
            to: ExchangePhase::Polling,
        };
        assert_eq!(
            error.to_string(),
            "Invalid transition from idle to polling"
        );
    }

    #[test]
    fn test_is_cancelled_check() {
        assert!(DomainError::Cancelled.is_cancelled());
        assert!(!DomainError::EmptyMessage.is_cancelled());
        assert!(!DomainError::MalformedPayload("x".to_string()).is_cancelled());
    }
}
