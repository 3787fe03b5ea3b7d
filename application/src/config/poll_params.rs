//! Poll parameters: status-check loop control.
//!
//! [`PollParams`] groups the static parameters of the loop that waits for a
//! deferred reply in
//! [`ChatSessionController`](crate::use_cases::chat_session::ChatSessionController).

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default wait between two status checks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(3000);

/// Status-check loop control parameters.
///
/// The interval is fixed; there is no backoff. `max_attempts` of `None`
/// keeps polling until a terminal status arrives or the session is
/// cancelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollParams {
    /// Wait before each status check.
    pub interval: Duration,
    /// Upper bound on status checks for one deferred reply.
    pub max_attempts: Option<u32>,
}

impl Default for PollParams {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: None,
        }
    }
}

impl PollParams {
    // ==================== Builder Methods ====================

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Bound the number of checks. `0` means unbounded.
    pub fn with_max_attempts(mut self, max: u32) -> Self {
        self.max_attempts = (max > 0).then_some(max);
        self
    }

    /// Whether `attempts` checks have used up the budget.
    pub fn exhausted(&self, attempts: u32) -> bool {
        self.max_attempts.is_some_and(|max| attempts >= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_three_seconds_unbounded() {
        let params = PollParams::default();
        assert_eq!(params.interval, Duration::from_millis(3000));
        assert_eq!(params.max_attempts, None);
        assert!(!params.exhausted(u32::MAX));
    }

    #[test]
    fn test_zero_max_attempts_means_unbounded() {
        let params = PollParams::default().with_max_attempts(0);
        assert_eq!(params.max_attempts, None);
    }

    #[test]
    fn test_exhausted() {
        let params = PollParams::default().with_max_attempts(3);
        assert!(!params.exhausted(2));
        assert!(params.exhausted(3));
    }
}
