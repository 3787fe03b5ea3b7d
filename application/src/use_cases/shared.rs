//! Shared utilities for use cases.
//!
//! Cancellation helpers used by the chat session controller while it waits
//! on the backend.

use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Await `future` unless `token` is cancelled first.
///
/// Returns `None` on cancellation; the future is dropped.
pub(crate) async fn until_cancelled<F, T>(token: &CancellationToken, future: F) -> Option<T>
where
    F: Future<Output = T>,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => None,
        value = future => Some(value),
    }
}

/// Sleep for `interval`, waking early on cancellation.
///
/// Returns `false` if the sleep was cut short.
pub(crate) async fn cancellable_sleep(token: &CancellationToken, interval: Duration) -> bool {
    until_cancelled(token, tokio::time::sleep(interval))
        .await
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_until_cancelled_returns_value() {
        let token = CancellationToken::new();
        assert_eq!(until_cancelled(&token, async { 7 }).await, Some(7));
    }

    #[tokio::test]
    async fn test_until_cancelled_prefers_cancellation() {
        let token = CancellationToken::new();
        token.cancel();
        assert_eq!(until_cancelled(&token, async { 7 }).await, None);
    }

    #[tokio::test]
    async fn test_cancellable_sleep_wakes_early() {
        let token = CancellationToken::new();
        token.cancel();
        assert!(!cancellable_sleep(&token, Duration::from_secs(60)).await);
    }
}
