//! Backend configuration from TOML (`[backend]` section)

use parley_domain::TransportKind;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Raw backend configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Root URL of the HTTP backend
    pub base_url: String,
    /// Which transport to use
    pub transport: TransportKind,
    /// WebSocket URL for the socket transport (derived from `base_url` if unset)
    pub socket_url: Option<String>,
    /// HTTP request timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// Offline transport only: defer replies, pending for this many checks
    pub offline_pending_checks: Option<u32>,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            transport: TransportKind::default(),
            socket_url: None,
            timeout_seconds: Some(30),
            offline_pending_checks: None,
        }
    }
}

impl FileBackendConfig {
    /// Per-request timeout for HTTP calls and socket replies.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    /// Socket URL to connect to: the configured one, or `base_url` with the
    /// scheme switched to `ws`/`wss` and `/ws` appended.
    pub fn resolved_socket_url(&self) -> String {
        if let Some(url) = self.socket_url.as_deref().filter(|url| !url.trim().is_empty()) {
            return url.to_string();
        }
        let base = self.base_url.trim_end_matches('/');
        let base = if let Some(rest) = base.strip_prefix("https://") {
            format!("wss://{rest}")
        } else if let Some(rest) = base.strip_prefix("http://") {
            format!("ws://{rest}")
        } else {
            base.to_string()
        };
        format!("{base}/ws")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_url_derived_from_base_url() {
        let config = FileBackendConfig {
            base_url: "https://chat.example.com/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolved_socket_url(), "wss://chat.example.com/ws");
    }

    #[test]
    fn test_request_timeout() {
        assert_eq!(
            FileBackendConfig::default().request_timeout(),
            Some(Duration::from_secs(30))
        );
        let config = FileBackendConfig {
            timeout_seconds: None,
            ..Default::default()
        };
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn test_explicit_socket_url_wins() {
        let config = FileBackendConfig {
            socket_url: Some("ws://localhost:9000/events".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolved_socket_url(), "ws://localhost:9000/events");
    }
}
