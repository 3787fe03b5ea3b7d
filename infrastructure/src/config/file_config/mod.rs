//! Raw TOML configuration data types
//!
//! These structs mirror the config file layout and use domain types where a
//! value maps onto one.

mod backend;
mod poll;
mod session;
mod storage;

pub use backend::{DEFAULT_BASE_URL, FileBackendConfig};
pub use poll::FilePollConfig;
pub use session::{FileQuickRepliesConfig, FileSoundConfig};
pub use storage::{FileLogConfig, FileStateConfig};

use parley_application::SessionConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("backend.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("backend.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("poll.interval_ms must be greater than 0")]
    InvalidPollInterval,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub backend: FileBackendConfig,
    pub quick_replies: FileQuickRepliesConfig,
    pub poll: FilePollConfig,
    pub sound: FileSoundConfig,
    pub state: FileStateConfig,
    pub log: FileLogConfig,
}

impl FileConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.backend.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }
        if let Some(0) = self.backend.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.poll.interval_ms == 0 {
            return Err(ConfigValidationError::InvalidPollInterval);
        }
        Ok(())
    }

    /// Session settings for the chat controller.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::default()
            .with_policy(self.quick_replies.policy)
            .with_poll(self.poll.to_params())
            .with_sound(self.sound.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_domain::{QuickReplyPolicy, TransportKind};
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[backend]
base_url = "https://chat.example.com"
transport = "form"
timeout_seconds = 10

[quick_replies]
policy = "dedup"

[poll]
interval_ms = 500
max_attempts = 20

[sound]
enabled = false

[state]
path = "/tmp/parley-state.json"

[log]
file = "/tmp/parley.log"
transcript = "/tmp/parley.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.backend.base_url, "https://chat.example.com");
        assert_eq!(config.backend.transport, TransportKind::Form);
        assert_eq!(config.quick_replies.policy, QuickReplyPolicy::Dedup);
        assert!(!config.sound.enabled);
        assert!(config.log.transcript.is_some());

        let session = config.session_config();
        assert_eq!(session.poll.interval, Duration::from_millis(500));
        assert_eq!(session.poll.max_attempts, Some(20));
        assert!(!session.sound_enabled);
        assert_eq!(config.backend.request_timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[backend]
transport = "socket"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.backend.transport, TransportKind::Socket);
        // Defaults should apply
        assert_eq!(config.backend.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.poll.interval_ms, 3000);
        assert_eq!(config.quick_replies.policy, QuickReplyPolicy::FirstExchange);
        assert!(config.sound.enabled);
    }

    #[test]
    fn test_unknown_transport_is_rejected() {
        let toml_str = r#"
[backend]
transport = "carrier-pigeon"
"#;
        assert!(toml::from_str::<FileConfig>(toml_str).is_err());
    }

    #[test]
    fn test_validate_default_config() {
        assert_eq!(FileConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = FileConfig::default();
        config.backend.timeout_seconds = Some(0);
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }

    #[test]
    fn test_validate_zero_interval() {
        let mut config = FileConfig::default();
        config.poll.interval_ms = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidPollInterval)
        );
    }

    #[test]
    fn test_validate_blank_base_url() {
        let mut config = FileConfig::default();
        config.backend.base_url = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyBaseUrl));
    }
}
