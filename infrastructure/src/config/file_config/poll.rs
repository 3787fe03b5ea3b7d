//! Polling configuration from TOML (`[poll]` section)

use parley_application::{DEFAULT_POLL_INTERVAL, PollParams};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw polling configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePollConfig {
    /// Delay before each status check, in milliseconds
    pub interval_ms: u64,
    /// Give up after this many checks (0 = never)
    pub max_attempts: u32,
}

impl Default for FilePollConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_POLL_INTERVAL.as_millis() as u64,
            max_attempts: 0,
        }
    }
}

impl FilePollConfig {
    pub fn to_params(&self) -> PollParams {
        PollParams::default()
            .with_interval(Duration::from_millis(self.interval_ms))
            .with_max_attempts(self.max_attempts)
    }
}
