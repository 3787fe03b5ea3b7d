//! Session behavior from TOML (`[quick_replies]` and `[sound]` sections)

use parley_domain::QuickReplyPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuickRepliesConfig {
    pub policy: QuickReplyPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSoundConfig {
    /// Ring the terminal bell when a reply arrives
    pub enabled: bool,
}

impl Default for FileSoundConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
