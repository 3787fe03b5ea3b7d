//! File locations from TOML (`[state]` and `[log]` sections)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw persisted-state configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStateConfig {
    /// State file (defaults to the data directory)
    pub path: Option<PathBuf>,
}

/// Raw log configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Diagnostic log file; stderr when unset
    pub file: Option<PathBuf>,
    /// JSONL transcript file; no transcript when unset
    pub transcript: Option<PathBuf>,
}
