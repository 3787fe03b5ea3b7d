//! Configuration file loading for parley
//!
//! Sources are merged with this priority (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. `PARLEY_*` environment variables (`PARLEY_BACKEND__BASE_URL`, ...)
//! 3. Project root: `./parley.toml` or `./.parley.toml`
//! 4. Global: `$XDG_CONFIG_HOME/parley/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_BASE_URL, FileBackendConfig, FileConfig, FileLogConfig,
    FilePollConfig, FileQuickRepliesConfig, FileSoundConfig, FileStateConfig,
};
pub use loader::ConfigLoader;
