//! Application-level configuration.
//!
//! This module provides configuration types that control how the chat
//! session behaves:
//!
//! - [`PollParams`]: status-check loop control (interval, attempt bound)
//! - [`SessionConfig`]: per-session settings handed to the controller

pub mod poll_params;
pub mod session_config;

pub use poll_params::{DEFAULT_POLL_INTERVAL, PollParams};
pub use session_config::SessionConfig;
