//! Quick reply gating policy

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// When quick replies received from the backend are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickReplyPolicy {
    /// Show on the first exchange only; the persisted flag suppresses them
    /// on every later turn, across restarts.
    #[default]
    FirstExchange,
    /// Show on every turn unless identical to the set already shown.
    Dedup,
    /// Show every set the backend sends.
    Always,
}

impl QuickReplyPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuickReplyPolicy::FirstExchange => "first_exchange",
            QuickReplyPolicy::Dedup => "dedup",
            QuickReplyPolicy::Always => "always",
        }
    }
}

impl fmt::Display for QuickReplyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuickReplyPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "first_exchange" | "first" => Ok(QuickReplyPolicy::FirstExchange),
            "dedup" => Ok(QuickReplyPolicy::Dedup),
            "always" => Ok(QuickReplyPolicy::Always),
            other => Err(DomainError::UnknownPolicy(other.to_string())),
        }
    }
}
