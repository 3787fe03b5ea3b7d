//! Domain layer for parley
//!
//! This crate contains the core chat logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Exchange
//!
//! One user message and the bot reply it produces. Each exchange moves
//! through [`ExchangePhase`]s; a reply either arrives inline, is pushed over
//! a socket, or is deferred and polled for by user id.
//!
//! ## Quick replies
//!
//! Suggestions attached to a bot turn. Whether they are shown is decided by
//! a [`QuickReplyPolicy`], using the persisted [`ExchangeState`] flag.

pub mod audio;
pub mod config;
pub mod conversation;
pub mod core;
pub mod exchange;
pub mod protocol;
pub mod quick_reply;

// Re-export commonly used types
pub use audio::AudioState;
pub use config::TransportKind;
pub use conversation::{
    chat_log::ChatLog,
    message::{Message, Sender},
};
pub use core::error::DomainError;
pub use exchange::{
    exchange_state::{ExchangeState, FIRST_EXCHANGE_KEY},
    pending::{PendingRequest, PendingStatus},
    phase::{ExchangeMachine, ExchangePhase},
};
pub use protocol::{
    parsing::{parse_poll_response, parse_reply, parse_submit_response},
    payload::{BotReply, OutgoingMessage, PollResult, SubmitOutcome},
};
pub use quick_reply::{
    gate::{GateDecision, QuickReplyGate},
    policy::QuickReplyPolicy,
    set::QuickReplySet,
};
