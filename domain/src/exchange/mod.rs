//! Exchange domain: one user message and the bot reply it produces.
//!
//! - [`phase::ExchangeMachine`]: per-message state machine
//! - [`exchange_state::ExchangeState`]: the persisted first-exchange flag
//! - [`pending::PendingRequest`]: a deferred reply being polled for

pub mod exchange_state;
pub mod pending;
pub mod phase;
