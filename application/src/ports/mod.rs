//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod audio_sink;
pub mod chat_transport;
pub mod chat_view;
pub mod conversation_logger;
pub mod state_store;
