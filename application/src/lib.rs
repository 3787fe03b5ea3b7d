//! Application layer for parley
//!
//! This crate contains the chat session use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_POLL_INTERVAL, PollParams, SessionConfig};
pub use ports::{
    audio_sink::{AudioSink, NoAudio},
    chat_transport::{ChatTransport, TransportError},
    chat_view::{ChatView, NoView},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    state_store::{InMemoryStore, KeyValueStore, StoreError},
};
pub use use_cases::chat_session::{ChatError, ChatSessionController, ExchangeOutcome};
