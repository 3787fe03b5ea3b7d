//! Transcript logging.
//!
//! Provides [`JsonlConversationLogger`], which appends chat events to a JSONL
//! file through the [`ConversationLogger`](parley_application::ConversationLogger)
//! port.

mod jsonl_logger;

pub use jsonl_logger::JsonlConversationLogger;
