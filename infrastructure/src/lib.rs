//! Infrastructure layer for parley
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: backend transports, the file-backed state store, the
//! JSONL transcript logger, and configuration file loading.

pub mod config;
pub mod http;
pub mod logging;
pub mod offline;
pub mod socket;
pub mod store;
pub mod transport_factory;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig};
pub use http::{FormTransport, JsonPollTransport};
pub use logging::JsonlConversationLogger;
pub use offline::OfflineResponder;
pub use socket::SocketTransport;
pub use store::{FileKeyValueStore, default_state_path};
pub use transport_factory::build_transport;
