//! Persisted client state

mod file_store;

pub use file_store::{FileKeyValueStore, default_state_path};
