//! Interactive chat module
//!
//! Provides a reedline-based interactive chat on top of the session
//! controller.

mod repl;

pub use repl::{ChatRepl, ReplCommand};
