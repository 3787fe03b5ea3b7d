//! Presentation layer for parley
//!
//! This crate contains the CLI definition, the console chat view, the
//! terminal bell and the interactive chat REPL.

pub mod chat;
pub mod cli;
pub mod output;

// Re-export commonly used types
pub use chat::{ChatRepl, ReplCommand};
pub use cli::commands::Cli;
pub use output::bell::TerminalBell;
pub use output::console::ConsoleView;
