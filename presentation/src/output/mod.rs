//! Terminal rendering: the console chat view and the reply bell.

pub mod bell;
pub mod console;
