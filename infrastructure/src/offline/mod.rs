//! In-process responder for running without a backend.
//!
//! Mimics the PCB help-desk bot the client was first written against:
//! keyword language detection, a welcome turn with quick replies, a request
//! budget, and optionally deferred replies so the polling path can be
//! exercised offline.

mod language;
mod responder;

pub use language::{Language, detect_language, quick_replies_for};
pub use responder::OfflineResponder;
