//! Chat view port
//!
//! The rendering surface of a session: message log, input line, typing
//! indicator and quick reply area.

use parley_domain::{Message, QuickReplySet};

/// Callback surface the controller drives.
///
/// Implementations live in the presentation layer and can display the chat
/// in various ways (console, TUI, etc.)
pub trait ChatView: Send + Sync {
    /// Called once for every message appended to the log
    fn append_message(&self, message: &Message);

    /// Called after a submission has been taken from the input
    fn clear_input(&self) {}

    /// Called when the controller starts waiting for a reply
    fn show_typing(&self);

    /// Called when the wait ends, whatever the outcome
    fn hide_typing(&self);

    /// Replace the quick reply area with `replies`
    fn render_quick_replies(&self, replies: &QuickReplySet);

    /// Hide the quick reply area
    fn clear_quick_replies(&self);

    /// Called when an exchange ends without a reply. Nothing is appended to
    /// the log; implementations may show a transient notice.
    fn on_exchange_failed(&self, _reason: &str) {}
}

/// No-op view for when nothing is rendered
pub struct NoView;

impl ChatView for NoView {
    fn append_message(&self, _message: &Message) {}
    fn show_typing(&self) {}
    fn hide_typing(&self) {}
    fn render_quick_replies(&self, _replies: &QuickReplySet) {}
    fn clear_quick_replies(&self) {}
}
