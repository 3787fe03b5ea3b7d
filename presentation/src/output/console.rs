//! Console chat view

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use parley_application::ChatView;
use parley_domain::{Message, QuickReplySet, Sender};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Renders the chat to the terminal.
///
/// Messages and quick replies go to stdout; the typing indicator is an
/// indicatif spinner on stderr.
pub struct ConsoleView {
    show_typing: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl ConsoleView {
    pub fn new() -> Self {
        Self {
            show_typing: true,
            spinner: Mutex::new(None),
        }
    }

    /// Set whether to show the typing spinner
    pub fn with_typing_indicator(mut self, show: bool) -> Self {
        self.show_typing = show;
        self
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn format_message(message: &Message) -> String {
        match message.sender() {
            Sender::User => format!("{} {}", "You:".green().bold(), message.text()),
            Sender::Bot => format!("{} {}", "Bot:".cyan().bold(), message.text()),
        }
    }

    pub fn format_quick_replies(replies: &QuickReplySet) -> String {
        let choices = replies
            .labels()
            .iter()
            .enumerate()
            .map(|(i, label)| format!("{} {}", format!("[{}]", i + 1).yellow().bold(), label))
            .collect::<Vec<_>>()
            .join("  ");
        format!("  {}\n  {}", choices, "(type /1, /2, ... to choose)".dimmed())
    }
}

impl Default for ConsoleView {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatView for ConsoleView {
    fn append_message(&self, message: &Message) {
        println!("{}", Self::format_message(message));
    }

    fn show_typing(&self) {
        if !self.show_typing {
            return;
        }
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        spinner.set_message("Bot is typing...");
        spinner.enable_steady_tick(Duration::from_millis(100));

        let mut slot = self.spinner.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = slot.replace(spinner) {
            previous.finish_and_clear();
        }
    }

    fn hide_typing(&self) {
        let mut slot = self.spinner.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(spinner) = slot.take() {
            spinner.finish_and_clear();
        }
    }

    fn render_quick_replies(&self, replies: &QuickReplySet) {
        println!("{}", Self::format_quick_replies(replies));
    }

    // Printed choices stay in the scrollback; `/replies` shows what is
    // currently selectable.
    fn clear_quick_replies(&self) {}

    fn on_exchange_failed(&self, reason: &str) {
        println!("{}", format!("(no reply: {})", reason).dimmed());
    }
}
