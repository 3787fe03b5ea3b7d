//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::output::console::ConsoleView;
use colored::Colorize;
use parley_application::{ChatError, ChatSessionController, ExchangeOutcome};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

const HISTORY_CAPACITY: usize = 1000;

/// A slash command typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    /// List the quick replies that can be chosen right now
    Replies,
    /// Choose a quick reply (1-based)
    Choose(usize),
    History,
    Reset,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`; other lines are messages.
    pub fn parse(line: &str) -> Option<Self> {
        let command = line.trim().strip_prefix('/')?;
        let parsed = match command {
            "quit" | "exit" | "q" => Self::Quit,
            "help" | "h" | "?" => Self::Help,
            "replies" | "r" => Self::Replies,
            "history" => Self::History,
            "reset" => Self::Reset,
            other => match other.parse::<usize>() {
                Ok(n) if n > 0 => Self::Choose(n),
                _ => Self::Unknown(line.trim().to_string()),
            },
        };
        Some(parsed)
    }
}

/// Interactive chat REPL
pub struct ChatRepl {
    controller: Arc<ChatSessionController>,
    backend: String,
    history_path: Option<PathBuf>,
}

impl ChatRepl {
    /// Create a new ChatRepl; `backend` is shown in the welcome banner
    pub fn new(controller: Arc<ChatSessionController>, backend: impl Into<String>) -> Self {
        Self {
            controller,
            backend: backend.into(),
            history_path: dirs::data_dir().map(|p| p.join("parley").join("history.txt")),
        }
    }

    /// Set the line history file (`None` keeps history in memory only)
    pub fn with_history_path(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    fn line_editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = &self.history_path else {
            return editor;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("Could not open history file {}: {}", path.display(), e);
                editor
            }
        }
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> std::io::Result<()> {
        let mut editor = self.line_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("parley".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        while !self.controller.is_shut_down() {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    match ReplCommand::parse(line) {
                        Some(command) => {
                            if self.handle_command(command).await {
                                break;
                            }
                        }
                        None => self.report(self.controller.submit(line).await),
                    }
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
                // Ctrl-C clears the line
                _ => {
                    println!("^C");
                    continue;
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│                parley chat                  │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Backend: {}", self.backend);
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /help, /h, /?     - Show this help");
        println!("  /replies, /r      - List the current quick replies");
        println!("  /<n>              - Send quick reply number n");
        println!("  /history          - Show this session's messages");
        println!("  /reset            - Forget the first exchange (quick replies show again)");
        println!("  /quit, /exit, /q  - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => {
                println!();
                Self::print_help();
            }
            ReplCommand::Replies => match self.controller.visible_quick_replies() {
                Some(replies) => println!("{}", ConsoleView::format_quick_replies(&replies)),
                None => println!("{}", "No quick replies right now".dimmed()),
            },
            ReplCommand::Choose(n) => {
                self.controller.on_user_gesture();
                self.report(self.controller.activate_quick_reply(n - 1).await);
            }
            ReplCommand::History => {
                println!();
                for message in self.controller.messages() {
                    println!("{}", ConsoleView::format_message(&message));
                }
                println!();
            }
            ReplCommand::Reset => match self.controller.reset_exchange_state() {
                Ok(()) => println!("First exchange forgotten"),
                Err(e) => eprintln!("Error: {}", e),
            },
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        false
    }

    fn report(&self, result: Result<ExchangeOutcome, ChatError>) {
        match result {
            Ok(outcome) => debug!("Exchange ended: {:?}", outcome),
            Err(ChatError::UnknownQuickReply(index)) => {
                println!("No quick reply number {}; try /replies", index + 1);
            }
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}
