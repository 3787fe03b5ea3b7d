//! CLI command definitions

use clap::Parser;
use parley_domain::{QuickReplyPolicy, TransportKind};
use std::path::PathBuf;

/// CLI arguments for parley
#[derive(Parser, Debug)]
#[command(name = "parley")]
#[command(author, version, about = "Terminal client for a chatbot backend")]
#[command(long_about = r#"
Parley talks to a chatbot backend from the terminal. Replies may arrive
inline, be polled for by user id, or be pushed over a WebSocket.

With a MESSAGE argument, parley sends it, prints the reply and exits.
Without one, it starts an interactive chat.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. PARLEY_* environment variables (e.g. PARLEY_BACKEND__BASE_URL)
3. ./parley.toml       Project-level config
4. ~/.config/parley/config.toml   Global config

Example:
  parley "What is a PCB?"
  parley --transport form --url http://localhost:5000
  parley --transport offline --policy dedup
"#)]
pub struct Cli {
    /// Message to send (starts interactive chat when omitted)
    pub message: Option<String>,

    /// Backend base URL
    #[arg(short, long, value_name = "URL")]
    pub url: Option<String>,

    /// Transport: form, json-poll, socket or offline
    #[arg(short, long, value_name = "KIND")]
    pub transport: Option<TransportKind>,

    /// Quick reply policy: first_exchange, dedup or always
    #[arg(short, long, value_name = "POLICY")]
    pub policy: Option<QuickReplyPolicy>,

    /// Milliseconds between status checks for deferred replies
    #[arg(long, value_name = "MS")]
    pub poll_interval: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the typing indicator
    #[arg(short, long)]
    pub quiet: bool,

    /// Do not ring the bell when a reply arrives
    #[arg(long)]
    pub no_sound: bool,

    /// Forget that the first exchange happened, then continue
    #[arg(long)]
    pub reset: bool,

    /// Append a JSONL transcript of the session to this file
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
