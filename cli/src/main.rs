//! CLI entrypoint for parley
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use parley_application::{ChatSessionController, ExchangeOutcome, InMemoryStore, KeyValueStore};
use parley_domain::TransportKind;
use parley_infrastructure::{
    ConfigLoader, FileConfig, FileKeyValueStore, JsonlConversationLogger, build_transport,
    default_state_path,
};
use parley_presentation::{ChatRepl, Cli, ConsoleView, TerminalBell};
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_overrides(&mut config, &cli);
    config.validate()?;

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, config.log.file.as_deref())?;

    info!("Starting parley");

    // === Dependency Injection ===
    let transport = build_transport(&config.backend)?;
    if transport.kind().may_defer() {
        info!(
            "Deferred replies are polled every {} ms",
            config.poll.interval_ms
        );
    }

    let store: Arc<dyn KeyValueStore> = match config.state.path.clone().or_else(default_state_path) {
        Some(path) => Arc::new(FileKeyValueStore::new(path)),
        None => {
            warn!("No data directory; first-exchange state will not be kept");
            Arc::new(InMemoryStore::new())
        }
    };

    let view = Arc::new(ConsoleView::new().with_typing_indicator(!cli.quiet));
    let cancellation = CancellationToken::new();

    let mut controller =
        ChatSessionController::new(transport, store, view, config.session_config())?
            .with_audio_sink(Arc::new(TerminalBell))
            .with_cancellation(cancellation.clone());
    if let Some(path) = &config.log.transcript
        && let Some(logger) = JsonlConversationLogger::open(path)
    {
        info!("Writing transcript to {}", logger.path().display());
        controller = controller.with_conversation_logger(Arc::new(logger));
    }
    let controller = Arc::new(controller);

    if cli.reset {
        controller.reset_exchange_state()?;
    }

    // Ctrl-C while waiting for a reply ends the session
    tokio::spawn({
        let cancellation = cancellation.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancellation.cancel();
            }
        }
    });

    // One-shot mode
    if let Some(message) = cli.message.as_deref() {
        let outcome = controller.submit(message).await?;
        controller.shutdown();
        return match outcome {
            ExchangeOutcome::Rendered => Ok(()),
            ExchangeOutcome::Ignored => bail!("Message is empty"),
            ExchangeOutcome::Failed => bail!("No reply from the backend"),
            ExchangeOutcome::Cancelled => bail!("Interrupted"),
        };
    }

    ChatRepl::new(controller.clone(), describe_backend(&config))
        .run()
        .await?;
    controller.shutdown();

    Ok(())
}

fn init_logging(verbose: u8, file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // Initialize logging based on verbosity level
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Log file path has no file name: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    std::fs::create_dir_all(dir)?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

/// Apply command line flags on top of the loaded configuration.
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(url) = &cli.url {
        config.backend.base_url = url.clone();
    }
    if let Some(transport) = cli.transport {
        config.backend.transport = transport;
    }
    if let Some(policy) = cli.policy {
        config.quick_replies.policy = policy;
    }
    if let Some(interval) = cli.poll_interval {
        config.poll.interval_ms = interval;
    }
    if cli.no_sound {
        config.sound.enabled = false;
    }
    if let Some(path) = &cli.transcript {
        config.log.transcript = Some(path.clone());
    }
}

fn describe_backend(config: &FileConfig) -> String {
    let backend = &config.backend;
    match backend.transport {
        TransportKind::Offline => "offline responder".to_string(),
        TransportKind::Socket => format!("{} ({})", backend.resolved_socket_url(), backend.transport),
        _ => format!("{} ({})", backend.base_url, backend.transport),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_domain::QuickReplyPolicy;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "parley",
            "--url",
            "http://localhost:8080",
            "--transport",
            "form",
            "--policy",
            "always",
            "--poll-interval",
            "250",
            "--no-sound",
        ]);
        let mut config = FileConfig::default();
        apply_overrides(&mut config, &cli);

        assert_eq!(config.backend.base_url, "http://localhost:8080");
        assert_eq!(config.backend.transport, TransportKind::Form);
        assert_eq!(config.quick_replies.policy, QuickReplyPolicy::Always);
        assert_eq!(config.poll.interval_ms, 250);
        assert!(!config.sound.enabled);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let cli = Cli::parse_from(["parley"]);
        let mut config = FileConfig::default();
        apply_overrides(&mut config, &cli);
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_zero_interval_flag_fails_validation() {
        let cli = Cli::parse_from(["parley", "--poll-interval", "0"]);
        let mut config = FileConfig::default();
        apply_overrides(&mut config, &cli);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_describe_backend() {
        let mut config = FileConfig::default();
        assert_eq!(
            describe_backend(&config),
            "http://127.0.0.1:5000 (json-poll)"
        );
        config.backend.transport = TransportKind::Offline;
        assert_eq!(describe_backend(&config), "offline responder");
    }
}
