//! Console client: drives the arena admin commands from stdin.
mod app;
mod command;

use std::path::Path;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use arena_core::{Notification, UserRole};
use arena_runtime::catalog::seed_defaults;
use arena_runtime::{ArenaRepository, EventBus, InMemoryArenaStore, RuntimeConfig, Topic};

use app::{CliApp, Flow};
use command::CliCommand;

const DEFAULT_ADMIN_SLACK_ID: &str = "UADMIN";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let log_dir = std::env::var_os("ARENA_LOG_DIR");
    let _guard = setup_logging(log_dir.as_deref().map(Path::new))?;

    let config = RuntimeConfig::from_env();
    config.validate()?;

    let store = InMemoryArenaStore::new();
    seed_defaults(&store, &config.arena)?;
    let admin_slack_id =
        std::env::var("ARENA_ADMIN_SLACK_ID").unwrap_or_else(|_| DEFAULT_ADMIN_SLACK_ID.into());
    let admin = store.register_user(&admin_slack_id, "admin", UserRole::SuperAdmin)?;

    let bus = EventBus::with_capacity(config.event_buffer);
    spawn_notification_printer(&bus)?;

    let repo = ArenaRepository::new(store, bus, config.arena);
    let mut app = CliApp::new(repo, admin);
    tracing::info!(admin = %app.acting().slack_id, "arena console ready");
    println!("Arena console. Type /help for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<CliCommand>() {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };
        match app.execute(command) {
            Ok(Flow::Continue(output)) => println!("{output}"),
            Ok(Flow::Quit) => break,
            Err(err) => {
                tracing::error!(error = %err, "command failed");
                println!("command failed: {err}");
            }
        }
        // Let the printer task drain announcements before the next prompt.
        tokio::task::yield_now().await;
    }

    tracing::info!("arena console stopped");
    Ok(())
}

/// Print every engine and channel notification as it is published.
fn spawn_notification_printer(bus: &EventBus) -> Result<()> {
    let mut engine = bus.subscribe(Topic::Engine)?;
    let mut channel = bus.subscribe(Topic::Channel)?;

    tokio::spawn(async move {
        loop {
            let (topic, received) = tokio::select! {
                received = engine.recv() => (Topic::Engine, received),
                received = channel.recv() => (Topic::Channel, received),
            };
            match received {
                Ok(Notification { text, .. }) => println!("[{topic}] {text}"),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(%topic, skipped, "notification printer lagged");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });
    Ok(())
}

/// Setup logging to stderr and, when `log_dir` is given, to a daily file.
fn setup_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::daily(dir, "arena.log");
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = log_dir {
        tracing::info!("Log file: {}/arena.log", dir.display());
    }
    Ok(guard)
}
