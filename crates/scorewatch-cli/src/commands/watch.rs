//! Watch mode: push scoreboard updates and answer console queries.

use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use scorewatch_core::{
    ChannelId, Dispatcher, MessageSink, SnapshotStore, SnapshotWatcher, WatchConfig,
};
use tracing::{debug, error, info, warn};

use crate::cli::WatchArgs;
use crate::console;
use crate::shutdown::ShutdownSignal;
use crate::sinks::{DiscordSink, PrintSink};

type BoxedSink = Box<dyn MessageSink + Send + Sync>;

fn build_sink(args: &WatchArgs) -> BoxedSink {
    match args.token.as_deref().filter(|t| !t.is_empty()) {
        Some(token) => {
            debug!("Posting updates via {}", args.api_base);
            Box::new(DiscordSink::new(&args.api_base, token.to_string()))
        }
        None => {
            info!("No bot token configured, printing updates to stdout");
            Box::new(PrintSink)
        }
    }
}

/// Run watch mode until Ctrl+C or `quit`
pub fn run(config: WatchConfig, args: &WatchArgs) -> Result<()> {
    // Setup graceful shutdown handler
    let shutdown = Arc::new(ShutdownSignal::new());
    let shutdown_ctrlc = Arc::clone(&shutdown);
    ctrlc::set_handler(move || {
        info!("Received shutdown signal, stopping...");
        shutdown_ctrlc.trigger();
    })?;

    info!("scorewatch {}", env!("CARGO_PKG_VERSION"));

    let destination = ChannelId::from_raw(args.channel_id);
    match destination {
        Some(channel) => info!("Automatic updates go to channel {}", channel),
        None => info!("AUTO_CHANNEL_ID not set, automatic updates disabled"),
    }

    let dispatcher = Arc::new(Dispatcher::new(
        SnapshotStore::new(&config.path),
        build_sink(args),
        destination,
    ));

    // A missing scoreboard only disables automatic updates
    let (changes_tx, changes_rx) = mpsc::channel();
    let watcher = match SnapshotWatcher::start(&config, changes_tx) {
        Ok(watcher) => Some(watcher),
        Err(e) => {
            warn!("{}; automatic updates disabled", e);
            None
        }
    };

    let dispatcher_loop = Arc::clone(&dispatcher);
    let dispatcher_handle = thread::Builder::new()
        .name("dispatcher".to_string())
        .spawn(move || dispatcher_loop.run(changes_rx))
        .context("Failed to start dispatcher thread")?;

    if !args.no_console {
        let _console_handle = console::spawn_console(Arc::clone(&dispatcher), Arc::clone(&shutdown));
        println!("Ready. Type `help` for commands, `quit` to exit.");
    }

    shutdown.wait();

    if let Some(watcher) = watcher {
        watcher.stop();
    }
    // Watcher owned the sending side, so the dispatcher loop drains and exits
    if dispatcher_handle.join().is_err() {
        error!("Dispatcher thread panicked");
    }

    info!("Shutdown complete");
    Ok(())
}

/// Build the watcher configuration from CLI arguments
pub fn watch_config(scoreboard: &std::path::Path, args: &WatchArgs) -> WatchConfig {
    WatchConfig::builder()
        .path(scoreboard)
        .debounce(Duration::from_secs(args.debounce_secs))
        .settle(Duration::from_millis(args.settle_millis))
        .build()
}
