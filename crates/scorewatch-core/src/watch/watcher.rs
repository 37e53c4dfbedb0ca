use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use notify::event::ModifyKind;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, info, warn};

use super::debounce::Debouncer;
use crate::config::WatchConfig;
use crate::error::{Error, Result};

/// Upper bound on how long the debounce thread sleeps between stop checks
const STOP_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Emitted once per settled burst of modifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettledChange {
    pub path: PathBuf,
    pub emitted_at: DateTime<Utc>,
    /// Number of filesystem events folded into this signal
    pub events: usize,
}

/// Observes the scoreboard file and sends [`SettledChange`] values.
///
/// The parent directory is watched rather than the file itself so that
/// writers replacing the file (delete + recreate, rename into place) keep
/// being observed.
pub struct SnapshotWatcher {
    path: PathBuf,
    watcher: Option<RecommendedWatcher>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl SnapshotWatcher {
    /// Start observing `config.path`.
    ///
    /// Fails with [`Error::WatchUnavailable`] if the file does not exist yet
    /// or the platform watcher cannot be set up. Callers treat that as
    /// "automatic notifications disabled", not as fatal.
    pub fn start(config: &WatchConfig, output: Sender<SettledChange>) -> Result<Self> {
        let path = config.path.clone();
        let unavailable = |reason: String| Error::WatchUnavailable {
            path: path.clone(),
            reason,
        };

        if !path.exists() {
            return Err(unavailable("file does not exist".to_string()));
        }
        let file_name = path
            .file_name()
            .map(OsStr::to_os_string)
            .ok_or_else(|| unavailable("path has no file name".to_string()))?;
        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let (event_tx, event_rx) = mpsc::channel::<Instant>();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            match res {
                Ok(event) if is_relevant(&event, &file_name) => {
                    // Receiver gone means we are shutting down
                    let _ = event_tx.send(Instant::now());
                }
                Ok(_) => {}
                Err(e) => warn!("File watch error: {}", e),
            }
        })
        .map_err(|e| unavailable(e.to_string()))?;

        watcher
            .watch(&directory, RecursiveMode::NonRecursive)
            .map_err(|e| unavailable(e.to_string()))?;

        let stop = Arc::new(AtomicBool::new(false));
        let debouncer = Debouncer::new(config.debounce, config.settle);
        let worker = DebounceWorker {
            path: path.clone(),
            events: event_rx,
            output,
            debouncer,
            stop: Arc::clone(&stop),
        };
        let handle = thread::Builder::new()
            .name("scoreboard-debounce".to_string())
            .spawn(move || worker.run())?;

        info!(
            "Watching {} (debounce {}s)",
            path.display(),
            config.debounce.as_secs()
        );

        Ok(Self {
            path,
            watcher: Some(watcher),
            stop,
            handle: Some(handle),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stop observing and wait for the debounce thread to exit
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        // Dropping the platform watcher ends event delivery
        self.watcher.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("Debounce thread panicked");
            }
            debug!("Stopped watching {}", self.path.display());
        }
    }
}

impl Drop for SnapshotWatcher {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Only content changes to the watched file name count. Metadata-only
/// changes (permissions, timestamps) are ignored.
fn is_relevant(event: &Event, file_name: &OsString) -> bool {
    let kind_matches = match event.kind {
        EventKind::Create(_) => true,
        EventKind::Modify(ModifyKind::Metadata(_)) => false,
        EventKind::Modify(_) => true,
        _ => false,
    };
    kind_matches
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(file_name.as_os_str()))
}

struct DebounceWorker {
    path: PathBuf,
    events: Receiver<Instant>,
    output: Sender<SettledChange>,
    debouncer: Debouncer,
    stop: Arc<AtomicBool>,
}

impl DebounceWorker {
    fn run(mut self) {
        debug!("Debounce thread started");

        while !self.stop.load(Ordering::SeqCst) {
            let timeout = match self.debouncer.next_deadline() {
                Some(deadline) => deadline
                    .saturating_duration_since(Instant::now())
                    .min(STOP_POLL_INTERVAL),
                None => STOP_POLL_INTERVAL,
            };

            match self.events.recv_timeout(timeout) {
                Ok(at) => self.debouncer.record_modification(at),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            if let Some(events) = self.debouncer.poll(Instant::now()) {
                let change = SettledChange {
                    path: self.path.clone(),
                    emitted_at: Utc::now(),
                    events,
                };
                debug!("Scoreboard settled after {} event(s)", events);
                if self.output.send(change).is_err() {
                    debug!("Settled-change receiver dropped");
                    break;
                }
            }
        }

        debug!("Debounce thread stopped");
    }
}
