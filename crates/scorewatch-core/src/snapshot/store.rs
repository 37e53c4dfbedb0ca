use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::Snapshot;
use crate::error::Result;

/// Anything that can produce the current snapshot on demand.
///
/// `None` is the single "unavailable" outcome: callers treat it as normal,
/// not exceptional.
pub trait SnapshotSource {
    fn load(&self) -> Option<Snapshot>;
}

/// Reads the scoreboard file from disk
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the file, surfacing the failure cause
    pub fn try_load(&self) -> Result<Snapshot> {
        let content = fs::read_to_string(&self.path)?;
        Snapshot::from_json_str(&content)
    }
}

impl SnapshotSource for SnapshotStore {
    fn load(&self) -> Option<Snapshot> {
        match self.try_load() {
            Ok(snapshot) => {
                debug!(
                    "Loaded snapshot from {} ({} players)",
                    self.path.display(),
                    snapshot.players.len()
                );
                Some(snapshot)
            }
            Err(e) if e.is_not_found() => {
                debug!("Scoreboard file not found: {}", self.path.display());
                None
            }
            Err(e) => {
                warn!("Scoreboard unavailable ({}): {}", self.path.display(), e);
                None
            }
        }
    }
}
