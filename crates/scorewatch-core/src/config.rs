//! Watch configuration.
//!
//! Holds the inputs the change watcher needs: which file to observe and the
//! debounce timings. Values come from the CLI (flags or environment); the
//! defaults match a containerised deployment where the game server writes
//! its scoreboard into a shared `/data` volume.

use std::path::PathBuf;
use std::time::Duration;

/// Default location of the scoreboard file inside the container
pub const DEFAULT_SCOREBOARD_PATH: &str = "/data/scoreboard.json";

/// Minimum time between two automatic notifications
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_secs(30);

/// Quiet period after the last write before a change counts as settled
pub const DEFAULT_SETTLE: Duration = Duration::from_secs(1);

/// Configuration for the snapshot watcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchConfig {
    /// Scoreboard file to observe
    pub path: PathBuf,
    /// Minimum interval between emitted signals, measured from the last emission
    pub debounce: Duration,
    /// How long the file must stay untouched before a pending change is emitted
    pub settle: Duration,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SCOREBOARD_PATH),
            debounce: DEFAULT_DEBOUNCE,
            settle: DEFAULT_SETTLE,
        }
    }
}

impl WatchConfig {
    /// Create a new configuration builder
    pub fn builder() -> WatchConfigBuilder {
        WatchConfigBuilder::default()
    }
}

/// Builder for WatchConfig
#[derive(Debug, Clone, Default)]
pub struct WatchConfigBuilder {
    path: Option<PathBuf>,
    debounce: Option<Duration>,
    settle: Option<Duration>,
}

impl WatchConfigBuilder {
    /// Set the scoreboard path
    pub fn path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the debounce interval
    pub fn debounce(mut self, debounce: Duration) -> Self {
        self.debounce = Some(debounce);
        self
    }

    /// Set the settle period
    pub fn settle(mut self, settle: Duration) -> Self {
        self.settle = Some(settle);
        self
    }

    /// Build the configuration
    pub fn build(self) -> WatchConfig {
        let default = WatchConfig::default();
        WatchConfig {
            path: self.path.unwrap_or(default.path),
            debounce: self.debounce.unwrap_or(default.debounce),
            settle: self.settle.unwrap_or(default.settle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WatchConfig::default();
        assert_eq!(config.path, PathBuf::from("/data/scoreboard.json"));
        assert_eq!(config.debounce, Duration::from_secs(30));
        assert_eq!(config.settle, Duration::from_secs(1));
    }

    #[test]
    fn test_builder_overrides() {
        let config = WatchConfig::builder()
            .path("/tmp/board.json")
            .debounce(Duration::from_secs(5))
            .build();
        assert_eq!(config.path, PathBuf::from("/tmp/board.json"));
        assert_eq!(config.debounce, Duration::from_secs(5));
        // Untouched fields keep their defaults
        assert_eq!(config.settle, DEFAULT_SETTLE);
    }
}
