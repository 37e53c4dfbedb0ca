//! Scoreboard change detection.
//!
//! ```text
//! notify observer thread      debounce thread             dispatcher
//!   fs event ──filter──▶ Instant ──▶ Debouncer ──▶ SettledChange ──▶ ...
//! ```
//!
//! The notify callback only compares the file name and forwards a
//! timestamp; the debounce thread decides when a burst has settled and
//! hands a [`SettledChange`] to whoever holds the receiving end.

mod debounce;
mod watcher;

pub use debounce::{DebounceState, Debouncer};
pub use watcher::{SettledChange, SnapshotWatcher};
