//! # scorewatch-core
//!
//! Core library for the scorewatch game server reporter.
//!
//! This crate provides:
//! - Scoreboard snapshot parsing with lenient defaults
//! - Player ranking and chat-ready formatting
//! - Debounced change detection for the scoreboard file
//! - Dispatch of queries and automatic notifications to a message sink
//!
//! The chat platform itself is not part of this crate: callers provide a
//! [`MessageSink`] for delivery and feed [`Query`] values in.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod render;
pub mod snapshot;
pub mod watch;

pub use config::{
    DEFAULT_DEBOUNCE, DEFAULT_SCOREBOARD_PATH, DEFAULT_SETTLE, WatchConfig, WatchConfigBuilder,
};
pub use dispatch::{
    ChannelId, CommandKind, DeliveryError, Dispatcher, MessageSink, NO_DATA_MESSAGE, Notification,
    Query, Response,
};
pub use error::{Error, Result};
pub use render::{
    Embed, EmbedField, RankedEntry, RankedView, clamp_top_n, rank, relative_time, render_board,
    render_server_info, render_top_n,
};
pub use snapshot::{Player, ServerInfo, Snapshot, SnapshotSource, SnapshotStore};
pub use watch::{DebounceState, Debouncer, SettledChange, SnapshotWatcher};
