//! Scoreboard snapshots.
//!
//! The game server periodically writes its state to a JSON file. This module
//! parses that file into an immutable [`Snapshot`]:
//!
//! - **Model**: typed server header and player roster with documented defaults
//! - **Store**: re-reads the file on every call; any failure yields `None`
//!
//! ## File Shape
//!
//! ```text
//! { "server":  { "name", "map", "players", "maxPlayers", "timestamp" },
//!   "players": [ { "name", "score", "kills", "deaths", "team", "isBot" } ] }
//! ```
//!
//! Every field is optional.

mod model;
mod store;

pub use model::{Player, ServerInfo, Snapshot, UNKNOWN};
pub use store::{SnapshotSource, SnapshotStore};
