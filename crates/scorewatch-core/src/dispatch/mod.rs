//! Notification dispatch.
//!
//! Two entry points share one snapshot source and one sink:
//!
//! - **Queries** (`score`, `top [n]`, `server`) are answered synchronously
//! - **Settled changes** from the watcher render the board and push it to
//!   the configured channel
//!
//! An unreadable scoreboard is never an error here: queries get a neutral
//! "no data yet" reply and automatic notifications are skipped.

mod dispatcher;
mod query;
mod sink;

pub use dispatcher::{Dispatcher, NO_DATA_MESSAGE, Notification, Response};
pub use query::{CommandKind, Query};
pub use sink::{ChannelId, DeliveryError, MessageSink};
