use std::sync::mpsc::Receiver;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::query::Query;
use super::sink::{ChannelId, MessageSink};
use crate::render::{Embed, render_board, render_server_info, render_top_n};
use crate::snapshot::SnapshotSource;
use crate::watch::SettledChange;

/// Reply shown when the scoreboard cannot be read
pub const NO_DATA_MESSAGE: &str = "No scoreboard data found yet.";

/// Reply to an on-demand query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Board(Embed),
    Text(String),
    NoData,
}

impl Response {
    /// Only the requester should see the reply
    pub fn is_ephemeral(&self) -> bool {
        matches!(self, Response::NoData)
    }

    pub fn to_plain_text(&self) -> String {
        match self {
            Response::Board(embed) => embed.to_plain_text(),
            Response::Text(text) => text.clone(),
            Response::NoData => NO_DATA_MESSAGE.to_string(),
        }
    }
}

/// Outcome of handling a settled change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// No destination configured
    Disabled,
    /// Scoreboard unavailable, nothing sent
    NoData,
    Delivered,
    /// The sink reported an error; already logged
    DeliveryFailed,
}

/// Routes queries and settled changes through store, formatter and sink
pub struct Dispatcher<S, K> {
    source: S,
    sink: K,
    destination: Option<ChannelId>,
}

impl<S: SnapshotSource, K: MessageSink> Dispatcher<S, K> {
    pub fn new(source: S, sink: K, destination: Option<ChannelId>) -> Self {
        Self {
            source,
            sink,
            destination,
        }
    }

    pub fn destination(&self) -> Option<ChannelId> {
        self.destination
    }

    pub fn handle_query(&self, query: &Query, now: DateTime<Utc>) -> Response {
        let Some(snapshot) = self.source.load() else {
            debug!("Query {} answered with no data", query.kind());
            return Response::NoData;
        };

        match query {
            Query::Board => Response::Board(render_board(&snapshot, now)),
            Query::Top { n } => Response::Text(render_top_n(&snapshot, *n)),
            Query::ServerInfo => Response::Text(render_server_info(&snapshot, now)),
        }
    }

    pub fn handle_settled_change(&self, now: DateTime<Utc>) -> Notification {
        let Some(channel) = self.destination else {
            return Notification::Disabled;
        };
        // Absence of data is not a delivery failure
        let Some(snapshot) = self.source.load() else {
            debug!("Scoreboard changed but is unavailable, skipping notification");
            return Notification::NoData;
        };

        let embed = render_board(&snapshot, now);
        match self.sink.send_embed(channel, &embed) {
            Ok(()) => {
                info!("Posted scoreboard update to channel {}", channel);
                Notification::Delivered
            }
            Err(e) => {
                warn!("Failed to post scoreboard update to channel {}: {}", channel, e);
                Notification::DeliveryFailed
            }
        }
    }

    /// Deliver settled changes until the sending side disconnects.
    ///
    /// This is the notification execution context: call it on the thread
    /// that is allowed to use the sink.
    pub fn run(&self, changes: Receiver<SettledChange>) {
        debug!("Dispatcher loop started");
        for change in changes.iter() {
            debug!(
                "Settled change for {} ({} event(s))",
                change.path.display(),
                change.events
            );
            self.handle_settled_change(Utc::now());
        }
        debug!("Dispatcher loop stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::DeliveryError;
    use crate::snapshot::Snapshot;
    use std::path::PathBuf;
    use std::sync::Mutex;
    use std::sync::mpsc;
    use std::thread;

    struct FixedSource(Option<Snapshot>);

    impl SnapshotSource for FixedSource {
        fn load(&self) -> Option<Snapshot> {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        sent: Mutex<Vec<(ChannelId, Embed)>>,
        fail: bool,
    }

    impl RecordingSink {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        fn sent(&self) -> Vec<(ChannelId, Embed)> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl MessageSink for RecordingSink {
        fn send_embed(&self, channel: ChannelId, embed: &Embed) -> Result<(), DeliveryError> {
            self.sent.lock().unwrap().push((channel, embed.clone()));
            if self.fail {
                Err(DeliveryError::Rejected { status: 500 })
            } else {
                Ok(())
            }
        }
    }

    fn alpha() -> Snapshot {
        Snapshot::from_json_str(
            r#"{
                "server": {"name": "Alpha", "map": "de_dust", "players": 5, "maxPlayers": 10, "timestamp": 1000},
                "players": [
                    {"name": "A", "score": 30, "kills": 10, "deaths": 2, "team": "RED"},
                    {"name": "B", "score": 30, "kills": 5, "deaths": 5, "team": "BLU", "isBot": true}
                ]
            }"#,
        )
        .unwrap()
    }

    fn channel() -> Option<ChannelId> {
        ChannelId::from_raw(42)
    }

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1060, 0).unwrap()
    }

    #[test]
    fn test_query_without_data() {
        let dispatcher = Dispatcher::new(FixedSource(None), RecordingSink::default(), channel());

        for query in [Query::Board, Query::Top { n: Some(3) }, Query::ServerInfo] {
            let response = dispatcher.handle_query(&query, now());
            assert_eq!(response, Response::NoData);
            assert!(response.is_ephemeral());
            assert_eq!(response.to_plain_text(), "No scoreboard data found yet.");
        }
    }

    #[test]
    fn test_query_top() {
        let dispatcher =
            Dispatcher::new(FixedSource(Some(alpha())), RecordingSink::default(), None);

        let response = dispatcher.handle_query(&Query::Top { n: Some(1) }, now());
        assert_eq!(response, Response::Text("1. A — 30 (10/2) [RED]".to_string()));
        assert!(!response.is_ephemeral());
    }

    #[test]
    fn test_query_board_and_server() {
        let dispatcher =
            Dispatcher::new(FixedSource(Some(alpha())), RecordingSink::default(), None);

        let Response::Board(embed) = dispatcher.handle_query(&Query::Board, now()) else {
            panic!("expected a board");
        };
        assert_eq!(embed.title, "Alpha — de_dust");
        assert_eq!(embed.description, "Players: 5/10 • Updated 1 minute ago");

        let response = dispatcher.handle_query(&Query::ServerInfo, now());
        assert!(response.to_plain_text().starts_with("Name: Alpha\nMap: de_dust"));
    }

    #[test]
    fn test_settled_change_delivers_board() {
        let dispatcher =
            Dispatcher::new(FixedSource(Some(alpha())), RecordingSink::default(), channel());

        assert_eq!(dispatcher.handle_settled_change(now()), Notification::Delivered);
        let sent = dispatcher.sink.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0.get(), 42);
        assert_eq!(sent[0].1.title, "Alpha — de_dust");
    }

    #[test]
    fn test_settled_change_without_data_sends_nothing() {
        let dispatcher = Dispatcher::new(FixedSource(None), RecordingSink::default(), channel());

        assert_eq!(dispatcher.handle_settled_change(now()), Notification::NoData);
        assert!(dispatcher.sink.sent().is_empty());
    }

    #[test]
    fn test_settled_change_without_destination() {
        let dispatcher =
            Dispatcher::new(FixedSource(Some(alpha())), RecordingSink::default(), None);

        assert_eq!(dispatcher.handle_settled_change(now()), Notification::Disabled);
        assert!(dispatcher.sink.sent().is_empty());
    }

    #[test]
    fn test_delivery_failure_is_contained() {
        let dispatcher =
            Dispatcher::new(FixedSource(Some(alpha())), RecordingSink::failing(), channel());

        assert_eq!(
            dispatcher.handle_settled_change(now()),
            Notification::DeliveryFailed
        );
        // Next change is still handled
        assert_eq!(
            dispatcher.handle_settled_change(now()),
            Notification::DeliveryFailed
        );
        assert_eq!(dispatcher.sink.sent().len(), 2);
    }

    #[test]
    fn test_run_drains_until_disconnect() {
        let dispatcher =
            Dispatcher::new(FixedSource(Some(alpha())), RecordingSink::default(), channel());
        let (tx, rx) = mpsc::channel();

        thread::scope(|scope| {
            let handle = scope.spawn(|| dispatcher.run(rx));
            for events in [1, 3] {
                tx.send(SettledChange {
                    path: PathBuf::from("/data/scoreboard.json"),
                    emitted_at: Utc::now(),
                    events,
                })
                .unwrap();
            }
            drop(tx);
            handle.join().unwrap();
        });

        assert_eq!(dispatcher.sink.sent().len(), 2);
    }
}
