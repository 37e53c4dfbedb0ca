//! One-shot queries against the scoreboard file.

use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use scorewatch_core::{Dispatcher, Query, Response, SnapshotStore};
use tracing::debug;

use crate::sinks::PrintSink;

/// Answer a single query and print the response
pub fn run(scoreboard: &Path, query: Query) -> Result<()> {
    debug!("Running {} query against {}", query.kind(), scoreboard.display());

    // Queries never push, so no destination
    let dispatcher = Dispatcher::new(SnapshotStore::new(scoreboard), PrintSink, None);
    let response = dispatcher.handle_query(&query, Utc::now());

    match response {
        Response::NoData => eprintln!("{}", response.to_plain_text()),
        _ => println!("{}", response.to_plain_text()),
    }
    Ok(())
}
