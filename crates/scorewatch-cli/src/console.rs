use std::io::{self, BufRead};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use chrono::Utc;
use scorewatch_core::{CommandKind, Dispatcher, MessageSink, Query, SnapshotSource};
use strum::IntoEnumIterator;
use tracing::debug;

use crate::shutdown::ShutdownSignal;

/// What a console line asks for
#[derive(Debug, PartialEq, Eq)]
enum ConsoleAction {
    Skip,
    Help,
    Quit,
    Query(Query),
    Invalid(String),
}

fn help_text() -> String {
    let mut lines: Vec<String> = CommandKind::iter()
        .map(|kind| format!("  {:<10} {}", kind.usage(), kind.description()))
        .collect();
    lines.push(format!("  {:<10} {}", "quit", "Stop scorewatch"));
    lines.join("\n")
}

fn parse_line(line: &str) -> ConsoleAction {
    match line.trim() {
        "" => ConsoleAction::Skip,
        "help" | "?" => ConsoleAction::Help,
        "quit" | "exit" | "q" => ConsoleAction::Quit,
        other => match Query::parse(other) {
            Ok(query) => ConsoleAction::Query(query),
            Err(e) => ConsoleAction::Invalid(e.to_string()),
        },
    }
}

/// Spawn a thread answering queries typed on stdin.
///
/// `quit` triggers shutdown. End of input only stops the console, so the
/// watcher keeps running when stdin is not attached.
pub fn spawn_console<S, K>(
    dispatcher: Arc<Dispatcher<S, K>>,
    shutdown: Arc<ShutdownSignal>,
) -> JoinHandle<()>
where
    S: SnapshotSource + Send + Sync + 'static,
    K: MessageSink + Send + Sync + 'static,
{
    thread::spawn(move || {
        debug!("Console started");

        for line in io::stdin().lock().lines() {
            if shutdown.is_triggered() {
                break;
            }
            let Ok(line) = line else {
                break;
            };

            match parse_line(&line) {
                ConsoleAction::Skip => {}
                ConsoleAction::Help => println!("{}", help_text()),
                ConsoleAction::Quit => {
                    shutdown.trigger();
                    break;
                }
                ConsoleAction::Query(query) => {
                    let response = dispatcher.handle_query(&query, Utc::now());
                    println!("{}\n", response.to_plain_text());
                }
                ConsoleAction::Invalid(message) => println!("{} (type `help`)", message),
            }
        }

        debug!("Console stopped");
    })
}
