use chrono::{DateTime, Utc};

use super::embed::Embed;
use super::rank::{DEFAULT_TOP_N, RankedEntry, clamp_top_n, rank};
use super::time::relative_time;
use crate::snapshot::{ServerInfo, Snapshot, UNKNOWN};

/// Shown instead of an empty list
pub const NO_PLAYERS: &str = "_no players_";

/// Title fallback when the server reports no name
pub const DEFAULT_SERVER_NAME: &str = "Server";
/// Title fallback when the server reports no map
pub const DEFAULT_MAP_NAME: &str = "Unknown";

const BOT_MARKER: &str = "🤖 ";
const BOARD_FIELD_NAME: &str = "Top Players";

/// Format one ranking line: `1. 🤖 name — score (kills/deaths) [team]`
pub fn format_entry(entry: &RankedEntry<'_>) -> String {
    let player = entry.player;
    let marker = if player.is_bot { BOT_MARKER } else { "" };
    format!(
        "{}. {}{} — {} ({}/{}) [{}]",
        entry.position,
        marker,
        player.display_name(),
        player.score,
        player.kills,
        player.deaths,
        player.team()
    )
}

fn format_ranking(snapshot: &Snapshot, n: usize) -> String {
    let view = rank(snapshot, n);
    if view.is_empty() {
        return NO_PLAYERS.to_string();
    }
    view.iter().map(format_entry).collect::<Vec<_>>().join("\n")
}

fn format_count(count: Option<i64>) -> String {
    count.map_or_else(|| UNKNOWN.to_string(), |c| c.to_string())
}

fn player_count(server: &ServerInfo) -> String {
    format!(
        "{}/{}",
        format_count(server.current_players),
        format_count(server.max_players)
    )
}

// A missing timestamp means the writer did not say; treat it as fresh.
fn updated(server: &ServerInfo, now: DateTime<Utc>) -> String {
    relative_time(server.updated_at.unwrap_or(now), now)
}

/// Full scoreboard: header plus the top ten players
pub fn render_board(snapshot: &Snapshot, now: DateTime<Utc>) -> Embed {
    let server = &snapshot.server;
    let title = format!(
        "{} — {}",
        server.name().unwrap_or(DEFAULT_SERVER_NAME),
        server.map().unwrap_or(DEFAULT_MAP_NAME)
    );
    let description = format!(
        "Players: {} • Updated {}",
        player_count(server),
        updated(server, now)
    );

    Embed::new(title, description)
        .with_field(BOARD_FIELD_NAME, format_ranking(snapshot, DEFAULT_TOP_N))
}

/// Top-N listing; `n` is clamped into `[1, 25]` and defaults to 10
pub fn render_top_n(snapshot: &Snapshot, n: Option<i64>) -> String {
    format_ranking(snapshot, clamp_top_n(n))
}

pub fn render_server_info(snapshot: &Snapshot, now: DateTime<Utc>) -> String {
    let server = &snapshot.server;
    format!(
        "Name: {}\nMap: {}\nPlayers: {}\nUpdated: {}",
        server.name().unwrap_or(UNKNOWN),
        server.map().unwrap_or(UNKNOWN),
        player_count(server),
        updated(server, now)
    )
}
