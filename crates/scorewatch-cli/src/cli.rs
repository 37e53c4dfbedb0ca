use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use scorewatch_core::DEFAULT_SCOREBOARD_PATH;

#[derive(Parser)]
#[command(name = "scorewatch")]
#[command(version, about = "Game server scoreboard reporter")]
pub struct Cli {
    /// Scoreboard JSON written by the game server
    #[arg(long, global = true, env = "SCOREBOARD_PATH", default_value = DEFAULT_SCOREBOARD_PATH)]
    pub scoreboard: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the current scoreboard
    Score,
    /// Show top N players by score
    Top {
        /// How many players to list (default 10, clamped to 1-25)
        #[arg(allow_negative_numbers = true)]
        n: Option<i64>,
    },
    /// Show server info
    Server,
    /// Watch the scoreboard and post updates to a channel
    Watch(WatchArgs),
}

#[derive(Args)]
pub struct WatchArgs {
    /// Channel receiving automatic updates (0 disables them)
    #[arg(long, env = "AUTO_CHANNEL_ID", default_value_t = 0)]
    pub channel_id: u64,

    /// Bot token for posting; without one, updates are printed to stdout
    #[arg(long, env = "DISCORD_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// REST API base URL
    #[arg(long, env = "DISCORD_API_BASE", default_value = crate::sinks::DEFAULT_API_BASE)]
    pub api_base: String,

    /// Minimum seconds between automatic updates
    #[arg(long, env = "DEBOUNCE_SECS", default_value_t = 30)]
    pub debounce_secs: u64,

    /// Quiet period in milliseconds before a change counts as settled
    #[arg(long, env = "SETTLE_MILLIS", default_value_t = 1000)]
    pub settle_millis: u64,

    /// Do not read queries from stdin
    #[arg(long)]
    pub no_console: bool,
}
