mod cli;
mod commands;
mod console;
mod shutdown;
mod sinks;

use anyhow::Result;
use clap::Parser;
use scorewatch_core::Query;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    // Logs go to stderr, stdout carries query output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("scorewatch=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Score => commands::query::run(&cli.scoreboard, Query::Board),
        Command::Top { n } => commands::query::run(&cli.scoreboard, Query::Top { n }),
        Command::Server => commands::query::run(&cli.scoreboard, Query::ServerInfo),
        Command::Watch(args) => {
            let config = commands::watch::watch_config(&cli.scoreboard, &args);
            commands::watch::run(config, &args)
        }
    }
}
