use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::{Error, Result};

/// Commands exposed to the chat audience
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, IntoStaticStr, Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CommandKind {
    Score,
    Top,
    Server,
}

impl CommandKind {
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Short help text shown by the command surface
    pub fn description(&self) -> &'static str {
        match self {
            Self::Score => "Show the current scoreboard",
            Self::Top => "Show top N players by score",
            Self::Server => "Show server info",
        }
    }

    pub fn usage(&self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Top => "top [n]",
            Self::Server => "server",
        }
    }
}

/// An on-demand request for scoreboard data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    Board,
    /// `n` is clamped at render time
    Top { n: Option<i64> },
    ServerInfo,
}

impl Query {
    /// Build a query from a command and its arguments
    pub fn from_command(kind: CommandKind, args: &[&str]) -> Result<Self> {
        match (kind, args) {
            (CommandKind::Score, []) => Ok(Query::Board),
            (CommandKind::Server, []) => Ok(Query::ServerInfo),
            (CommandKind::Top, []) => Ok(Query::Top { n: None }),
            (CommandKind::Top, [n]) => n
                .parse::<i64>()
                .map(|n| Query::Top { n: Some(n) })
                .map_err(|_| Error::InvalidQuery(format!("`{}` is not a whole number", n))),
            (kind, _) => Err(Error::InvalidQuery(format!("usage: {}", kind.usage()))),
        }
    }

    /// Parse a command line such as `top 5`
    pub fn parse(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let command = words
            .next()
            .ok_or_else(|| Error::InvalidQuery("empty command".to_string()))?;
        let kind = command
            .parse::<CommandKind>()
            .map_err(|_| Error::InvalidQuery(format!("unknown command `{}`", command)))?;
        let args: Vec<&str> = words.collect();
        Self::from_command(kind, &args)
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Query::Board => CommandKind::Score,
            Query::Top { .. } => CommandKind::Top,
            Query::ServerInfo => CommandKind::Server,
        }
    }
}
