use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{Error, Result};

/// Placeholder shown for any missing text field
pub const UNKNOWN: &str = "?";

/// One fully-parsed read of the scoreboard file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    #[serde(deserialize_with = "null_as_default")]
    pub server: ServerInfo,
    /// Roster in file order, not sorted
    #[serde(deserialize_with = "null_as_default")]
    pub players: Vec<Player>,
}

impl Snapshot {
    /// Parse a scoreboard document.
    ///
    /// Absent fields are defaulted. A document that carries nothing at all
    /// (`null`, `{}`, `[]`, `0`, `""`, `false`) is rejected with
    /// [`Error::EmptyDocument`] since there is nothing to report.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        if is_empty_document(&value) {
            return Err(Error::EmptyDocument);
        }
        if !value.is_object() {
            return Err(Error::Json(serde::de::Error::custom(
                "expected a scoreboard object at the top level",
            )));
        }
        Ok(serde_json::from_value(value)?)
    }
}

fn is_empty_document(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Server header of a snapshot
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerInfo {
    #[serde(deserialize_with = "optional_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "optional_text")]
    pub map: Option<String>,
    #[serde(rename = "players", deserialize_with = "optional_int")]
    pub current_players: Option<i64>,
    #[serde(deserialize_with = "optional_int")]
    pub max_players: Option<i64>,
    #[serde(rename = "timestamp", deserialize_with = "optional_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ServerInfo {
    /// Server name, `None` when absent or blank
    pub fn name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    /// Map name, `None` when absent or blank
    pub fn map(&self) -> Option<&str> {
        non_blank(self.map.as_deref())
    }
}

/// One row in the roster
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Player {
    #[serde(deserialize_with = "optional_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "int_or_zero")]
    pub score: i64,
    #[serde(deserialize_with = "int_or_zero")]
    pub kills: i64,
    #[serde(deserialize_with = "int_or_zero")]
    pub deaths: i64,
    #[serde(deserialize_with = "optional_text")]
    pub team: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_bot: bool,
}

impl Player {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn team(&self) -> &str {
        self.team.as_deref().unwrap_or(UNKNOWN)
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Writers are not consistent about integer vs float encoding, so any JSON
// number is accepted and truncated toward zero.
fn number_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        _ => None,
    }
}

// Names and teams are sometimes written as bare numbers (ids, team indices)
fn optional_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(serde::de::Error::custom(format!(
            "expected text, got {}",
            other
        ))),
    }
}

fn optional_int<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        other => number_as_i64(&other)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("expected a number, got {}", other))),
    }
}

fn int_or_zero<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_int(deserializer)?.unwrap_or(0))
}

fn optional_timestamp<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let secs = match &value {
        Value::Null => return Ok(None),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
    .ok_or_else(|| serde::de::Error::custom(format!("expected unix seconds, got {}", value)))?;

    Ok(DateTime::from_timestamp_millis((secs * 1000.0) as i64))
}
