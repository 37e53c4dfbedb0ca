//! Delivery sinks for automatic notifications.

use std::time::Duration;

use scorewatch_core::{ChannelId, DeliveryError, Embed, MessageSink};
use serde_json::{Value as JsonValue, json};
use tracing::{debug, warn};

/// Discord REST API root
pub const DEFAULT_API_BASE: &str = "https://discord.com/api/v10";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Posts embeds to a Discord channel over the REST API
pub struct DiscordSink {
    agent: ureq::Agent,
    api_base: String,
    token: String,
}

impl DiscordSink {
    pub fn new(api_base: &str, token: String) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .build();

        Self {
            agent: config.into(),
            api_base: api_base.trim_end_matches('/').to_string(),
            token,
        }
    }
}

fn messages_url(api_base: &str, channel: ChannelId) -> String {
    format!("{}/channels/{}/messages", api_base, channel)
}

fn message_payload(embed: &Embed) -> JsonValue {
    json!({ "embeds": [embed] })
}

impl MessageSink for DiscordSink {
    fn send_embed(&self, channel: ChannelId, embed: &Embed) -> Result<(), DeliveryError> {
        let url = messages_url(&self.api_base, channel);
        debug!("POST {}", url);

        let result = self
            .agent
            .post(&url)
            .header("Authorization", &format!("Bot {}", self.token))
            .send_json(message_payload(embed));

        match result {
            Ok(_) => Ok(()),
            Err(ureq::Error::StatusCode(status)) => {
                warn!("Channel {} rejected message with status {}", channel, status);
                Err(DeliveryError::Rejected { status })
            }
            Err(e) => {
                warn!("Failed to reach channel {}: {}", channel, e);
                Err(DeliveryError::Transport(e.to_string()))
            }
        }
    }
}

/// Prints notifications to stdout; used when no token is configured
pub struct PrintSink;

impl MessageSink for PrintSink {
    fn send_embed(&self, channel: ChannelId, embed: &Embed) -> Result<(), DeliveryError> {
        println!("[#{}]\n{}\n", channel, embed.to_plain_text());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_url() {
        let channel = ChannelId::from_raw(987654321).unwrap();
        assert_eq!(
            messages_url(DEFAULT_API_BASE, channel),
            "https://discord.com/api/v10/channels/987654321/messages"
        );
    }

    #[test]
    fn test_api_base_trailing_slash_trimmed() {
        let sink = DiscordSink::new("http://localhost:8080/api/", "token".to_string());
        assert_eq!(sink.api_base, "http://localhost:8080/api");
    }

    #[test]
    fn test_message_payload() {
        let embed = Embed::new("Alpha — de_dust", "Players: 5/10").with_field("Top Players", "1. A");
        let payload = message_payload(&embed);

        assert_eq!(payload["embeds"][0]["title"], "Alpha — de_dust");
        assert_eq!(payload["embeds"][0]["description"], "Players: 5/10");
        assert_eq!(payload["embeds"][0]["fields"][0]["value"], "1. A");
    }

    #[test]
    fn test_unreachable_host_is_transport_error() {
        // Port 9 (discard) on localhost is not expected to accept HTTP
        let sink = DiscordSink::new("http://127.0.0.1:9", "token".to_string());
        let channel = ChannelId::from_raw(1).unwrap();
        let err = sink.send_embed(channel, &Embed::new("t", "d")).unwrap_err();
        assert!(matches!(err, DeliveryError::Transport(_)));
    }
}
