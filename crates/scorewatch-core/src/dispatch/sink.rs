use std::fmt;
use std::num::NonZeroU64;
use std::sync::Arc;

use thiserror::Error;

use crate::render::Embed;

/// Chat channel that receives automatic notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelId(NonZeroU64);

impl ChannelId {
    /// `0` means "not configured"
    pub fn from_raw(id: u64) -> Option<Self> {
        NonZeroU64::new(id).map(Self)
    }

    pub fn get(&self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Destination rejected the message (status {status})")]
    Rejected { status: u16 },

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Delivery primitive of the chat platform.
///
/// Implementations own their own connection and timeouts. Failures are
/// reported back but never retried by the dispatcher.
pub trait MessageSink {
    fn send_embed(&self, channel: ChannelId, embed: &Embed) -> Result<(), DeliveryError>;
}

impl<T: MessageSink + ?Sized> MessageSink for Box<T> {
    fn send_embed(&self, channel: ChannelId, embed: &Embed) -> Result<(), DeliveryError> {
        (**self).send_embed(channel, embed)
    }
}

impl<T: MessageSink + ?Sized> MessageSink for Arc<T> {
    fn send_embed(&self, channel: ChannelId, embed: &Embed) -> Result<(), DeliveryError> {
        (**self).send_embed(channel, embed)
    }
}
