//! All Slack-specific functionality

pub mod client;

pub use client::SlackClient;

use async_trait::async_trait;

use crate::errors::SlackError;

/// Boundary for sending a reply to a channel.
///
/// The handler depends on this trait rather than the concrete client so
/// tests can record dispatches without touching the Slack API.
#[async_trait]
pub trait MessageGateway: Send + Sync {
    /// Post `text` to `channel` as the bot.
    async fn post_message(&self, channel: &str, text: &str) -> Result<(), SlackError>;
}
