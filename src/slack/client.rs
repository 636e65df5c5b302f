//! Slack API client module
//!
//! Encapsulates the `chat.postMessage` call behind the `MessageGateway`
//! boundary.

use async_trait::async_trait;
use slack_morphism::hyper_tokio::{SlackClientHyperConnector, SlackHyperClient};
use slack_morphism::prelude::SlackApiChatPostMessageRequest;
use slack_morphism::{SlackApiToken, SlackApiTokenValue, SlackChannelId, SlackMessageContent};
use tracing::{info, warn};

use super::MessageGateway;
use crate::errors::SlackError;

// Build the Slack client connector safely without panicking.
// If connector construction fails, store None and surface a SlackError at call sites.
static SLACK_CLIENT: std::sync::LazyLock<Option<SlackHyperClient>> =
    std::sync::LazyLock::new(|| match SlackClientHyperConnector::new() {
        Ok(connector) => Some(SlackHyperClient::new(connector)),
        Err(e) => {
            warn!("Failed to create Slack HTTP connector: {}", e);
            None
        }
    });

/// Slack Web API client authenticated with the bot token.
pub struct SlackClient {
    token: SlackApiToken,
}

impl SlackClient {
    #[must_use]
    pub fn new(bot_token: String) -> Self {
        Self {
            token: SlackApiToken::new(SlackApiTokenValue::new(bot_token)),
        }
    }
}

#[async_trait]
impl MessageGateway for SlackClient {
    async fn post_message(&self, channel: &str, text: &str) -> Result<(), SlackError> {
        let Some(client) = SLACK_CLIENT.as_ref() else {
            return Err(SlackError::ApiError(
                "Slack HTTP connector unavailable".to_string(),
            ));
        };

        let session = client.open_session(&self.token);
        let request = SlackApiChatPostMessageRequest::new(
            SlackChannelId::new(channel.to_string()),
            SlackMessageContent::new().with_text(text.to_string()),
        );
        session.chat_post_message(&request).await?;

        info!("Posted reply to channel {}", channel);
        Ok(())
    }
}
