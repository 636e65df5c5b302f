//! Classification of Slack Events API payloads.
//!
//! An inbound body is one of three things: a one-time `url_verification`
//! challenge, an event produced by a bot (which must never be answered, or
//! two bots end up echoing at each other forever), or a user message the bot
//! should reply to.

use serde_json::Value;
use tracing::info;

use crate::errors::SlackError;

/// A classified Slack Events API payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlackEvent {
    /// Subscription handshake; the value must be echoed back verbatim.
    Challenge(String),
    /// Event originated by a bot account; ignored.
    Bot,
    /// A user message to reply to.
    UserMessage { channel: String, text: String },
}

/// Classify a parsed Events API body.
///
/// # Errors
///
/// Returns `SlackError::ParseError` when a user-message payload is missing
/// its `event` object or the `text`/`channel` fields. Malformed payloads are
/// an error, never a silent no-op.
pub fn classify(payload: &Value) -> Result<SlackEvent, SlackError> {
    if let Some(challenge) = payload.get("challenge") {
        let challenge = challenge
            .as_str()
            .ok_or_else(|| SlackError::ParseError("challenge is not a string".to_string()))?;
        info!("Challenge data: {}", challenge);
        return Ok(SlackEvent::Challenge(challenge.to_string()));
    }

    if payload.get("bot_id").is_some() {
        return Ok(SlackEvent::Bot);
    }

    let event = payload
        .get("event")
        .ok_or_else(|| SlackError::ParseError("missing event object".to_string()))?;
    let text = event
        .get("text")
        .and_then(Value::as_str)
        .ok_or_else(|| SlackError::ParseError("event missing text field".to_string()))?;
    let channel = event
        .get("channel")
        .and_then(Value::as_str)
        .ok_or_else(|| SlackError::ParseError("event missing channel field".to_string()))?;

    Ok(SlackEvent::UserMessage {
        channel: channel.to_string(),
        text: text.to_string(),
    })
}

/// Reverse a message code point by code point.
///
/// This is an involution: applying it twice returns the input. Combining
/// characters and other multi-scalar graphemes are reversed individually,
/// which is a known limitation.
#[must_use]
pub fn reverse_text(text: &str) -> String {
    text.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverses_ascii() {
        assert_eq!(reverse_text("hello"), "olleh");
    }

    #[test]
    fn reversal_is_an_involution() {
        for input in ["", "a", "hello world", "héllo wörld", "チーム"] {
            assert_eq!(reverse_text(&reverse_text(input)), input);
        }
    }

    #[test]
    fn reverses_code_points_not_bytes() {
        assert_eq!(reverse_text("héllo"), "olléh");
    }
}
