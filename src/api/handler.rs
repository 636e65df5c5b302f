//! Lambda handler - orchestrates one webhook invocation.
//!
//! This module handles:
//! - Secret retrieval from SSM
//! - Request validation (body, signature)
//! - Event classification and the reply dispatch

use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, warn};

use super::{event, helpers, parsing, signature};
use crate::core::config::AppConfig;
use crate::core::secrets::{self, SecretBundle};
use crate::errors::SlackError;
use crate::slack::{MessageGateway, SlackClient};

pub use self::function_handler as handler;

/// Lambda handler for an inbound Slack Events API request.
///
/// # Errors
///
/// Returns an invocation-level error when configuration or secret retrieval
/// fails, when the payload is malformed, or when the reply dispatch fails.
/// A bad request signature is not an error; it produces a 400 response.
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<impl Serialize, Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    let secrets = secrets::fetch_secrets(&config.secrets_name).await?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        stage = %config.stage,
        "Handling Slack webhook request"
    );

    let gateway = SlackClient::new(secrets.bot_token.clone());
    let response = handle_request(&config, &secrets, &event.payload, &gateway).await?;
    Ok(response)
}

/// Process one proxy payload end to end and build the proxy response.
///
/// Split out from `function_handler` so tests can supply a mock gateway and
/// an in-memory secret bundle.
///
/// # Errors
///
/// Returns `SlackError` for malformed payloads and failed dispatches; these
/// surface as invocation failures rather than structured HTTP responses.
pub async fn handle_request(
    config: &AppConfig,
    secrets: &SecretBundle,
    payload: &Value,
    gateway: &dyn MessageGateway,
) -> Result<Value, SlackError> {
    // The signature covers the body byte for byte, so it is kept as the raw
    // string and only parsed afterwards.
    let body = parsing::extract_body(payload)?;
    let parsed: Value = serde_json::from_str(&body)
        .map_err(|e| SlackError::ParseError(format!("request body is not valid JSON: {e}")))?;

    if config.enforce_signature() {
        let headers = payload.get("headers").unwrap_or(&Value::Null);
        // Absent headers verify as empty strings and fail closed.
        let sig = parsing::get_header_value(headers, "X-Slack-Signature").unwrap_or("");
        let timestamp =
            parsing::get_header_value(headers, "X-Slack-Request-Timestamp").unwrap_or("");

        if !signature::verify_slack_signature(&body, timestamp, sig, &secrets.signing_secret) {
            return Ok(helpers::bad_signature_response());
        }
        info!("Slack signature verified successfully");
    }

    match event::classify(&parsed)? {
        event::SlackEvent::Challenge(challenge) => Ok(helpers::challenge_response(&challenge)),
        event::SlackEvent::Bot => {
            warn!("Ignoring bot event");
            Ok(helpers::ok_empty())
        }
        event::SlackEvent::UserMessage { channel, text } => {
            let reversed = event::reverse_text(&text);
            gateway.post_message(&channel, &reversed).await?;
            Ok(helpers::ok_empty())
        }
    }
}
