/// Revbot - a Slack chat-bot that replies to user messages with their text reversed.
///
/// This crate implements a single-Lambda webhook handler for the Slack Events
/// API:
/// 1. The handler fetches the bot's secrets from SSM Parameter Store
/// 2. In the production stage it verifies the Slack request signature
/// 3. It answers `url_verification` challenges, ignores bot-originated events,
///    and replies to user messages on the originating channel
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - SSM Parameter Store for the signing secret and bot token
/// - slack-morphism for Slack API interactions
/// - Tokio for async runtime
// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod slack;

// Re-export the error type at the crate root for convenience
pub use errors::SlackError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at Lambda startup.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
