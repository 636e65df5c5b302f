use std::env;

use crate::errors::SlackError;

/// Process-wide configuration, read once from the environment at startup and
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SSM parameter name holding the secret bundle.
    pub secrets_name: String,
    /// Deployment stage name (`prod` enables signature verification).
    pub stage: String,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `SlackError::ConfigError` if a required environment variable
    /// is missing.
    pub fn from_env() -> Result<Self, SlackError> {
        Ok(Self {
            secrets_name: env::var("SECRETS_NAME")
                .map_err(|e| SlackError::ConfigError(format!("SECRETS_NAME: {e}")))?,
            stage: env::var("STAGE")
                .map_err(|e| SlackError::ConfigError(format!("STAGE: {e}")))?,
        })
    }

    /// Whether inbound requests must carry a valid Slack signature.
    ///
    /// Only the production stage enforces verification; other stages skip the
    /// check entirely. The comparison is exact value equality on the stage
    /// name, never a sentinel or identity check.
    #[must_use]
    pub fn enforce_signature(&self) -> bool {
        self.stage == "prod"
    }
}
