use aws_sdk_ssm::Client as SsmClient;
use serde::Deserialize;

use crate::errors::SlackError;

/// Secrets retrieved once per invocation from SSM Parameter Store.
///
/// The parameter value must be a JSON mapping carrying at least
/// `SIGNING_SECRET` and `BOT_TOKEN`.
#[derive(Debug, Clone, Deserialize)]
pub struct SecretBundle {
    #[serde(rename = "SIGNING_SECRET")]
    pub signing_secret: String,
    #[serde(rename = "BOT_TOKEN")]
    pub bot_token: String,
}

impl SecretBundle {
    /// Parse a secret bundle from the raw parameter value.
    ///
    /// # Errors
    ///
    /// Returns `SlackError::SecretsError` if the value is not a JSON mapping
    /// with the required keys.
    pub fn from_json(value: &str) -> Result<Self, SlackError> {
        serde_json::from_str(value)
            .map_err(|e| SlackError::SecretsError(format!("secrets parse: {e}")))
    }
}

/// Fetch and decrypt the secret bundle named by `secrets_name`.
///
/// # Errors
///
/// Returns an error if the SSM call fails, the parameter is empty, or the
/// value does not parse into a `SecretBundle`.
pub async fn fetch_secrets(secrets_name: &str) -> Result<SecretBundle, SlackError> {
    let shared = aws_config::from_env().load().await;
    let client = SsmClient::new(&shared);

    let resp = client
        .get_parameter()
        .name(secrets_name)
        .with_decryption(true)
        .send()
        .await
        .map_err(|e| SlackError::AwsError(format!("ssm get_parameter: {e}")))?;

    let Some(param) = resp.parameter else {
        return Err(SlackError::SecretsError(format!(
            "parameter {secrets_name} not found"
        )));
    };
    let Some(value) = param.value() else {
        return Err(SlackError::SecretsError(format!(
            "parameter {secrets_name} has no value"
        )));
    };

    SecretBundle::from_json(value)
}
