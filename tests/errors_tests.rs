use std::error::Error;

use revbot::errors::SlackError;

#[test]
fn test_slack_error_implements_error_trait() {
    // Verify SlackError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = SlackError::ParseError("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_slack_error_display() {
    let error = SlackError::ApiError("API failed".to_string());
    assert_eq!(format!("{error}"), "Failed to access Slack API: API failed");

    let error = SlackError::ConfigError("SECRETS_NAME: not set".to_string());
    assert_eq!(
        format!("{error}"),
        "Missing required configuration: SECRETS_NAME: not set"
    );

    let error = SlackError::SecretsError("not a mapping".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to retrieve secrets: not a mapping"
    );

    let error = SlackError::AwsError("ssm get_parameter: timeout".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to interact with AWS services: ssm get_parameter: timeout"
    );
}

#[test]
fn test_slack_error_from_conversions() {
    // Test conversion from anyhow::Error
    let err = anyhow::anyhow!("test error");
    let slack_err: SlackError = err.into();

    match slack_err {
        SlackError::ApiError(msg) => assert!(msg.contains("test error")),
        _ => panic!("Unexpected error type"),
    }
}

#[test]
fn test_secret_bundle_parsing() {
    use revbot::core::secrets::SecretBundle;

    let bundle = SecretBundle::from_json(
        r#"{"SIGNING_SECRET":"shhh","BOT_TOKEN":"xoxb-123","EXTRA":"ignored"}"#,
    )
    .unwrap();
    assert_eq!(bundle.signing_secret, "shhh");
    assert_eq!(bundle.bot_token, "xoxb-123");

    // Not a mapping
    assert!(matches!(
        SecretBundle::from_json(r#""just a string""#),
        Err(SlackError::SecretsError(_))
    ));

    // Missing a required key
    assert!(matches!(
        SecretBundle::from_json(r#"{"SIGNING_SECRET":"shhh"}"#),
        Err(SlackError::SecretsError(_))
    ));
}

#[test]
fn test_stage_gates_signature_enforcement() {
    use revbot::core::config::AppConfig;

    let prod = AppConfig {
        secrets_name: "revbot-secrets".to_string(),
        stage: "prod".to_string(),
    };
    assert!(prod.enforce_signature());

    for stage in ["dev", "staging", "Prod", ""] {
        let config = AppConfig {
            secrets_name: "revbot-secrets".to_string(),
            stage: stage.to_string(),
        };
        assert!(!config.enforce_signature(), "stage {stage:?}");
    }
}
