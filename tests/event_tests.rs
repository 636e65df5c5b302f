use revbot::SlackError;
use revbot::api::event::{SlackEvent, classify, reverse_text};
use serde_json::json;

#[test]
fn test_classify_challenge() {
    let payload = json!({
        "token": "abc",
        "challenge": "3eZbrw1aBm2rZgRNFdxV2595E9CY3gmdALWMmHkvFXO7tYXAYM8P",
        "type": "url_verification"
    });

    let event = classify(&payload).unwrap();
    assert_eq!(
        event,
        SlackEvent::Challenge("3eZbrw1aBm2rZgRNFdxV2595E9CY3gmdALWMmHkvFXO7tYXAYM8P".to_string())
    );
}

#[test]
fn test_classify_non_string_challenge_is_an_error() {
    let payload = json!({ "challenge": 42 });

    assert!(matches!(
        classify(&payload),
        Err(SlackError::ParseError(_))
    ));
}

#[test]
fn test_classify_bot_event() {
    let payload = json!({
        "bot_id": "B1",
        "event": { "text": "olleh", "channel": "C1" }
    });

    assert_eq!(classify(&payload).unwrap(), SlackEvent::Bot);
}

#[test]
fn test_classify_user_message() {
    let payload = json!({
        "type": "event_callback",
        "event": {
            "type": "message",
            "text": "hello",
            "channel": "C1",
            "user": "U2CERLKJA"
        }
    });

    let event = classify(&payload).unwrap();
    assert_eq!(
        event,
        SlackEvent::UserMessage {
            channel: "C1".to_string(),
            text: "hello".to_string()
        }
    );
}

#[test]
fn test_classify_missing_event_object() {
    let payload = json!({ "type": "event_callback" });

    assert!(matches!(
        classify(&payload),
        Err(SlackError::ParseError(_))
    ));
}

#[test]
fn test_classify_missing_text_or_channel() {
    let no_text = json!({ "event": { "channel": "C1" } });
    let no_channel = json!({ "event": { "text": "hello" } });

    assert!(matches!(classify(&no_text), Err(SlackError::ParseError(_))));
    assert!(matches!(
        classify(&no_channel),
        Err(SlackError::ParseError(_))
    ));
}

#[test]
fn test_reverse_text() {
    assert_eq!(reverse_text("hello"), "olleh");
    assert_eq!(reverse_text(""), "");
    assert_eq!(reverse_text(reverse_text("race car").as_str()), "race car");
}
