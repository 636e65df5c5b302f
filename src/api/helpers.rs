//! Response builders for the Lambda proxy integration.
//!
//! Every invocation produces exactly one response of the shape
//! `{"statusCode": n, "body": "<json string>"}`.

use serde_json::{Value, json};

/// Returns a 200 OK response with an empty JSON body.
#[must_use]
pub fn ok_empty() -> Value {
    json!({ "statusCode": 200, "body": "{}" })
}

/// Returns a 200 OK response echoing a `url_verification` challenge.
#[must_use]
pub fn challenge_response(challenge: &str) -> Value {
    json!({
        "statusCode": 200,
        "body": json!({ "challenge": challenge }).to_string()
    })
}

/// Returns the 400 response sent when signature verification fails.
#[must_use]
pub fn bad_signature_response() -> Value {
    json!({
        "statusCode": 400,
        "body": json!({ "Error": "Bad Request Signature" }).to_string()
    })
}
