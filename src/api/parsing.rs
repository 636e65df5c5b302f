use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde_json::Value;

use crate::errors::SlackError;

/// Look up a header by name, case-insensitively.
///
/// API Gateway forwards header names with varying capitalization depending on
/// the payload format version.
pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// Extract the raw request body from a Lambda proxy payload.
///
/// When API Gateway marks the body `isBase64Encoded`, it is decoded back to
/// the exact bytes Slack signed; signature verification runs over this string,
/// so it must never be re-serialized.
///
/// # Errors
///
/// Returns `SlackError::ParseError` when the body is missing, not a string,
/// or not valid base64/UTF-8.
pub fn extract_body(payload: &Value) -> Result<String, SlackError> {
    let body = payload
        .get("body")
        .ok_or_else(|| SlackError::ParseError("request missing body".to_string()))?;
    let body_str = body
        .as_str()
        .ok_or_else(|| SlackError::ParseError("request body is not a string".to_string()))?;

    if payload.get("isBase64Encoded").and_then(Value::as_bool) == Some(true) {
        let bytes = STANDARD
            .decode(body_str)
            .map_err(|e| SlackError::ParseError(format!("base64 body: {e}")))?;
        return String::from_utf8(bytes)
            .map_err(|e| SlackError::ParseError(format!("body is not UTF-8: {e}")));
    }

    Ok(body_str.to_string())
}
