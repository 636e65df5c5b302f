use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::warn;

type HmacSha256 = Hmac<Sha256>;

/// Maximum allowed age of a signed request, in seconds.
const REPLAY_WINDOW_SECS: i64 = 300;

/// Verify a Slack request signature.
///
/// Recomputes `v0=<hex(HMAC-SHA256(secret, "v0:<timestamp>:<body>"))>` and
/// compares it against the `X-Slack-Signature` header value in constant time.
/// Requests whose timestamp is more than five minutes from local time are
/// rejected as potential replays. Every malformed input (non-numeric
/// timestamp, missing `v0=` prefix, non-hex digest) fails closed.
///
/// Failure is reported only through the boolean; each failure mode logs a
/// warning.
#[must_use]
pub fn verify_slack_signature(
    request_body: &str,
    timestamp: &str,
    signature: &str,
    signing_secret: &str,
) -> bool {
    let Ok(ts) = timestamp.parse::<i64>() else {
        warn!("Request verification failed: non-numeric timestamp {timestamp:?}");
        return false;
    };
    let Ok(now) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        warn!("Request verification failed: system clock before epoch");
        return false;
    };
    #[allow(clippy::cast_possible_wrap)]
    let now_secs = now.as_secs() as i64;
    if (now_secs - ts).abs() > REPLAY_WINDOW_SECS {
        warn!(
            "Request verification failed: timestamp {ts} outside the replay window, potential replay attack"
        );
        return false;
    }

    let Some(sig_hex) = signature.strip_prefix("v0=") else {
        warn!("Request verification failed: signature missing v0= prefix");
        return false;
    };
    let Ok(expected) = hex::decode(sig_hex) else {
        warn!("Request verification failed: signature is not valid hex");
        return false;
    };

    let mut mac = match HmacSha256::new_from_slice(signing_secret.as_bytes()) {
        Ok(mac) => mac,
        Err(e) => {
            warn!("Failed to create HMAC: {}", e);
            return false;
        }
    };
    mac.update(format!("v0:{timestamp}:{request_body}").as_bytes());

    // verify_slice is a constant-time comparison; a plain string equality
    // check would leak match length through timing.
    let verified = mac.verify_slice(&expected).is_ok();
    if !verified {
        warn!("Request verification failed: signature does not match computed digest");
    }
    verified
}

/// Compute the signature Slack would send for the given timestamp and body.
#[must_use]
pub fn compute_signature(timestamp: &str, request_body: &str, signing_secret: &str) -> String {
    let base_string = format!("v0:{timestamp}:{request_body}");
    let mut mac = match HmacSha256::new_from_slice(signing_secret.as_bytes()) {
        Ok(mac) => mac,
        Err(e) => {
            warn!("Failed to create HMAC: {}", e);
            return String::new();
        }
    };
    mac.update(base_string.as_bytes());
    format!("v0={}", hex::encode(mac.finalize().into_bytes()))
}
