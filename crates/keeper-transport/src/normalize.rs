//! Mapping of transport failures to user-facing messages.
//!
//! Priority: the server's own message, then a fixed generic message per
//! failure kind. Raw transport detail (URLs, reqwest text, bodies) never
//! reaches the user.

use crate::TransportError;
use serde_json::Value;

const NETWORK_ERROR: &str = "Network Error";
const TIMEOUT_ERROR: &str = "Request timed out";
const DECODE_ERROR: &str = "Unexpected response from server";

/// The single user-displayable message for a failed call.
pub fn normalize(error: &TransportError) -> String {
    match error {
        TransportError::Rejected {
            server_message: Some(message),
            ..
        } if !message.trim().is_empty() => message.clone(),
        TransportError::Rejected { status, .. } => {
            format!("Request failed with status code {}", status)
        }
        TransportError::Timeout => TIMEOUT_ERROR.to_string(),
        TransportError::Http(e) if e.is_timeout() => TIMEOUT_ERROR.to_string(),
        TransportError::Http(e) => match e.status() {
            Some(status) => format!("Request failed with status code {}", status.as_u16()),
            None => NETWORK_ERROR.to_string(),
        },
        TransportError::NetworkUnavailable | TransportError::InvalidUrl(_) => {
            NETWORK_ERROR.to_string()
        }
        TransportError::Decode(_) => DECODE_ERROR.to_string(),
    }
}

/// Pull the message field out of an error response body.
///
/// Looks at `msg`, then `message`, then `errors[0].msg`.
pub fn extract_server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    let direct = ["msg", "message"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str));

    let nested = || {
        value
            .get("errors")
            .and_then(Value::as_array)
            .and_then(|errors| errors.first())
            .and_then(|first| first.get("msg"))
            .and_then(Value::as_str)
    };

    direct
        .or_else(nested)
        .filter(|message| !message.trim().is_empty())
        .map(str::to_string)
}
