//! HTTP error mapping
//!
//! Converts non-success HTTP responses into normalized `SdkError::Transport`
//! values, extracting a provider error code and a human-readable message from
//! the response body when it decodes as JSON, and falling back to the raw
//! body text otherwise.

use reqwest::StatusCode;
use serde_json::Value;

use super::SdkError;

/// Maximum length of a raw body echoed into an error message
const MAX_BODY_SNIPPET: usize = 200;

/// Map a non-success HTTP response body to a transport error.
///
/// The backend reports errors as JSON objects with a `message` (sometimes
/// `error` or `detail`) field and an optional `code` field; anything else is
/// carried through as a truncated raw-body snippet.
pub fn map_http_error(status: StatusCode, body: &str) -> SdkError {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        let code = json
            .get("code")
            .and_then(|c| c.as_str())
            .map(|c| c.to_string());

        if let Some(message) = extract_message(&json) {
            return SdkError::transport_with(message, Some(status.as_u16()), code);
        }
    }

    let message = if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, snippet(body))
    };

    SdkError::transport_with(
        message,
        Some(status.as_u16()),
        status.canonical_reason().map(|r| r.to_string()),
    )
}

fn extract_message(json: &Value) -> Option<String> {
    for key in ["message", "error", "detail"] {
        if let Some(msg) = json.get(key).and_then(|m| m.as_str()) {
            if !msg.is_empty() {
                return Some(msg.to_string());
            }
        }
    }
    None
}

fn snippet(body: &str) -> String {
    if body.len() <= MAX_BODY_SNIPPET {
        body.to_string()
    } else {
        let mut end = MAX_BODY_SNIPPET;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    }
}
