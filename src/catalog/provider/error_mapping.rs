//! Maps reqwest failures and error responses into [`FetchError`].

use reqwest::StatusCode;

use crate::catalog::error::FetchError;

/// Longest error body excerpt carried into a status error.
const MAX_BODY_EXCERPT: usize = 160;

pub(super) fn map_transport_error(operation: &str, error: &reqwest::Error) -> FetchError {
    let message = if error.is_timeout() {
        format!("request timed out: {error}")
    } else {
        error.to_string()
    };
    FetchError::Network {
        operation: operation.to_owned(),
        message,
    }
}

pub(super) fn map_status_error(operation: &str, status: StatusCode, body: &str) -> FetchError {
    let message = extract_message(body).unwrap_or_else(|| {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_owned()
        } else {
            truncate_for_message(trimmed, MAX_BODY_EXCERPT)
        }
    });
    FetchError::Status {
        operation: operation.to_owned(),
        status: status.as_u16(),
        message,
    }
}

pub(super) fn map_decode_error(operation: &str, error: &serde_json::Error) -> FetchError {
    FetchError::Decode {
        operation: operation.to_owned(),
        message: error.to_string(),
    }
}

/// Returns the `message` (or `error`) string of a JSON error body.
fn extract_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(ToOwned::to_owned)
}

fn truncate_for_message(message: &str, max_chars: usize) -> String {
    let mut chars = message.chars();
    let mut output: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        output.push_str("...");
    }
    output
}
