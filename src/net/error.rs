//! Error taxonomy for API calls.
//!
//! ERROR HANDLING
//! ==============
//! Every failed request is classified into one of a small set of variants so
//! callers can react uniformly: `Unauthorized` destroys the session,
//! `Validation` carries field-level messages for forms, and everything else
//! surfaces as a user-readable notice instead of a blocking alert.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// A classified API failure.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("Could not reach the server. Check your connection and try again.")]
    Network(String),

    /// The server rejected the bearer token (HTTP 401).
    #[error("Your session has expired. Please log in again.")]
    Unauthorized,

    /// The server rejected the request contents (4xx other than 401).
    #[error("{message}")]
    Validation {
        message: String,
        fields: Vec<FieldError>,
    },

    /// The server failed (5xx or anything else unexpected).
    #[error("The server ran into a problem (HTTP {0}). Please try again shortly.")]
    Server(u16),

    /// The response body could not be decoded.
    #[error("Received an unexpected response from the server.")]
    Decode(String),
}

/// A validation message attached to a single form field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Classify a non-2xx response from its status code and raw body.
pub fn classify(status: u16, body: &str) -> ApiError {
    match status {
        401 => ApiError::Unauthorized,
        400..=499 => {
            let (message, fields) = parse_detail(body);
            ApiError::Validation { message, fields }
        }
        _ => ApiError::Server(status),
    }
}

/// Parse the API's `detail` payload.
///
/// Two shapes exist upstream: a plain string
/// (`{"detail": "Incorrect email or password"}`) and the field-error list
/// (`{"detail": [{"loc": ["body", "email"], "msg": "..."}]}`). Anything
/// else falls back to a generic message.
fn parse_detail(body: &str) -> (String, Vec<FieldError>) {
    let fallback = || ("The request was rejected by the server.".to_owned(), Vec::new());

    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return fallback();
    };

    match value.get("detail") {
        Some(serde_json::Value::String(message)) => (message.clone(), Vec::new()),
        Some(serde_json::Value::Array(items)) => {
            let fields: Vec<FieldError> = items
                .iter()
                .filter_map(|item| {
                    let message = item.get("msg")?.as_str()?.to_owned();
                    let field = item
                        .get("loc")
                        .and_then(|loc| loc.as_array())
                        .and_then(|loc| loc.iter().rev().find_map(serde_json::Value::as_str))
                        .unwrap_or("request")
                        .to_owned();
                    Some(FieldError { field, message })
                })
                .collect();
            if fields.is_empty() {
                fallback()
            } else {
                ("Please correct the highlighted fields.".to_owned(), fields)
            }
        }
        _ => fallback(),
    }
}
