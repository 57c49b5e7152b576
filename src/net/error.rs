//! API failure taxonomy and user-facing message extraction.
//!
//! ERROR HANDLING
//! ==============
//! Pages never inspect HTTP details directly. They ask an [`ApiError`] for a
//! message with a page-specific fallback. The lookup order over the response
//! body is fixed and shallow: `message`, `error`, `detail`, then the first
//! field error. A later field error can be hidden by an earlier one; the
//! message always appears in the same slot.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status { status: u16, body: Value },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Message to show inline, or `fallback` when the body carries none.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { body, .. } => extract_message(body).unwrap_or_else(|| fallback.to_owned()),
            _ => fallback.to_owned(),
        }
    }

    /// Like [`ApiError::user_message`] but names the field a validation
    /// error belongs to (`"username: already exists"`). `detail` and
    /// `message` still take precedence.
    pub fn field_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { body, .. } => extract_field_message(body).unwrap_or_else(|| fallback.to_owned()),
            _ => fallback.to_owned(),
        }
    }

    /// Message from the `error` field only, as the donation endpoint reports.
    pub fn error_field(&self, fallback: &str) -> String {
        match self {
            Self::Status { body, .. } => body
                .get("error")
                .and_then(first_text)
                .unwrap_or_else(|| fallback.to_owned()),
            _ => fallback.to_owned(),
        }
    }
}

/// Pick the message to display from an error response body.
pub fn extract_message(body: &Value) -> Option<String> {
    let object = body.as_object()?;
    for key in ["message", "error", "detail"] {
        if let Some(text) = object.get(key).and_then(first_text) {
            return Some(text);
        }
    }
    let (_, first) = object.iter().next()?;
    first_text(first)
}

/// `detail`, then `message`, then the first field error prefixed with its key.
pub fn extract_field_message(body: &Value) -> Option<String> {
    let object = body.as_object()?;
    for key in ["detail", "message"] {
        if let Some(text) = object.get(key).and_then(first_text) {
            return Some(text);
        }
    }
    object
        .iter()
        .find_map(|(key, value)| first_text(value).map(|text| format!("{key}: {text}")))
}

/// A string, or the first string of a non-empty array (DRF field errors).
fn first_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Array(items) => items.first().and_then(Value::as_str).map(str::to_owned),
        _ => None,
    }
}
