//! # Error types shared by the client and session layers
//!
//! Every failure of a backend call surfaces as a single [`ApiError`], whatever
//! the endpoint. [`ApiErrorKind`] tells the failure sources apart:
//!
//! | Kind | Meaning |
//! |------|---------|
//! | `Transport` | no response at all (DNS, connection refused, CORS, ...) |
//! | `Server` | non-2xx response; `status` and the decoded `body` are kept |
//! | `MalformedResponse` | 2xx response whose body is not the expected JSON |
//! | `InvalidRequest` | the request itself could not be encoded; nothing was sent |
//!
//! Form checks that run before a request is built use [`ValidationError`]
//! instead, and never reach the client.

use serde_json::Value;

/// Message used when a failed response carries nothing readable.
pub const GENERIC_FAILURE: &str = "API request failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    Transport,
    Server,
    MalformedResponse,
    InvalidRequest,
}

/// Failure of a backend call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
    /// HTTP status, when a response was received.
    pub status: Option<u16>,
    /// Error body, when it was valid JSON.
    pub body: Option<Value>,
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Transport,
            message: message.into(),
            status: None,
            body: None,
        }
    }

    pub fn malformed(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::MalformedResponse,
            message: message.into(),
            status: Some(status),
            body: None,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::InvalidRequest,
            message: message.into(),
            status: None,
            body: None,
        }
    }

    /// Build the error for a non-2xx response from its raw body.
    ///
    /// The message is the string `detail` field when present, otherwise the
    /// serialised `detail` value, otherwise the serialised body, otherwise
    /// the raw text, and finally [`GENERIC_FAILURE`].
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<Value>(body).ok();
        let message = match &parsed {
            Some(json) => message_from_json(json),
            None => {
                let text = body.trim();
                (!text.is_empty()).then(|| text.to_string())
            }
        };
        Self {
            kind: ApiErrorKind::Server,
            message: message.unwrap_or_else(|| GENERIC_FAILURE.to_string()),
            status: Some(status),
            body: parsed,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status, Some(401 | 403))
    }
}

fn message_from_json(json: &Value) -> Option<String> {
    match json.get("detail") {
        Some(Value::String(detail)) if !detail.is_empty() => return Some(detail.clone()),
        Some(Value::Null) | Some(Value::String(_)) | None => {}
        Some(detail) => return serde_json::to_string(detail).ok(),
    }
    serde_json::to_string(json).ok().filter(|s| !s.is_empty())
}

/// Error raised by the session layer itself.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("no authenticated user")]
    NotAuthenticated,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// A form field failed a local check; shown inline, never sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_string_is_the_message() {
        let err = ApiError::from_response(400, r#"{"detail":"Email already registered"}"#);
        assert_eq!(err.kind, ApiErrorKind::Server);
        assert_eq!(err.message, "Email already registered");
        assert_eq!(err.to_string(), "Email already registered");
        assert_eq!(err.status, Some(400));
        assert!(err.body.is_some());
    }

    #[test]
    fn test_structured_detail_is_serialised() {
        let body = r#"{"detail":[{"loc":["body","title"],"msg":"too short"}]}"#;
        let err = ApiError::from_response(422, body);
        assert_eq!(err.message, r#"[{"loc":["body","title"],"msg":"too short"}]"#);
    }

    #[test]
    fn test_body_without_detail_is_serialised() {
        let err = ApiError::from_response(500, r#"{"error": "boom"}"#);
        assert_eq!(err.message, r#"{"error":"boom"}"#);

        let err = ApiError::from_response(400, r#"{"detail": ""}"#);
        assert_eq!(err.message, r#"{"detail":""}"#);
    }

    #[test]
    fn test_non_json_body_falls_back_to_text_then_generic() {
        let err = ApiError::from_response(502, "Bad Gateway\n");
        assert_eq!(err.message, "Bad Gateway");
        assert!(err.body.is_none());

        let err = ApiError::from_response(500, "");
        assert_eq!(err.message, GENERIC_FAILURE);
    }

    #[test]
    fn test_unauthorized_statuses() {
        assert!(ApiError::from_response(401, "").is_unauthorized());
        assert!(ApiError::from_response(403, "").is_unauthorized());
        assert!(!ApiError::from_response(404, "").is_unauthorized());
        assert!(!ApiError::transport("offline").is_unauthorized());
    }
}
