//! # Request errors
//!
//! [`RequestError`] is the single failure type of the HTTP client and the auth
//! session. Its `Display` output is the message shown to the user.
//!
//! | Variant | Cause |
//! |---------|-------|
//! | `Network` | the request never completed (DNS, connection refused, CORS, ...) |
//! | `Http` | non-2xx status; `message` comes from the body (see [`error_message`]) |
//! | `Payload` | a 2xx body that is not the JSON we expected |
//! | `Validation` | a client-side form check failed before any request was sent |

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Invalid response: {0}")]
    Payload(String),

    #[error("{0}")]
    Validation(String),
}

impl RequestError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 401/403: the token is missing, invalid or expired.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Payload(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(e: serde_json::Error) -> Self {
        Self::Payload(e.to_string())
    }
}

/// Derive a human-readable message from a failed response.
///
/// - JSON body with a non-empty `error` string → that string.
/// - Any other JSON body → `"{fallback} ({status})"`.
/// - Non-empty plain text body → the text itself.
/// - Empty body → `"{fallback} ({status})"`.
pub fn error_message(status: StatusCode, content_type: Option<&str>, body: &str, fallback: &str) -> String {
    let generic = || format!("{} ({})", fallback, status.as_u16());
    let body = body.trim();
    let declared_json = content_type.is_some_and(|ct| ct.contains("application/json"));

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) if declared_json || value.is_object() => value
            .get("error")
            .and_then(|e| e.as_str())
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(str::to_string)
            .unwrap_or_else(generic),
        _ if declared_json => generic(),
        _ if body.is_empty() => generic(),
        _ => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_body() {
        let msg = error_message(
            StatusCode::CONFLICT,
            Some("application/json"),
            r#"{"error":"Username already taken"}"#,
            "Registration failed",
        );
        assert_eq!(msg, "Username already taken");
    }

    #[test]
    fn test_json_without_error_field_uses_fallback() {
        let msg = error_message(
            StatusCode::BAD_REQUEST,
            Some("application/json; charset=utf-8"),
            r#"{"detail":"nope"}"#,
            "Login failed",
        );
        assert_eq!(msg, "Login failed (400)");
    }

    #[test]
    fn test_plain_text_500_surfaces_raw_text() {
        let msg = error_message(
            StatusCode::INTERNAL_SERVER_ERROR,
            Some("text/plain"),
            "Internal Server Error",
            "Search failed",
        );
        assert_eq!(msg, "Internal Server Error");
    }

    #[test]
    fn test_json_object_without_content_type() {
        let msg = error_message(
            StatusCode::UNAUTHORIZED,
            None,
            r#"{"error":"Invalid token"}"#,
            "Request failed",
        );
        assert_eq!(msg, "Invalid token");
    }

    #[test]
    fn test_broken_json_with_json_content_type() {
        let msg = error_message(
            StatusCode::BAD_GATEWAY,
            Some("application/json"),
            "<html>bad gateway</html>",
            "Search failed",
        );
        assert_eq!(msg, "Search failed (502)");
    }

    #[test]
    fn test_empty_body() {
        let msg = error_message(StatusCode::SERVICE_UNAVAILABLE, None, "  ", "Search failed");
        assert_eq!(msg, "Search failed (503)");
    }

    #[test]
    fn test_unauthorized_detection() {
        let e = RequestError::Http {
            status: 401,
            message: "expired".to_string(),
        };
        assert!(e.is_unauthorized());
        assert_eq!(e.to_string(), "expired");
        assert!(!RequestError::Network("down".to_string()).is_unauthorized());
    }
}
