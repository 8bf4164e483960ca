//! Gateway errors.
//!
//! The gateway never interprets failures beyond decoding the conventional
//! `{ "message": "..." }` body. Callers pick the wording with
//! [`ApiError::message_or`] and decide between inline and blocking display.

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (network, CORS, TLS).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend responded with status {status}")]
    Status { status: u16, message: Option<String> },

    /// A success response whose body does not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Build a status error, decoding `{ message }` from the body when present.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        ApiError::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The backend's own message, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// The backend's message, or `fallback` when there is none.
    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    /// The stored token was refused (expired, revoked, or lacks the role).
    pub fn is_session_rejected(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_extracted_from_body() {
        let err = ApiError::from_response(401, r#"{"message":"Invalid credentials"}"#);
        assert_eq!(err.server_message(), Some("Invalid credentials"));
        assert_eq!(err.message_or("Login failed."), "Invalid credentials");
        assert!(err.is_session_rejected());
    }

    #[test]
    fn test_fallback_when_body_has_no_message() {
        for body in ["", "<html>502</html>", r#"{"error":"x"}"#, r#"{"message":""}"#] {
            let err = ApiError::from_response(500, body);
            assert_eq!(err.server_message(), None, "body: {body}");
            assert_eq!(err.message_or("Failed to fetch."), "Failed to fetch.");
            assert!(!err.is_session_rejected());
        }
    }
}
