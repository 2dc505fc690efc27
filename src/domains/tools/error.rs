//! Tool-specific error type and its HTTP response mapping.
//!
//! A failed tool operation produces a [`ToolError`] carrying a human-readable
//! message, the HTTP status to respond with, and an optional detail map of
//! additional context. The `IntoResponse` implementation is the sole
//! error-translation boundary: handlers return `Result<_, ToolError>` and
//! axum serializes the error into a JSON response. Any other failure kind
//! propagates to the framework's default handling untouched.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Value};
use thiserror::Error;

/// Error raised by a tool operation.
///
/// Serialized as `{"error": <message>, ...<detail keys>}` with the carried
/// status code. Defaults to `500 Internal Server Error`.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ToolError {
    /// Human-readable description of the failure.
    pub message: String,

    /// HTTP status code of the resulting response.
    pub status_code: StatusCode,

    /// Additional structured context, merged into the response body.
    pub detail: Map<String, Value>,
}

impl ToolError {
    /// Create a new tool error with the default status (500).
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            detail: Map::new(),
        }
    }

    /// Create a "not found" error (404).
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message).with_status(StatusCode::NOT_FOUND)
    }

    /// Create an "invalid arguments" error (400).
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::new(message).with_status(StatusCode::BAD_REQUEST)
    }

    /// Create an "execution failed" error (500).
    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::new(message)
    }

    /// Set the status code of the resulting response.
    pub fn with_status(mut self, status_code: StatusCode) -> Self {
        self.status_code = status_code;
        self
    }

    /// Attach a detail entry, merged into the response body.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.detail.insert(key.into(), value.into());
        self
    }
}

impl IntoResponse for ToolError {
    fn into_response(self) -> Response {
        let mut body = Map::new();
        body.insert("error".to_string(), Value::String(self.message));
        // Detail keys are merged after the message, so a "error" detail key
        // takes precedence.
        body.extend(self.detail);

        (self.status_code, Json(Value::Object(body))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_defaults_to_internal_server_error() {
        let err = ToolError::new("boom");
        assert_eq!(err.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.detail.is_empty());
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_helper_status_codes() {
        assert_eq!(
            ToolError::not_found("missing").status_code,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ToolError::invalid_arguments("bad").status_code,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ToolError::execution_failed("failed").status_code,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_response_merges_detail_into_body() {
        let err = ToolError::new("X")
            .with_status(StatusCode::NOT_FOUND)
            .with_detail("field", "Y");

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({"error": "X", "field": "Y"}));
    }

    #[tokio::test]
    async fn test_response_without_detail() {
        let response = ToolError::new("boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({"error": "boom"}));
    }

    #[tokio::test]
    async fn test_detail_wins_over_message_on_key_collision() {
        let response = ToolError::new("outer").with_detail("error", "inner").into_response();

        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({"error": "inner"}));
    }
}
