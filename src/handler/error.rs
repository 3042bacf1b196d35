//! Failure taxonomy and the error-to-response mapping.
//!
//! Each variant maps to exactly one structured body. Bodies carry an
//! `error` label and a human-readable `details`; storage failures add the
//! underlying error text under `message`. Stack traces never leave the
//! handler.

use serde_json::{json, Value};
use thiserror::Error;

use crate::event::ApiGatewayResponse;
use crate::http::cors::CorsHeaders;
use crate::http::response::json_response;
use crate::storage::StoreError;

/// Everything the handler can reject a request with.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// No authorizer output in the request context.
    #[error("missing authorizer in request context")]
    Unauthorized,

    /// Create request with no body.
    #[error("request body is required")]
    MissingBody,

    /// Create request whose body is not valid JSON.
    #[error("invalid JSON in request body: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Create request missing a truthy `productivity` or `feedback`.
    #[error("productivity level and feedback are required")]
    MissingFields,

    /// Method outside the GET/POST/OPTIONS contract.
    #[error("unsupported HTTP method: {0}")]
    MethodNotAllowed(String),

    /// The put against the table failed.
    #[error("database operation failed: {0}")]
    Put(StoreError),

    /// The partition query against the table failed.
    #[error("database query failed: {0}")]
    Query(StoreError),

    /// Last-resort net for anything escaping the normal paths.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl HandlerError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Unauthorized => 401,
            Self::MissingBody | Self::InvalidJson(_) | Self::MissingFields => 400,
            Self::MethodNotAllowed(_) => 405,
            Self::Put(_) | Self::Query(_) | Self::Unexpected(_) => 500,
        }
    }

    fn body(&self) -> Value {
        match self {
            Self::Unauthorized => json!({
                "error": "Unauthorized - No authorizer found",
                "details": "Missing authorizer in request context",
            }),
            Self::MissingBody => json!({
                "error": "No request body provided",
                "details": "Request body is required",
            }),
            Self::InvalidJson(parse_error) => json!({
                "error": "Invalid JSON in request body",
                "details": parse_error.to_string(),
            }),
            Self::MissingFields => json!({
                "error": "Productivity level and feedback are required",
                "details": "Please provide both productivity level and feedback",
            }),
            Self::MethodNotAllowed(method) => json!({
                "error": "Method not allowed",
                "details": format!("Unsupported HTTP method: {method}"),
            }),
            Self::Put(store_error) => json!({
                "error": "Failed to create log entry",
                "message": store_error.to_string(),
                "details": "Database operation failed",
            }),
            Self::Query(store_error) => json!({
                "error": "Failed to fetch logs",
                "message": store_error.to_string(),
                "details": "Database query failed",
            }),
            Self::Unexpected(message) => json!({
                "error": "Internal server error",
                "message": message,
                "details": "Unexpected error occurred",
            }),
        }
    }

    /// Convert into the structured response for this failure.
    pub fn into_response(self, cors: &CorsHeaders) -> ApiGatewayResponse {
        json_response(self.status_code(), cors, &self.body())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(HandlerError::Unauthorized.status_code(), 401);
        assert_eq!(HandlerError::MissingBody.status_code(), 400);
        assert_eq!(HandlerError::MissingFields.status_code(), 400);
        assert_eq!(
            HandlerError::MethodNotAllowed("DELETE".to_string()).status_code(),
            405
        );
        assert_eq!(
            HandlerError::Put(StoreError("boom".to_string())).status_code(),
            500
        );
        assert_eq!(
            HandlerError::Unexpected("boom".to_string()).status_code(),
            500
        );
    }

    #[test]
    fn test_storage_failure_body_carries_error_text() {
        let cors = CorsHeaders::new("https://example.com");
        let response =
            HandlerError::Query(StoreError("connection reset".to_string())).into_response(&cors);
        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["error"], "Failed to fetch logs");
        assert_eq!(body["message"], "connection reset");
        assert_eq!(body["details"], "Database query failed");
    }

    #[test]
    fn test_missing_fields_body_names_both() {
        let cors = CorsHeaders::new("https://example.com");
        let response = HandlerError::MissingFields.into_response(&cors);
        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["error"], "Productivity level and feedback are required");
        assert!(body.get("message").is_none());
    }
}
