//! Inbound and outbound event shapes for the API Gateway proxy integration.
//!
//! # Responsibilities
//! - Deserialize the proxy event fields the handler consumes (method,
//!   headers, body, authorizer claims)
//! - Serialize the proxy response contract expected by API Gateway
//!
//! # Design Decisions
//! - Only the consumed subset of the event is modeled; unknown fields are
//!   ignored by serde
//! - All context layers are optional so a missing authorizer deserializes
//!   cleanly instead of failing the whole event

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The subset of an API Gateway proxy event the handler consumes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiGatewayEvent {
    /// Inbound HTTP method (`OPTIONS`, `POST`, `GET`, or anything else).
    pub http_method: String,

    /// Request headers. Logged, not otherwise consumed.
    pub headers: HashMap<String, String>,

    /// Raw request body. Required and JSON-parsed on the create path.
    pub body: Option<String>,

    /// Context populated by API Gateway, including the authorizer output.
    pub request_context: RequestContext,
}

impl ApiGatewayEvent {
    /// The verified subject identifier, if the external authorizer ran.
    pub fn subject(&self) -> Option<&str> {
        self.request_context
            .authorizer
            .as_ref()
            .and_then(|authorizer| authorizer.claims.sub.as_deref())
    }
}

/// Request context attached by API Gateway.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RequestContext {
    /// Output of the Cognito authorizer. Absent when no authorizer ran.
    pub authorizer: Option<Authorizer>,
}

/// Verified identity claims supplied by the authorizer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Authorizer {
    pub claims: Claims,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Claims {
    /// Stable subject identifier of the authenticated user.
    pub sub: Option<String>,
}

/// Proxy response shape returned to API Gateway.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    /// JSON-encoded body, or the empty string for preflight.
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_with_authorizer() {
        let raw = serde_json::json!({
            "httpMethod": "GET",
            "headers": {"Content-Type": "application/json"},
            "requestContext": {
                "authorizer": {"claims": {"sub": "user-123", "email": "x@y.z"}}
            }
        });
        let event: ApiGatewayEvent = serde_json::from_value(raw).unwrap();
        assert_eq!(event.http_method, "GET");
        assert_eq!(event.subject(), Some("user-123"));
        assert!(event.body.is_none());
    }

    #[test]
    fn test_event_without_authorizer() {
        let raw = serde_json::json!({
            "httpMethod": "POST",
            "body": "{}",
            "requestContext": {}
        });
        let event: ApiGatewayEvent = serde_json::from_value(raw).unwrap();
        assert_eq!(event.subject(), None);
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let response = ApiGatewayResponse {
            status_code: 201,
            headers: HashMap::new(),
            body: "{}".to_string(),
        };
        let raw = serde_json::to_value(&response).unwrap();
        assert_eq!(raw["statusCode"], 201);
        assert!(raw.get("headers").is_some());
    }
}
