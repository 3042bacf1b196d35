//! Proxy response builders.
//!
//! # Responsibilities
//! - JSON-encode success and failure bodies
//! - Attach the fixed CORS header set to every response

use serde::Serialize;

use crate::event::ApiGatewayResponse;
use crate::http::cors::CorsHeaders;

/// Build a response with a JSON-encoded body.
pub fn json_response(
    status_code: u16,
    cors: &CorsHeaders,
    body: &impl Serialize,
) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: cors.to_map(),
        // Serialization of our own body shapes cannot fail; fall back to an
        // empty object rather than panic inside the response path.
        body: serde_json::to_string(body).unwrap_or_else(|_| "{}".to_string()),
    }
}

/// Build a response with no body (preflight).
pub fn empty_response(status_code: u16, cors: &CorsHeaders) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: cors.to_map(),
        body: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_response_encodes_body() {
        let cors = CorsHeaders::new("https://example.com");
        let response = json_response(201, &cors, &json!({"message": "ok"}));
        assert_eq!(response.status_code, 201);
        assert_eq!(response.body, r#"{"message":"ok"}"#);
        assert!(response.headers.contains_key("Access-Control-Allow-Origin"));
    }

    #[test]
    fn test_empty_response_has_no_body() {
        let cors = CorsHeaders::new("https://example.com");
        let response = empty_response(200, &cors);
        assert_eq!(response.status_code, 200);
        assert!(response.body.is_empty());
        assert_eq!(response.headers.len(), 4);
    }
}
