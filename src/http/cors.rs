//! Fixed cross-origin response headers.
//!
//! Every response, success or failure, carries the identical header set.
//! Only the allowed origin is configurable; the rest of the set is part of
//! the public contract.

use std::collections::HashMap;

const ALLOW_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";
const ALLOW_METHODS: &str = "GET,POST,OPTIONS";

/// The cross-origin header set attached to every response.
#[derive(Debug, Clone)]
pub struct CorsHeaders {
    origin: String,
}

impl CorsHeaders {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
        }
    }

    /// Materialize the header map for one response.
    pub fn to_map(&self) -> HashMap<String, String> {
        HashMap::from([
            (
                "Access-Control-Allow-Origin".to_string(),
                self.origin.clone(),
            ),
            (
                "Access-Control-Allow-Headers".to_string(),
                ALLOW_HEADERS.to_string(),
            ),
            (
                "Access-Control-Allow-Methods".to_string(),
                ALLOW_METHODS.to_string(),
            ),
            (
                "Access-Control-Allow-Credentials".to_string(),
                "true".to_string(),
            ),
        ])
    }
}
