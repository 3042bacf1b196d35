//! The request handler: one inbound event, at most one storage operation,
//! one structured response.
//!
//! # Data Flow
//! ```text
//! API Gateway proxy event
//!     → preflight short-circuit (OPTIONS → 200, empty body)
//!     → identity extraction (authorizer claims → userId, else 401)
//!     → method dispatch
//!         POST → validate payload → put → 201
//!         GET  → query partition  → 200
//!         *    → 405
//!     → catch-all (panic below this frame → 500)
//! ```

pub mod error;

pub use error::HandlerError;

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use serde_json::json;

use crate::event::{ApiGatewayEvent, ApiGatewayResponse};
use crate::http::cors::CorsHeaders;
use crate::http::response::{empty_response, json_response};
use crate::model::{LogEntry, NewEntry};
use crate::storage::LogStore;

/// Long-lived handler state: the process-wide store binding plus the fixed
/// CORS header set. Constructed once at startup and reused across
/// invocations.
pub struct LogHandler {
    store: Arc<dyn LogStore>,
    cors: CorsHeaders,
}

impl LogHandler {
    pub fn new(store: Arc<dyn LogStore>, cors: CorsHeaders) -> Self {
        Self { store, cors }
    }

    /// Handle one inbound event. Always produces a response: every failure,
    /// including a panic below this frame, is converted into a structured
    /// error body carrying the fixed CORS headers.
    pub async fn handle(&self, event: ApiGatewayEvent) -> ApiGatewayResponse {
        tracing::debug!(
            method = %event.http_method,
            headers = ?event.headers,
            "event received"
        );

        if event.http_method == "OPTIONS" {
            tracing::info!("handling CORS preflight");
            return empty_response(200, &self.cors);
        }

        match AssertUnwindSafe(self.dispatch(&event)).catch_unwind().await {
            Ok(Ok(response)) => response,
            Ok(Err(error)) => {
                tracing::warn!(status = error.status_code(), error = %error, "request rejected");
                error.into_response(&self.cors)
            }
            Err(panic) => {
                let error = HandlerError::Unexpected(panic_message(panic));
                tracing::error!(error = %error, "handler panicked");
                error.into_response(&self.cors)
            }
        }
    }

    async fn dispatch(&self, event: &ApiGatewayEvent) -> Result<ApiGatewayResponse, HandlerError> {
        let user_id = event.subject().ok_or(HandlerError::Unauthorized)?;
        tracing::info!(user_id = %user_id, method = %event.http_method, "authenticated request");

        match event.http_method.as_str() {
            "POST" => self.create_entry(user_id, event.body.as_deref()).await,
            "GET" => self.list_entries(user_id).await,
            other => Err(HandlerError::MethodNotAllowed(other.to_string())),
        }
    }

    async fn create_entry(
        &self,
        user_id: &str,
        body: Option<&str>,
    ) -> Result<ApiGatewayResponse, HandlerError> {
        let body = body
            .filter(|raw| !raw.is_empty())
            .ok_or(HandlerError::MissingBody)?;
        let payload: NewEntry = serde_json::from_str(body)?;
        if !payload.has_required_fields() {
            return Err(HandlerError::MissingFields);
        }

        let entry = LogEntry::create(user_id, payload);
        tracing::info!(user_id = %user_id, timestamp = %entry.timestamp, "creating log entry");
        self.store
            .put_entry(&entry)
            .await
            .map_err(HandlerError::Put)?;

        Ok(json_response(
            201,
            &self.cors,
            &json!({
                "message": "Log entry created successfully",
                "log": entry,
            }),
        ))
    }

    async fn list_entries(&self, user_id: &str) -> Result<ApiGatewayResponse, HandlerError> {
        let logs = self
            .store
            .query_entries(user_id)
            .await
            .map_err(HandlerError::Query)?;
        tracing::info!(user_id = %user_id, count = logs.len(), "fetched log entries");

        let message = if logs.is_empty() {
            "No logs found"
        } else {
            "Logs retrieved successfully"
        };
        Ok(json_response(
            200,
            &self.cors,
            &json!({
                "logs": logs,
                "message": message,
            }),
        ))
    }
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
