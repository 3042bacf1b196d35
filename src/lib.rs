//! Productivity Log API backend.
//!
//! A Lambda-hosted request handler that lets an authenticated user create
//! and retrieve personal productivity log entries backed by DynamoDB.
//!
//! # Data Flow
//! ```text
//! API Gateway proxy event
//!     → event (deserialize inbound shape)
//!     → handler (preflight short-circuit, identity, method dispatch)
//!     → model (payload validation, entry construction)
//!     → storage (one put or one query against the table)
//!     → http (response assembly with fixed CORS headers)
//! ```

pub mod config;
pub mod event;
pub mod handler;
pub mod http;
pub mod model;
pub mod storage;

pub use config::AppConfig;
pub use event::{ApiGatewayEvent, ApiGatewayResponse};
pub use handler::LogHandler;
pub use http::CorsHeaders;
