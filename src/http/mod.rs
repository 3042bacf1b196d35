//! Response assembly for the API Gateway proxy contract.
//!
//! # Data Flow
//! ```text
//! handler outcome (success payload or HandlerError)
//!     → response.rs (JSON-encode body, attach status)
//!     → cors.rs (fixed cross-origin header set)
//!     → ApiGatewayResponse
//! ```

pub mod cors;
pub mod response;

pub use cors::CorsHeaders;
