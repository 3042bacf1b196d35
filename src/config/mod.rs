//! Environment-derived configuration.
//!
//! # Responsibilities
//! - Resolve the DynamoDB table binding at startup
//! - Resolve the single origin allowed by the CORS headers
//!
//! # Design Decisions
//! - Configuration comes from the Lambda environment, read once in `main`
//! - A missing table name is a startup failure, not a per-request 500

use thiserror::Error;

/// Names the DynamoDB table holding the log entries. Required.
pub const TABLE_ENV: &str = "DYNAMODB_TABLE";

/// Overrides the origin echoed in `Access-Control-Allow-Origin`. Optional.
pub const ORIGIN_ENV: &str = "ALLOWED_ORIGIN";

const DEFAULT_ORIGIN: &str = "https://d8htopjtosdwq.cloudfront.net";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable absent or empty.
    #[error("environment variable {0} must be set")]
    MissingVar(&'static str),
}

/// Process-wide settings, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// DynamoDB table the store binds to.
    pub table_name: String,

    /// Origin allowed by the cross-origin response headers.
    pub allowed_origin: String,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let table_name = get(TABLE_ENV)
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingVar(TABLE_ENV))?;
        let allowed_origin = get(ORIGIN_ENV)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_ORIGIN.to_string());
        Ok(Self {
            table_name,
            allowed_origin,
        })
    }
}
