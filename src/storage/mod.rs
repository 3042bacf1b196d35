//! Storage subsystem.
//!
//! # Responsibilities
//! - Define the contract with the backing key-value table
//! - Provide the production DynamoDB implementation
//! - Provide an in-process double for the integration tests
//!
//! # Design Decisions
//! - The handler sees only the `LogStore` trait; the table binding is a
//!   long-lived resource injected at startup
//! - No retries: a single storage failure surfaces directly to the caller

pub mod dynamodb;
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::LogEntry;

pub use dynamodb::DynamoStore;
pub use memory::MemoryStore;

/// Failure reported by a storage backend. Carries the underlying client
/// error's string form only, never a stack trace.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StoreError(pub String);

pub type StoreResult<T> = Result<T, StoreError>;

/// Contract with the backing table: partition key = user, sort key =
/// timestamp.
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Unconditional upsert of one entry. Last write wins on a key
    /// collision.
    async fn put_entry(&self, entry: &LogEntry) -> StoreResult<()>;

    /// All entries for one user, newest first. Single page, no pagination
    /// token handling.
    async fn query_entries(&self, user_id: &str) -> StoreResult<Vec<LogEntry>>;
}
