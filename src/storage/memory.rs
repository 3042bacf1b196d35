//! In-process log store.
//!
//! Backs the integration tests and local development. Mirrors the table
//! semantics: partition = user, sort = timestamp, unconditional upsert,
//! descending query order. Supports one-shot failure injection so tests can
//! exercise the storage error paths.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::model::LogEntry;
use crate::storage::{LogStore, StoreError, StoreResult};

#[derive(Default)]
pub struct MemoryStore {
    partitions: RwLock<HashMap<String, Vec<LogEntry>>>,
    fail_next: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next storage call fail, then recover.
    pub fn inject_failure(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    fn take_injected_failure(&self) -> bool {
        self.fail_next.swap(false, Ordering::SeqCst)
    }
}

#[async_trait]
impl LogStore for MemoryStore {
    async fn put_entry(&self, entry: &LogEntry) -> StoreResult<()> {
        if self.take_injected_failure() {
            return Err(StoreError("injected put failure".to_string()));
        }
        let mut partitions = self.partitions.write().await;
        let partition = partitions.entry(entry.user_id.clone()).or_default();
        // Unconditional upsert: last write wins on a sort-key collision.
        partition.retain(|existing| existing.timestamp != entry.timestamp);
        partition.push(entry.clone());
        partition.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        Ok(())
    }

    async fn query_entries(&self, user_id: &str) -> StoreResult<Vec<LogEntry>> {
        if self.take_injected_failure() {
            return Err(StoreError("injected query failure".to_string()));
        }
        let partitions = self.partitions.read().await;
        let mut entries = partitions.get(user_id).cloned().unwrap_or_default();
        entries.reverse();
        Ok(entries)
    }
}
