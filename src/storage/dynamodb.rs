//! DynamoDB-backed log store.
//!
//! # Responsibilities
//! - Bind one process-wide client to the configured table
//! - Map entries to and from DynamoDB attribute values
//!
//! # Design Decisions
//! - Writes are plain `put_item` calls with no condition expression
//! - Reads are a single-page query with `ScanIndexForward = false` so the
//!   table returns entries newest first

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use serde_json::Value;

use crate::model::LogEntry;
use crate::storage::{LogStore, StoreError, StoreResult};

/// Long-lived DynamoDB binding: one client, one table name.
#[derive(Debug, Clone)]
pub struct DynamoStore {
    client: Client,
    table: String,
}

impl DynamoStore {
    pub fn new(client: Client, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }
}

#[async_trait]
impl LogStore for DynamoStore {
    async fn put_entry(&self, entry: &LogEntry) -> StoreResult<()> {
        self.client
            .put_item()
            .table_name(&self.table)
            .set_item(Some(to_item(entry)))
            .send()
            .await
            .map_err(|e| StoreError(DisplayErrorContext(&e).to_string()))?;
        Ok(())
    }

    async fn query_entries(&self, user_id: &str) -> StoreResult<Vec<LogEntry>> {
        let output = self
            .client
            .query()
            .table_name(&self.table)
            .key_condition_expression("userId = :uid")
            .expression_attribute_values(":uid", AttributeValue::S(user_id.to_string()))
            .scan_index_forward(false)
            .send()
            .await
            .map_err(|e| StoreError(DisplayErrorContext(&e).to_string()))?;
        Ok(output.items().iter().map(from_item).collect())
    }
}

fn to_item(entry: &LogEntry) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            "userId".to_string(),
            AttributeValue::S(entry.user_id.clone()),
        ),
        (
            "timestamp".to_string(),
            AttributeValue::S(entry.timestamp.clone()),
        ),
        (
            "productivity".to_string(),
            value_to_attr(&entry.productivity),
        ),
        ("feedback".to_string(), value_to_attr(&entry.feedback)),
        (
            "blockers".to_string(),
            AttributeValue::S(entry.blockers.clone()),
        ),
    ])
}

fn from_item(item: &HashMap<String, AttributeValue>) -> LogEntry {
    let string_of = |key: &str| {
        item.get(key)
            .and_then(|attr| attr.as_s().ok())
            .cloned()
            .unwrap_or_default()
    };
    LogEntry {
        user_id: string_of("userId"),
        timestamp: string_of("timestamp"),
        productivity: item.get("productivity").map_or(Value::Null, attr_to_value),
        feedback: item.get("feedback").map_or(Value::Null, attr_to_value),
        blockers: string_of("blockers"),
    }
}

/// Payload fields keep their JSON type across the table boundary: numbers
/// are stored as `N`, strings as `S`, booleans as `BOOL`.
fn value_to_attr(value: &Value) -> AttributeValue {
    match value {
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::String(s) => AttributeValue::S(s.clone()),
        other => AttributeValue::S(other.to_string()),
    }
}

fn attr_to_value(attr: &AttributeValue) -> Value {
    match attr {
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::N(n) => {
            serde_json::from_str(n).unwrap_or_else(|_| Value::String(n.clone()))
        }
        AttributeValue::Bool(b) => Value::Bool(*b),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_entry() -> LogEntry {
        LogEntry {
            user_id: "user-1".to_string(),
            timestamp: "2026-08-24T09:15:42.123456".to_string(),
            productivity: json!(8),
            feedback: json!("productive morning"),
            blockers: "waiting on review".to_string(),
        }
    }

    #[test]
    fn test_item_round_trip() {
        let entry = sample_entry();
        let item = to_item(&entry);
        assert_eq!(from_item(&item), entry);
    }

    #[test]
    fn test_numbers_stored_as_n() {
        let item = to_item(&sample_entry());
        assert_eq!(item["productivity"], AttributeValue::N("8".to_string()));
        assert_eq!(
            item["userId"],
            AttributeValue::S("user-1".to_string())
        );
    }

    #[test]
    fn test_string_productivity_preserved() {
        let mut entry = sample_entry();
        entry.productivity = json!("high");
        let restored = from_item(&to_item(&entry));
        assert_eq!(restored.productivity, json!("high"));
    }

    #[test]
    fn test_missing_attributes_default() {
        let item = HashMap::from([(
            "userId".to_string(),
            AttributeValue::S("user-1".to_string()),
        )]);
        let entry = from_item(&item);
        assert_eq!(entry.user_id, "user-1");
        assert_eq!(entry.timestamp, "");
        assert_eq!(entry.productivity, Value::Null);
    }
}
