//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use profilehub_core::profile::CustomerRecord;
use profilehub_core::storage::{RecordRepository, Result};

/// In-memory storage backend for testing.
///
/// Uses a HashMap keyed by identifier, wrapped in `Arc<RwLock<_>>` for
/// thread-safe access. Data is lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    records: Arc<RwLock<HashMap<String, CustomerRecord>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl RecordRepository for InMemoryRepository {
    async fn find_record(&self, identifier: &str) -> Result<Option<CustomerRecord>> {
        let records = self.records.read().await;
        Ok(records.get(identifier).cloned())
    }

    async fn upsert_record(&self, record: &CustomerRecord) -> Result<CustomerRecord> {
        let stored = record.clone().with_cached_at(Utc::now());
        let mut records = self.records.write().await;
        records.insert(stored.identifier.clone(), stored.clone());
        Ok(stored)
    }
}
