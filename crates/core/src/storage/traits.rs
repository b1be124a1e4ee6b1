use async_trait::async_trait;

use crate::profile::CustomerRecord;

use super::Result;

/// Durable repository for customer records.
///
/// Holds at most one record per identifier. There is no delete operation;
/// records are only ever created or overwritten.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Gets a record by its identifier.
    async fn find_record(&self, identifier: &str) -> Result<Option<CustomerRecord>>;

    /// Inserts the record, or overwrites the existing one with the same identifier.
    ///
    /// Stamps `cached_at` with the write time and returns the record as stored.
    async fn upsert_record(&self, record: &CustomerRecord) -> Result<CustomerRecord>;
}
