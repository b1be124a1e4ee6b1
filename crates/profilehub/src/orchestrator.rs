//! Two-tier cache orchestrator.
//!
//! Answers customer lookups from the volatile tier, then the durable tier,
//! and only then from the upstream providers.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use profilehub_core::aggregation::{ProfileService, Result};
use profilehub_core::cache::{customer_record_key, deserialize_record, serialize_record, Cache};
use profilehub_core::profile::CustomerRecord;
use profilehub_core::storage::RecordRepository;
use profilehub_core::upstream::UpstreamSource;

use crate::aggregator::UpstreamAggregator;

/// Profile service backed by a volatile cache and a durable repository.
///
/// Lookup order, first hit wins:
/// - **Volatile tier**: returned as is
/// - **Durable tier**: copied into the volatile tier, then returned
/// - **Upstream**: aggregated, upserted into the durable tier, the stored
///   record copied into the volatile tier, then returned
///
/// Volatile-tier faults are logged and treated as a miss. Failed aggregations
/// leave both tiers untouched, so the next call goes upstream again.
///
/// # Type Parameters
///
/// * `R` - The durable repository
/// * `C` - The volatile cache
/// * `U` - The upstream source
pub struct ProfileOrchestrator<R, C, U>
where
    R: RecordRepository,
    C: Cache,
    U: UpstreamSource,
{
    repository: Arc<R>,
    cache: Arc<C>,
    aggregator: UpstreamAggregator<U>,
    ttl: Duration,
}

impl<R, C, U> ProfileOrchestrator<R, C, U>
where
    R: RecordRepository,
    C: Cache,
    U: UpstreamSource,
{
    /// Creates a new orchestrator.
    ///
    /// # Arguments
    ///
    /// * `repository` - The durable tier
    /// * `cache` - The volatile tier
    /// * `upstream` - The upstream providers
    /// * `ttl` - Absolute time-to-live of volatile entries
    pub fn new(repository: Arc<R>, cache: Arc<C>, upstream: Arc<U>, ttl: Duration) -> Self {
        Self {
            repository,
            cache,
            aggregator: UpstreamAggregator::new(upstream),
            ttl,
        }
    }

    async fn cached_record(&self, key: &str, identifier: &str) -> Option<CustomerRecord> {
        let bytes = match self.cache.get(key).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(identifier, error = %err, "Volatile tier read failed");
                return None;
            }
        };

        match deserialize_record(&bytes) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(identifier, error = %err, "Volatile tier record is unreadable");
                None
            }
        }
    }

    async fn cache_record(&self, key: &str, record: &CustomerRecord) {
        let bytes = match serialize_record(record) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(identifier = %record.identifier, error = %err, "Failed to encode record");
                return;
            }
        };

        if let Err(err) = self.cache.set(key, &bytes, Some(self.ttl)).await {
            tracing::warn!(identifier = %record.identifier, error = %err, "Failed to cache record");
        }
    }
}

#[async_trait]
impl<R, C, U> ProfileService for ProfileOrchestrator<R, C, U>
where
    R: RecordRepository + 'static,
    C: Cache + 'static,
    U: UpstreamSource + 'static,
{
    async fn get_aggregated_data(&self, identifier: &str) -> Result<CustomerRecord> {
        let key = customer_record_key(identifier);

        if let Some(record) = self.cached_record(&key, identifier).await {
            tracing::trace!(identifier, "Volatile tier hit");
            return Ok(record);
        }

        if let Some(record) = self.repository.find_record(identifier).await? {
            tracing::trace!(identifier, "Durable tier hit");
            self.cache_record(&key, &record).await;
            return Ok(record);
        }

        tracing::trace!(identifier, "Both tiers missed, going upstream");
        let fresh = self.aggregator.fetch(identifier).await?;
        let stored = self.repository.upsert_record(&fresh).await?;
        self.cache_record(&key, &stored).await;

        tracing::debug!(identifier, "Customer record aggregated and stored");
        Ok(stored)
    }
}
