use async_trait::async_trait;

use crate::profile::CustomerRecord;

use super::Result;

/// Produces consolidated customer records.
///
/// This is the seam the entry-point layer depends on; the two-tier cache
/// orchestrator is the production implementation.
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Gets the consolidated record for a customer.
    async fn get_aggregated_data(&self, identifier: &str) -> Result<CustomerRecord>;
}
