use thiserror::Error;

use crate::storage::RepositoryError;
use crate::upstream::{UpstreamError, UpstreamKind};

/// Errors raised while producing a customer record.
///
/// Upstream data-quality problems never show up here; they degrade to empty
/// fields during normalization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AggregationError {
    /// An upstream answered "not found", so no complete record can be built.
    #[error("Incomplete upstream data for {identifier}: {missing} not found")]
    IncompleteUpstreamData {
        identifier: String,
        missing: UpstreamKind,
    },
    /// An upstream could not be reached or answered with a transport error.
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(#[from] UpstreamError),
    /// The durable tier could not be read or written.
    #[error("Durable store failure: {0}")]
    DurableStoreFailure(#[from] RepositoryError),
}

/// Result type for aggregation operations.
pub type Result<T> = std::result::Result<T, AggregationError>;
