//! Pure functions for mapping aggregation errors to HTTP status codes.

use crate::storage::repository_error_to_status_code;

use super::AggregationError;

/// Maps an [`AggregationError`] to an HTTP status code.
///
/// - `IncompleteUpstreamData` -> 404 (Not Found)
/// - `UpstreamUnavailable` -> 503 (Service Unavailable)
/// - `DurableStoreFailure` -> whatever the repository error maps to
///
/// # Examples
///
/// ```
/// use profilehub_core::aggregation::{AggregationError, aggregation_error_to_status_code};
/// use profilehub_core::upstream::UpstreamKind;
///
/// let error = AggregationError::IncompleteUpstreamData {
///     identifier: "abc".to_string(),
///     missing: UpstreamKind::PersonalDetails,
/// };
/// assert_eq!(aggregation_error_to_status_code(&error), 404);
/// ```
pub fn aggregation_error_to_status_code(error: &AggregationError) -> u16 {
    match error {
        AggregationError::IncompleteUpstreamData { .. } => 404,
        AggregationError::UpstreamUnavailable(_) => 503,
        AggregationError::DurableStoreFailure(err) => repository_error_to_status_code(err),
    }
}
