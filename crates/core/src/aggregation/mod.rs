//! Failure taxonomy and service seam of the aggregate-and-cache lookup.

mod error;
mod http_mapping;
mod traits;

pub use error::{AggregationError, Result};
pub use http_mapping::aggregation_error_to_status_code;
pub use traits::ProfileService;
