mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{customer_record_key, CUSTOMER_RECORD_PREFIX};
pub use serialization::{deserialize_record, serialize_record, SerializationError};
pub use traits::Cache;
