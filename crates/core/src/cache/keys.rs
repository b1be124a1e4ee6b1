/// Prefix shared by every customer record cache key.
pub const CUSTOMER_RECORD_PREFIX: &str = "customer:";

/// Returns the cache key for a customer record.
///
/// # Examples
///
/// ```
/// use profilehub_core::cache::customer_record_key;
///
/// assert_eq!(customer_record_key("19800101-1234"), "customer:19800101-1234");
/// ```
pub fn customer_record_key(identifier: &str) -> String {
    format!("{CUSTOMER_RECORD_PREFIX}{identifier}")
}
