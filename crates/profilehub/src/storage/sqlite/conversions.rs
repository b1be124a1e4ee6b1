//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use chrono::{DateTime, Utc};
use profilehub_core::profile::CustomerRecord;
use rusqlite::Row;

/// Convert a SQLite row to a CustomerRecord.
///
/// Expected columns: identifier, first_name, last_name, address, phone_number,
/// email, tax_country, income, cached_at
pub fn row_to_record(row: &Row) -> rusqlite::Result<CustomerRecord> {
    let identifier: String = row.get(0)?;
    let first_name: String = row.get(1)?;
    let last_name: String = row.get(2)?;
    let address: String = row.get(3)?;
    let phone_number: Option<String> = row.get(4)?;
    let email: Option<String> = row.get(5)?;
    let tax_country: String = row.get(6)?;
    let income: Option<i64> = row.get(7)?;
    let cached_at: String = row.get(8)?;

    Ok(CustomerRecord {
        identifier,
        first_name,
        last_name,
        address,
        phone_number,
        email,
        tax_country,
        income,
        cached_at: Some(parse_datetime(&cached_at)?),
    })
}

fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(8, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Format a DateTime for SQLite storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}
