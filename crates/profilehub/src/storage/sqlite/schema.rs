//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Customer records table, one row per identifier
CREATE TABLE IF NOT EXISTS customer_records (
    identifier TEXT PRIMARY KEY NOT NULL,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    address TEXT NOT NULL,
    phone_number TEXT,
    email TEXT,
    tax_country TEXT NOT NULL,
    income INTEGER,
    cached_at TEXT NOT NULL
);
"#;

pub const UPSERT_RECORD: &str = r#"
INSERT INTO customer_records (identifier, first_name, last_name, address, phone_number, email, tax_country, income, cached_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
ON CONFLICT(identifier) DO UPDATE SET
    first_name = excluded.first_name,
    last_name = excluded.last_name,
    address = excluded.address,
    phone_number = excluded.phone_number,
    email = excluded.email,
    tax_country = excluded.tax_country,
    income = excluded.income,
    cached_at = excluded.cached_at
"#;

pub const SELECT_RECORD_BY_IDENTIFIER: &str = r#"
SELECT identifier, first_name, last_name, address, phone_number, email, tax_country, income, cached_at
FROM customer_records
WHERE identifier = ?1
"#;
