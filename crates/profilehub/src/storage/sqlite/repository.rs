//! SQLite repository implementation.
//!
//! Implements `RecordRepository` from `profilehub_core::storage` using SQLite.

use async_trait::async_trait;
use chrono::Utc;
use tokio_rusqlite::Connection;

use profilehub_core::profile::CustomerRecord;
use profilehub_core::storage::{RecordRepository, RepositoryError, Result};

use super::conversions::{format_datetime, row_to_record};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based durable record store.
///
/// Records survive process restarts when opened with a file path.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        tracing::debug!(path, "Opened SQLite record store");
        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Data is lost when the connection is dropped.
    #[cfg(test)]
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl RecordRepository for SqliteRepository {
    async fn find_record(&self, identifier: &str) -> Result<Option<CustomerRecord>> {
        let identifier = identifier.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_RECORD_BY_IDENTIFIER)
                    .map_err(wrap_err)?;
                match stmt.query_row([&identifier], row_to_record) {
                    Ok(record) => Ok(Some(record)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn upsert_record(&self, record: &CustomerRecord) -> Result<CustomerRecord> {
        let now = Utc::now();
        let stored = record.clone().with_cached_at(now);

        let identifier = stored.identifier.clone();
        let first_name = stored.first_name.clone();
        let last_name = stored.last_name.clone();
        let address = stored.address.clone();
        let phone_number = stored.phone_number.clone();
        let email = stored.email.clone();
        let tax_country = stored.tax_country.clone();
        let income = stored.income;
        let cached_at = format_datetime(&now);

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::UPSERT_RECORD,
                    rusqlite::params![
                        identifier,
                        first_name,
                        last_name,
                        address,
                        phone_number,
                        email,
                        tax_country,
                        income,
                        cached_at
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)?;

        tracing::debug!(identifier = %stored.identifier, "Customer record upserted");
        Ok(stored)
    }
}
