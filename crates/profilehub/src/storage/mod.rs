//! Storage backend implementations.
//!
//! This module provides concrete implementations of `RecordRepository`
//! defined in `profilehub_core::storage`.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//!
//! The in-memory backend backs the tests and is used as the durable tier when
//! the `sqlite` feature is disabled.
//!
//! # Examples
//!
//! Build with SQLite (default):
//! ```bash
//! cargo build -p profilehub
//! ```
//!
//! Build without persistence:
//! ```bash
//! cargo build -p profilehub --no-default-features --features memory
//! ```

#[cfg(any(test, not(feature = "sqlite")))]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(any(test, not(feature = "sqlite")))]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;
