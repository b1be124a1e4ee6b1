//! In-memory storage backend for testing.
//!
//! This module provides an in-memory implementation of `RecordRepository`
//! that stores all data in a HashMap wrapped in `Arc<RwLock<_>>`. This is
//! useful for tests and development runs where persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use profilehub::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
