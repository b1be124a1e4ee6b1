//! In-memory cache backend implementation.
//!
//! Provides a thread-safe in-process cache with TTL support, used as the
//! volatile tier in front of the durable record store.

mod cache;

pub use cache::MemoryCache;
