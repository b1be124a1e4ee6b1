//! Cache backend implementations.
//!
//! This module provides concrete implementations of the cache traits
//! defined in `profilehub_core::cache`. The implementations are selected
//! at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `memory` (default): In-process cache using tokio synchronization primitives

#[cfg(not(feature = "memory"))]
compile_error!(
    "No cache backend selected. Enable the 'memory' feature. \
    Example: cargo build -p profilehub --features memory"
);

#[cfg(feature = "memory")]
pub mod memory;

#[cfg(feature = "memory")]
pub use memory::MemoryCache;
