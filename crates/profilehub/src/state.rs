//! Application state shared by all request handlers.
//!
//! The durable tier is chosen at compile time: SQLite with the `sqlite`
//! feature, the in-memory repository without it. The volatile tier is always
//! the in-process `MemoryCache`.

use std::sync::Arc;

use profilehub_core::aggregation::ProfileService;

use crate::cache::MemoryCache;
use crate::config::Config;
use crate::orchestrator::ProfileOrchestrator;
use crate::upstream::HttpUpstream;

/// Shared application state.
///
/// Cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Customer profile lookups (two-tier cached).
    pub profiles: Arc<dyn ProfileService>,
}

impl AppState {
    /// Creates state around an existing profile service.
    pub fn with_profiles(profiles: Arc<dyn ProfileService>) -> Self {
        Self { profiles }
    }

    fn upstream(config: &Config) -> anyhow::Result<Arc<HttpUpstream>> {
        let upstream = HttpUpstream::new(&config.upstream_base_url, config.upstream_timeout())?;
        tracing::info!(
            base_url = %upstream.base_url(),
            timeout_seconds = config.upstream_timeout_seconds,
            "Upstream providers configured"
        );
        Ok(Arc::new(upstream))
    }
}

// ============================================================================
// Factory functions for different durable backends
// ============================================================================

#[cfg(feature = "sqlite")]
mod sqlite_memory {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and in-memory cache.
        pub async fn new(config: &Config) -> anyhow::Result<Self> {
            let repository = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let cache = Arc::new(MemoryCache::new(config.cache_max_entries));
            let upstream = Self::upstream(config)?;

            let orchestrator =
                ProfileOrchestrator::new(repository, cache, upstream, config.cache_ttl());

            Ok(Self::with_profiles(Arc::new(orchestrator)))
        }
    }
}

#[cfg(not(feature = "sqlite"))]
mod inmemory_memory {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and cache.
        /// Records do not survive a restart.
        pub async fn new(config: &Config) -> anyhow::Result<Self> {
            tracing::warn!("Built without the sqlite feature, records will not persist");

            let repository = Arc::new(InMemoryRepository::new());
            let cache = Arc::new(MemoryCache::new(config.cache_max_entries));
            let upstream = Self::upstream(config)?;

            let orchestrator =
                ProfileOrchestrator::new(repository, cache, upstream, config.cache_ttl());

            Ok(Self::with_profiles(Arc::new(orchestrator)))
        }
    }
}
