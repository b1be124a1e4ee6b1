use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Volatile tier TTL in seconds (default: 3,600)
    pub cache_ttl_seconds: u64,
    /// Maximum number of volatile tier entries (default: 10,000)
    pub cache_max_entries: usize,
    /// Path to SQLite database file (default: "profilehub.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// Base URL of the upstream providers
    /// (default: "http://localhost:3000/mock-upstream")
    pub upstream_base_url: String,
    /// Per-request upstream timeout in seconds (default: 5)
    pub upstream_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - Volatile tier TTL in seconds (default: 3,600)
    /// - `CACHE_MAX_ENTRIES` - Maximum volatile tier entries (default: 10,000)
    /// - `SQLITE_PATH` - SQLite database path (default: "profilehub.db")
    /// - `UPSTREAM_BASE_URL` - Upstream providers base URL
    ///   (default: "http://localhost:3000/mock-upstream")
    /// - `UPSTREAM_TIMEOUT_SECONDS` - Upstream request timeout (default: 5)
    pub fn from_env() -> Self {
        Self {
            cache_ttl_seconds: parse_var("CACHE_TTL_SECONDS").unwrap_or(3_600),
            cache_max_entries: parse_var("CACHE_MAX_ENTRIES").unwrap_or(10_000),
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "profilehub.db".to_string()),
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000/mock-upstream".to_string()),
            upstream_timeout_seconds: parse_var("UPSTREAM_TIMEOUT_SECONDS").unwrap_or(5),
        }
    }

    /// Get volatile tier TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Get upstream request timeout as a Duration.
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Reads and parses an environment variable, ignoring unparseable values.
fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            cache_ttl_seconds: 600,
            cache_max_entries: 10_000,
            sqlite_path: "test.db".to_string(),
            upstream_base_url: "http://upstream.local".to_string(),
            upstream_timeout_seconds: 2,
        }
    }

    #[test]
    fn test_duration_conversions() {
        let config = config();

        assert_eq!(config.cache_ttl(), Duration::from_secs(600));
        assert_eq!(config.upstream_timeout(), Duration::from_secs(2));
    }

    #[test]
    fn test_parse_var_missing_is_none() {
        assert_eq!(parse_var::<u64>("PROFILEHUB_TEST_SURELY_UNSET"), None);
    }

    // Environment variables are process-global, so every env assertion lives
    // in this single test.
    #[test]
    fn test_from_env() {
        env::remove_var("CACHE_TTL_SECONDS");
        env::remove_var("CACHE_MAX_ENTRIES");
        env::remove_var("SQLITE_PATH");
        env::remove_var("UPSTREAM_BASE_URL");
        env::remove_var("UPSTREAM_TIMEOUT_SECONDS");

        let config = Config::from_env();

        assert_eq!(config.cache_ttl_seconds, 3_600);
        assert_eq!(config.cache_max_entries, 10_000);
        assert_eq!(config.sqlite_path, "profilehub.db");
        assert_eq!(
            config.upstream_base_url,
            "http://localhost:3000/mock-upstream"
        );
        assert_eq!(config.upstream_timeout_seconds, 5);

        env::set_var("CACHE_TTL_SECONDS", "60");
        env::set_var("CACHE_MAX_ENTRIES", "not a number");

        let config = Config::from_env();

        assert_eq!(config.cache_ttl_seconds, 60);
        assert_eq!(config.cache_max_entries, 10_000);

        env::remove_var("CACHE_TTL_SECONDS");
        env::remove_var("CACHE_MAX_ENTRIES");
    }
}
