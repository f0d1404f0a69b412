//! Configuration Module
//!
//! Handles loading and managing server configuration from environment
//! variables. Configuration is read once at startup; the engine receives its
//! slice as an explicit [`CacheConfig`] rather than reading ambient state.

use std::env;

use crate::cache::CacheConfig;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the cache can hold, live or expired
    pub max_entries: usize,
    /// Idle TTL in seconds, applied uniformly to every entry
    pub idle_ttl_secs: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 1000)
    /// - `IDLE_TTL_SECONDS` - Idle TTL in seconds (default: 300)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            max_entries: env::var("MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            idle_ttl_secs: env::var("IDLE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }

    /// Returns the engine-facing slice of this configuration.
    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig {
            idle_ttl_secs: self.idle_ttl_secs,
            max_entries: self.max_entries,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: 1000,
            idle_ttl_secs: 300,
            server_port: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_entries, 1000);
        assert_eq!(config.idle_ttl_secs, 300);
        assert_eq!(config.server_port, 3000);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("MAX_ENTRIES");
        env::remove_var("IDLE_TTL_SECONDS");
        env::remove_var("SERVER_PORT");

        let config = Config::from_env();
        assert_eq!(config.max_entries, 1000);
        assert_eq!(config.idle_ttl_secs, 300);
        assert_eq!(config.server_port, 3000);
    }

    #[test]
    fn test_cache_config_slice() {
        let config = Config {
            max_entries: 7,
            idle_ttl_secs: 42,
            server_port: 8080,
        };

        let cache_config = config.cache_config();
        assert_eq!(cache_config.max_entries, 7);
        assert_eq!(cache_config.idle_ttl_secs, 42);
    }
}
