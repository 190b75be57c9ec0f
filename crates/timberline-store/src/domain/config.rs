//! # Configuration
//!
//! Immutable configuration value objects for the store engine and the
//! streaming adapter. All values have production defaults; `from_env`
//! variants read the `TIMBERLINE_*` environment for deployments that
//! configure through the process environment.

use std::env;
use std::time::Duration;

/// Configuration for the store engine.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Messages longer than this many bytes are compressed at write time
    /// (default: 100).
    pub compression_threshold: usize,

    /// Page size substituted when a query supplies none (default: 50).
    pub default_page_size: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            compression_threshold: 100,
            default_page_size: 50,
        }
    }
}

impl StoreConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `TIMBERLINE_COMPRESSION_THRESHOLD`: message size threshold in bytes (default: 100)
    /// - `TIMBERLINE_DEFAULT_PAGE_SIZE`: fallback page size (default: 50)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            compression_threshold: env_parse(
                "TIMBERLINE_COMPRESSION_THRESHOLD",
                defaults.compression_threshold,
            ),
            default_page_size: env_parse("TIMBERLINE_DEFAULT_PAGE_SIZE", defaults.default_page_size),
        }
    }
}

/// Configuration for the streaming adapter.
#[derive(Debug, Clone)]
pub struct StreamConfig {
    /// Upper bound on the per-chunk page size; requested sizes are clamped
    /// to this (default: 100).
    pub max_page_size: u32,

    /// Pause between page fetches, keeping the query loop from saturating
    /// the backing store (default: 10ms).
    pub page_delay: Duration,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            max_page_size: 100,
            page_delay: Duration::from_millis(10),
        }
    }
}

impl StreamConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `TIMBERLINE_STREAM_PAGE_LIMIT`: per-chunk page size cap (default: 100)
    /// - `TIMBERLINE_STREAM_DELAY_MS`: inter-page delay in milliseconds (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_page_size: env_parse("TIMBERLINE_STREAM_PAGE_LIMIT", defaults.max_page_size),
            page_delay: Duration::from_millis(env_parse(
                "TIMBERLINE_STREAM_DELAY_MS",
                defaults.page_delay.as_millis() as u64,
            )),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}
