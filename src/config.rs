//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::{DEFAULT_SLIDING_WINDOW, DEFAULT_TTL};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// TTL in seconds for stores that do not pass `ttl`
    pub default_ttl: u64,
    /// How far each read extends an entry, in seconds
    pub sliding_window: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Expiry sweep interval in seconds
    pub sweep_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEFAULT_TTL` - Default TTL in seconds (default: 300)
    /// - `SLIDING_WINDOW` - Sliding expiration window in seconds (default: 60)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SWEEP_INTERVAL` - Expiry sweep frequency in seconds (default: 5)
    ///
    /// Unset or unparsable variables keep their default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_ttl: env_or("DEFAULT_TTL", defaults.default_ttl),
            sliding_window: env_or("SLIDING_WINDOW", defaults.sliding_window),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            sweep_interval: env_or("SWEEP_INTERVAL", defaults.sweep_interval),
        }
    }

    pub fn default_ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl)
    }

    pub fn sliding_window(&self) -> Duration {
        Duration::from_secs(self.sliding_window)
    }

    /// Never zero; a zero interval would make the sweep task spin.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval.max(1))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl: DEFAULT_TTL.as_secs(),
            sliding_window: DEFAULT_SLIDING_WINDOW.as_secs(),
            server_port: 3000,
            sweep_interval: 5,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.default_ttl, 300);
        assert_eq!(config.sliding_window, 60);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.sweep_interval, 5);
    }

    #[test]
    fn test_config_durations() {
        let config = Config {
            sweep_interval: 0,
            ..Config::default()
        };
        assert_eq!(config.default_ttl(), Duration::from_secs(300));
        assert_eq!(config.sliding_window(), Duration::from_secs(60));
        assert_eq!(config.sweep_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("DEFAULT_TTL");
        env::remove_var("SLIDING_WINDOW");
        env::remove_var("SERVER_PORT");
        env::remove_var("SWEEP_INTERVAL");

        let config = Config::from_env();
        assert_eq!(config.default_ttl, 300);
        assert_eq!(config.sliding_window, 60);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.sweep_interval, 5);
    }
}
