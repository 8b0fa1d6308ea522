//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::cache::{CacheHit, CacheStats, EntryMeta};

/// Response body for a cache hit (GET /api/cache)
#[derive(Debug, Clone, Serialize)]
pub struct HitResponse {
    pub key: String,
    pub value: Value,
    pub cached_at: DateTime<Utc>,
    /// Absolute expiry fixed when the value was stored
    pub expires_at: DateTime<Utc>,
    pub hit: bool,
    /// Seconds left before the entry expires, counting the sliding window
    pub ttl_seconds: f64,
}

impl HitResponse {
    pub fn new(key: impl Into<String>, hit: CacheHit<Value>) -> Self {
        Self {
            key: key.into(),
            value: hit.value,
            cached_at: hit.meta.created_at,
            expires_at: hit.meta.absolute_expiry,
            hit: true,
            ttl_seconds: hit.remaining_ttl.as_secs_f64(),
        }
    }
}

/// Response body for a cache miss (GET /api/cache)
#[derive(Debug, Clone, Serialize)]
pub struct MissResponse {
    pub key: String,
    pub message: String,
    pub hit: bool,
}

impl MissResponse {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: "Key not found in cache".to_string(),
            hit: false,
        }
    }
}

/// Response body for a store (POST/PUT /api/cache)
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    pub key: String,
    pub value: Value,
    pub cached_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    /// The TTL that was requested, in seconds
    pub ttl_seconds: f64,
    pub action: &'static str,
}

impl SetResponse {
    pub fn new(key: impl Into<String>, value: Value, meta: EntryMeta, ttl: Duration) -> Self {
        Self {
            key: key.into(),
            value,
            cached_at: meta.created_at,
            expires_at: meta.absolute_expiry,
            ttl_seconds: ttl.as_secs_f64(),
            action: "cached",
        }
    }
}

/// Response body for a delete (DELETE /api/cache)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub key: String,
    pub action: &'static str,
    /// Whether the key held an entry, live or expired
    pub existed: bool,
}

impl DeleteResponse {
    pub fn new(key: impl Into<String>, existed: bool) -> Self {
        Self {
            key: key.into(),
            action: "deleted",
            existed,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
    /// Example of a well-formed request, when one helps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            usage: None,
        }
    }

    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }
}
