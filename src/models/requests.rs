//! Request DTOs for the cache server API
//!
//! Query-string parameters and body parsing for `/api/cache`.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

/// Query parameters accepted by every `/api/cache` method
///
/// # Fields
/// - `key`: The cache key (required, non-empty)
/// - `ttl`: TTL in seconds, only read by POST/PUT
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheQuery {
    #[serde(default)]
    pub key: Option<String>,
    /// Kept as text so a malformed value falls back to the default TTL
    #[serde(default)]
    pub ttl: Option<String>,
}

impl CacheQuery {
    /// Returns the key if present and non-empty.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref().filter(|key| !key.is_empty())
    }

    /// Resolves the requested TTL.
    ///
    /// Missing or non-integer values fall back to `default`. Returns an error
    /// message for negative values.
    pub fn ttl_or(&self, default: Duration) -> Result<Duration, String> {
        match self.ttl.as_deref().map(|raw| raw.trim().parse::<i64>()) {
            Some(Ok(secs)) if secs < 0 => Err(format!("TTL must not be negative, got {}", secs)),
            Some(Ok(secs)) => Ok(Duration::from_secs(secs.unsigned_abs())),
            Some(Err(_)) | None => Ok(default),
        }
    }
}

/// Interprets a request body as the value to cache.
///
/// Valid JSON is stored structurally; anything else, including a bare JSON
/// `null`, is stored as the raw text.
pub fn parse_payload(body: &str) -> Value {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Null) | Err(_) => Value::String(body.to_string()),
        Ok(value) => value,
    }
}
