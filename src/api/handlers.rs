//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::cache::{ExpiringCache, LoggingEvictionListener};
use crate::config::Config;
use crate::error::{ApiError, Operation, Result};
use crate::models::{
    parse_payload, CacheQuery, DeleteResponse, HealthResponse, HitResponse, MissResponse,
    SetResponse, StatsResponse,
};

/// Application state shared across all handlers.
///
/// The cache is internally synchronized, so handlers share it through a
/// plain `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Expiring cache holding JSON or plain-text payloads
    pub cache: Arc<ExpiringCache<Value>>,
    /// TTL used when a store request omits `ttl`
    pub default_ttl: Duration,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: ExpiringCache<Value>, default_ttl: Duration) -> Self {
        Self {
            cache: Arc::new(cache),
            default_ttl,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Evictions are reported to the log.
    pub fn from_config(config: &Config) -> Self {
        let cache = ExpiringCache::new(config.sliding_window())
            .with_listener(Arc::new(LoggingEvictionListener));
        Self::new(cache, config.default_ttl())
    }
}

/// Handler for GET /api/cache?key=K
///
/// Returns the cached value with its timestamps, or 404 on a miss.
pub async fn get_handler(
    State(state): State<AppState>,
    Query(query): Query<CacheQuery>,
) -> Result<Response> {
    let key = query.key().ok_or(ApiError::MissingKey(Operation::Get))?;

    match state.cache.get(key) {
        Some(hit) => {
            info!("Cache HIT for key: {}", key);
            Ok(Json(HitResponse::new(key, hit)).into_response())
        }
        None => {
            info!("Cache MISS for key: {}", key);
            Ok((StatusCode::NOT_FOUND, Json(MissResponse::new(key))).into_response())
        }
    }
}

/// Handler for POST and PUT /api/cache?key=K&ttl=S
///
/// Stores the request body, parsed as JSON when possible, for `ttl` seconds.
pub async fn set_handler(
    State(state): State<AppState>,
    Query(query): Query<CacheQuery>,
    body: String,
) -> Result<Json<SetResponse>> {
    let key = query.key().ok_or(ApiError::MissingKey(Operation::Set))?;
    if body.is_empty() {
        return Err(ApiError::EmptyBody);
    }
    let ttl = query.ttl_or(state.default_ttl).map_err(ApiError::InvalidTtl)?;

    let value = parse_payload(&body);
    let meta = state.cache.set(key, value.clone(), ttl);
    info!("Cached item with key: {}, TTL: {} seconds", key, ttl.as_secs());

    Ok(Json(SetResponse::new(key, value, meta, ttl)))
}

/// Handler for DELETE /api/cache?key=K
///
/// Reports whether the key held an entry, even an expired one.
pub async fn delete_handler(
    State(state): State<AppState>,
    Query(query): Query<CacheQuery>,
) -> Result<Json<DeleteResponse>> {
    let key = query.key().ok_or(ApiError::MissingKey(Operation::Delete))?;

    let existed = state.cache.delete(key);
    info!("Cache item removed: key={}, existed={}", key, existed);

    Ok(Json(DeleteResponse::new(key, existed)))
}

/// Fallback for any other method on /api/cache
pub async fn unsupported_method_handler() -> ApiError {
    ApiError::UnsupportedMethod
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.cache.stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
