//! API Module
//!
//! HTTP handlers and routing for the cache server REST API.
//!
//! # Endpoints
//! - `GET /api/cache?key=K` - Read a cached value
//! - `POST|PUT /api/cache?key=K&ttl=S` - Cache the request body
//! - `DELETE /api/cache?key=K` - Remove a key
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
