//! Request and Response models for the cache server API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! parsing requests and serializing HTTP response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{parse_payload, CacheQuery};
pub use responses::{
    DeleteResponse, ErrorResponse, HealthResponse, HitResponse, MissResponse, SetResponse,
    StatsResponse,
};
