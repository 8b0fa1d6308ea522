//! Error types for the cache server
//!
//! Request-level failures, rejected before a request reaches the cache.
//! The cache itself never fails: a miss is an outcome, not an error.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Usage Hints ==
const GET_USAGE: &str = "GET /api/cache?key=yourkey";
const SET_USAGE: &str = "POST /api/cache?key=yourkey&ttl=300 with the value as the request body";
const DELETE_USAGE: &str = "DELETE /api/cache?key=yourkey";

/// Which cache operation a request was aimed at, for usage hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Get,
    Set,
    Delete,
}

impl Operation {
    fn usage(self) -> &'static str {
        match self {
            Operation::Get => GET_USAGE,
            Operation::Set => SET_USAGE,
            Operation::Delete => DELETE_USAGE,
        }
    }
}

// == Api Error Enum ==
/// Unified error type for the HTTP layer.
#[derive(Error, Debug)]
pub enum ApiError {
    /// `key` query parameter absent or empty
    #[error("Key parameter is required")]
    MissingKey(Operation),

    /// POST/PUT without a body
    #[error("Request body is required for cache value")]
    EmptyBody,

    /// `ttl` query parameter out of range
    #[error("Invalid TTL: {0}")]
    InvalidTtl(String),

    /// Method other than GET, POST, PUT, DELETE
    #[error("Unsupported HTTP method")]
    UnsupportedMethod,
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, body) = match &self {
            ApiError::MissingKey(op) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(message).with_usage(op.usage()),
            ),
            ApiError::EmptyBody => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(message)
                    .with_usage("POST with JSON body containing the value to cache"),
            ),
            ApiError::InvalidTtl(_) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(message).with_usage(SET_USAGE),
            ),
            ApiError::UnsupportedMethod => (StatusCode::BAD_REQUEST, ErrorResponse::new(message)),
        };

        (status, Json(body)).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache server.
pub type Result<T> = std::result::Result<T, ApiError>;
