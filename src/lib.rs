//! Request Cache - an HTTP-fronted expiring key-value cache
//!
//! Entries carry an absolute expiry set at write time and a sliding deadline
//! that each read pushes forward, capped by the absolute expiry.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::ExpiringCache;
pub use config::Config;
pub use tasks::{spawn_sweep_task, SweepHandle};
