//! Cache Module
//!
//! Provides an in-memory cache with absolute and sliding expiration.

mod clock;
mod entry;
mod eviction;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::{CacheEntry, EntryMeta};
pub use eviction::{EvictionListener, EvictionReason, LoggingEvictionListener};
pub use stats::{CacheStats, StatsRecorder};
pub use store::{CacheHit, ExpiringCache};

use std::time::Duration;

// == Public Constants ==
/// How far each read pushes an entry's sliding deadline
pub const DEFAULT_SLIDING_WINDOW: Duration = Duration::from_secs(60);

/// TTL applied by callers that do not request one
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);
