//! Eviction Notification Module
//!
//! Observers that hear about entries removed because they expired.
//! Explicit deletes and overwrites are not evictions and are never reported.

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{info, warn};

// == Eviction Reason ==
/// Why an entry was evicted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvictionReason {
    /// The absolute expiry set at insertion passed
    AbsoluteExpired,
    /// The entry went unread for longer than the sliding window
    SlidingExpired,
}

impl fmt::Display for EvictionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvictionReason::AbsoluteExpired => write!(f, "absolute_expired"),
            EvictionReason::SlidingExpired => write!(f, "sliding_expired"),
        }
    }
}

// == Eviction Listener ==
/// Receives a notification for every expiry-driven removal.
///
/// Registered once per cache. Runs after the entry's lock has been released,
/// so implementations may call back into the cache. Errors and panics are
/// logged and swallowed.
pub trait EvictionListener: Send + Sync {
    fn on_evict(&self, key: &str, reason: EvictionReason) -> anyhow::Result<()>;
}

impl<F> EvictionListener for F
where
    F: Fn(&str, EvictionReason) -> anyhow::Result<()> + Send + Sync,
{
    fn on_evict(&self, key: &str, reason: EvictionReason) -> anyhow::Result<()> {
        self(key, reason)
    }
}

// == Logging Listener ==
/// Listener that records evictions in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingEvictionListener;

impl EvictionListener for LoggingEvictionListener {
    fn on_evict(&self, key: &str, reason: EvictionReason) -> anyhow::Result<()> {
        info!("Cache item evicted: key={}, reason={}", key, reason);
        Ok(())
    }
}

/// Invokes `listener`, containing any failure it reports or panic it raises.
pub(crate) fn notify(listener: &dyn EvictionListener, key: &str, reason: EvictionReason) {
    match catch_unwind(AssertUnwindSafe(|| listener.on_evict(key, reason))) {
        Ok(Ok(())) => {}
        Ok(Err(err)) => {
            warn!("Eviction listener failed for key={}: {:#}", key, err);
        }
        Err(_) => {
            warn!("Eviction listener panicked for key={}", key);
        }
    }
}
