//! Cache Entry Module
//!
//! Defines a stored entry and the expiration math behind it.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::cache::clock::{add_saturating, duration_until};
use crate::cache::EvictionReason;

// == Entry Metadata ==
/// Timestamps describing an entry's lifetime.
///
/// Returned by value from every cache operation; holding one never pins
/// anything inside the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMeta {
    /// When the entry was stored
    pub created_at: DateTime<Utc>,
    /// Hard deadline, fixed at insertion and never extended
    pub absolute_expiry: DateTime<Utc>,
    /// Deadline pushed forward by reads, capped at `absolute_expiry`
    pub sliding_deadline: DateTime<Utc>,
}

impl EntryMeta {
    /// Computes the metadata for an entry stored at `now`.
    pub fn new(now: DateTime<Utc>, ttl: Duration, sliding_window: Duration) -> Self {
        let absolute_expiry = add_saturating(now, ttl);
        let sliding_deadline = absolute_expiry.min(add_saturating(now, sliding_window));

        Self {
            created_at: now,
            absolute_expiry,
            sliding_deadline,
        }
    }

    /// The moment the entry stops being live.
    pub fn effective_deadline(&self) -> DateTime<Utc> {
        self.absolute_expiry.min(self.sliding_deadline)
    }

    /// Boundary condition: an entry is expired once `now` reaches its
    /// effective deadline.
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        now < self.effective_deadline()
    }

    /// Time left before the effective deadline, zero once it has passed.
    pub fn remaining_ttl(&self, now: DateTime<Utc>) -> Duration {
        duration_until(now, self.effective_deadline())
    }

    /// Which deadline ended the entry's life.
    ///
    /// Ties go to the absolute expiry, since the sliding deadline was capped by it.
    pub fn expiry_reason(&self) -> EvictionReason {
        if self.absolute_expiry <= self.sliding_deadline {
            EvictionReason::AbsoluteExpired
        } else {
            EvictionReason::SlidingExpired
        }
    }
}

// == Cache Entry ==
/// A stored value together with its expiration metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value, opaque to the cache
    pub value: V,
    /// Lifetime timestamps
    pub meta: EntryMeta,
}

impl<V> CacheEntry<V> {
    /// Creates an entry stored at `now`.
    pub fn new(value: V, now: DateTime<Utc>, ttl: Duration, sliding_window: Duration) -> Self {
        Self {
            value,
            meta: EntryMeta::new(now, ttl, sliding_window),
        }
    }

    /// Extends the sliding deadline after a read at `now`.
    ///
    /// The deadline never moves backwards and never passes the absolute expiry.
    pub fn touch(&mut self, now: DateTime<Utc>, sliding_window: Duration) {
        let candidate = self
            .meta
            .absolute_expiry
            .min(add_saturating(now, sliding_window));
        self.meta.sliding_deadline = self.meta.sliding_deadline.max(candidate);
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    const WINDOW: Duration = Duration::from_secs(60);

    #[test]
    fn test_meta_long_ttl_starts_with_window() {
        let now = Utc::now();
        let meta = EntryMeta::new(now, Duration::from_secs(300), WINDOW);

        assert_eq!(meta.created_at, now);
        assert_eq!(meta.absolute_expiry, now + TimeDelta::seconds(300));
        assert_eq!(meta.sliding_deadline, now + TimeDelta::seconds(60));
        assert_eq!(meta.effective_deadline(), meta.sliding_deadline);
    }

    #[test]
    fn test_meta_short_ttl_caps_sliding_deadline() {
        let now = Utc::now();
        let meta = EntryMeta::new(now, Duration::from_secs(10), WINDOW);

        assert_eq!(meta.sliding_deadline, meta.absolute_expiry);
        assert_eq!(meta.remaining_ttl(now), Duration::from_secs(10));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Utc::now();
        let meta = EntryMeta::new(now, Duration::from_secs(5), WINDOW);

        assert!(meta.is_live(now + TimeDelta::milliseconds(4_999)));
        assert!(!meta.is_live(now + TimeDelta::seconds(5)), "expired at deadline");
    }

    #[test]
    fn test_zero_ttl_is_never_live() {
        let now = Utc::now();
        let meta = EntryMeta::new(now, Duration::ZERO, WINDOW);

        assert!(!meta.is_live(now));
        assert_eq!(meta.remaining_ttl(now), Duration::ZERO);
    }

    #[test]
    fn test_touch_extends_sliding_deadline() {
        let now = Utc::now();
        let mut entry = CacheEntry::new("v", now, Duration::from_secs(600), WINDOW);

        let later = now + TimeDelta::seconds(30);
        entry.touch(later, WINDOW);

        assert_eq!(entry.meta.sliding_deadline, later + TimeDelta::seconds(60));
        assert_eq!(entry.meta.absolute_expiry, now + TimeDelta::seconds(600));
    }

    #[test]
    fn test_touch_capped_by_absolute_expiry() {
        let now = Utc::now();
        let mut entry = CacheEntry::new("v", now, Duration::from_secs(90), WINDOW);

        entry.touch(now + TimeDelta::seconds(50), WINDOW);

        assert_eq!(entry.meta.sliding_deadline, entry.meta.absolute_expiry);
    }

    #[test]
    fn test_touch_never_rolls_back() {
        let now = Utc::now();
        let mut entry = CacheEntry::new("v", now, Duration::from_secs(600), WINDOW);

        entry.touch(now + TimeDelta::seconds(40), WINDOW);
        let advanced = entry.meta.sliding_deadline;

        // A read stamped earlier than the last one must not pull the deadline back
        entry.touch(now + TimeDelta::seconds(10), WINDOW);
        assert_eq!(entry.meta.sliding_deadline, advanced);
    }

    #[test]
    fn test_expiry_reason() {
        let now = Utc::now();
        let capped = EntryMeta::new(now, Duration::from_secs(10), WINDOW);
        assert_eq!(capped.expiry_reason(), EvictionReason::AbsoluteExpired);

        let sliding = EntryMeta::new(now, Duration::from_secs(600), WINDOW);
        assert_eq!(sliding.expiry_reason(), EvictionReason::SlidingExpired);
    }

    #[test]
    fn test_remaining_ttl_after_deadline() {
        let now = Utc::now();
        let meta = EntryMeta::new(now, Duration::from_secs(1), WINDOW);
        assert_eq!(meta.remaining_ttl(now + TimeDelta::seconds(2)), Duration::ZERO);
    }
}
