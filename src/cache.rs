//! In-memory cache for anonymous audit results.
//!
//! A size- and time-bounded map with an injected clock, owned explicitly by
//! whoever holds the engine: expiry happens on access and via `sweep()`,
//! never from a background timer, so lifecycle and tests stay deterministic.

use std::time::{Duration, Instant};

use indexmap::IndexMap;

use crate::model::AuditResult;

/// Time source for cache expiry. Injected so tests can advance time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

struct CacheEntry {
    result: AuditResult,
    stored_at: Instant,
}

/// TTL- and capacity-bounded audit result cache, keyed by normalized store
/// URL. Insertion-ordered; when full, the oldest entry is evicted.
pub struct AuditCache {
    entries: IndexMap<String, CacheEntry>,
    ttl: Duration,
    capacity: usize,
    clock: Box<dyn Clock>,
}

impl AuditCache {
    /// Create a cache with the system clock.
    #[must_use]
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self::with_clock(ttl, capacity, Box::new(SystemClock))
    }

    /// Create a cache with an injected clock.
    #[must_use]
    pub fn with_clock(ttl: Duration, capacity: usize, clock: Box<dyn Clock>) -> Self {
        Self {
            entries: IndexMap::new(),
            ttl,
            capacity: capacity.max(1),
            clock,
        }
    }

    /// Get a cached result. Expired entries are removed on access.
    pub fn get(&mut self, key: &str) -> Option<AuditResult> {
        let now = self.clock.now();
        match self.entries.get(key) {
            Some(entry) if now.duration_since(entry.stored_at) <= self.ttl => {
                Some(entry.result.clone())
            }
            Some(_) => {
                self.entries.shift_remove(key);
                None
            }
            None => None,
        }
    }

    /// Store a result, evicting the oldest entry if at capacity.
    pub fn insert(&mut self, key: impl Into<String>, result: AuditResult) {
        let key = key.into();
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            self.entries.shift_remove_index(0);
        }
        self.entries.insert(
            key,
            CacheEntry {
                result,
                stored_at: self.clock.now(),
            },
        );
    }

    /// Remove every expired entry; returns how many were evicted.
    pub fn sweep(&mut self) -> usize {
        let now = self.clock.now();
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| now.duration_since(entry.stored_at) <= ttl);
        before - self.entries.len()
    }

    /// Number of entries currently stored (including not-yet-swept expired ones).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
