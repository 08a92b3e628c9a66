//! Time- and capacity-bounded content storage.
//!
//! Entries expire a fixed TTL after insertion and are purged lazily on the
//! next read. When the capacity limit is reached, the oldest-inserted entry
//! is evicted before a new one is added. Eviction order is insertion order,
//! never access order: reads use `peek` and do not touch recency, so the
//! backing `lru::LruCache` degenerates into an insertion-ordered map with
//! FIFO-style eviction.

use crate::error::{CorpusError, Result};
use crate::key::ContentKey;
use crate::models::Surah;
use bridge_traits::time::Clock;
use chrono::{DateTime, TimeDelta, Utc};
use lru::LruCache;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Configuration for the corpus cache.
#[derive(Debug, Clone)]
pub struct CorpusCacheConfig {
    /// Maximum number of cached content units (default: 150)
    pub capacity: usize,

    /// Freshness window; entries older than this are never served (default: 7 days)
    pub ttl: Duration,
}

impl Default for CorpusCacheConfig {
    fn default() -> Self {
        Self {
            capacity: 150,
            ttl: Duration::from_secs(7 * 24 * 60 * 60),
        }
    }
}

impl CorpusCacheConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the capacity limit.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the freshness window.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Validate configuration.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.capacity == 0 {
            return Err("capacity must be greater than 0".to_string());
        }
        if self.ttl.is_zero() {
            return Err("ttl must be greater than 0".to_string());
        }
        if TimeDelta::from_std(self.ttl).is_err() {
            return Err("ttl out of representable range".to_string());
        }
        Ok(())
    }
}

/// One cached content unit. `stored_at` is set at insertion and never
/// mutated; replacement of a key is delete-then-insert.
struct CacheEntry {
    value: Arc<Surah>,
    stored_at: DateTime<Utc>,
}

/// Insertion-ordered, TTL-bounded content cache.
///
/// Not internally synchronized; the owning store wraps it in a lock.
pub struct CorpusCache {
    entries: LruCache<ContentKey, CacheEntry>,
    capacity: usize,
    ttl: TimeDelta,
    clock: Arc<dyn Clock>,
}

impl CorpusCache {
    /// Create a cache from a validated configuration and a time source.
    pub fn new(config: CorpusCacheConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        config.validate().map_err(CorpusError::Config)?;
        let ttl = TimeDelta::from_std(config.ttl)
            .map_err(|_| CorpusError::Config("ttl out of representable range".to_string()))?;

        Ok(Self {
            entries: LruCache::unbounded(),
            capacity: config.capacity,
            ttl,
            clock,
        })
    }

    /// Return the cached value for `key` if present and fresh.
    ///
    /// A stale entry is removed as a side effect and `None` returned; reads
    /// never extend an entry's freshness.
    pub fn get(&mut self, key: &ContentKey) -> Option<Arc<Surah>> {
        let stored_at = match self.entries.peek(key) {
            Some(entry) => entry.stored_at,
            None => return None,
        };

        let age = self.clock.now().signed_duration_since(stored_at);
        if age >= self.ttl {
            debug!(key = %key, "cache entry expired, purging");
            self.entries.pop(key);
            return None;
        }

        self.entries.peek(key).map(|entry| Arc::clone(&entry.value))
    }

    /// Insert `value` under `key`, evicting the oldest-inserted entry first
    /// when at capacity. Returns the evicted key, if any.
    ///
    /// Re-inserting an existing key replaces its entry (delete-then-insert),
    /// moving the key to the newest position with a fresh `stored_at`.
    pub fn put(&mut self, key: ContentKey, value: Arc<Surah>) -> Option<ContentKey> {
        let entry = CacheEntry {
            value,
            stored_at: self.clock.now(),
        };

        if self.entries.contains(&key) {
            self.entries.pop(&key);
            self.entries.put(key, entry);
            return None;
        }

        let evicted = if self.entries.len() >= self.capacity {
            self.entries.pop_lru().map(|(victim, _)| victim)
        } else {
            None
        };
        if let Some(victim) = &evicted {
            debug!(key = %victim, "capacity reached, evicting oldest-inserted entry");
        }

        self.entries.put(key, entry);
        evicted
    }

    /// Number of cached entries, including ones whose TTL has lapsed but that
    /// have not been read (and therefore purged) yet.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every cached entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
