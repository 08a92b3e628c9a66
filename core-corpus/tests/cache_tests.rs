//! Integration tests for the corpus cache bounds.
//!
//! Verifies the capacity limit, insertion-order eviction, lazy TTL expiry,
//! and the write-once freshness policy (reads never refresh an entry).

use bridge_traits::time::Clock;
use chrono::{DateTime, TimeDelta, Utc};
use core_corpus::{ContentKey, CorpusCache, CorpusCacheConfig, Edition, Surah, SurahId};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// Clock whose current time is advanced by hand.
struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(Utc::now()),
        })
    }

    fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        *now = *now + TimeDelta::from_std(by).unwrap();
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

fn surah_value(number: u16) -> Arc<Surah> {
    Arc::new(Surah {
        number,
        name: format!("surah-{}", number),
        english_name: format!("Surah {}", number),
        english_name_translation: String::new(),
        revelation_type: "Meccan".to_string(),
        number_of_ayahs: 0,
        ayahs: Vec::new(),
    })
}

fn key(edition_id: &str) -> ContentKey {
    ContentKey::new(
        SurahId::new(1).unwrap(),
        &Edition::text(edition_id).unwrap(),
    )
}

const SEVEN_DAYS: Duration = Duration::from_secs(7 * 24 * 60 * 60);

#[test]
fn capacity_bound_holds_after_every_put() {
    let config = CorpusCacheConfig::new().with_capacity(10);
    let mut cache = CorpusCache::new(config, ManualClock::new()).unwrap();

    for i in 0..25 {
        cache.put(key(&format!("edition-{}", i)), surah_value(1));
        assert!(cache.len() <= 10, "capacity exceeded after put {}", i);
    }
    assert_eq!(cache.len(), 10);
}

#[test]
fn first_inserted_key_is_evicted_at_capacity_plus_one() {
    // Default capacity of 150: 151 distinct keys leave the first absent and
    // the last 150 present.
    let mut cache = CorpusCache::new(CorpusCacheConfig::default(), ManualClock::new()).unwrap();

    for i in 0..151 {
        cache.put(key(&format!("edition-{}", i)), surah_value(1));
    }

    assert_eq!(cache.len(), 150);
    assert!(cache.get(&key("edition-0")).is_none());
    for i in 1..151 {
        assert!(
            cache.get(&key(&format!("edition-{}", i))).is_some(),
            "edition-{} should still be cached",
            i
        );
    }
}

#[test]
fn reads_do_not_refresh_eviction_order() {
    let config = CorpusCacheConfig::new().with_capacity(3);
    let mut cache = CorpusCache::new(config, ManualClock::new()).unwrap();

    cache.put(key("a"), surah_value(1));
    cache.put(key("b"), surah_value(2));
    cache.put(key("c"), surah_value(3));

    // Reading "a" must not protect it: eviction order is insertion order.
    assert!(cache.get(&key("a")).is_some());
    let evicted = cache.put(key("d"), surah_value(4));

    assert_eq!(evicted, Some(key("a")));
    assert!(cache.get(&key("a")).is_none());
    assert!(cache.get(&key("b")).is_some());
}

#[test]
fn stale_entry_is_purged_on_read() {
    let clock = ManualClock::new();
    let mut cache = CorpusCache::new(CorpusCacheConfig::default(), clock.clone()).unwrap();

    cache.put(key("quran-uthmani"), surah_value(1));
    clock.advance(SEVEN_DAYS + Duration::from_secs(1));

    assert!(cache.get(&key("quran-uthmani")).is_none());
    // The stale entry was removed as a side effect of the read.
    assert_eq!(cache.len(), 0);
}

#[test]
fn entry_is_fresh_within_ttl() {
    let clock = ManualClock::new();
    let mut cache = CorpusCache::new(CorpusCacheConfig::default(), clock.clone()).unwrap();

    cache.put(key("quran-uthmani"), surah_value(1));
    clock.advance(SEVEN_DAYS - Duration::from_secs(1));

    assert!(cache.get(&key("quran-uthmani")).is_some());
}

#[test]
fn replacement_moves_key_to_newest_position() {
    let config = CorpusCacheConfig::new().with_capacity(3);
    let mut cache = CorpusCache::new(config, ManualClock::new()).unwrap();

    cache.put(key("a"), surah_value(1));
    cache.put(key("b"), surah_value(2));
    cache.put(key("c"), surah_value(3));

    // Replacing "a" re-inserts it at the newest position, so the next
    // eviction victim is "b".
    cache.put(key("a"), surah_value(10));
    let evicted = cache.put(key("d"), surah_value(4));

    assert_eq!(evicted, Some(key("b")));
    assert_eq!(cache.get(&key("a")).map(|s| s.number), Some(10));
}

#[test]
fn replacement_resets_freshness() {
    let clock = ManualClock::new();
    let mut cache = CorpusCache::new(CorpusCacheConfig::default(), clock.clone()).unwrap();

    cache.put(key("quran-uthmani"), surah_value(1));
    clock.advance(Duration::from_secs(6 * 24 * 60 * 60));

    // Re-insert six days in; the replacement carries a fresh stored_at.
    cache.put(key("quran-uthmani"), surah_value(1));
    clock.advance(Duration::from_secs(6 * 24 * 60 * 60));

    assert!(cache.get(&key("quran-uthmani")).is_some());
}

#[test]
fn ttl_custom_window() {
    let clock = ManualClock::new();
    let config = CorpusCacheConfig::new().with_ttl(Duration::from_secs(60));
    let mut cache = CorpusCache::new(config, clock.clone()).unwrap();

    cache.put(key("quran-uthmani"), surah_value(1));
    clock.advance(Duration::from_secs(59));
    assert!(cache.get(&key("quran-uthmani")).is_some());

    clock.advance(Duration::from_secs(2));
    assert!(cache.get(&key("quran-uthmani")).is_none());
}
