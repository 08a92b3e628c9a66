//! Request-deduplicated corpus access.
//!
//! `CorpusStore` is the composite every content consumer goes through:
//! cache lookup, then a remote load on miss, then insertion. Concurrent
//! loads for the same key collapse onto one shared in-flight request, so
//! interleaved callers observe exactly one remote fetch and all resolve
//! (or all fail) together. Distinct keys load independently.

use crate::cache::{CorpusCache, CorpusCacheConfig};
use crate::error::Result;
use crate::key::ContentKey;
use crate::models::{Edition, Surah, SurahId};
use crate::source::ContentSource;
use bridge_traits::time::Clock;
use core_runtime::events::{ContentEvent, CoreEvent, EventBus};
use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex as AsyncMutex;
use tracing::{debug, info, instrument};

type SharedLoad = Shared<BoxFuture<'static, Result<Arc<Surah>>>>;

/// Cached, deduplicated access to remote corpus content.
///
/// Construct once per process and share via `Arc`; all methods take `&self`.
pub struct CorpusStore {
    cache: Arc<Mutex<CorpusCache>>,
    source: Arc<dyn ContentSource>,
    inflight: AsyncMutex<HashMap<ContentKey, SharedLoad>>,
    text_edition: Edition,
    audio_edition: Edition,
    event_bus: Option<Arc<EventBus>>,
}

impl CorpusStore {
    /// Create a new store.
    ///
    /// # Arguments
    ///
    /// * `config` - Cache capacity and freshness settings
    /// * `source` - Remote content source implementation
    /// * `clock` - Time source for freshness checks
    /// * `text_edition` - Edition used by [`CorpusStore::surah`]
    /// * `audio_edition` - Edition used by [`CorpusStore::recitation`]
    pub fn new(
        config: CorpusCacheConfig,
        source: Arc<dyn ContentSource>,
        clock: Arc<dyn Clock>,
        text_edition: Edition,
        audio_edition: Edition,
    ) -> Result<Self> {
        let cache = CorpusCache::new(config, clock)?;
        Ok(Self {
            cache: Arc::new(Mutex::new(cache)),
            source,
            inflight: AsyncMutex::new(HashMap::new()),
            text_edition,
            audio_edition,
            event_bus: None,
        })
    }

    /// Attach an event bus for cache lifecycle notifications.
    pub fn with_event_bus(mut self, event_bus: Arc<EventBus>) -> Self {
        self.event_bus = Some(event_bus);
        self
    }

    /// Fetch a surah in the default text edition.
    pub async fn surah(&self, surah: SurahId) -> Result<Arc<Surah>> {
        let edition = self.text_edition.clone();
        self.fetch_or_load(surah, &edition).await
    }

    /// Fetch a surah in an explicit edition.
    pub async fn surah_with_edition(&self, surah: SurahId, edition: &Edition) -> Result<Arc<Surah>> {
        self.fetch_or_load(surah, edition).await
    }

    /// Fetch a surah in the default audio edition, with per-ayah recitation
    /// locations populated.
    pub async fn recitation(&self, surah: SurahId) -> Result<Arc<Surah>> {
        let edition = self.audio_edition.clone();
        self.fetch_or_load(surah, &edition).await
    }

    /// The composite read operation: cached value when fresh, otherwise one
    /// remote load shared by every concurrent caller of the same key.
    ///
    /// A failed load leaves the cache unchanged and is not retried here; the
    /// caller decides whether to retry.
    #[instrument(skip(self, edition), fields(edition = %edition.id()))]
    pub async fn fetch_or_load(&self, surah: SurahId, edition: &Edition) -> Result<Arc<Surah>> {
        let key = ContentKey::new(surah, edition);

        if let Some(value) = self.cache.lock().get(&key) {
            debug!(key = %key, "cache hit");
            return Ok(value);
        }

        let load = {
            let mut inflight = self.inflight.lock().await;

            // Re-check under the in-flight lock: another caller may have
            // completed this load between our miss and acquiring the lock.
            if let Some(value) = self.cache.lock().get(&key) {
                return Ok(value);
            }

            match inflight.get(&key) {
                Some(existing) => {
                    debug!(key = %key, "joining in-flight load");
                    existing.clone()
                }
                None => {
                    let load = self.start_load(key.clone(), surah, edition.clone());
                    inflight.insert(key.clone(), load.clone());
                    load
                }
            }
        };

        let result = load.clone().await;

        // Only the future we actually awaited may be cleared; a newer attempt
        // for the same key must not be disturbed.
        let mut inflight = self.inflight.lock().await;
        if inflight.get(&key).is_some_and(|f| f.ptr_eq(&load)) {
            inflight.remove(&key);
        }

        result
    }

    fn start_load(&self, key: ContentKey, surah: SurahId, edition: Edition) -> SharedLoad {
        let source = Arc::clone(&self.source);
        let cache = Arc::clone(&self.cache);
        let event_bus = self.event_bus.clone();

        async move {
            let fetched = source.fetch_surah(surah, &edition).await?;
            let value = Arc::new(fetched);

            let evicted = cache.lock().put(key.clone(), Arc::clone(&value));

            if let Some(bus) = &event_bus {
                if let Some(victim) = evicted {
                    bus.emit(CoreEvent::Content(ContentEvent::UnitEvicted {
                        key: victim.to_string(),
                    }))
                    .ok();
                }
                bus.emit(CoreEvent::Content(ContentEvent::UnitFetched {
                    key: key.to_string(),
                }))
                .ok();
            }

            info!(key = %key, "fetched and cached content unit");
            Ok(value)
        }
        .boxed()
        .shared()
    }

    /// Number of cached content units.
    pub fn cached_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Drop every cached content unit.
    pub fn clear(&self) {
        self.cache.lock().clear();
    }
}
