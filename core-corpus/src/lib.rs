//! # Corpus Content Cache
//!
//! Mediates all reads of remote reference content (surahs and their ayahs,
//! per edition), returning cached results when fresh and within capacity,
//! otherwise fetching, storing, and evicting.
//!
//! ## Overview
//!
//! - [`CorpusCache`](cache::CorpusCache) - time- and capacity-bounded storage.
//!   Entries expire after a fixed TTL (purged lazily on read) and the
//!   oldest-inserted entry is evicted when the capacity limit is hit.
//!   Reads never refresh an entry's freshness; this is a write-once/expire
//!   cache, not an access-order LRU.
//! - [`CorpusStore`](store::CorpusStore) - the request-deduplicated access
//!   layer every content consumer goes through. Concurrent loads for the same
//!   key collapse onto a single in-flight request.
//! - [`ContentSource`](source::ContentSource) - the remote read seam,
//!   implemented by provider crates.
//!
//! ## Keying
//!
//! Cache keys encode every dimension that changes the payload: the surah
//! number and the edition identifier (which itself distinguishes script,
//! translation, and reciter variants). Distinct variants never collide.
//!
//! ## Failure Semantics
//!
//! Loader failures propagate to the caller uncached; the cache is never left
//! with partial or placeholder entries and performs no retries of its own.

pub mod cache;
pub mod error;
pub mod key;
pub mod models;
pub mod source;
pub mod store;

pub use cache::{CorpusCache, CorpusCacheConfig};
pub use error::{CorpusError, Result};
pub use key::ContentKey;
pub use models::{Ayah, Edition, EditionKind, Surah, SurahId};
pub use source::ContentSource;
pub use store::CorpusStore;
