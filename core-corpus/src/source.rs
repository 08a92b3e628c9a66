//! Remote content source seam.

use crate::error::Result;
use crate::models::{Edition, Surah, SurahId};
use async_trait::async_trait;

/// Read-only access to the remote corpus.
///
/// One invocation corresponds to one remote request; implementations must not
/// cache (the [`CorpusStore`](crate::store::CorpusStore) owns caching and
/// request deduplication) and must not retry beyond their transport's own
/// policy. Failures surface to the caller; the cache stays unchanged.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch one surah in the given edition: unit metadata plus the ordered
    /// ayah list.
    async fn fetch_surah(&self, surah: SurahId, edition: &Edition) -> Result<Surah>;
}
