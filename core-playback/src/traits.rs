//! Core playback traits.

use crate::error::Result;
use async_trait::async_trait;
use bridge_traits::audio::TrackRef;
use core_corpus::SurahId;

/// Resolves playback targets to concrete audio locations.
///
/// The session manager addresses content at two granularities: a whole surah
/// or one ayah within it. Implementations map either target to a [`TrackRef`]
/// the device transport can play, typically by consulting the corpus store
/// (for per-ayah recitation locations) or a recitation CDN (for whole-surah
/// tracks).
#[async_trait]
pub trait RecitationResolver: Send + Sync {
    /// Resolve the whole-surah recitation track.
    async fn resolve_surah(&self, surah: SurahId) -> Result<TrackRef>;

    /// Resolve the recitation track of one ayah, addressed by its position
    /// within the surah.
    async fn resolve_ayah(&self, surah: SurahId, ayah: u16) -> Result<TrackRef>;
}
