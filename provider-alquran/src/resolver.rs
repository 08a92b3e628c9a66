//! Recitation track resolution.
//!
//! Maps playback targets to concrete audio locations:
//! - one ayah: taken from the cached audio edition payload, so repeated
//!   resolutions of ayahs in the same surah cost one remote fetch at most;
//! - whole surah: a deterministic CDN URL, no fetch required.

use crate::error::{ProviderError, Result};
use async_trait::async_trait;
use bridge_traits::audio::TrackRef;
use core_corpus::{CorpusStore, SurahId};
use core_playback::{PlaybackError, RecitationResolver};
use std::sync::Arc;
use tracing::debug;

/// Default CDN hosting recitation audio.
pub const DEFAULT_CDN_BASE_URL: &str = "https://cdn.islamic.network";

/// Configuration for [`CdnRecitationResolver`].
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Base URL of the recitation audio CDN
    pub cdn_base_url: String,
    /// Bitrate (kbps) of whole-surah CDN audio
    pub audio_bitrate_kbps: u32,
    /// Reciter edition identifier used in CDN paths and display metadata
    pub reciter_edition: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            cdn_base_url: DEFAULT_CDN_BASE_URL.to_string(),
            audio_bitrate_kbps: 128,
            reciter_edition: "ar.alafasy".to_string(),
        }
    }
}

impl ResolverConfig {
    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        if self.cdn_base_url.trim().is_empty() {
            return Err(ProviderError::Config(
                "cdn_base_url cannot be empty".to_string(),
            ));
        }
        if self.reciter_edition.trim().is_empty() {
            return Err(ProviderError::Config(
                "reciter_edition cannot be empty".to_string(),
            ));
        }
        if self.audio_bitrate_kbps == 0 {
            return Err(ProviderError::Config(
                "audio_bitrate_kbps must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Resolver backed by the corpus store and the recitation CDN.
pub struct CdnRecitationResolver {
    store: Arc<CorpusStore>,
    config: ResolverConfig,
}

impl CdnRecitationResolver {
    /// Create a resolver over the shared corpus store.
    pub fn new(store: Arc<CorpusStore>, config: ResolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { store, config })
    }
}

#[async_trait]
impl RecitationResolver for CdnRecitationResolver {
    async fn resolve_surah(&self, surah: SurahId) -> core_playback::Result<TrackRef> {
        let url = format!(
            "{}/quran/audio-surah/{}/{}/{}.mp3",
            self.config.cdn_base_url.trim_end_matches('/'),
            self.config.audio_bitrate_kbps,
            self.config.reciter_edition,
            surah
        );
        debug!(unit = %surah, "resolved whole-surah track");

        Ok(TrackRef::new(url)
            .with_title(format!("Surah {}", surah))
            .with_artist(self.config.reciter_edition.clone()))
    }

    async fn resolve_ayah(&self, surah: SurahId, ayah: u16) -> core_playback::Result<TrackRef> {
        let target = format!("surah:{}:ayah:{}", surah, ayah);

        let unit = self
            .store
            .recitation(surah)
            .await
            .map_err(|e| PlaybackError::Resolve {
                target: target.clone(),
                message: e.to_string(),
            })?;

        let ayah_doc = unit.ayah(ayah).ok_or_else(|| PlaybackError::Resolve {
            target: target.clone(),
            message: format!(
                "ayah {} out of range (surah has {})",
                ayah, unit.number_of_ayahs
            ),
        })?;

        let url = ayah_doc
            .audio
            .clone()
            .ok_or_else(|| PlaybackError::Resolve {
                target: target.clone(),
                message: "edition carries no audio location".to_string(),
            })?;

        debug!(unit = %target, "resolved ayah track");
        Ok(TrackRef::new(url)
            .with_title(unit.english_name.clone())
            .with_artist(self.config.reciter_edition.clone()))
    }
}
