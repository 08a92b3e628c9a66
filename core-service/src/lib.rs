//! Core service façade and bootstrap helpers.
//!
//! This crate wires host-provided bridge implementations (HTTP client, device
//! audio transport, clock) into the shared core: the corpus store and the
//! playback session. Desktop apps typically enable the `desktop-shims`
//! feature to pick up the reqwest HTTP client by default; mobile and web
//! hosts inject their own adapters through
//! [`CoreConfig`](core_runtime::config::CoreConfig).
//!
//! ```ignore
//! use core_runtime::config::CoreConfig;
//! use core_service::CoreService;
//! use std::sync::Arc;
//!
//! let config = CoreConfig::builder()
//!     .audio_transport(Arc::new(MyAudioTransport))
//!     .build()?;
//! let service = CoreService::new(config)?;
//!
//! let surah = service.corpus().surah(SurahId::new(36)?).await?;
//! service.playback().play_surah(SurahId::new(36)?).await?;
//!
//! // On app teardown:
//! service.shutdown().await;
//! ```

pub mod error;

pub use error::{CoreError, Result};

use core_corpus::{CorpusCacheConfig, CorpusStore, Edition};
use core_playback::PlaybackSession;
use core_runtime::config::CoreConfig;
use core_runtime::events::EventBus;
use provider_alquran::{AlQuranClient, CdnRecitationResolver, ClientConfig, ResolverConfig};
use std::sync::Arc;
use tracing::info;

/// Primary façade exposed to host applications.
#[derive(Clone)]
pub struct CoreService {
    corpus: Arc<CorpusStore>,
    playback: Arc<PlaybackSession>,
    events: Arc<EventBus>,
}

impl CoreService {
    /// Assemble the core from a validated configuration.
    pub fn new(config: CoreConfig) -> Result<Self> {
        let events = Arc::new(EventBus::default());

        let client = AlQuranClient::new(
            Arc::clone(&config.http_client),
            ClientConfig {
                api_base_url: config.api_base_url.clone(),
                request_timeout: config.request_timeout,
            },
        )?;

        let corpus = Arc::new(
            CorpusStore::new(
                CorpusCacheConfig::new()
                    .with_capacity(config.cache_capacity)
                    .with_ttl(config.cache_ttl),
                Arc::new(client),
                Arc::clone(&config.clock),
                Edition::text(config.text_edition.clone())?,
                Edition::audio(config.audio_edition.clone())?,
            )?
            .with_event_bus(Arc::clone(&events)),
        );

        let resolver = CdnRecitationResolver::new(
            Arc::clone(&corpus),
            ResolverConfig {
                cdn_base_url: config.audio_cdn_base_url.clone(),
                audio_bitrate_kbps: config.audio_bitrate_kbps,
                reciter_edition: config.audio_edition.clone(),
            },
        )?;

        let playback = Arc::new(
            PlaybackSession::new(
                Arc::clone(&config.audio_transport),
                Arc::new(resolver),
                config.transport_options.clone(),
            )
            .with_event_bus(Arc::clone(&events)),
        );

        info!("core service assembled");
        Ok(Self {
            corpus,
            playback,
            events,
        })
    }

    /// Shared corpus store handle.
    pub fn corpus(&self) -> Arc<CorpusStore> {
        Arc::clone(&self.corpus)
    }

    /// Shared playback session handle.
    pub fn playback(&self) -> Arc<PlaybackSession> {
        Arc::clone(&self.playback)
    }

    /// Event bus carrying content and playback lifecycle events.
    pub fn events(&self) -> Arc<EventBus> {
        Arc::clone(&self.events)
    }

    /// Release the audio output.
    ///
    /// Mandatory before dropping the service on app teardown; playback stop
    /// is unconditional and swallows device errors.
    pub async fn shutdown(&self) {
        self.playback.stop().await;
        info!("core service shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::audio::{AudioTransport, TrackRef, TransportOptions, TransportState};
    use bridge_traits::error::Result as BridgeResult;
    use bridge_traits::http::{HttpClient, HttpRequest, HttpResponse};
    use core_corpus::SurahId;

    struct NullTransport;

    #[async_trait::async_trait]
    impl AudioTransport for NullTransport {
        async fn initialize(&self, _options: TransportOptions) -> BridgeResult<()> {
            Ok(())
        }
        async fn reset(&self) -> BridgeResult<()> {
            Ok(())
        }
        async fn enqueue_and_play(&self, _track: TrackRef) -> BridgeResult<()> {
            Ok(())
        }
        async fn pause(&self) -> BridgeResult<()> {
            Ok(())
        }
        async fn stop(&self) -> BridgeResult<()> {
            Ok(())
        }
        async fn query_state(&self) -> BridgeResult<TransportState> {
            Ok(TransportState::Inactive)
        }
    }

    struct CannedHttp;

    #[async_trait::async_trait]
    impl HttpClient for CannedHttp {
        async fn execute(&self, _request: HttpRequest) -> BridgeResult<HttpResponse> {
            Ok(HttpResponse {
                status: 200,
                headers: Default::default(),
                body: bytes_body(),
            })
        }
    }

    fn bytes_body() -> bytes::Bytes {
        bytes::Bytes::from_static(
            br#"{
                "code": 200,
                "status": "OK",
                "data": {
                    "number": 1,
                    "name": "x",
                    "englishName": "Al-Faatiha",
                    "englishNameTranslation": "The Opening",
                    "revelationType": "Meccan",
                    "numberOfAyahs": 0,
                    "ayahs": []
                }
            }"#,
        )
    }

    fn service() -> CoreService {
        let config = CoreConfig::builder()
            .http_client(Arc::new(CannedHttp))
            .audio_transport(Arc::new(NullTransport))
            .build()
            .unwrap();
        CoreService::new(config).unwrap()
    }

    #[tokio::test]
    async fn assembles_and_serves_content() {
        let service = service();
        let surah = service.corpus().surah(SurahId::new(1).unwrap()).await.unwrap();
        assert_eq!(surah.english_name, "Al-Faatiha");
    }

    #[tokio::test]
    async fn shutdown_stops_playback() {
        let service = service();
        service.shutdown().await;
        assert!(service.playback().active_target().await.is_none());
    }
}
