//! # Core Configuration Module
//!
//! Provides configuration management for the platform core.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a `CoreConfig`
//! instance that holds all bridge dependencies and settings the core library
//! needs. It enforces fail-fast validation so a missing capability surfaces at
//! startup with an actionable message, not deep inside an operation.
//!
//! ## Required Dependencies
//!
//! - `AudioTransport` - The platform's device audio output adapter
//!
//! ## Optional Dependencies (with defaults)
//!
//! - `HttpClient` - HTTP operations (desktop default: reqwest, behind the
//!   `desktop-shims` feature)
//! - `Clock` - Time source (default: system clock)
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::CoreConfig;
//! use std::sync::Arc;
//!
//! let config = CoreConfig::builder()
//!     .audio_transport(Arc::new(MyAudioTransport))
//!     .audio_edition("ar.alafasy")
//!     .cache_capacity(150)
//!     .build()
//!     .expect("Failed to build config");
//! ```

use crate::error::{Error, Result};
use bridge_traits::{
    audio::{AudioTransport, TransportOptions},
    http::HttpClient,
    time::{Clock, SystemClock},
};
use std::sync::Arc;
use std::time::Duration;

/// Default remote corpus API endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.alquran.cloud/v1";

/// Default CDN hosting whole-surah recitation audio.
pub const DEFAULT_AUDIO_CDN_BASE_URL: &str = "https://cdn.islamic.network";

/// Default text edition identifier.
pub const DEFAULT_TEXT_EDITION: &str = "quran-uthmani";

/// Default audio (reciter) edition identifier.
pub const DEFAULT_AUDIO_EDITION: &str = "ar.alafasy";

/// Core configuration for the platform core.
///
/// Holds all dependencies and settings required to initialize the core
/// library. Use [`CoreConfig::builder`] to construct instances.
#[derive(Clone)]
pub struct CoreConfig {
    /// HTTP client for remote corpus reads
    pub http_client: Arc<dyn HttpClient>,

    /// Device audio output adapter (required, host-provided)
    pub audio_transport: Arc<dyn AudioTransport>,

    /// Time source used for cache freshness checks
    pub clock: Arc<dyn Clock>,

    /// Base URL of the remote corpus API
    pub api_base_url: String,

    /// Base URL of the recitation audio CDN
    pub audio_cdn_base_url: String,

    /// Edition identifier used for text reads
    pub text_edition: String,

    /// Edition identifier used for recitation audio
    pub audio_edition: String,

    /// Bitrate (kbps) of whole-surah CDN audio
    pub audio_bitrate_kbps: u32,

    /// Maximum number of cached content units
    pub cache_capacity: usize,

    /// Freshness window for cached content units
    pub cache_ttl: Duration,

    /// Timeout applied to each remote corpus request
    pub request_timeout: Duration,

    /// Options passed to the device audio output on initialization
    pub transport_options: TransportOptions,
}

impl CoreConfig {
    /// Start building a configuration.
    pub fn builder() -> CoreConfigBuilder {
        CoreConfigBuilder::default()
    }
}

/// Builder for [`CoreConfig`]. Settings default to production values; bridge
/// handles must be provided (or covered by a platform default).
pub struct CoreConfigBuilder {
    http_client: Option<Arc<dyn HttpClient>>,
    audio_transport: Option<Arc<dyn AudioTransport>>,
    clock: Option<Arc<dyn Clock>>,
    api_base_url: String,
    audio_cdn_base_url: String,
    text_edition: String,
    audio_edition: String,
    audio_bitrate_kbps: u32,
    cache_capacity: usize,
    cache_ttl: Duration,
    request_timeout: Duration,
    transport_options: TransportOptions,
}

impl Default for CoreConfigBuilder {
    fn default() -> Self {
        Self {
            http_client: None,
            audio_transport: None,
            clock: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            audio_cdn_base_url: DEFAULT_AUDIO_CDN_BASE_URL.to_string(),
            text_edition: DEFAULT_TEXT_EDITION.to_string(),
            audio_edition: DEFAULT_AUDIO_EDITION.to_string(),
            audio_bitrate_kbps: 128,
            cache_capacity: 150,
            cache_ttl: Duration::from_secs(7 * 24 * 60 * 60),
            request_timeout: Duration::from_secs(30),
            transport_options: TransportOptions::default(),
        }
    }
}

impl CoreConfigBuilder {
    /// Inject the HTTP client implementation.
    pub fn http_client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Inject the device audio output adapter (required).
    pub fn audio_transport(mut self, transport: Arc<dyn AudioTransport>) -> Self {
        self.audio_transport = Some(transport);
        self
    }

    /// Inject a custom time source.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Override the remote corpus API base URL.
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Override the recitation audio CDN base URL.
    pub fn audio_cdn_base_url(mut self, url: impl Into<String>) -> Self {
        self.audio_cdn_base_url = url.into();
        self
    }

    /// Set the default text edition.
    pub fn text_edition(mut self, edition: impl Into<String>) -> Self {
        self.text_edition = edition.into();
        self
    }

    /// Set the default audio (reciter) edition.
    pub fn audio_edition(mut self, edition: impl Into<String>) -> Self {
        self.audio_edition = edition.into();
        self
    }

    /// Set the CDN audio bitrate in kbps.
    pub fn audio_bitrate_kbps(mut self, bitrate: u32) -> Self {
        self.audio_bitrate_kbps = bitrate;
        self
    }

    /// Set the maximum number of cached content units.
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Set the cache freshness window.
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Set the per-request timeout for remote corpus reads.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the options passed to the device audio output on initialization.
    pub fn transport_options(mut self, options: TransportOptions) -> Self {
        self.transport_options = options;
        self
    }

    /// Validate settings and assemble the configuration.
    pub fn build(self) -> Result<CoreConfig> {
        if self.api_base_url.is_empty() {
            return Err(Error::Config("api_base_url cannot be empty".to_string()));
        }
        if self.audio_cdn_base_url.is_empty() {
            return Err(Error::Config(
                "audio_cdn_base_url cannot be empty".to_string(),
            ));
        }
        if self.text_edition.is_empty() || self.audio_edition.is_empty() {
            return Err(Error::Config(
                "edition identifiers cannot be empty".to_string(),
            ));
        }
        if self.cache_capacity == 0 {
            return Err(Error::Config(
                "cache_capacity must be greater than 0".to_string(),
            ));
        }
        if self.cache_ttl.is_zero() {
            return Err(Error::Config(
                "cache_ttl must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.transport_options.initial_volume) {
            return Err(Error::Config(
                "initial_volume must be between 0.0 and 1.0".to_string(),
            ));
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => Self::default_http_client()?,
        };

        let audio_transport = self.audio_transport.ok_or_else(|| Error::CapabilityMissing {
            capability: "AudioTransport".to_string(),
            message: "No device audio output adapter provided. \
                      Inject the platform-native transport via \
                      CoreConfig::builder().audio_transport(..)."
                .to_string(),
        })?;

        let clock: Arc<dyn Clock> = match self.clock {
            Some(clock) => clock,
            None => Arc::new(SystemClock),
        };

        Ok(CoreConfig {
            http_client,
            audio_transport,
            clock,
            api_base_url: self.api_base_url,
            audio_cdn_base_url: self.audio_cdn_base_url,
            text_edition: self.text_edition,
            audio_edition: self.audio_edition,
            audio_bitrate_kbps: self.audio_bitrate_kbps,
            cache_capacity: self.cache_capacity,
            cache_ttl: self.cache_ttl,
            request_timeout: self.request_timeout,
            transport_options: self.transport_options,
        })
    }

    #[cfg(feature = "desktop-shims")]
    fn default_http_client() -> Result<Arc<dyn HttpClient>> {
        Ok(Arc::new(bridge_desktop::ReqwestHttpClient::new()))
    }

    #[cfg(not(feature = "desktop-shims"))]
    fn default_http_client() -> Result<Arc<dyn HttpClient>> {
        Err(Error::CapabilityMissing {
            capability: "HttpClient".to_string(),
            message: "No HTTP client implementation provided. \
                      Desktop: enable the desktop-shims feature. \
                      Mobile/web: inject a platform-native adapter."
                .to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::audio::{TrackRef, TransportState};
    use bridge_traits::error::Result as BridgeResult;
    use bridge_traits::http::{HttpRequest, HttpResponse};

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

    struct NullHttpClient;

    #[async_trait::async_trait]
    impl HttpClient for NullHttpClient {
        async fn execute(&self, _request: HttpRequest) -> BridgeResult<HttpResponse> {
            Ok(HttpResponse {
                status: 200,
                headers: Default::default(),
                body: Default::default(),
            })
        }
    }

    #[test]
    fn test_build_with_defaults() {
        let config = CoreConfig::builder()
            .http_client(Arc::new(NullHttpClient))
            .audio_transport(Arc::new(NullTransport))
            .build()
            .expect("valid config");

        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.text_edition, DEFAULT_TEXT_EDITION);
        assert_eq!(config.audio_edition, DEFAULT_AUDIO_EDITION);
        assert_eq!(config.cache_capacity, 150);
        assert_eq!(config.cache_ttl, Duration::from_secs(7 * 24 * 60 * 60));
    }

    #[test]
    fn test_missing_transport_rejected() {
        let result = CoreConfig::builder()
            .http_client(Arc::new(NullHttpClient))
            .build();

        assert!(matches!(
            result,
            Err(Error::CapabilityMissing { capability, .. }) if capability == "AudioTransport"
        ));
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let result = CoreConfig::builder()
            .http_client(Arc::new(NullHttpClient))
            .audio_transport(Arc::new(NullTransport))
            .cache_capacity(0)
            .build();
        assert!(matches!(result, Err(Error::Config(_))));

        let result = CoreConfig::builder()
            .http_client(Arc::new(NullHttpClient))
            .audio_transport(Arc::new(NullTransport))
            .text_edition("")
            .build();
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
