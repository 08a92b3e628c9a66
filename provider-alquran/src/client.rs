//! HTTP client for the remote corpus API.

use crate::error::{ProviderError, Result};
use crate::types::{ApiEnvelope, SurahData};
use async_trait::async_trait;
use bridge_traits::http::{HttpClient, HttpRequest};
use core_corpus::{ContentKey, ContentSource, CorpusError, Edition, Surah, SurahId};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Default remote corpus API endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.alquran.cloud/v1";

/// Configuration for [`AlQuranClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the corpus API
    pub api_base_url: String,
    /// Timeout applied to each request
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(ProviderError::Config(
                "api_base_url cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Corpus API client.
///
/// One [`ContentSource::fetch_surah`] call maps to one
/// `GET {base}/surah/{number}/{edition}` request. The client performs no
/// caching and no retries of its own; deduplication lives in the corpus
/// store and transport-level retry in the HTTP bridge.
pub struct AlQuranClient {
    http: Arc<dyn HttpClient>,
    config: ClientConfig,
}

impl AlQuranClient {
    /// Create a new client over the injected HTTP bridge.
    pub fn new(http: Arc<dyn HttpClient>, config: ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { http, config })
    }

    fn surah_url(&self, surah: SurahId, edition: &Edition) -> String {
        format!(
            "{}/surah/{}/{}",
            self.config.api_base_url.trim_end_matches('/'),
            surah,
            edition.id()
        )
    }

    #[instrument(skip(self, edition), fields(edition = %edition.id()))]
    async fn fetch(&self, surah: SurahId, edition: &Edition) -> Result<Surah> {
        let url = self.surah_url(surah, edition);
        debug!(url = %url, "fetching surah");

        let request = HttpRequest::get(url.as_str()).timeout(self.config.request_timeout);
        let response = self.http.execute(request).await?;

        if !response.is_success() {
            warn!(status = response.status, url = %url, "corpus API request failed");
            return Err(ProviderError::Http {
                status: response.status,
                url,
            });
        }

        let envelope: ApiEnvelope<SurahData> = response
            .json()
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        if envelope.code != 200 || !envelope.status.eq_ignore_ascii_case("ok") {
            return Err(ProviderError::Api {
                code: envelope.code,
                status: envelope.status,
            });
        }

        let data = envelope
            .data
            .ok_or_else(|| ProviderError::Decode("envelope carries no data".to_string()))?;

        Ok(data.into_model())
    }
}

#[async_trait]
impl ContentSource for AlQuranClient {
    async fn fetch_surah(&self, surah: SurahId, edition: &Edition) -> core_corpus::Result<Surah> {
        self.fetch(surah, edition)
            .await
            .map_err(|e| CorpusError::Source {
                key: ContentKey::new(surah, edition).to_string(),
                message: e.to_string(),
            })
    }
}
