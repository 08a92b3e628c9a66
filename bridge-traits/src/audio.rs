//! Audio transport bridge trait and supporting types.
//!
//! These abstractions allow the core playback session manager to drive the
//! platform's audio engine while preserving a consistent, async-first API
//! surface. Host applications provide a concrete implementation that satisfies
//! their platform constraints (desktop, mobile, web).
//!
//! The device audio output is the single shared mutable resource of the
//! system. Every method on [`AudioTransport`] is a suspension point; callers
//! must never assume a transport command completes synchronously.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Options supplied to [`AudioTransport::initialize`].
#[derive(Debug, Clone, PartialEq)]
pub struct TransportOptions {
    /// Keep the audio session active while the host app is backgrounded.
    pub stay_active_in_background: bool,
    /// Initial volume (0.0 = muted, 1.0 = unity gain).
    pub initial_volume: f32,
    /// Hint for transports to pre-buffer audio this far ahead before starting.
    pub prebuffer_duration: Duration,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            stay_active_in_background: true,
            initial_volume: 1.0,
            prebuffer_duration: Duration::from_millis(500),
        }
    }
}

/// Reference to a single playable track resolved to a concrete audio location.
///
/// Implementations may use the display fields to enrich platform media
/// sessions or notification center entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRef {
    /// Resolved audio location (HTTPS URL).
    pub url: String,
    /// Display title for the track.
    pub title: Option<String>,
    /// Display artist or reciter string.
    pub artist: Option<String>,
}

impl TrackRef {
    /// Construct a track reference from a resolved audio location.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            artist: None,
        }
    }

    /// Attach a display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Attach a display artist.
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }
}

/// Coarse device-side playback state reported by [`AudioTransport::query_state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportState {
    /// Nothing enqueued, nothing producing audio.
    Inactive,
    /// The transport is actively producing audio.
    Playing,
    /// A track is loaded but output is suspended.
    Paused,
}

/// Trait for platform-specific adapters that drive the native audio engine.
///
/// The core owns exactly one transport handle and serializes all commands
/// through its playback session manager, so implementations may assume that
/// commands arrive one at a time. They must still be `Send + Sync` because
/// the owning session is shared across async tasks.
///
/// # Initialization
///
/// `initialize` is called before first use. If the underlying device reports
/// that it was already initialized (e.g. by a previous process attach),
/// implementations must return [`BridgeError::AlreadyInitialized`](crate::error::BridgeError::AlreadyInitialized)
/// so the core can normalize the condition to success.
#[async_trait::async_trait]
pub trait AudioTransport: Send + Sync {
    /// Initialize the device audio output. Called once per process; repeated
    /// calls are prevented by the core's setup guard.
    async fn initialize(&self, options: TransportOptions) -> Result<()>;

    /// Reset the output: drop any enqueued track and return to a clean state.
    async fn reset(&self) -> Result<()>;

    /// Load the given track and begin producing audio.
    async fn enqueue_and_play(&self, track: TrackRef) -> Result<()>;

    /// Suspend audio output without dropping the loaded track.
    async fn pause(&self) -> Result<()>;

    /// Stop audio output and drop the loaded track.
    async fn stop(&self) -> Result<()>;

    /// Query the transport's current state.
    async fn query_state(&self) -> Result<TransportState>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_options_default_values() {
        let opts = TransportOptions::default();
        assert!(opts.stay_active_in_background);
        assert_eq!(opts.initial_volume, 1.0);
        assert_eq!(opts.prebuffer_duration, Duration::from_millis(500));
    }

    #[test]
    fn track_ref_builder() {
        let track = TrackRef::new("https://cdn.example.com/audio/1.mp3")
            .with_title("Al-Faatiha")
            .with_artist("ar.alafasy");

        assert_eq!(track.url, "https://cdn.example.com/audio/1.mp3");
        assert_eq!(track.title.as_deref(), Some("Al-Faatiha"));
        assert_eq!(track.artist.as_deref(), Some("ar.alafasy"));
    }
}
