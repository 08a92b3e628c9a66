//! Playback error types.

use thiserror::Error;

/// Errors that can occur while managing the playback session.
///
/// Variants are `Clone` so one failed device setup can be delivered to every
/// caller awaiting the shared in-flight attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// Device audio initialization failed (the "already initialized" device
    /// condition is normalized to success and never surfaces here).
    #[error("Audio device setup failed: {0}")]
    SetupFailed(String),

    /// A device transport command failed.
    #[error("Audio transport {operation} failed: {message}")]
    Transport { operation: String, message: String },

    /// The requested target could not be resolved to a playable track.
    #[error("Could not resolve a track for {target}: {message}")]
    Resolve { target: String, message: String },
}

impl PlaybackError {
    /// Returns `true` if this error originates from the audio device rather
    /// than from content resolution.
    pub fn is_device_error(&self) -> bool {
        matches!(
            self,
            PlaybackError::SetupFailed(_) | PlaybackError::Transport { .. }
        )
    }
}

/// Result type for playback operations.
pub type Result<T> = std::result::Result<T, PlaybackError>;
