//! Corpus error types.

use thiserror::Error;

/// Errors that can occur while reading corpus content.
///
/// Variants are `Clone` so a single failed load can be delivered to every
/// caller that joined the same in-flight request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CorpusError {
    /// Surah number outside the canonical range.
    #[error("Invalid surah number: {0} (expected 1..=114)")]
    InvalidSurahNumber(u16),

    /// Edition identifier empty or malformed.
    #[error("Invalid edition identifier: {0:?}")]
    InvalidEdition(String),

    /// Cache configuration failed validation.
    #[error("Invalid cache configuration: {0}")]
    Config(String),

    /// The remote source failed to deliver the requested unit.
    #[error("Remote source error for {key}: {message}")]
    Source { key: String, message: String },

    /// The remote source answered with a payload the core cannot interpret.
    #[error("Malformed corpus payload: {0}")]
    MalformedPayload(String),
}

/// Result type for corpus operations.
pub type Result<T> = std::result::Result<T, CorpusError>;
