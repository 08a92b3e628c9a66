use thiserror::Error;

/// Top-level error type surfaced by the service façade.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Runtime(#[from] core_runtime::Error),

    #[error(transparent)]
    Corpus(#[from] core_corpus::CorpusError),

    #[error(transparent)]
    Playback(#[from] core_playback::PlaybackError),

    #[error(transparent)]
    Provider(#[from] provider_alquran::ProviderError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
