use bridge_traits::error::BridgeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] BridgeError),

    #[error("Remote API returned HTTP {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Remote API rejected the request: code {code}, status {status:?}")]
    Api { code: i64, status: String },

    #[error("Failed to decode API payload: {0}")]
    Decode(String),

    #[error("Invalid provider configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ProviderError>;
