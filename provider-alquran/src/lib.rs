//! # AlQuran Cloud Provider
//!
//! Remote corpus provider backed by an alquran.cloud-style HTTP API plus a
//! recitation audio CDN.
//!
//! - [`AlQuranClient`](client::AlQuranClient) implements the corpus
//!   [`ContentSource`](core_corpus::ContentSource) seam: one read-only HTTP
//!   request per fetch, keyed by surah number and edition identifier.
//! - [`CdnRecitationResolver`](resolver::CdnRecitationResolver) implements the
//!   playback [`RecitationResolver`](core_playback::RecitationResolver) seam:
//!   per-ayah audio locations come from the cached audio edition payload,
//!   whole-surah tracks from a deterministic CDN URL.

pub mod client;
pub mod error;
pub mod resolver;
pub mod types;

pub use client::{AlQuranClient, ClientConfig};
pub use error::{ProviderError, Result};
pub use resolver::{CdnRecitationResolver, ResolverConfig};
