//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host platform.
//!
//! ## Overview
//!
//! This crate defines the contract between the core library and platform-specific
//! implementations. Each trait represents a capability that the core requires but
//! that must be implemented differently per platform (desktop, iOS, Android, web).
//!
//! ## Traits
//!
//! ### Networking
//! - [`HttpClient`](http::HttpClient) - Async HTTP operations with retry and TLS
//!
//! ### Audio
//! - [`AudioTransport`](audio::AudioTransport) - The single shared device audio
//!   output. The core's playback session manager is the sole owner of this
//!   capability; no other component may issue transport commands directly.
//!
//! ### Utilities
//! - [`Clock`](time::Clock) - Time source for deterministic testing
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type. Platform
//! implementations should:
//!
//! - Convert platform-specific errors to `BridgeError`
//! - Provide actionable error messages
//! - Report a device-level "already initialized" condition as
//!   [`BridgeError::AlreadyInitialized`] so the core can normalize it to success
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` bounds to support safe concurrent usage
//! across async tasks. Implementations must ensure thread safety.

pub mod audio;
pub mod error;
pub mod http;
pub mod time;

pub use error::BridgeError;

// Re-export commonly used types
pub use audio::{AudioTransport, TrackRef, TransportOptions, TransportState};
pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse, RetryPolicy};
pub use time::{Clock, SystemClock};
