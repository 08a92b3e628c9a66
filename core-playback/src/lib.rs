//! # Playback Session Manager
//!
//! Serializes all playback through the one shared device audio output,
//! provides idempotent device setup, and enforces single-producer semantics
//! across two addressing granularities: a whole surah or one ayah within it.
//!
//! ## Guarantees
//!
//! - [`SetupGuard`](setup::SetupGuard): device initialization happens at most
//!   once per process; callers racing before the first completion share one
//!   in-flight attempt and resolve (or fail) together. A device-reported
//!   "already initialized" condition counts as success.
//! - [`PlaybackSession`](session::PlaybackSession): at most one playback
//!   target is ever active. Every transition into a playing state awaits an
//!   acknowledged transport stop and reset first, so two producers never
//!   overlap, even transiently.
//!
//! ## Teardown
//!
//! Consumers must call [`PlaybackSession::stop`](session::PlaybackSession::stop)
//! when leaving the owning screen. `stop` is idempotent, safe from any state,
//! and swallows device-level errors so teardown never fails.

pub mod error;
pub mod session;
pub mod setup;
pub mod traits;

pub use error::{PlaybackError, Result};
pub use session::{ActiveTarget, PlaybackSession};
pub use setup::SetupGuard;
pub use traits::RecitationResolver;
