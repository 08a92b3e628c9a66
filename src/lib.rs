//! Workspace façade crate.
//!
//! Host applications can depend on `qpc-workspace` and reach the service
//! façade without wiring each member crate individually. The interesting
//! code lives in the members:
//!
//! - `bridge-traits` / `bridge-desktop` - host capability traits and desktop
//!   adapters
//! - `core-runtime` - logging, configuration, events
//! - `core-corpus` - the bounded, request-deduplicated content cache
//! - `core-playback` - the exclusive playback session manager
//! - `provider-alquran` - the remote corpus API and CDN provider

pub use core_service::{CoreError, CoreService, Result};
