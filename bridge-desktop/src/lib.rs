//! # Desktop Bridge Implementations
//!
//! Desktop-ready adapters for the host bridge traits. Currently provides the
//! [`ReqwestHttpClient`] used for all remote corpus reads. No desktop audio
//! transport ships from here; hosts inject their platform's audio engine
//! adapter directly.

pub mod http;

pub use http::ReqwestHttpClient;
