//! Transport layer for the playlist server.
//!
//! The server speaks plain HTTP: JSON documents, the playlist lookup and
//! static song files behind one axum router.

mod config;
mod error;
pub mod http;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use http::{HttpTransport, build_router};
