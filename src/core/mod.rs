//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the playlist
//! server: error handling, configuration, the request-facing server facade
//! and the HTTP transport.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::CatalogServer;
pub use transport::{HttpConfig, HttpTransport, TransportError, build_router};
