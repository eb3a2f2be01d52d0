//! Playlist Server Library
//!
//! A read-only HTTP server for a small catalog of playlists and songs.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server facade and the HTTP transport
//! - **domains**: business logic organized by bounded contexts
//!   - **catalog**: typed playlists, the catalog loader and the lookup by id
//!   - **resources**: the bundled JSON documents and where they are read from
//!
//! # Example
//!
//! ```rust,no_run
//! use playlist_server::core::{CatalogServer, Config, HttpTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let transport = HttpTransport::new(config.http.clone());
//!     transport.run(CatalogServer::new(config)).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{CatalogServer, Config, Error, Result};
