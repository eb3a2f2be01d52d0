//! Configuration management for the playlist server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::transport::HttpConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Main configuration structure for the playlist server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Where documents and static files are read from.
    pub resources: ResourcesConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP listener configuration.
    pub http: HttpConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported in logs and `/health`.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the resources domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcesConfig {
    /// Directory holding `feed.json`, `playlist.json` and `playlists.json`.
    /// If None, the documents compiled into the binary are used.
    pub base_path: Option<PathBuf>,

    /// Directory holding static assets; `/songs/*` maps to `<static_path>/songs`.
    /// Defaults to `resources/static` in the crate root, resolved at build time,
    /// so it does not depend on the working directory.
    pub static_path: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

fn default_static_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources/static")
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            base_path: None,
            static_path: default_static_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "playlist-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            resources: ResourcesConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            http: HttpConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `PLAYLIST_`.
    /// For example: `PLAYLIST_SERVER_NAME`, `PLAYLIST_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("PLAYLIST_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("PLAYLIST_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(base_path) = std::env::var("PLAYLIST_RESOURCES_PATH") {
            config.resources.base_path = Some(PathBuf::from(base_path));
            info!(
                "Reading documents from {:?}",
                config.resources.base_path
            );
        } else {
            info!("PLAYLIST_RESOURCES_PATH not set - serving bundled documents");
        }

        if let Ok(static_path) = std::env::var("PLAYLIST_STATIC_PATH") {
            config.resources.static_path = PathBuf::from(static_path);
        }

        if !config.resources.static_path.is_dir() {
            warn!(
                "Static directory {:?} does not exist - /songs will return 404",
                config.resources.static_path
            );
        }

        config.http = HttpConfig::from_env();

        config
    }
}
