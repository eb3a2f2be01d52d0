//! Catalog server and request-level operations.
//!
//! `CatalogServer` is what the HTTP handlers talk to. It owns the resource
//! provider and composes the catalog loader, the lookup and the passthrough
//! reads. It holds no per-request state: every playlist request loads the
//! catalog afresh.

use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::catalog::{CatalogLoader, Lookup, find_by_id};
use crate::domains::resources::{
    BundledResources, DirectoryResources, ResourceDefinition, ResourceEntry, ResourceProvider,
    ResourceService, definitions::{FeedResource, PlaylistSummaryResource, PlaylistsResource},
};

/// The request-facing server facade.
#[derive(Clone)]
pub struct CatalogServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Loader for the typed playlist catalog.
    loader: CatalogLoader,

    /// Service for the passthrough documents.
    resource_service: ResourceService,
}

impl CatalogServer {
    /// Create a server with the provider selected by `config`.
    pub fn new(config: Config) -> Self {
        let provider: Arc<dyn ResourceProvider> = match &config.resources.base_path {
            Some(path) => Arc::new(DirectoryResources::new(path)),
            None => Arc::new(BundledResources::new()),
        };
        Self::with_provider(config, provider)
    }

    /// Create a server reading documents through `provider`.
    pub fn with_provider(config: Config, provider: Arc<dyn ResourceProvider>) -> Self {
        info!("Using resource provider: {}", provider.describe());

        Self {
            config: Arc::new(config),
            loader: CatalogLoader::new(provider.clone()),
            resource_service: ResourceService::new(provider),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Documents this server reads.
    pub fn documents(&self) -> Vec<ResourceEntry> {
        self.resource_service.list_resources()
    }

    /// Load the catalog and look up the playlist with the given textual id.
    #[instrument(skip(self))]
    pub async fn playlist(&self, id: &str) -> Result<Lookup> {
        let catalog = self.loader.load(PlaylistsResource::NAME).await?;
        let lookup = find_by_id(catalog, id);

        info!(found = lookup.is_found(), "Playlist lookup");
        Ok(lookup)
    }

    /// The home feed document.
    pub async fn feed(&self) -> Result<Value> {
        Ok(self.resource_service.read_json(FeedResource::NAME).await?)
    }

    /// The playlist summary document.
    pub async fn playlists(&self) -> Result<Value> {
        Ok(self
            .resource_service
            .read_json(PlaylistSummaryResource::NAME)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use crate::domains::catalog::CatalogError;

    fn server(documents: Vec<(&str, &str)>) -> CatalogServer {
        CatalogServer::with_provider(
            Config::default(),
            Arc::new(BundledResources::from_documents(documents)),
        )
    }

    #[tokio::test]
    async fn test_bundled_server_finds_playlist() {
        let server = CatalogServer::new(Config::default());

        let lookup = server.playlist("1").await.unwrap();
        assert!(lookup.is_found());
    }

    #[tokio::test]
    async fn test_playlist_not_found() {
        let server = server(vec![("playlists.json", r#"[{"id":1,"songs":[]}]"#)]);

        let lookup = server.playlist("2").await.unwrap();
        assert_eq!(lookup, Lookup::NotFound);
    }

    #[tokio::test]
    async fn test_missing_catalog_is_error() {
        let server = server(vec![]);

        let result = server.playlist("1").await;
        assert!(matches!(
            result,
            Err(Error::Catalog(CatalogError::ResourceNotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_each_request_reloads() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("playlists.json");
        std::fs::write(&path, r#"[{"id":1,"songs":[]}]"#).unwrap();

        let mut config = Config::default();
        config.resources.base_path = Some(dir.path().to_path_buf());
        let server = CatalogServer::new(config);

        assert!(!server.playlist("2").await.unwrap().is_found());

        std::fs::write(&path, r#"[{"id":2,"songs":[]}]"#).unwrap();
        assert!(server.playlist("2").await.unwrap().is_found());
    }

    #[tokio::test]
    async fn test_feed_and_playlists_passthrough() {
        let server = server(vec![
            ("feed.json", r#"{"sections":[]}"#),
            ("playlist.json", r#"[{"id":1}]"#),
        ]);

        assert_eq!(server.feed().await.unwrap()["sections"], Value::Array(vec![]));
        assert_eq!(server.playlists().await.unwrap()[0]["id"], 1);
    }

    #[test]
    fn test_name_and_version() {
        let server = CatalogServer::new(Config::default());
        assert_eq!(server.name(), "playlist-server");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }
}
