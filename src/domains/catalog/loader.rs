//! Catalog loader.
//!
//! Reads the catalog document through a [`ResourceProvider`] and decodes it
//! into a [`Catalog`]. Nothing is cached: every call reads and decodes the
//! document again.

use std::sync::Arc;
use tracing::{debug, warn};

use super::error::CatalogError;
use super::model::Catalog;
use crate::domains::resources::ResourceProvider;

/// Loads playlist catalogs from a resource provider.
#[derive(Clone)]
pub struct CatalogLoader {
    provider: Arc<dyn ResourceProvider>,
}

impl CatalogLoader {
    /// Create a loader reading through `provider`.
    pub fn new(provider: Arc<dyn ResourceProvider>) -> Self {
        Self { provider }
    }

    /// Read and decode the named catalog document.
    ///
    /// Fails with [`CatalogError::ResourceNotFound`] if the document is absent
    /// and [`CatalogError::MalformedCatalog`] if it does not decode.
    pub async fn load(&self, name: &str) -> Result<Catalog, CatalogError> {
        let text = self.provider.read_text(name).await?;
        let catalog = Self::parse(name, &text)?;

        debug!("Loaded {} playlists from {}", catalog.len(), name);
        Ok(catalog)
    }

    /// Decode a catalog document that is already in memory.
    pub fn parse(name: &str, text: &str) -> Result<Catalog, CatalogError> {
        serde_json::from_str(text).map_err(|e| {
            warn!("Catalog {} failed to decode: {}", name, e);
            CatalogError::malformed(name, e)
        })
    }
}
