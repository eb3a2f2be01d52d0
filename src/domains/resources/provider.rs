//! Resource providers.
//!
//! A provider is the read-only capability the catalog reads its documents
//! through. The server picks one at startup: the bundle compiled into the
//! binary, or a directory on disk.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

use super::error::ResourceError;
use super::registry::bundled_documents;

/// Trait for read-only sources of named text documents.
#[async_trait]
pub trait ResourceProvider: Send + Sync {
    /// Short label for logging.
    fn describe(&self) -> String;

    /// Read the full text of the named document.
    async fn read_text(&self, name: &str) -> Result<String, ResourceError>;
}

// ============================================================================
// Bundled resources
// ============================================================================

/// Documents held in memory, by default the ones compiled into the binary.
#[derive(Debug, Clone)]
pub struct BundledResources {
    documents: HashMap<String, String>,
}

impl BundledResources {
    /// Create a provider over the documents shipped with the server.
    pub fn new() -> Self {
        Self::from_documents(bundled_documents())
    }

    /// Create a provider over an arbitrary set of named documents.
    pub fn from_documents<I, K, V>(documents: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            documents: documents
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Default for BundledResources {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResourceProvider for BundledResources {
    fn describe(&self) -> String {
        format!("bundled ({} documents)", self.documents.len())
    }

    async fn read_text(&self, name: &str) -> Result<String, ResourceError> {
        self.documents
            .get(name)
            .cloned()
            .ok_or_else(|| ResourceError::not_found(name))
    }
}

// ============================================================================
// Directory resources
// ============================================================================

/// Documents read from a directory on every request.
#[derive(Debug, Clone)]
pub struct DirectoryResources {
    base_path: PathBuf,
}

impl DirectoryResources {
    /// Create a provider rooted at `base_path`.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Resolve a document name below the base path.
    ///
    /// Only plain relative names are accepted; `..`, roots and prefixes are
    /// rejected so a name can never leave the base directory.
    fn resolve(&self, name: &str) -> Result<PathBuf, ResourceError> {
        let relative = Path::new(name);
        let mut components = relative.components().peekable();

        if components.peek().is_none() {
            return Err(ResourceError::invalid_name(name));
        }
        if !components.all(|c| matches!(c, Component::Normal(_))) {
            return Err(ResourceError::invalid_name(name));
        }

        Ok(self.base_path.join(relative))
    }
}

#[async_trait]
impl ResourceProvider for DirectoryResources {
    fn describe(&self) -> String {
        format!("directory {}", self.base_path.display())
    }

    async fn read_text(&self, name: &str) -> Result<String, ResourceError> {
        let path = self.resolve(name)?;
        debug!("Reading resource {} from {}", name, path.display());

        tokio::fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResourceError::not_found(name)
            } else {
                ResourceError::io(name, e)
            }
        })
    }
}
