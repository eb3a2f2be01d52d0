//! Catalog-specific error types.

use thiserror::Error;

use crate::domains::resources::ResourceError;

/// Errors that can occur while loading the playlist catalog.
///
/// A lookup that finds nothing is not an error; see [`super::Lookup`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog document is absent from the provider.
    #[error("Catalog resource not found: {0}")]
    ResourceNotFound(String),

    /// The catalog document is not valid JSON or not a list of playlists.
    #[error("Malformed catalog '{name}': {source}")]
    MalformedCatalog {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// The provider failed for a reason other than absence.
    #[error("Catalog resource unreadable: {0}")]
    Resource(ResourceError),
}

impl CatalogError {
    /// Create a new "malformed catalog" error.
    pub fn malformed(name: impl Into<String>, source: serde_json::Error) -> Self {
        Self::MalformedCatalog {
            name: name.into(),
            source,
        }
    }
}

impl From<ResourceError> for CatalogError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound(name) => Self::ResourceNotFound(name),
            other => Self::Resource(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_resource_maps_to_resource_not_found() {
        let err: CatalogError = ResourceError::not_found("playlists.json").into();
        assert!(matches!(err, CatalogError::ResourceNotFound(ref n) if n == "playlists.json"));
    }

    #[test]
    fn test_other_resource_errors_are_wrapped() {
        let err: CatalogError = ResourceError::invalid_name("../x").into();
        assert!(matches!(err, CatalogError::Resource(ResourceError::InvalidName(_))));
    }
}
