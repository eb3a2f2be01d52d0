//! Resource service implementation.
//!
//! The ResourceService serves the passthrough documents: it reads a document
//! through the configured provider, checks that it is JSON and hands back the
//! parsed value for re-emission. No typed decoding happens here; object key
//! order and number literals come back exactly as written.

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

use super::error::ResourceError;
use super::provider::ResourceProvider;
use super::registry::{ResourceEntry, get_all_resources};

/// Service for reading passthrough documents.
#[derive(Clone)]
pub struct ResourceService {
    provider: Arc<dyn ResourceProvider>,
}

impl ResourceService {
    /// Create a new ResourceService over the given provider.
    pub fn new(provider: Arc<dyn ResourceProvider>) -> Self {
        info!("Initializing ResourceService ({})", provider.describe());
        Self { provider }
    }

    /// List all registered documents.
    pub fn list_resources(&self) -> Vec<ResourceEntry> {
        get_all_resources()
    }

    /// Read a document and parse it as untyped JSON.
    pub async fn read_json(&self, name: &str) -> Result<Value, ResourceError> {
        let text = self.provider.read_text(name).await?;
        debug!("Read {} bytes from {}", text.len(), name);

        serde_json::from_str(&text).map_err(|e| ResourceError::malformed(name, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::resources::provider::BundledResources;

    fn service(documents: Vec<(&str, &str)>) -> ResourceService {
        ResourceService::new(Arc::new(BundledResources::from_documents(documents)))
    }

    #[tokio::test]
    async fn test_read_existing_document() {
        let service = service(vec![("feed.json", r#"[{"section_title":"Top"}]"#)]);

        let value = service.read_json("feed.json").await.unwrap();
        assert_eq!(value[0]["section_title"], "Top");
    }

    #[tokio::test]
    async fn test_read_nonexistent_document() {
        let service = service(vec![]);

        let result = service.read_json("feed.json").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_read_malformed_document() {
        let service = service(vec![("feed.json", "[{\"section_title\":")]);

        let result = service.read_json("feed.json").await;
        assert!(matches!(
            result,
            Err(ResourceError::MalformedDocument { .. })
        ));
    }

    #[tokio::test]
    async fn test_passthrough_is_compact() {
        let service = service(vec![("playlist.json", "[\n  { \"id\" : 1 }\n]")]);

        let value = service.read_json("playlist.json").await.unwrap();
        assert_eq!(value.to_string(), r#"[{"id":1}]"#);
    }

    #[tokio::test]
    async fn test_passthrough_keeps_key_order() {
        let service = service(vec![(
            "feed.json",
            r#"[ {"section_title": "Top", "albums": [ {"id": 1, "album_cover": "c", "album": "A"} ]} ]"#,
        )]);

        let value = service.read_json("feed.json").await.unwrap();
        assert_eq!(
            value.to_string(),
            r#"[{"section_title":"Top","albums":[{"id":1,"album_cover":"c","album":"A"}]}]"#
        );
    }

    #[tokio::test]
    async fn test_passthrough_keeps_number_literals() {
        let service = service(vec![(
            "playlist.json",
            r#"{"price": 1.10, "big": 12345678901234567890123}"#,
        )]);

        let value = service.read_json("playlist.json").await.unwrap();
        assert_eq!(
            value.to_string(),
            r#"{"price":1.10,"big":12345678901234567890123}"#
        );
    }

    #[test]
    fn test_list_resources() {
        let service = ResourceService::new(Arc::new(BundledResources::new()));
        assert_eq!(service.list_resources().len(), 3);
    }
}
