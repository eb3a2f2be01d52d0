//! Resource Registry - central registration of all bundled documents.
//!
//! When adding a new document:
//! 1. Create the definition file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resources()`

use serde::Serialize;

use super::definitions::{
    FeedResource, PlaylistSummaryResource, PlaylistsResource, ResourceDefinition,
};

/// Metadata for one registered document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceEntry {
    /// File name of the document.
    pub name: &'static str,

    /// Route the document backs.
    pub route: &'static str,

    /// Human readable description.
    pub description: &'static str,

    /// MIME type of the document.
    pub mime_type: &'static str,

    /// Bundled content.
    #[serde(skip)]
    pub content: &'static str,
}

fn build_entry<R: ResourceDefinition>() -> ResourceEntry {
    ResourceEntry {
        name: R::NAME,
        route: R::ROUTE,
        description: R::DESCRIPTION,
        mime_type: R::MIME_TYPE,
        content: R::bundled(),
    }
}

/// Get all registered documents.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        build_entry::<FeedResource>(),
        build_entry::<PlaylistSummaryResource>(),
        build_entry::<PlaylistsResource>(),
    ]
}

/// Name and content of every bundled document.
pub fn bundled_documents() -> Vec<(&'static str, &'static str)> {
    get_all_resources()
        .into_iter()
        .map(|entry| (entry.name, entry.content))
        .collect()
}

/// Get the list of all document names.
pub fn resource_names() -> Vec<&'static str> {
    get_all_resources().iter().map(|r| r.name).collect()
}
