//! Resource definitions module.
//!
//! Each bundled document is defined in its own file with:
//! - File name and route
//! - The copy compiled into the binary
//!
//! ## Adding a New Document
//!
//! 1. Drop the JSON file into `resources/`
//! 2. Create a definition file here implementing `ResourceDefinition`
//! 3. Register it in `registry.rs`

mod feed;
mod playlist_summary;
mod playlists;

pub use feed::FeedResource;
pub use playlist_summary::PlaylistSummaryResource;
pub use playlists::PlaylistsResource;

/// Trait for bundled resource definitions.
///
/// Each document served by the catalog implements this trait to provide its
/// metadata and bundled content.
pub trait ResourceDefinition {
    /// File name the document is stored under.
    const NAME: &'static str;

    /// HTTP route the document backs.
    const ROUTE: &'static str;

    /// A description of the document.
    const DESCRIPTION: &'static str;

    /// The MIME type of the document.
    const MIME_TYPE: &'static str = "application/json";

    /// The copy of the document compiled into the binary.
    fn bundled() -> &'static str;
}
