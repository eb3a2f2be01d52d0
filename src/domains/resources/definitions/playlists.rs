//! Playlist catalog document.
//!
//! Unlike the other documents this one is decoded into typed playlists by
//! the catalog loader.

use super::ResourceDefinition;

/// Full playlists with their songs.
pub struct PlaylistsResource;

impl ResourceDefinition for PlaylistsResource {
    const NAME: &'static str = "playlists.json";
    const ROUTE: &'static str = "/playlist/{id}";
    const DESCRIPTION: &'static str = "Playlist catalog, looked up by id";

    fn bundled() -> &'static str {
        include_str!("../../../../resources/playlists.json")
    }
}
