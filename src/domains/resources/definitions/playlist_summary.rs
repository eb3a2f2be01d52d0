//! Playlist summary document.

use super::ResourceDefinition;

/// One summary entry (cover, title, artists) per playlist.
pub struct PlaylistSummaryResource;

impl ResourceDefinition for PlaylistSummaryResource {
    const NAME: &'static str = "playlist.json";
    const ROUTE: &'static str = "/playlists";
    const DESCRIPTION: &'static str = "Playlist summaries, passed through verbatim";

    fn bundled() -> &'static str {
        include_str!("../../../../resources/playlist.json")
    }
}
