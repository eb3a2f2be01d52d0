//! Home feed document.

use super::ResourceDefinition;

/// Sections of albums shown on the home screen.
pub struct FeedResource;

impl ResourceDefinition for FeedResource {
    const NAME: &'static str = "feed.json";
    const ROUTE: &'static str = "/feed";
    const DESCRIPTION: &'static str = "Home feed sections, passed through verbatim";

    fn bundled() -> &'static str {
        include_str!("../../../../resources/feed.json")
    }
}
