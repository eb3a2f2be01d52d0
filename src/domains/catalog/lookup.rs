//! Playlist lookup by id.

use super::model::{Catalog, Playlist};

/// Outcome of looking a playlist up by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(Playlist),
    NotFound,
}

impl Lookup {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn into_option(self) -> Option<Playlist> {
        match self {
            Self::Found(playlist) => Some(playlist),
            Self::NotFound => None,
        }
    }
}

impl From<Option<Playlist>> for Lookup {
    fn from(playlist: Option<Playlist>) -> Self {
        playlist.map_or(Self::NotFound, Self::Found)
    }
}

/// Find the first playlist whose id, rendered as text, equals `id`.
///
/// The comparison is textual: `"007"`, `"+7"` and `" 7"` do not match id 7.
/// With duplicate ids the first one in document order wins.
pub fn find_by_id(catalog: Catalog, id: &str) -> Lookup {
    catalog
        .into_iter()
        .find(|playlist| playlist.id.to_string() == id)
        .into()
}
