//! Catalog domain module.
//!
//! The typed playlist catalog: decoding the catalog document and looking
//! playlists up by id.
//!
//! - `model.rs` - Song, Playlist and Catalog
//! - `loader.rs` - Reads and decodes the catalog through a resource provider
//! - `lookup.rs` - First-match lookup by textual id

mod error;
mod loader;
mod lookup;
mod model;

pub use error::CatalogError;
pub use loader::CatalogLoader;
pub use lookup::{Lookup, find_by_id};
pub use model::{Catalog, Playlist, Song};
