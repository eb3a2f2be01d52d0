//! Domains module containing business logic organized by bounded contexts.
//!
//! - **catalog**: typed playlists and the lookup by id
//! - **resources**: the bundled JSON documents and their passthrough

pub mod catalog;
pub mod resources;
