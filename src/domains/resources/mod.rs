//! Resources domain module.
//!
//! This module handles the bundled JSON documents the server reads from:
//! where they come from, and the verbatim passthrough routes built on them.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual document definitions (one file per document)
//! - `registry.rs` - Central document registration
//! - `provider.rs` - Read-only document sources (bundled or on disk)
//! - `service.rs` - Passthrough reads for untyped documents

pub mod definitions;
mod error;
mod provider;
mod registry;
mod service;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use provider::{BundledResources, DirectoryResources, ResourceProvider};
pub use registry::{ResourceEntry, bundled_documents, get_all_resources, resource_names};
pub use service::ResourceService;
