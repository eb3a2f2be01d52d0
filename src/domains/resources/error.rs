//! Resource-specific error types.

use thiserror::Error;

/// Errors that can occur while reading bundled resources.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The requested resource does not exist in the provider.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The resource name is not a plain relative file name.
    #[error("Invalid resource name: {0}")]
    InvalidName(String),

    /// The resource exists but is not valid JSON.
    #[error("Malformed document '{name}': {source}")]
    MalformedDocument {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// An I/O error occurred while reading the resource.
    #[error("I/O error reading '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

impl ResourceError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid name" error.
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName(name.into())
    }

    /// Create a new "malformed document" error.
    pub fn malformed(name: impl Into<String>, source: serde_json::Error) -> Self {
        Self::MalformedDocument {
            name: name.into(),
            source,
        }
    }

    /// Create a new I/O error for the named resource.
    pub fn io(name: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            name: name.into(),
            source,
        }
    }

    /// Whether this error means the resource is simply absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
