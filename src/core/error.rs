//! Error types and handling for the playlist server.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and external dependencies. Handlers return it directly; every
//! variant is a server-side failure and renders as a `500` JSON body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// A specialized Result type for playlist server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the playlist server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the catalog domain.
    #[error("Catalog error: {0}")]
    Catalog(#[from] crate::domains::catalog::CatalogError),

    /// Error originating from the resources domain.
    #[error("Resource error: {0}")]
    Resource(#[from] crate::domains::resources::ResourceError),

    /// JSON serialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self);

        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::CatalogError;

    #[test]
    fn test_catalog_error_is_server_failure() {
        let err: Error = CatalogError::ResourceNotFound("playlists.json".into()).into();
        assert!(err.to_string().contains("playlists.json"));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
