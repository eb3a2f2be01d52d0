//! HTTP transport implementation.
//!
//! Serves the playlist lookup, the passthrough documents and the static song
//! files over plain HTTP.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::{CatalogServer, Result};
use crate::domains::catalog::Lookup;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Run the HTTP transport until Ctrl+C or SIGTERM.
    pub async fn run(self, server: CatalogServer) -> TransportResult<()> {
        let addr = self.config.address();
        info!("Starting transport: {}", self.config.description());

        let mut app = build_router(server);

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {}", addr);
        info!("  → Playlist:  GET /playlist/{{id}}");
        info!("  → Documents: GET /feed, GET /playlists");
        info!("  → Songs:     GET /songs/*");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Build the router for all routes served by `server`.
///
/// CORS is left to [`HttpTransport::run`] so the router can be driven
/// directly in tests.
pub fn build_router(server: CatalogServer) -> Router {
    let songs_dir = server.config().resources.static_path.join("songs");

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check))
        .route("/feed", get(feed_handler))
        .route("/playlists", get(playlists_handler))
        .route("/playlist/{id}", get(playlist_handler))
        .nest_service("/songs", ServeDir::new(songs_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(server)
}

async fn root_handler() -> &'static str {
    "Hello World!"
}

/// Health check endpoint.
async fn health_check(State(server): State<CatalogServer>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "name": server.name(),
        "version": server.version(),
        "documents": server.documents(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn feed_handler(State(server): State<CatalogServer>) -> Result<Json<serde_json::Value>> {
    Ok(Json(server.feed().await?))
}

async fn playlists_handler(
    State(server): State<CatalogServer>,
) -> Result<Json<serde_json::Value>> {
    Ok(Json(server.playlists().await?))
}

/// Look a playlist up by id.
///
/// A match is rendered as pretty-printed JSON. No match is `200` with an
/// empty body rather than an HTTP error.
#[instrument(skip(server))]
async fn playlist_handler(
    State(server): State<CatalogServer>,
    Path(id): Path<String>,
) -> Result<Response> {
    match server.playlist(&id).await? {
        Lookup::Found(playlist) => {
            let body = serde_json::to_string_pretty(&playlist)?;
            Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
        }
        Lookup::NotFound => Ok(StatusCode::OK.into_response()),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received terminate signal, shutting down"),
    }
}
