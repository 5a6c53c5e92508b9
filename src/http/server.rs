//! HTTP server setup and the avatar lookup handler.
//!
//! # Responsibilities
//! - Create Axum Router with the avatar route
//! - Wire up middleware (tracing, timeout, request ID)
//! - Dispatch lookups to the Steam client
//! - Map lookup outcomes to wire responses

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::http::request::{RequestIdLayer, X_REQUEST_ID};
use crate::http::response::{AvatarResponse, LookupError};
use crate::steam::SteamClient;

/// Application state injected into handlers.
///
/// Everything here is constructed once at startup; handlers share it by
/// cheap clone. There is no mutable state to coordinate.
#[derive(Clone)]
pub struct AppState {
    pub steam: Arc<SteamClient>,
}

/// HTTP server for the avatar proxy.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let steam = Arc::new(SteamClient::new(&config.upstream));
        let state = AppState { steam };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route("/avatar/{id}", get(avatar_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.endpoint,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Avatar lookup handler.
///
/// Forwards the identifier to the Steam client and branches on how many
/// players came back. Exactly one match yields the full-size avatar URL;
/// zero or several are caller errors; upstream failures propagate as 500.
async fn avatar_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<AvatarResponse>, LookupError> {
    let request_id = headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::debug!(request_id = %request_id, id = %id, "Avatar lookup");

    let players = state.steam.player_summaries(&id).await.map_err(|e| {
        tracing::error!(request_id = %request_id, id = %id, error = %e, "Upstream lookup failed");
        LookupError::from(e)
    })?;

    match players.as_slice() {
        [] => Err(LookupError::NoMatch),
        [player] => Ok(Json(AvatarResponse {
            avatar_url: player.avatar_full.clone(),
        })),
        _ => {
            tracing::warn!(
                request_id = %request_id,
                id = %id,
                count = players.len(),
                "Identifier matched multiple players"
            );
            Err(LookupError::Ambiguous)
        }
    }
}
