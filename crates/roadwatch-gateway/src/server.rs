// SPDX-FileCopyrightText: 2026 Roadwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Router assembly and the server loop.

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use roadwatch_core::RoadwatchError;
use roadwatch_store::{CredentialStore, DamageReportStore, DamageTypeCatalog};
use tower_http::{
    cors::CorsLayer,
    services::ServeFile,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::auth::api_key_middleware;
use crate::handlers;

/// Gateway settings (mirrors `ServerConfig` from roadwatch-config so this
/// crate does not depend on the config crate).
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    /// Reported by `/health`.
    pub environment: String,
    /// Directory whose `index.html` is served at `/`.
    pub static_dir: PathBuf,
    /// Mount the unauthenticated `/api/debug/data` route.
    pub debug_endpoint: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            environment: "development".to_string(),
            static_dir: PathBuf::from("static"),
            debug_endpoint: false,
        }
    }
}

/// Shared state for request handlers. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<CredentialStore>,
    pub catalog: Arc<DamageTypeCatalog>,
    pub reports: Arc<DamageReportStore>,
    pub environment: String,
    pub debug_endpoint: bool,
}

impl AppState {
    /// State with an empty report store.
    pub fn new(
        config: &GatewayConfig,
        credentials: CredentialStore,
        catalog: DamageTypeCatalog,
    ) -> Self {
        Self {
            credentials: Arc::new(credentials),
            catalog: Arc::new(catalog),
            reports: Arc::new(DamageReportStore::new()),
            environment: config.environment.clone(),
            debug_endpoint: config.debug_endpoint,
        }
    }
}

/// Build the full router.
///
/// Public: `GET /`, `GET /health`, and `GET /api/debug/data` when enabled.
/// Behind the API key: everything under `/api/v1/damage`.
pub fn build_router(config: &GatewayConfig, state: AppState) -> Router {
    let mut public_routes = Router::new()
        .route_service("/", ServeFile::new(config.static_dir.join("index.html")))
        .route("/health", get(handlers::get_health));

    if state.debug_endpoint {
        tracing::warn!("debug endpoint enabled at /api/debug/data (no authentication)");
        public_routes = public_routes.route("/api/debug/data", get(handlers::get_debug_data));
    }

    let api_routes = Router::new()
        .route("/api/v1/damage/types", get(handlers::get_damage_types))
        .route("/api/v1/damage/submit", post(handlers::post_submit))
        .route("/api/v1/damage/list", get(handlers::get_damage_list))
        .route("/api/v1/damage/map-data", get(handlers::get_map_data))
        .route("/api/v1/damage/{id}", get(handlers::get_damage))
        .route_layer(axum_middleware::from_fn_with_state(
            Arc::clone(&state.credentials),
            api_key_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
}

/// Bind `host:port` and serve until `shutdown` resolves.
pub async fn start_server(
    config: &GatewayConfig,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), RoadwatchError> {
    let app = build_router(config, state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| RoadwatchError::Server {
            message: format!("failed to bind {addr}: {e}"),
            source: Some(Box::new(e)),
        })?;

    tracing::info!(environment = %config.environment, "listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| RoadwatchError::Server {
            message: format!("serve loop failed: {e}"),
            source: Some(Box::new(e)),
        })?;

    tracing::info!("server stopped");
    Ok(())
}
