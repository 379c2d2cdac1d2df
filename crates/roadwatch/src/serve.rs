// SPDX-FileCopyrightText: 2026 Roadwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `roadwatch serve`: wire configuration into the stores and run the gateway.

use std::path::PathBuf;

use roadwatch_config::{RoadwatchConfig, ServerConfig};
use roadwatch_core::RoadwatchError;
use roadwatch_gateway::{start_server, AppState, GatewayConfig};
use roadwatch_store::{CredentialStore, DamageTypeCatalog};
use tracing::info;

use crate::shutdown;

/// Run the HTTP server until a shutdown signal arrives.
pub async fn run_serve(config: RoadwatchConfig) -> Result<(), RoadwatchError> {
    init_tracing(&config.server.log_level);

    info!(
        environment = %config.server.environment,
        "starting roadwatch serve"
    );

    let gateway_config = gateway_config(&config.server);
    let credentials = CredentialStore::new(config.api_key_records());
    let catalog = DamageTypeCatalog::default();
    info!(
        api_keys = credentials.len(),
        damage_types = catalog.len(),
        "stores initialized"
    );

    let state = AppState::new(&gateway_config, credentials, catalog);
    start_server(&gateway_config, state, shutdown::signal()).await?;

    info!("roadwatch stopped");
    Ok(())
}

/// Map the `[server]` section onto the gateway's own settings.
fn gateway_config(server: &ServerConfig) -> GatewayConfig {
    GatewayConfig {
        host: server.host.clone(),
        port: server.port,
        environment: server.environment.to_string(),
        static_dir: PathBuf::from(&server.static_dir),
        debug_endpoint: server.debug_endpoint_enabled(),
    }
}

/// Our crates and the HTTP trace layer log at `log_level`, the rest at warn.
fn default_filter(log_level: &str) -> String {
    format!("roadwatch={log_level},tower_http={log_level},warn")
}

/// `RUST_LOG` wins over [`default_filter`].
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(log_level)));

    // A second init (e.g. in tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .try_init();
}
