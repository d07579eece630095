//! Products API - REST server

use axum_helpers::server::{create_production_app, create_router, health_router};
use config::{Config, StoreBackend};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres;
use state::AppState;
use std::time::Duration;
use tracing::{error, info, warn};

mod api;
mod config;
mod openapi;
mod state;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = match &config.store {
        StoreBackend::Postgres(pg) => {
            info!("Connecting to PostgreSQL");
            let db = postgres::connect_from_config_with_retry(pg.clone(), None).await?;
            info!("Successfully connected to PostgreSQL");
            Some(db)
        }
        StoreBackend::Memory => {
            warn!("Using the in-memory product store, data is lost on restart");
            None
        }
    };

    let state = AppState { db };

    api::products::ensure_schema(&state).await?;

    let router = create_router::<openapi::ApiDoc>(api::routes(&state)).await?;
    let app = router.merge(health_router(config.app));

    info!(
        "Starting {} v{} on port {}",
        config.app.name, config.app.version, config.server.port
    );

    create_production_app(app, &config.server, Duration::from_secs(30), async move {
        if let Some(db) = state.db {
            info!("Shutting down: closing PostgreSQL pool");
            match db.close().await {
                Ok(()) => info!("PostgreSQL pool closed"),
                Err(e) => error!("Error closing PostgreSQL pool: {}", e),
            }
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
