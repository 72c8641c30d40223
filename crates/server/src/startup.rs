use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, DatabaseBackend};
use tower_http::cors::CorsLayer;
use tracing::info;

use service::catalog::repo::memory::InMemoryCatalog;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the configured store and, for PostgreSQL, bring the schema up.
pub async fn build_state(cfg: &AppConfig) -> Result<ServerState, StartupError> {
    match cfg.database.backend {
        DatabaseBackend::Memory => {
            info!(event = "store_ready", backend = "memory", "using in-memory catalog");
            Ok(ServerState::in_memory(&InMemoryCatalog::new()))
        }
        DatabaseBackend::Postgres => {
            let db = models::db::connect_with_config(&cfg.database)
                .await
                .map_err(|e| StartupError::Database(e.to_string()))?;
            models::db::prepare_schema(&db, cfg.database.drop_schema)
                .await
                .map_err(|e| StartupError::Database(e.to_string()))?;
            info!(
                event = "store_ready",
                backend = "postgres",
                max_connections = cfg.database.max_connections,
                drop_schema = cfg.database.drop_schema,
                "connected to catalog database"
            );
            Ok(ServerState::with_database(db))
        }
    }
}

pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

/// Build the app from `cfg` and serve it until the listener fails.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = cfg
        .server
        .bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {}: {e}", cfg.server.bind_addr())))?;

    let state = build_state(&cfg).await?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "catalog server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
