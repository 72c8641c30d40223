use std::time::Duration;

use configs::DatabaseConfig;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

/// Open a pooled connection using the pool settings from `cfg`.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opts).await?;
    Ok(db)
}

/// Bring the schema in line with the entities.
///
/// With `drop_schema` every table is dropped and recreated, so each boot
/// starts from an empty catalog.
pub async fn prepare_schema(db: &DatabaseConnection, drop_schema: bool) -> anyhow::Result<()> {
    if drop_schema {
        Migrator::fresh(db).await?;
        info!(event = "schema_reset", "dropped and recreated catalog schema");
    } else {
        Migrator::up(db, None).await?;
        info!(event = "schema_migrated", "applied pending migrations");
    }
    Ok(())
}
