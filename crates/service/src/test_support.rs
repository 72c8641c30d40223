#![cfg(test)]
use configs::DatabaseConfig;
use migration::MigratorTrait;
use models::db::connect_with_config;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

// Migrations run once per test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

fn test_config(max_connections: u32) -> DatabaseConfig {
    let mut cfg = DatabaseConfig::default();
    if let Ok(url) = std::env::var("DATABASE_URL") {
        cfg.url = url;
    }
    cfg.max_connections = max_connections;
    cfg.min_connections = 1;
    cfg.acquire_timeout_secs = 10;
    cfg
}

pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    MIGRATED
        .get_or_init(|| async {
            let db = connect_with_config(&test_config(2)).await.expect("connect db for migration");
            migration::Migrator::up(&db, None).await.expect("migrate up");
            drop(db);
        })
        .await;

    let db = connect_with_config(&test_config(10)).await?;
    Ok(db)
}
