use std::time::Duration;

use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::errors::ModelError;

/// An in-memory SQLite database lives inside a single connection, so the
/// pool must never open a second one.
fn is_sqlite_memory(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("sqlite::memory:") || lower.contains("mode=memory")
}

pub fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    let (min, max) = if is_sqlite_memory(&cfg.url) {
        (1, 1)
    } else {
        (cfg.min_connections, cfg.max_connections)
    };
    opts.max_connections(max)
        .min_connections(min)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    if !is_sqlite_memory(&cfg.url) {
        opts.idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs));
    }
    opts
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> Result<DatabaseConnection, ModelError> {
    let db = Database::connect(connect_options(cfg)).await?;
    Ok(db)
}

/// Connect and, unless disabled, bring the schema up to date.
pub async fn connect_and_migrate(cfg: &DatabaseConfig) -> Result<DatabaseConnection, ModelError> {
    let db = connect_with_config(cfg).await?;
    if cfg.run_migrations {
        migration::Migrator::up(&db, None).await?;
        info!("database migrations applied");
    }
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_urls_are_detected() {
        assert!(is_sqlite_memory("sqlite::memory:"));
        assert!(is_sqlite_memory("sqlite://file:shop?mode=memory&cache=shared"));
        assert!(!is_sqlite_memory("sqlite://data/shop.db"));
        assert!(!is_sqlite_memory("postgres://localhost/shop"));
    }

    #[tokio::test]
    async fn connect_and_migrate_in_memory() -> anyhow::Result<()> {
        let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() };
        let db = connect_and_migrate(&cfg).await?;
        let rows = crate::product::find_all(&db).await?;
        assert!(rows.is_empty());
        Ok(())
    }
}
