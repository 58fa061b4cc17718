use std::net::SocketAddr;

use configs::AppConfig;
use tokio::net::TcpListener;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

/// Read `CONFIG_PATH` plus environment overrides, validated.
pub fn load_config() -> Result<AppConfig, StartupError> {
    AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

/// Connect to the database, apply migrations, and assemble the context.
pub async fn build_state(cfg: AppConfig) -> anyhow::Result<AppState> {
    let db = models::db::connect_and_migrate(&cfg.database).await?;
    info!(event = "db_ready", migrations = cfg.database.run_migrations, "database connected");
    Ok(AppState::new(&db, cfg))
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    let addr = cfg.server.bind_addr();
    addr.parse().map_err(|e: std::net::AddrParseError| StartupError::BindAddr { addr, reason: e.to_string() })
}

/// Build the app from an already loaded configuration and serve it.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let addr = bind_addr(&cfg)?;
    let auth_enabled = cfg.auth.enabled;

    let state = build_state(cfg).await?;
    let app = routes::build_router(state);

    info!(%addr, auth_enabled, "starting server");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
