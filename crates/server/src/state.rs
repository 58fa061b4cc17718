use std::sync::Arc;

use configs::AppConfig;
use sea_orm::DatabaseConnection;
use service::Services;

/// Application context shared by every request. Built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db: &DatabaseConnection, config: AppConfig) -> Self {
        Self { services: Services::new(db), config: Arc::new(config) }
    }
}
