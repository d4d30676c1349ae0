use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::{ProductRepository, Store};
use crate::middleware::AdminGate;
use crate::services::CatalogService;

/// Shared handler state, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Store,
    pub catalog: CatalogService,
    pub admin: AdminGate,
}

impl AppState {
    pub fn new(config: AppConfig, store: Store) -> Self {
        let catalog = CatalogService::new(ProductRepository::new(store.clone()));
        let admin = AdminGate::new(config.security.admin.clone());
        Self {
            config: Arc::new(config),
            store,
            catalog,
            admin,
        }
    }
}
