use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::BootstrapSettings;
use crate::services::{BinService, BinValidator};
use crate::stores::BinStore;

/// Centralized application data, created once in main.rs
///
/// ```text
/// main.rs
///   ↓
/// AppData::init(db, settings)
///   ├─ db (DatabaseConnection)
///   ├─ bin_store (Arc<BinStore>)
///   ├─ bin_service (Arc<BinService>)
///   └─ bin_validator (Arc<BinValidator>)
///   ↓
///   ├─ BinsApi::new(app_data)
///   └─ cli::export::export_bins(bin_service, output)
/// ```
pub struct AppData {
    pub db: DatabaseConnection,
    pub bin_store: Arc<BinStore>,
    pub bin_service: Arc<BinService>,
    pub bin_validator: Arc<BinValidator>,
}

impl AppData {
    /// Build stores and services on an already migrated connection
    pub fn init(db: DatabaseConnection, settings: &BootstrapSettings) -> Self {
        tracing::info!("Initializing AppData...");

        let bin_store = Arc::new(BinStore::new(db.clone()));
        let bin_service = Arc::new(BinService::new(
            bin_store.clone(),
            settings.public_base_url(),
        ));
        let bin_validator = Arc::new(BinValidator::new());

        tracing::info!("AppData initialization complete");

        Self {
            db,
            bin_store,
            bin_service,
            bin_validator,
        }
    }
}
