// Common test utilities for integration tests
#![allow(dead_code)]

use binstash::app_data::AppData;
use binstash::config::{BootstrapSettings, MockEnvironment};
use binstash::stores::BinStore;
use migration::{BinMigrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;

/// Creates an in-memory database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    BinMigrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Creates a bin store over a fresh database
pub async fn setup_test_store() -> (DatabaseConnection, BinStore) {
    let db = setup_test_db().await;
    let store = BinStore::new(db.clone());
    (db, store)
}

/// Creates AppData with the given public base URL
pub async fn setup_test_app_data(public_base_url: &str) -> AppData {
    let db = setup_test_db().await;
    let env = MockEnvironment::empty().with_var("PUBLIC_BASE_URL", public_base_url);
    let settings = BootstrapSettings::from_env_provider(Arc::new(env))
        .expect("Failed to load test settings");

    AppData::init(db, &settings)
}
