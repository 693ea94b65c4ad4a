// Test utilities shared across unit tests
// Only compiled when running tests

use migration::{BinMigrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;

use crate::app_data::AppData;
use crate::config::{BootstrapSettings, MockEnvironment};

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

/// Creates AppData over a fresh in-memory database with default settings
pub async fn setup_test_app_data() -> AppData {
    let db = setup_test_db().await;
    let settings = BootstrapSettings::from_env_provider(Arc::new(MockEnvironment::empty()))
        .expect("Default settings must load");

    AppData::init(db, &settings)
}
