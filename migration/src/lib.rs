pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_bins;

pub struct BinMigrator;

#[async_trait::async_trait]
impl MigratorTrait for BinMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_bins::Migration),
        ]
    }
}
