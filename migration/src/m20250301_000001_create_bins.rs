use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Bin records, one row per bin; items are stored as a JSON array
        manager
            .create_table(
                Table::create()
                    .table(Bins::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bins::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Bins::Name)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Bins::Description)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Bins::Items)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Bins::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Bins::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Enumeration index: insertion-ordered list of bin ids
        manager
            .create_table(
                Table::create()
                    .table(BinIndex::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BinIndex::Position)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(BinIndex::BinId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BinIndex::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Bins::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Bins {
    Table,
    Id,
    Name,
    Description,
    Items,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum BinIndex {
    Table,
    Position,
    BinId,
}
