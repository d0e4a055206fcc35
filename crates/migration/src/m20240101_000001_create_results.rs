//! Create `results` table.
//! One row per quiz submission; rows are only ever inserted.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Results::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Results::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string(Results::Username))
                    .col(text(Results::Scores))
                    .col(string(Results::Profile))
                    .col(big_integer(Results::Energy).default(0))
                    .col(big_integer(Results::Math).default(0))
                    .col(big_integer(Results::Tech).default(0))
                    .col(big_integer(Results::Career).default(0))
                    .col(timestamp_with_time_zone(Results::Date))
                    .to_owned(),
            )
            .await?;

        // Lookups are always by exact username
        manager
            .create_index(
                Index::create()
                    .name("idx_results_username")
                    .table(Results::Table)
                    .col(Results::Username)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_results_username").table(Results::Table).to_owned())
            .await?;
        manager.drop_table(Table::drop().table(Results::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Results {
    Table,
    Id,
    Username,
    Scores,
    Profile,
    Energy,
    Math,
    Tech,
    Career,
    Date,
}
