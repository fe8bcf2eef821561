use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SpaHours::Table)
                    .if_not_exists()
                    .col(pk_auto(SpaHours::Id))
                    .col(string_uniq(SpaHours::DayOfWeek))
                    .col(time_null(SpaHours::OpenTime))
                    .col(time_null(SpaHours::CloseTime))
                    .col(boolean(SpaHours::IsOpen).default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SpaHours::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SpaHours {
    Table,
    Id,
    DayOfWeek,
    OpenTime,
    CloseTime,
    IsOpen,
}
