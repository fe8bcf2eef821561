use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SpaService::Table)
                    .if_not_exists()
                    .col(pk_auto(SpaService::Id))
                    .col(string(SpaService::Name))
                    .col(text_null(SpaService::Description))
                    .col(string(SpaService::Category))
                    .col(integer(SpaService::DurationMinutes))
                    .col(double(SpaService::Price))
                    .col(boolean(SpaService::IsAvailable).default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SpaService::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SpaService {
    Table,
    Id,
    Name,
    Description,
    Category,
    DurationMinutes,
    Price,
    IsAvailable,
}
