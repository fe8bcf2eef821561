use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(pk_auto(Room::Id))
                    .col(string_uniq(Room::RoomNumber))
                    .col(string(Room::RoomType))
                    .col(double(Room::Price))
                    .col(integer(Room::MaxOccupancy).default(2))
                    .col(string(Room::Status).default("available"))
                    .col(text(Room::Features).default("[]"))
                    .col(string_null(Room::ImageUrl))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Room::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Room {
    Table,
    Id,
    RoomNumber,
    RoomType,
    Price,
    MaxOccupancy,
    Status,
    Features,
    ImageUrl,
}
