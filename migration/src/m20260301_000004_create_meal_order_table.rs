use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_booking_table::Booking;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MealOrder::Table)
                    .if_not_exists()
                    .col(pk_auto(MealOrder::Id))
                    .col(integer_null(MealOrder::BookingId))
                    .col(string(MealOrder::CustomerName))
                    .col(string(MealOrder::RoomNumber))
                    .col(string(MealOrder::OrderType))
                    .col(double(MealOrder::TotalAmount))
                    .col(text_null(MealOrder::SpecialInstructions))
                    .col(string(MealOrder::Status).default("pending"))
                    .col(
                        timestamp_with_time_zone(MealOrder::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meal_order_booking_id")
                            .from(MealOrder::Table, MealOrder::BookingId)
                            .to(Booking::Table, Booking::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MealOrder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MealOrder {
    Table,
    Id,
    BookingId,
    CustomerName,
    RoomNumber,
    OrderType,
    TotalAmount,
    SpecialInstructions,
    Status,
    CreatedAt,
}
