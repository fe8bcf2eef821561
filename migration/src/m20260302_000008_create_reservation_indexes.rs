use sea_orm_migration::prelude::*;

use super::m20260301_000002_create_booking_table::Booking;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_room_stay")
                    .table(Booking::Table)
                    .col(Booking::RoomId)
                    .col(Booking::CheckIn)
                    .col(Booking::CheckOut)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_guest_stay")
                    .table(Booking::Table)
                    .col(Booking::CustomerEmail)
                    .col(Booking::CheckIn)
                    .col(Booking::CheckOut)
                    .to_owned(),
            )
            .await?;

        // Partial indexes are not expressible through the index builder.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_spa_appointment_scheduled_slot \
                 ON spa_appointment (service_id, appointment_date, appointment_time) \
                 WHERE status = 'scheduled'",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_spa_appointment_scheduled_slot")
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_booking_guest_stay")
                    .table(Booking::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_booking_room_stay")
                    .table(Booking::Table)
                    .to_owned(),
            )
            .await
    }
}
