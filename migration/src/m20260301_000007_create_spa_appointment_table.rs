use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000002_create_booking_table::Booking,
    m20260301_000006_create_spa_service_table::SpaService,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SpaAppointment::Table)
                    .if_not_exists()
                    .col(pk_auto(SpaAppointment::Id))
                    .col(integer_null(SpaAppointment::BookingId))
                    .col(string(SpaAppointment::CustomerName))
                    .col(integer(SpaAppointment::ServiceId))
                    .col(date(SpaAppointment::AppointmentDate))
                    .col(time(SpaAppointment::AppointmentTime))
                    .col(text_null(SpaAppointment::Notes))
                    .col(string(SpaAppointment::Status).default("scheduled"))
                    .col(
                        timestamp_with_time_zone(SpaAppointment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_spa_appointment_service_id")
                            .from(SpaAppointment::Table, SpaAppointment::ServiceId)
                            .to(SpaService::Table, SpaService::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_spa_appointment_booking_id")
                            .from(SpaAppointment::Table, SpaAppointment::BookingId)
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
            .drop_table(Table::drop().table(SpaAppointment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SpaAppointment {
    Table,
    Id,
    BookingId,
    CustomerName,
    ServiceId,
    AppointmentDate,
    AppointmentTime,
    Notes,
    Status,
    CreatedAt,
}
