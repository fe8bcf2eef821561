use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::spa::{AppointmentStatus, CreateAppointmentParams, SpaSlot};

/// Repository providing database operations for spa appointments.
pub struct SpaAppointmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SpaAppointmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether a scheduled appointment already occupies the slot.
    ///
    /// Completed and cancelled appointments free their slot.
    pub async fn is_slot_taken(&self, slot: &SpaSlot) -> Result<bool, DbErr> {
        let count = entity::prelude::SpaAppointment::find()
            .filter(entity::spa_appointment::Column::ServiceId.eq(slot.service_id))
            .filter(entity::spa_appointment::Column::AppointmentDate.eq(slot.date))
            .filter(entity::spa_appointment::Column::AppointmentTime.eq(slot.time))
            .filter(
                entity::spa_appointment::Column::Status.eq(AppointmentStatus::Scheduled.as_str()),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a scheduled appointment.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted appointment
    /// - `Err(DbErr)` - Database error, a unique violation on the scheduled slot included
    pub async fn insert(
        &self,
        params: &CreateAppointmentParams,
    ) -> Result<entity::spa_appointment::Model, DbErr> {
        entity::spa_appointment::ActiveModel {
            booking_id: ActiveValue::Set(params.booking_id),
            customer_name: ActiveValue::Set(params.customer_name.clone()),
            service_id: ActiveValue::Set(params.slot.service_id),
            appointment_date: ActiveValue::Set(params.slot.date),
            appointment_time: ActiveValue::Set(params.slot.time),
            notes: ActiveValue::Set(params.notes.clone()),
            status: ActiveValue::Set(AppointmentStatus::Scheduled.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Counts appointments with the given status.
    pub async fn count_by_status(&self, status: AppointmentStatus) -> Result<u64, DbErr> {
        entity::prelude::SpaAppointment::find()
            .filter(entity::spa_appointment::Column::Status.eq(status.as_str()))
            .count(self.db)
            .await
    }
}
