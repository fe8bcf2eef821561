use chrono::{NaiveDate, NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating spa appointments.
pub struct SpaAppointmentFactory<'a> {
    db: &'a DatabaseConnection,
    service_id: i32,
    customer_name: String,
    appointment_date: NaiveDate,
    appointment_time: NaiveTime,
    status: String,
}

impl<'a> SpaAppointmentFactory<'a> {
    /// Creates a new SpaAppointmentFactory for the given slot with status `scheduled`.
    pub fn new(
        db: &'a DatabaseConnection,
        service_id: i32,
        appointment_date: NaiveDate,
        appointment_time: NaiveTime,
    ) -> Self {
        let id = next_id();
        Self {
            db,
            service_id,
            customer_name: format!("Guest {}", id),
            appointment_date,
            appointment_time,
            status: "scheduled".to_string(),
        }
    }

    /// Sets the appointment status (`scheduled`, `completed` or `cancelled`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::spa_appointment::Model, DbErr> {
        entity::spa_appointment::ActiveModel {
            id: ActiveValue::NotSet,
            booking_id: ActiveValue::Set(None),
            customer_name: ActiveValue::Set(self.customer_name),
            service_id: ActiveValue::Set(self.service_id),
            appointment_date: ActiveValue::Set(self.appointment_date),
            appointment_time: ActiveValue::Set(self.appointment_time),
            notes: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a scheduled appointment for the given service slot.
pub async fn create_appointment(
    db: &DatabaseConnection,
    service_id: i32,
    appointment_date: NaiveDate,
    appointment_time: NaiveTime,
) -> Result<entity::spa_appointment::Model, DbErr> {
    SpaAppointmentFactory::new(db, service_id, appointment_date, appointment_time)
        .build()
        .await
}
