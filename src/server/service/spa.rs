//! Spa appointment scheduling.
//!
//! The service row is locked before the slot is re-checked so that two requests for the
//! same slot cannot both pass the check. The partial unique index on scheduled slots
//! turns anything that still slips through into a slot conflict.

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    model::spa::CreateAppointmentDto,
    server::{
        data::{spa_appointment::SpaAppointmentRepository, spa_service::SpaServiceRepository},
        error::{reservation::ReservationError, AppError},
        model::spa::CreateAppointmentParams,
        service::validation,
        util::db::is_unique_violation,
    },
};

pub struct AppointmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppointmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Schedules an appointment in a free slot.
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the scheduled appointment
    /// - `Err(AppError::Validation)` - Missing or malformed fields
    /// - `Err(ReservationError::ServiceUnavailable)` - Unknown or withdrawn service
    /// - `Err(ReservationError::SlotTaken)` - Slot already scheduled
    /// - `Err(AppError::DbErr)` - Store failure; nothing was written
    pub async fn create(&self, dto: CreateAppointmentDto) -> Result<i32, AppError> {
        let params = validation::validate_appointment(dto)?;

        let txn = self.db.begin().await?;

        match Self::persist_in(&txn, &params).await {
            Ok(appointment_id) => {
                txn.commit().await?;

                tracing::info!(
                    "Spa appointment {} scheduled for service {} on {} at {}",
                    appointment_id,
                    params.slot.service_id,
                    params.slot.date,
                    params.slot.time
                );

                Ok(appointment_id)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Failed to roll back appointment: {}", rollback_err);
                }
                Err(err)
            }
        }
    }

    async fn persist_in(
        txn: &DatabaseTransaction,
        params: &CreateAppointmentParams,
    ) -> Result<i32, AppError> {
        let service_id = params.slot.service_id;
        let services = SpaServiceRepository::new(txn);

        if !services.lock(service_id).await? {
            return Err(ReservationError::ServiceUnavailable(service_id).into());
        }
        if services.find_available(service_id).await?.is_none() {
            return Err(ReservationError::ServiceUnavailable(service_id).into());
        }

        let appointments = SpaAppointmentRepository::new(txn);
        if appointments.is_slot_taken(&params.slot).await? {
            return Err(ReservationError::SlotTaken(service_id).into());
        }

        match appointments.insert(params).await {
            Ok(appointment) => Ok(appointment.id),
            Err(err) if is_unique_violation(&err) => {
                Err(ReservationError::SlotTaken(service_id).into())
            }
            Err(err) => Err(err.into()),
        }
    }
}
