//! Reservation creation and lookups.
//!
//! Creating a reservation runs validation and a fast duplicate pre-check against the
//! pool, then opens one transaction that locks the room row, re-verifies the room, the
//! duplicate guard and availability, prices the stay and inserts the reservation. The
//! room's cached status is updated in a savepoint so that its failure cannot abort the
//! reservation.

use chrono::{NaiveDate, Utc};
use rand::Rng;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    model::booking::{BookingSearchQuery, CreateBookingDto},
    server::{
        data::{booking::BookingRepository, room::RoomRepository},
        error::{reservation::ReservationError, AppError},
        model::{
            booking::{BookingConfirmation, BookingWithRoom, CreateBookingParams, NewBooking},
            room::{Room, RoomStatus},
        },
        service::{
            availability::AvailabilityService,
            duplicate::DuplicateGuard,
            pricing::{self, DiscountPolicy},
            validation,
        },
        util::db::is_unique_violation,
    },
};

/// Attempts made with fresh reference codes before a collision is reported.
const MAX_REFERENCE_ATTEMPTS: u32 = 3;

/// Builds a booking reference: `BK`, the last 8 digits of the millisecond clock and a
/// 3-digit suffix.
pub fn booking_reference(unix_millis: i64, suffix: u16) -> String {
    format!(
        "BK{:08}{:03}",
        unix_millis.rem_euclid(100_000_000),
        suffix % 1000
    )
}

fn generate_reference() -> String {
    let suffix = rand::rng().random_range(0..1000);
    booking_reference(Utc::now().timestamp_millis(), suffix)
}

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
    discount_policy: &'a dyn DiscountPolicy,
    today: NaiveDate,
    next_reference: fn() -> String,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection, discount_policy: &'a dyn DiscountPolicy) -> Self {
        Self {
            db,
            discount_policy,
            today: Utc::now().date_naive(),
            next_reference: generate_reference,
        }
    }

    /// Pins the date treated as today.
    #[cfg(test)]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Replaces the source of booking reference codes.
    #[cfg(test)]
    pub fn with_reference_generator(mut self, next_reference: fn() -> String) -> Self {
        self.next_reference = next_reference;
        self
    }

    /// Creates a confirmed reservation.
    ///
    /// # Arguments
    /// - `dto` - The booking request as submitted
    ///
    /// # Returns
    /// - `Ok(BookingConfirmation)` - Reservation committed
    /// - `Err(AppError::Validation)` - Request failed field validation
    /// - `Err(ReservationError::DuplicateStay)` - Guest already holds this exact stay
    /// - `Err(ReservationError::RoomNotFound)` - Room missing or under maintenance
    /// - `Err(ReservationError::RoomUnavailable)` - An active reservation overlaps the stay
    /// - `Err(AppError::DbErr)` - Store failure; nothing was written
    pub async fn create(&self, dto: CreateBookingDto) -> Result<BookingConfirmation, AppError> {
        let params = validation::validate_booking(dto, self.today)?;

        if DuplicateGuard::new(self.db)
            .has_duplicate(&params.customer_email, &params.id_number, &params.stay)
            .await?
        {
            return Err(ReservationError::DuplicateStay.into());
        }

        let mut attempt = 1;
        loop {
            let reference = (self.next_reference)();

            match self.persist(&params, reference.clone()).await {
                Err(AppError::DbErr(err))
                    if attempt < MAX_REFERENCE_ATTEMPTS && is_unique_violation(&err) =>
                {
                    tracing::warn!(
                        "Booking reference {} collided on attempt {}, retrying",
                        reference,
                        attempt
                    );
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    /// Runs one unit of work, committing on success and rolling back on any error.
    async fn persist(
        &self,
        params: &CreateBookingParams,
        reference: String,
    ) -> Result<BookingConfirmation, AppError> {
        let txn = self.db.begin().await?;

        match self.persist_in(&txn, params, reference).await {
            Ok(confirmation) => {
                txn.commit().await?;

                tracing::info!(
                    "Booking {} ({}) confirmed for room {}",
                    confirmation.booking_id,
                    confirmation.booking_reference,
                    params.room_id
                );

                Ok(confirmation)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Failed to roll back booking: {}", rollback_err);
                }
                Err(err)
            }
        }
    }

    async fn persist_in(
        &self,
        txn: &DatabaseTransaction,
        params: &CreateBookingParams,
        reference: String,
    ) -> Result<BookingConfirmation, AppError> {
        let rooms = RoomRepository::new(txn);

        // Serialises concurrent bookings of this room until commit.
        if !rooms.lock(params.room_id).await? {
            return Err(ReservationError::RoomNotFound(params.room_id).into());
        }

        let room = match rooms.find_by_id(params.room_id).await? {
            Some(room) => Room::from_entity(room)?,
            None => return Err(ReservationError::RoomNotFound(params.room_id).into()),
        };
        if !room.is_bookable() {
            return Err(ReservationError::RoomNotFound(room.id).into());
        }

        if DuplicateGuard::new(txn)
            .has_duplicate(&params.customer_email, &params.id_number, &params.stay)
            .await?
        {
            return Err(ReservationError::DuplicateStay.into());
        }

        if !AvailabilityService::new(txn)
            .is_room_available(room.id, &params.stay)
            .await?
        {
            return Err(ReservationError::RoomUnavailable(room.id).into());
        }

        let total_amount = pricing::quote_stay(
            room.price,
            &params.stay,
            params.quoted_total,
            params.discount_code.as_deref(),
            self.discount_policy,
        )
        .ok_or_else(|| AppError::Validation(vec!["Total amount is out of range".to_string()]))?;

        let booking = BookingRepository::new(txn)
            .insert(NewBooking {
                params,
                total_amount,
                booking_reference: reference,
            })
            .await?;

        if params.stay.check_in() == self.today {
            mark_occupied(txn, room.id).await;
        }

        Ok(BookingConfirmation {
            booking_id: booking.id,
            booking_reference: booking.booking_reference,
            total_amount,
            nights: params.stay.nights(),
            stay: params.stay,
        })
    }

    /// Gets a reservation with its room.
    pub async fn get_by_id(&self, booking_id: i32) -> Result<Option<BookingWithRoom>, AppError> {
        BookingRepository::new(self.db)
            .find_with_room(booking_id)
            .await?
            .map(|(booking, room)| BookingWithRoom::from_entities(booking, room))
            .transpose()
    }

    /// Searches reservations, newest first.
    pub async fn search(&self, query: BookingSearchQuery) -> Result<Vec<BookingWithRoom>, AppError> {
        let filter = validation::validate_booking_filter(query)?;

        BookingRepository::new(self.db)
            .search(&filter)
            .await?
            .into_iter()
            .map(|(booking, room)| BookingWithRoom::from_entities(booking, room))
            .collect()
    }

    /// Lists active reservations whose stay covers today.
    pub async fn get_active(&self) -> Result<Vec<BookingWithRoom>, AppError> {
        BookingRepository::new(self.db)
            .find_active_on(self.today)
            .await?
            .into_iter()
            .map(|(booking, room)| BookingWithRoom::from_entities(booking, room))
            .collect()
    }
}

/// Flags the room as occupied inside a savepoint.
///
/// The status is a cache hint, so a failure is logged and the reservation proceeds.
async fn mark_occupied(txn: &DatabaseTransaction, room_id: i32) {
    let result = async {
        let savepoint = txn.begin().await?;
        match RoomRepository::new(&savepoint)
            .set_status(room_id, RoomStatus::Occupied)
            .await
        {
            Ok(()) => savepoint.commit().await,
            Err(err) => {
                savepoint.rollback().await?;
                Err(err)
            }
        }
    }
    .await;

    if let Err(err) = result {
        tracing::warn!("Failed to mark room {} as occupied: {}", room_id, err);
    }
}
