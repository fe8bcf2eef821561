//! Reservation data repository for database operations.
//!
//! Holds the store-side forms of the overlap and duplicate-stay predicates alongside the
//! reservation inserts and lookups.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    model::booking::{BookingFilter, BookingStatus, NewBooking, StayDates},
    util::money,
};

/// Maximum rows returned by a reservation search.
pub const SEARCH_LIMIT: u64 = 100;

/// Store form of `StayDates::overlaps` for an existing reservation against `stay`.
///
/// Matches when the existing stay spans the new check-in, spans the new check-out, or
/// lies inside the new stay.
pub fn overlap_condition(stay: &StayDates) -> Condition {
    use entity::booking::Column;

    let check_in = stay.check_in();
    let check_out = stay.check_out();

    Condition::any()
        .add(
            Condition::all()
                .add(Column::CheckIn.lte(check_in))
                .add(Column::CheckOut.gt(check_in)),
        )
        .add(
            Condition::all()
                .add(Column::CheckIn.lt(check_out))
                .add(Column::CheckOut.gte(check_out)),
        )
        .add(
            Condition::all()
                .add(Column::CheckIn.gte(check_in))
                .add(Column::CheckOut.lte(check_out)),
        )
}

pub type BookingRow = (entity::booking::Model, entity::room::Model);

/// Repository providing database operations for reservations.
pub struct BookingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    /// Creates a new BookingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    ///
    /// # Returns
    /// - `BookingRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a confirmed reservation.
    ///
    /// # Arguments
    /// - `booking` - Validated parameters with the computed total and reference code
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted reservation
    /// - `Err(DbErr)` - Database error, a unique violation on the reference code included
    pub async fn insert(&self, booking: NewBooking<'_>) -> Result<entity::booking::Model, DbErr> {
        let params = booking.params;

        entity::booking::ActiveModel {
            room_id: ActiveValue::Set(params.room_id),
            customer_name: ActiveValue::Set(params.customer_name.clone()),
            customer_email: ActiveValue::Set(params.customer_email.clone()),
            customer_phone: ActiveValue::Set(params.customer_phone.clone()),
            id_number: ActiveValue::Set(params.id_number.clone()),
            check_in: ActiveValue::Set(params.stay.check_in()),
            check_out: ActiveValue::Set(params.stay.check_out()),
            guests: ActiveValue::Set(params.guests),
            total_amount: ActiveValue::Set(money::to_f64(booking.total_amount)),
            payment_method: ActiveValue::Set(params.payment_method.as_str().to_string()),
            discount_code: ActiveValue::Set(params.discount_code.clone()),
            booking_reference: ActiveValue::Set(booking.booking_reference),
            special_requests: ActiveValue::Set(Some(params.special_requests())),
            status: ActiveValue::Set(BookingStatus::Confirmed.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Counts active reservations for a room that overlap the stay.
    pub async fn count_overlapping(&self, room_id: i32, stay: &StayDates) -> Result<u64, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::RoomId.eq(room_id))
            .filter(entity::booking::Column::Status.is_in(BookingStatus::active_values()))
            .filter(overlap_condition(stay))
            .count(self.db)
            .await
    }

    /// Checks whether the guest already holds an active reservation for the exact stay.
    ///
    /// The guest matches on email or on identity document; dates must match exactly.
    ///
    /// # Arguments
    /// - `customer_email` - Normalised (lower-cased) guest email
    /// - `id_number` - Trimmed identity document number
    /// - `stay` - Requested stay
    ///
    /// # Returns
    /// - `Ok(true)` - A matching active reservation exists
    /// - `Ok(false)` - No match
    /// - `Err(DbErr)` - Database error during query
    pub async fn has_duplicate(
        &self,
        customer_email: &str,
        id_number: &str,
        stay: &StayDates,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Booking::find()
            .filter(entity::booking::Column::Status.is_in(BookingStatus::active_values()))
            .filter(entity::booking::Column::CheckIn.eq(stay.check_in()))
            .filter(entity::booking::Column::CheckOut.eq(stay.check_out()))
            .filter(
                Condition::any()
                    .add(entity::booking::Column::CustomerEmail.eq(customer_email))
                    .add(entity::booking::Column::IdNumber.eq(id_number)),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a reservation by ID together with its room.
    pub async fn find_with_room(&self, booking_id: i32) -> Result<Option<BookingRow>, DbErr> {
        let result = entity::prelude::Booking::find_by_id(booking_id)
            .find_also_related(entity::prelude::Room)
            .one(self.db)
            .await?;

        Ok(result.and_then(|(booking, room)| room.map(|room| (booking, room))))
    }

    /// Searches reservations, newest first, capped at `SEARCH_LIMIT` rows.
    pub async fn search(&self, filter: &BookingFilter) -> Result<Vec<BookingRow>, DbErr> {
        let mut query = entity::prelude::Booking::find().find_also_related(entity::prelude::Room);

        if let Some(status) = filter.status {
            query = query.filter(entity::booking::Column::Status.eq(status.as_str()));
        }
        if let Some(email) = &filter.customer_email {
            query = query.filter(entity::booking::Column::CustomerEmail.eq(email.as_str()));
        }
        if let Some(reference) = &filter.booking_reference {
            query = query.filter(entity::booking::Column::BookingReference.eq(reference.as_str()));
        }

        let rows = query
            .order_by_desc(entity::booking::Column::CreatedAt)
            .order_by_desc(entity::booking::Column::Id)
            .limit(SEARCH_LIMIT)
            .all(self.db)
            .await?;

        Ok(with_rooms(rows))
    }

    /// Gets active reservations whose stay covers `day`, latest check-in first.
    pub async fn find_active_on(&self, day: NaiveDate) -> Result<Vec<BookingRow>, DbErr> {
        let rows = entity::prelude::Booking::find()
            .find_also_related(entity::prelude::Room)
            .filter(entity::booking::Column::Status.is_in(BookingStatus::active_values()))
            .filter(entity::booking::Column::CheckIn.lte(day))
            .filter(entity::booking::Column::CheckOut.gt(day))
            .order_by_desc(entity::booking::Column::CheckIn)
            .order_by_asc(entity::booking::Column::Id)
            .all(self.db)
            .await?;

        Ok(with_rooms(rows))
    }

    /// Gets the IDs of rooms held by an active reservation on `day`.
    pub async fn occupied_room_ids(&self, day: NaiveDate) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Booking::find()
            .select_only()
            .column(entity::booking::Column::RoomId)
            .distinct()
            .filter(entity::booking::Column::Status.is_in(BookingStatus::active_values()))
            .filter(entity::booking::Column::CheckIn.lte(day))
            .filter(entity::booking::Column::CheckOut.gt(day))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Counts reservations with the given status.
    pub async fn count_by_status(&self, status: BookingStatus) -> Result<u64, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::Status.eq(status.as_str()))
            .count(self.db)
            .await
    }
}

/// Drops rows whose room is missing, which the foreign key rules out.
fn with_rooms(rows: Vec<(entity::booking::Model, Option<entity::room::Model>)>) -> Vec<BookingRow> {
    rows.into_iter()
        .filter_map(|(booking, room)| room.map(|room| (booking, room)))
        .collect()
}
