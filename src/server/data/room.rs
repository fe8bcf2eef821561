//! Room data repository for database operations.
//!
//! Provides room lookups, the availability search over a stay and the row write-lock
//! taken at the start of a booking's unit of work.

use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::server::{
    data::booking::overlap_condition,
    model::{
        booking::{BookingStatus, StayDates},
        room::RoomStatus,
    },
};

/// Repository providing database operations for room inventory.
pub struct RoomRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRepository<'a, C> {
    /// Creates a new RoomRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    ///
    /// # Returns
    /// - `RoomRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a room by ID regardless of its status.
    pub async fn find_by_id(&self, room_id: i32) -> Result<Option<entity::room::Model>, DbErr> {
        entity::prelude::Room::find_by_id(room_id).one(self.db).await
    }

    /// Gets every room ordered by room number.
    pub async fn get_all(&self) -> Result<Vec<entity::room::Model>, DbErr> {
        entity::prelude::Room::find()
            .order_by_asc(entity::room::Column::RoomNumber)
            .all(self.db)
            .await
    }

    /// Lists rooms that can be booked for the whole stay.
    ///
    /// A room qualifies when its stored status is exactly `available` and no active
    /// reservation for it overlaps the stay.
    ///
    /// # Arguments
    /// - `stay` - Requested stay
    /// - `room_type` - Optional room type filter
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Matching rooms ordered by ascending price
    /// - `Err(DbErr)` - Database error during either query
    pub async fn find_available(
        &self,
        stay: &StayDates,
        room_type: Option<&str>,
    ) -> Result<Vec<entity::room::Model>, DbErr> {
        let busy_room_ids: Vec<i32> = entity::prelude::Booking::find()
            .select_only()
            .column(entity::booking::Column::RoomId)
            .distinct()
            .filter(entity::booking::Column::Status.is_in(BookingStatus::active_values()))
            .filter(overlap_condition(stay))
            .into_tuple()
            .all(self.db)
            .await?;

        let mut query = entity::prelude::Room::find()
            .filter(entity::room::Column::Status.eq(RoomStatus::Available.as_str()))
            .filter(entity::room::Column::Id.is_not_in(busy_room_ids));

        if let Some(room_type) = room_type {
            query = query.filter(entity::room::Column::RoomType.eq(room_type));
        }

        query
            .order_by_asc(entity::room::Column::Price)
            .order_by_asc(entity::room::Column::RoomNumber)
            .all(self.db)
            .await
    }

    /// Takes the row write-lock on a room for the rest of the transaction.
    ///
    /// Issues a no-op update of the primary key so that concurrent bookings of the same
    /// room serialise on the row (and on SQLite, on the database write lock) before
    /// their conflict re-checks run.
    ///
    /// # Returns
    /// - `Ok(true)` - The room exists and is now locked
    /// - `Ok(false)` - No room with that ID
    /// - `Err(DbErr)` - Database error, including lock timeouts
    pub async fn lock(&self, room_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Room::update_many()
            .set(entity::room::ActiveModel {
                id: ActiveValue::Set(room_id),
                ..Default::default()
            })
            .filter(entity::room::Column::Id.eq(room_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Overwrites the cached status of a room.
    pub async fn set_status(&self, room_id: i32, status: RoomStatus) -> Result<(), DbErr> {
        entity::prelude::Room::update_many()
            .set(entity::room::ActiveModel {
                status: ActiveValue::Set(status.as_str().to_string()),
                ..Default::default()
            })
            .filter(entity::room::Column::Id.eq(room_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Counts rooms with the given cached status.
    pub async fn count_by_status(&self, status: RoomStatus) -> Result<u64, DbErr> {
        entity::prelude::Room::find()
            .filter(entity::room::Column::Status.eq(status.as_str()))
            .count(self.db)
            .await
    }
}
