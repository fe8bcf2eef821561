use sea_orm::ConnectionTrait;

use crate::server::{
    data::{booking::BookingRepository, room::RoomRepository},
    error::AppError,
    model::{
        booking::StayDates,
        room::{AvailabilityParams, Room},
    },
};

/// Answers whether rooms are free over a stay.
///
/// Runs against the pool for read-only searches and against the open transaction when
/// re-checking a room before a booking is written. A store failure is returned as an
/// error, never read as "available".
pub struct AvailabilityService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AvailabilityService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns true when no active reservation for the room overlaps the stay.
    pub async fn is_room_available(&self, room_id: i32, stay: &StayDates) -> Result<bool, AppError> {
        let overlapping = BookingRepository::new(self.db)
            .count_overlapping(room_id, stay)
            .await?;

        Ok(overlapping == 0)
    }

    /// Lists rooms marked available with no overlapping reservation, cheapest first.
    pub async fn list_available_rooms(
        &self,
        params: &AvailabilityParams,
    ) -> Result<Vec<Room>, AppError> {
        RoomRepository::new(self.db)
            .find_available(&params.stay, params.room_type.as_deref())
            .await?
            .into_iter()
            .map(Room::from_entity)
            .collect()
    }
}
