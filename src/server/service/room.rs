use chrono::{NaiveDate, Utc};
use sea_orm::DatabaseConnection;
use std::collections::HashSet;

use crate::{
    model::room::AvailabilityQuery,
    server::{
        data::{booking::BookingRepository, room::RoomRepository},
        error::AppError,
        model::room::{Room, RoomOverview},
        service::{availability::AvailabilityService, validation},
    },
};

pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
    today: NaiveDate,
}

impl<'a> RoomService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            today: Utc::now().date_naive(),
        }
    }

    /// Pins the date treated as today.
    #[cfg(test)]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Lists every room with the status derived for today.
    ///
    /// A room held by an active reservation covering today reads as occupied whatever
    /// its cached status says, unless it is under maintenance.
    pub async fn overview(&self) -> Result<Vec<RoomOverview>, AppError> {
        let occupied: HashSet<i32> = BookingRepository::new(self.db)
            .occupied_room_ids(self.today)
            .await?
            .into_iter()
            .collect();

        RoomRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(|room| {
                let occupied_today = occupied.contains(&room.id);
                Ok(RoomOverview::new(Room::from_entity(room)?, occupied_today))
            })
            .collect()
    }

    /// Lists rooms free for the whole requested stay.
    pub async fn availability(&self, query: AvailabilityQuery) -> Result<Vec<Room>, AppError> {
        let params = validation::validate_availability(query)?;

        AvailabilityService::new(self.db)
            .list_available_rooms(&params)
            .await
    }
}
