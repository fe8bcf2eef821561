use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        booking::BookingRepository, meal_order::MealOrderRepository, room::RoomRepository,
        spa_appointment::SpaAppointmentRepository,
    },
    error::AppError,
    model::{
        booking::BookingStatus, dashboard::DashboardCounts, order::OrderStatus, room::RoomStatus,
        spa::AppointmentStatus,
    },
};

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Collects the front-of-house counts.
    ///
    /// Room counts use the cached status, matching what housekeeping last recorded.
    pub async fn counts(&self) -> Result<DashboardCounts, AppError> {
        let rooms = RoomRepository::new(self.db);
        let bookings = BookingRepository::new(self.db);

        Ok(DashboardCounts {
            available_rooms: rooms.count_by_status(RoomStatus::Available).await?,
            occupied_rooms: rooms.count_by_status(RoomStatus::Occupied).await?,
            confirmed_bookings: bookings.count_by_status(BookingStatus::Confirmed).await?,
            checked_in_guests: bookings.count_by_status(BookingStatus::CheckedIn).await?,
            pending_orders: MealOrderRepository::new(self.db)
                .count_by_status(OrderStatus::Pending)
                .await?,
            spa_appointments: SpaAppointmentRepository::new(self.db)
                .count_by_status(AppointmentStatus::Scheduled)
                .await?,
        })
    }
}
