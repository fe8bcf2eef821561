use crate::model::dashboard::DashboardDto;

/// Front-of-house counts shown on the admin dashboard
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardCounts {
    pub available_rooms: u64,
    pub occupied_rooms: u64,
    pub confirmed_bookings: u64,
    pub checked_in_guests: u64,
    pub pending_orders: u64,
    pub spa_appointments: u64,
}

impl DashboardCounts {
    pub fn into_dto(self) -> DashboardDto {
        DashboardDto {
            available_rooms: self.available_rooms,
            occupied_rooms: self.occupied_rooms,
            confirmed_bookings: self.confirmed_bookings,
            checked_in_guests: self.checked_in_guests,
            pending_orders: self.pending_orders,
            spa_appointments: self.spa_appointments,
        }
    }
}
