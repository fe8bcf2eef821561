use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DashboardDto {
    pub available_rooms: u64,
    pub occupied_rooms: u64,
    pub confirmed_bookings: u64,
    pub checked_in_guests: u64,
    pub pending_orders: u64,
    pub spa_appointments: u64,
}
