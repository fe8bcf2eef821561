use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RoomDto {
    pub id: i32,
    pub room_number: String,
    pub room_type: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub max_occupancy: i32,
    pub status: String,
    pub features: Vec<String>,
    pub image_url: Option<String>,
}

/// Room with its occupancy for today.
///
/// `current_status` is `occupied` when an active reservation covers today, otherwise the
/// stored status.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RoomOverviewDto {
    #[serde(flatten)]
    pub room: RoomDto,
    pub current_status: String,
}

#[derive(Deserialize, Debug, IntoParams)]
pub struct AvailabilityQuery {
    /// Check-in date, `YYYY-MM-DD`.
    pub check_in: Option<String>,
    /// Check-out date, `YYYY-MM-DD`.
    pub check_out: Option<String>,
    /// Room type filter; `all` or absent disables filtering.
    pub room_type: Option<String>,
}
