use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::null_as_default;

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct CreateAppointmentDto {
    pub booking_id: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_name: String,
    pub service_id: Option<i32>,
    /// Appointment date, `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub appointment_date: String,
    /// Appointment time, `HH:MM` or `HH:MM:SS`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub appointment_time: String,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AppointmentConfirmationDto {
    pub appointment_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SpaServiceDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub duration_minutes: i32,
    #[schema(value_type = f64)]
    pub price: Decimal,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SpaHoursDto {
    /// Day name, `Monday` through `Sunday`.
    pub day_of_week: String,
    #[schema(value_type = Option<String>, example = "09:00:00")]
    pub open_time: Option<NaiveTime>,
    #[schema(value_type = Option<String>, example = "18:00:00")]
    pub close_time: Option<NaiveTime>,
    pub is_open: bool,
}
