use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::null_as_default;

/// Booking request as submitted by the guest.
///
/// Every field is optional at the wire level so that missing values are reported
/// together with every other validation problem instead of failing deserialization.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct CreateBookingDto {
    pub room_id: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub id_number: String,
    /// Check-in date, `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub check_in: String,
    /// Check-out date, `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub check_out: String,
    pub guests: Option<i64>,
    pub room_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payment_method: String,
    pub discount_code: Option<String>,
    /// Pre-computed quote total; replaces `price x nights` as the base when positive.
    pub total_amount: Option<f64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BookingConfirmationDto {
    pub booking_id: i32,
    pub booking_reference: String,
    #[schema(value_type = f64)]
    pub total_amount: Decimal,
    pub nights: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    pub room_id: i32,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub id_number: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    #[schema(value_type = f64)]
    pub total_amount: Decimal,
    pub payment_method: String,
    pub discount_code: Option<String>,
    pub booking_reference: String,
    pub special_requests: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub room_number: String,
    pub room_type: String,
    #[schema(value_type = f64)]
    pub room_price: Decimal,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
pub struct BookingSearchQuery {
    pub status: Option<String>,
    pub customer_email: Option<String>,
    pub booking_reference: Option<String>,
}
